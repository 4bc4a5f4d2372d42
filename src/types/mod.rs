//! Core data types for the aftersales pipeline
//!
//! - `telemetry`: baselines, presets and simulated readings
//! - `verdict`: sentinel findings and verdicts
//! - `pipeline`: response pipeline outputs and tick reports
//! - `thresholds`: fixed sentinel thresholds and simulator floors

mod pipeline;
mod telemetry;
pub mod thresholds;
mod verdict;

pub use pipeline::{ManufacturingFeedback, PipelineResult, StageOutput, TextSource, TickReport};
pub use telemetry::{Baseline, Preset, Reading};
pub use thresholds::{sentinel_thresholds, simulator_floors, template_thresholds};
pub use verdict::{Finding, Severity, Signal, Verdict};
