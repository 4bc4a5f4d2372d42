//! Aftersales-OS: Predictive Vehicle Aftersales Intelligence
//!
//! Simulated vehicle telemetry flows through a threshold classifier; any
//! anomaly triggers a three-stage response chain (diagnosis, customer
//! message, manufacturing feedback) backed by an optional text generator
//! with deterministic template fallbacks.
//!
//! ## Architecture
//!
//! - **Signal Simulator**: Gaussian-noise readings around a baseline
//! - **Sentinel Agent**: fixed-threshold anomaly classification
//! - **Response Pipeline**: Mechanic → Concierge → Manufacturing feedback
//! - **LLM Module**: pluggable text generator, absent by default
//! - **Booking**: service slot labels and confirmation

pub mod agents;
pub mod booking;
pub mod config;
pub mod history;
pub mod llm;
pub mod pipeline;
pub mod sensors;
pub mod types;

// Re-export configuration
pub use config::AftersalesConfig;

// Re-export commonly used types
pub use types::{
    Baseline, Finding, ManufacturingFeedback, PipelineResult, Preset, Reading, Severity, Signal,
    TextSource, TickReport, Verdict,
};

pub use agents::{classify, SentinelAgent};
pub use booking::{available_slots, confirm_booking, service_slots, BookingConfirmation, ServiceSlot};
pub use history::SensorHistory;
pub use llm::{GeneratorError, GeneratorFactory, NullGenerator, TextGenerator};
pub use pipeline::{AftersalesCoordinator, ResponsePipeline};
pub use sensors::{NoiseModel, SignalSimulator};
