//! Agents
//!
//! - **Sentinel**: threshold anomaly detection on each simulated reading
//!
//! The mechanic, concierge and manufacturing-feedback agents live in
//! `pipeline`, since each of them wraps the text-generation capability.

pub mod sentinel;

pub use sentinel::{classify, SentinelAgent};
