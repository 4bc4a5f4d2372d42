//! Aftersales Configuration Module
//!
//! Provides configuration loaded from TOML files for the simulator noise
//! model, text-generation backend, customer messaging and service booking.
//!
//! ## Loading Order
//!
//! 1. `AFTERSALES_CONFIG` environment variable (path to TOML file)
//! 2. `aftersales.toml` in the current working directory
//! 3. Built-in defaults
//!
//! The loaded config is passed explicitly to the components that need it;
//! there is no process-wide config singleton.

mod aftersales_config;
pub mod defaults;
pub mod validation;

pub use aftersales_config::*;
