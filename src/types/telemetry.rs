//! Telemetry types: baselines, presets and simulated readings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Baseline sensor values the simulator perturbs each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Baseline {
    /// Engine temperature (°C)
    pub temperature: f64,
    /// Vibration level (G)
    pub vibration: f64,
    /// Battery voltage (V)
    pub voltage: f64,
}

impl Baseline {
    pub const fn new(temperature: f64, vibration: f64, voltage: f64) -> Self {
        Self {
            temperature,
            vibration,
            voltage,
        }
    }
}

impl Default for Baseline {
    fn default() -> Self {
        Self::new(
            defaults::BASELINE_TEMPERATURE,
            defaults::BASELINE_VIBRATION,
            defaults::BASELINE_VOLTAGE,
        )
    }
}

/// Quick-select operating scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Normal operation, no findings expected
    Healthy,
    /// All three signals in their warning bands
    Warning,
    /// All three signals past their critical thresholds
    Critical,
}

impl Preset {
    pub const fn baseline(self) -> Baseline {
        match self {
            Self::Healthy => Baseline::new(75.0, 2.0, 13.2),
            Self::Warning => Baseline::new(100.0, 7.5, 11.8),
            Self::Critical => Baseline::new(115.0, 9.0, 10.0),
        }
    }
}

/// One simulated, timestamped sensor sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Engine temperature (°C)
    pub temperature: f64,
    /// Vibration level (G)
    pub vibration: f64,
    /// Battery voltage (V)
    pub voltage: f64,
    pub timestamp: DateTime<Utc>,
}

impl Reading {
    pub const fn new(temperature: f64, vibration: f64, voltage: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            temperature,
            vibration,
            voltage,
            timestamp,
        }
    }

    /// Reading stamped with the current time
    pub fn now(temperature: f64, vibration: f64, voltage: f64) -> Self {
        Self::new(temperature, vibration, voltage, Utc::now())
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Temp {:.1}°C | Vibration {:.2}G | Voltage {:.2}V",
            self.temperature, self.vibration, self.voltage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_baseline_matches_healthy_preset() {
        assert_eq!(Baseline::default(), Preset::Healthy.baseline());
    }

    #[test]
    fn test_reading_display() {
        let reading = Reading::now(115.04, 9.0, 10.0);
        assert_eq!(reading.to_string(), "Temp 115.0°C | Vibration 9.00G | Voltage 10.00V");
    }
}
