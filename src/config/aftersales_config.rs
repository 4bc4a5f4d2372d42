//! Aftersales Configuration - operator-tunable TOML values
//!
//! Each struct implements `Default` with the values in `config::defaults`,
//! so running without a config file behaves exactly like the built-in demo.
//! Sentinel thresholds are not configurable; see `types::thresholds`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::defaults;
use crate::types::Baseline;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for the aftersales demo.
///
/// Load with `AftersalesConfig::load()` which searches:
/// 1. `$AFTERSALES_CONFIG` env var
/// 2. `./aftersales.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AftersalesConfig {
    /// Noise model and history window
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Starting baseline fed to the simulator
    #[serde(default)]
    pub baseline: Baseline,

    /// External text-generation backend
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Customer messaging
    #[serde(default)]
    pub concierge: ConciergeConfig,

    /// Service slot offering
    #[serde(default)]
    pub booking: BookingConfig,
}

impl AftersalesConfig {
    /// Load configuration using the standard search order:
    /// 1. `$AFTERSALES_CONFIG` environment variable
    /// 2. `./aftersales.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(defaults::CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded config from {}", defaults::CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", defaults::CONFIG_ENV_VAR);
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", defaults::CONFIG_ENV_VAR);
            }
        }

        let local = PathBuf::from(defaults::CONFIG_FILE_NAME);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded config from ./{}", defaults::CONFIG_FILE_NAME);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", defaults::CONFIG_FILE_NAME);
                }
            }
        }

        info!("No {} found, using built-in defaults", defaults::CONFIG_FILE_NAME);
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse and validate a TOML document. Unknown keys are logged, not rejected.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the effective config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate all values for physical and logical consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let errors = super::validation::validate_ranges(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Simulator noise model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Temperature noise standard deviation
    pub noise_level: f64,
    /// Vibration noise = noise_level × this factor
    pub vibration_noise_factor: f64,
    /// Voltage noise = noise_level × this factor
    pub voltage_noise_factor: f64,
    /// Rolling history window kept by the driver
    pub history_size: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            noise_level: defaults::NOISE_LEVEL,
            vibration_noise_factor: defaults::VIBRATION_NOISE_FACTOR,
            voltage_noise_factor: defaults::VOLTAGE_NOISE_FACTOR,
            history_size: defaults::HISTORY_BUFFER_SIZE,
        }
    }
}

/// Text-generation backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Model name passed to the backend
    pub model: String,
    /// REST API base URL
    pub endpoint: String,
    /// Per-request timeout (seconds)
    pub timeout_secs: u64,
    /// Credential. Usually supplied via `GOOGLE_API_KEY` instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: defaults::GENERATOR_MODEL.to_string(),
            endpoint: defaults::GENERATOR_ENDPOINT.to_string(),
            timeout_secs: defaults::GENERATOR_TIMEOUT_SECS,
            api_key: None,
        }
    }
}

/// Customer messaging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConciergeConfig {
    pub customer_name: String,
}

impl Default for ConciergeConfig {
    fn default() -> Self {
        Self {
            customer_name: defaults::DEFAULT_CUSTOMER_NAME.to_string(),
        }
    }
}

/// Service booking settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Number of daily slots offered
    pub slot_count: usize,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            slot_count: defaults::SERVICE_SLOT_COUNT,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config parse error ({}): {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = AftersalesConfig::default();
        assert_eq!(config.simulation.noise_level, 2.0);
        assert_eq!(config.simulation.vibration_noise_factor, 0.1);
        assert_eq!(config.simulation.voltage_noise_factor, 0.05);
        assert_eq!(config.simulation.history_size, 60);
        assert_eq!(config.concierge.customer_name, "Valued Customer");
        assert_eq!(config.booking.slot_count, 5);
        assert_eq!(config.generator.model, "gemini-1.5-flash");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = AftersalesConfig::from_toml_str(
            r#"
[simulation]
noise_level = 0.5

[concierge]
customer_name = "Ada"
"#,
        )
        .unwrap();
        assert_eq!(config.simulation.noise_level, 0.5);
        assert_eq!(config.simulation.vibration_noise_factor, 0.1);
        assert_eq!(config.concierge.customer_name, "Ada");
        assert_eq!(config.baseline, Baseline::default());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = AftersalesConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = AftersalesConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed.booking.slot_count, config.booking.slot_count);
        assert!(!text.contains("api_key"));
    }

    #[test]
    fn test_negative_noise_rejected() {
        let err = AftersalesConfig::from_toml_str("[simulation]\nnoise_level = -1.0\n").unwrap_err();
        match err {
            ConfigError::Validation(errors) => {
                assert!(errors.iter().any(|e| e.contains("noise_level")));
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = AftersalesConfig::from_toml_str("[simulation\nnoise_level = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
