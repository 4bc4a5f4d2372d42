//! System-wide default constants.
//!
//! Centralises the magic numbers used by the simulator, pipeline and demo
//! driver. Grouped by subsystem for easy discovery.

// ============================================================================
// Baseline
// ============================================================================

/// Healthy engine temperature baseline (°C).
pub const BASELINE_TEMPERATURE: f64 = 75.0;

/// Healthy vibration baseline (G).
pub const BASELINE_VIBRATION: f64 = 2.0;

/// Healthy battery voltage baseline (V).
pub const BASELINE_VOLTAGE: f64 = 13.2;

// ============================================================================
// Simulation
// ============================================================================

/// Standard deviation of the temperature noise. Vibration and voltage noise
/// are scaled from this value.
pub const NOISE_LEVEL: f64 = 2.0;

/// Vibration noise stddev = `noise_level * VIBRATION_NOISE_FACTOR`.
pub const VIBRATION_NOISE_FACTOR: f64 = 0.1;

/// Voltage noise stddev = `noise_level * VOLTAGE_NOISE_FACTOR`.
pub const VOLTAGE_NOISE_FACTOR: f64 = 0.05;

/// Rolling sensor history size (readings).
///
/// 60 readings at one tick per second = 1 minute of recent context.
pub const HISTORY_BUFFER_SIZE: usize = 60;

/// Rows shown in the raw sensor data view.
pub const RAW_DATA_ROWS: usize = 10;

// ============================================================================
// Response Pipeline
// ============================================================================

/// Customer name used when none is supplied.
pub const DEFAULT_CUSTOMER_NAME: &str = "Valued Customer";

// ============================================================================
// Text Generator
// ============================================================================

/// Default generative model.
pub const GENERATOR_MODEL: &str = "gemini-1.5-flash";

/// Base URL of the Generative Language REST API.
pub const GENERATOR_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// HTTP timeout for a single generation request (seconds).
pub const GENERATOR_TIMEOUT_SECS: u64 = 30;

/// Prompt sent once to verify a credential.
pub const PROBE_PROMPT: &str = "ping";

/// Environment variable holding the generator credential.
pub const API_KEY_ENV_VAR: &str = "GOOGLE_API_KEY";

// ============================================================================
// Service Booking
// ============================================================================

/// Number of service slots offered.
pub const SERVICE_SLOT_COUNT: usize = 5;

/// Spacing between consecutive service slots (hours). The first slot is one
/// interval after "now".
pub const SERVICE_SLOT_INTERVAL_HOURS: i64 = 24;

/// chrono format for slot labels, e.g. `Tue, Oct 20 @ 09:15 AM`.
pub const SERVICE_SLOT_LABEL_FORMAT: &str = "%a, %b %d @ %I:%M %p";

// ============================================================================
// Config Discovery
// ============================================================================

/// Environment variable pointing at a config TOML file.
pub const CONFIG_ENV_VAR: &str = "AFTERSALES_CONFIG";

/// Config file looked up in the current working directory.
pub const CONFIG_FILE_NAME: &str = "aftersales.toml";
