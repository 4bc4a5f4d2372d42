//! Sentinel thresholds and simulator floors
//!
//! These values are fixed. The classifier compares readings against them with
//! strict inequalities, so a reading exactly on a threshold is not flagged.

/// Thresholds for vehicle anomaly detection
pub mod sentinel_thresholds {
    // === Engine Temperature (°C) ===
    /// Temperature above this is critical
    pub const TEMPERATURE_CRITICAL: f64 = 110.0;
    /// Temperature above this is a warning
    pub const TEMPERATURE_WARNING: f64 = 95.0;

    // === Vibration (G) ===
    /// Vibration above this is critical
    pub const VIBRATION_CRITICAL: f64 = 8.5;
    /// Vibration above this is a warning
    pub const VIBRATION_WARNING: f64 = 7.0;

    // === Battery Voltage (V) ===
    /// Voltage below this is critical
    pub const VOLTAGE_CRITICAL: f64 = 10.5;
    /// Voltage below this is a warning
    pub const VOLTAGE_WARNING: f64 = 11.5;
}

/// Thresholds used by the fallback templates
pub mod template_thresholds {
    /// Manufacturing feedback switches to the thermal cluster above this temperature
    pub const THERMAL_CLUSTER_TEMPERATURE: f64 = 100.0;
}

/// Lower clamps applied by the signal simulator
pub mod simulator_floors {
    /// Minimum simulated engine temperature (°C)
    pub const TEMPERATURE_MIN: f64 = 50.0;
    /// Minimum simulated vibration (G)
    pub const VIBRATION_MIN: f64 = 0.0;
    /// Minimum simulated battery voltage (V)
    pub const VOLTAGE_MIN: f64 = 8.0;
}
