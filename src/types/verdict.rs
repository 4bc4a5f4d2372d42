//! Sentinel verdict types

use serde::{Deserialize, Serialize};

/// Severity of a single-signal finding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning = 1,
    Critical = 2,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "WARNING"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Monitored vehicle signal, in evaluation order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Temperature,
    Vibration,
    Voltage,
}

impl Signal {
    /// Human-readable label used in finding messages
    pub const fn label(self) -> &'static str {
        match self {
            Signal::Temperature => "Engine Temperature",
            Signal::Vibration => "Vibration Level",
            Signal::Voltage => "Battery Voltage",
        }
    }

    /// Format a value of this signal with its unit and precision
    pub fn format_value(self, value: f64) -> String {
        match self {
            Signal::Temperature => format!("{value:.1}°C"),
            Signal::Vibration => format!("{value:.2}"),
            Signal::Voltage => format!("{value:.2}V"),
        }
    }

    /// Format a threshold of this signal with its unit
    pub fn format_threshold(self, threshold: f64) -> String {
        match self {
            Signal::Temperature => format!("{threshold:.0}°C"),
            Signal::Vibration => format!("{threshold:.1}"),
            Signal::Voltage => format!("{threshold:.1}V"),
        }
    }
}

/// Single-signal anomaly record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub signal: Signal,
    pub severity: Severity,
    /// Observed value that tripped the threshold
    pub value: f64,
    /// Threshold that was crossed
    pub threshold: f64,
    pub message: String,
}

impl Finding {
    pub fn new(signal: Signal, severity: Severity, value: f64, threshold: f64) -> Self {
        let message = format!(
            "{}: {} {} (threshold: {})",
            severity,
            signal.label(),
            signal.format_value(value),
            signal.format_threshold(threshold)
        );
        Self {
            signal,
            severity,
            value,
            threshold,
            message,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Classifier output: criticality flag plus ordered findings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Verdict {
    pub is_critical: bool,
    pub findings: Vec<Finding>,
}

impl Verdict {
    /// Build a verdict, deriving `is_critical` from the findings
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let is_critical = findings.iter().any(Finding::is_critical);
        Self {
            is_critical,
            findings,
        }
    }

    /// True when at least one finding was raised
    pub fn is_anomalous(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Finding messages in evaluation order
    pub fn messages(&self) -> Vec<&str> {
        self.findings.iter().map(|f| f.message.as_str()).collect()
    }

    pub fn finding_for(&self, signal: Signal) -> Option<&Finding> {
        self.findings.iter().find(|f| f.signal == signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_message_format() {
        let f = Finding::new(Signal::Temperature, Severity::Critical, 115.0, 110.0);
        assert_eq!(f.message, "CRITICAL: Engine Temperature 115.0°C (threshold: 110°C)");

        let f = Finding::new(Signal::Vibration, Severity::Warning, 7.5, 7.0);
        assert_eq!(f.message, "WARNING: Vibration Level 7.50 (threshold: 7.0)");

        let f = Finding::new(Signal::Voltage, Severity::Critical, 10.0, 10.5);
        assert_eq!(f.message, "CRITICAL: Battery Voltage 10.00V (threshold: 10.5V)");
    }

    #[test]
    fn test_verdict_criticality_derived_from_findings() {
        let warning_only = Verdict::from_findings(vec![Finding::new(
            Signal::Voltage,
            Severity::Warning,
            11.0,
            11.5,
        )]);
        assert!(!warning_only.is_critical);
        assert!(warning_only.is_anomalous());

        let healthy = Verdict::from_findings(Vec::new());
        assert!(!healthy.is_critical);
        assert!(!healthy.is_anomalous());
    }
}
