//! Sentinel Agent - threshold anomaly detection at telematics ingestion
//!
//! Checks each reading against fixed thresholds, in a fixed order:
//!
//! | Signal | Critical | Warning |
//! |---|---|---|
//! | Engine temperature | > 110 °C | > 95 °C |
//! | Vibration | > 8.5 G | > 7.0 G |
//! | Battery voltage | < 10.5 V | < 11.5 V |
//!
//! Each signal yields at most one finding; critical wins over warning.

use tracing::debug;

use crate::types::{sentinel_thresholds as t, Finding, Reading, Severity, Signal, Verdict};

/// Direction in which a signal becomes anomalous
#[derive(Debug, Clone, Copy)]
enum Breach {
    Above,
    Below,
}

/// Per-signal check definition, evaluated in slice order
struct SignalCheck {
    signal: Signal,
    breach: Breach,
    critical: f64,
    warning: f64,
}

const CHECKS: [SignalCheck; 3] = [
    SignalCheck {
        signal: Signal::Temperature,
        breach: Breach::Above,
        critical: t::TEMPERATURE_CRITICAL,
        warning: t::TEMPERATURE_WARNING,
    },
    SignalCheck {
        signal: Signal::Vibration,
        breach: Breach::Above,
        critical: t::VIBRATION_CRITICAL,
        warning: t::VIBRATION_WARNING,
    },
    SignalCheck {
        signal: Signal::Voltage,
        breach: Breach::Below,
        critical: t::VOLTAGE_CRITICAL,
        warning: t::VOLTAGE_WARNING,
    },
];

impl SignalCheck {
    fn evaluate(&self, value: f64) -> Option<Finding> {
        let crosses = |limit: f64| match self.breach {
            Breach::Above => value > limit,
            Breach::Below => value < limit,
        };

        if crosses(self.critical) {
            Some(Finding::new(self.signal, Severity::Critical, value, self.critical))
        } else if crosses(self.warning) {
            Some(Finding::new(self.signal, Severity::Warning, value, self.warning))
        } else {
            None
        }
    }
}

const fn signal_value(reading: &Reading, signal: Signal) -> f64 {
    match signal {
        Signal::Temperature => reading.temperature,
        Signal::Vibration => reading.vibration,
        Signal::Voltage => reading.voltage,
    }
}

/// Classify a reading. Pure and idempotent; never fails.
pub fn classify(reading: &Reading) -> Verdict {
    let findings: Vec<Finding> = CHECKS
        .iter()
        .filter_map(|check| check.evaluate(signal_value(reading, check.signal)))
        .collect();

    let verdict = Verdict::from_findings(findings);
    if verdict.is_anomalous() {
        debug!(
            is_critical = verdict.is_critical,
            findings = verdict.findings.len(),
            "Sentinel raised findings"
        );
    }
    verdict
}

/// Stateless sentinel handle, for callers that prefer an agent object
#[derive(Debug, Clone, Copy, Default)]
pub struct SentinelAgent;

impl SentinelAgent {
    pub const fn new() -> Self {
        Self
    }

    pub fn classify(&self, reading: &Reading) -> Verdict {
        classify(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temperature: f64, vibration: f64, voltage: f64) -> Reading {
        Reading::now(temperature, vibration, voltage)
    }

    #[test]
    fn test_healthy_reading_has_no_findings() {
        let verdict = classify(&reading(75.0, 2.0, 13.2));
        assert!(!verdict.is_critical);
        assert!(verdict.findings.is_empty());
    }

    #[test]
    fn test_temperature_warning_band() {
        for temp in [95.01, 100.0, 110.0] {
            let verdict = classify(&reading(temp, 2.0, 13.2));
            assert_eq!(verdict.findings.len(), 1, "temp {temp}");
            assert_eq!(verdict.findings[0].signal, Signal::Temperature);
            assert_eq!(verdict.findings[0].severity, Severity::Warning);
            assert!(!verdict.is_critical);
        }
    }

    #[test]
    fn test_boundaries_are_strict() {
        assert!(classify(&reading(95.0, 7.0, 11.5)).findings.is_empty());

        let v = classify(&reading(110.0, 8.5, 10.5));
        assert!(!v.is_critical);
        assert!(v.findings.iter().all(|f| f.severity == Severity::Warning));
        assert_eq!(v.findings.len(), 3);
    }

    #[test]
    fn test_critical_temperature_listed_first() {
        let verdict = classify(&reading(115.0, 7.5, 11.0));
        assert!(verdict.is_critical);
        assert_eq!(verdict.findings[0].signal, Signal::Temperature);
        assert_eq!(verdict.findings[0].severity, Severity::Critical);
        assert_eq!(verdict.findings[1].signal, Signal::Vibration);
        assert_eq!(verdict.findings[2].signal, Signal::Voltage);
    }

    #[test]
    fn test_voltage_only_critical() {
        let verdict = classify(&reading(80.0, 2.0, 10.0));
        assert!(verdict.is_critical);
        assert_eq!(verdict.findings.len(), 1);
        assert_eq!(verdict.findings[0].message, "CRITICAL: Battery Voltage 10.00V (threshold: 10.5V)");
    }

    #[test]
    fn test_warning_temperature_with_critical_vibration() {
        let verdict = classify(&reading(100.0, 9.0, 13.0));
        assert!(verdict.is_critical);
        assert_eq!(verdict.findings[0].severity, Severity::Warning);
        assert_eq!(verdict.findings[1].severity, Severity::Critical);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let r = reading(112.3, 8.1, 10.9);
        assert_eq!(classify(&r), classify(&r));
        assert_eq!(SentinelAgent::new().classify(&r), classify(&r));
    }
}
