//! Template-based responses (generator fallback)
//!
//! Deterministic substitutes used when the text generator is unavailable,
//! failed, or returned something unusable. The diagnosis template is picked
//! by an ordered rule list where the first matching rule wins.

use crate::types::{sentinel_thresholds as t, template_thresholds, ManufacturingFeedback, Reading};

/// One entry of the diagnosis priority chain
pub struct DiagnosisRule {
    /// Short identifier for logging
    pub name: &'static str,
    pub applies: fn(&Reading) -> bool,
    pub text: &'static str,
}

fn overheating(r: &Reading) -> bool {
    r.temperature > t::TEMPERATURE_CRITICAL
}

fn mechanical_imbalance(r: &Reading) -> bool {
    r.vibration > t::VIBRATION_CRITICAL
}

fn low_voltage(r: &Reading) -> bool {
    r.voltage < t::VOLTAGE_CRITICAL
}

pub const OVERHEATING_DIAGNOSIS: &str = "Diagnosis: Engine overheating detected. Primary suspect: Failed thermostat or water pump failure. Recommend immediate inspection of cooling system. Risk Level: CRITICAL";

pub const IMBALANCE_DIAGNOSIS: &str = "Diagnosis: Excessive vibration indicates mechanical imbalance. Likely causes: Worn engine mounts, bearing issues, or fuel injection problem. Recommend alignment check and engine inspection.";

pub const LOW_VOLTAGE_DIAGNOSIS: &str = "Diagnosis: Battery voltage critically low. Suspect: Alternator malfunction or battery cell degradation. Vehicle electrical systems at risk. Recommend battery/alternator test.";

pub const GENERIC_DIAGNOSIS: &str = "Diagnosis: Multiple system anomalies detected. Recommend comprehensive diagnostic scan and OBD-II analysis.";

/// Priority order: temperature, vibration, voltage
pub const DIAGNOSIS_RULES: &[DiagnosisRule] = &[
    DiagnosisRule {
        name: "overheating",
        applies: overheating,
        text: OVERHEATING_DIAGNOSIS,
    },
    DiagnosisRule {
        name: "mechanical_imbalance",
        applies: mechanical_imbalance,
        text: IMBALANCE_DIAGNOSIS,
    },
    DiagnosisRule {
        name: "low_voltage",
        applies: low_voltage,
        text: LOW_VOLTAGE_DIAGNOSIS,
    },
];

/// Template diagnosis for a reading
pub fn diagnosis_template(reading: &Reading) -> &'static str {
    DIAGNOSIS_RULES
        .iter()
        .find(|rule| (rule.applies)(reading))
        .map_or(GENERIC_DIAGNOSIS, |rule| {
            tracing::trace!(rule = rule.name, "Diagnosis template selected");
            rule.text
        })
}

/// Template customer message. Does not depend on the diagnosis.
pub fn customer_message_template(customer_name: &str) -> String {
    format!(
        "Hi {customer_name},\n\n\
         We've detected an issue with your vehicle during our proactive monitoring. \
         Our technicians have identified a potential problem that needs attention soon. \
         We'd like to schedule a service appointment at your earliest convenience. \
         We're here to help!"
    )
}

/// Template manufacturing feedback: thermal cluster above 100 °C, electrical otherwise
pub fn manufacturing_feedback_template(reading: &Reading) -> ManufacturingFeedback {
    if reading.temperature > template_thresholds::THERMAL_CLUSTER_TEMPERATURE {
        ManufacturingFeedback {
            root_cause: "Thermal management system degradation".to_string(),
            defect_cluster_id: "CLUSTER_THERM_001".to_string(),
            design_improvement_suggestion:
                "Upgrade coolant circulation pump capacity and add secondary thermal sensor redundancy"
                    .to_string(),
        }
    } else {
        ManufacturingFeedback {
            root_cause: "Electrical subsystem performance drift".to_string(),
            defect_cluster_id: "CLUSTER_ELEC_002".to_string(),
            design_improvement_suggestion:
                "Implement higher-capacity alternator and battery with integrated voltage regulation module"
                    .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temperature: f64, vibration: f64, voltage: f64) -> Reading {
        Reading::now(temperature, vibration, voltage)
    }

    #[test]
    fn test_rule_priority() {
        assert_eq!(diagnosis_template(&reading(115.0, 9.0, 10.0)), OVERHEATING_DIAGNOSIS);
        assert_eq!(diagnosis_template(&reading(100.0, 9.0, 10.0)), IMBALANCE_DIAGNOSIS);
        assert_eq!(diagnosis_template(&reading(100.0, 8.0, 10.0)), LOW_VOLTAGE_DIAGNOSIS);
        assert_eq!(diagnosis_template(&reading(100.0, 7.5, 11.0)), GENERIC_DIAGNOSIS);
    }

    #[test]
    fn test_overheating_template_is_critical_risk() {
        assert!(OVERHEATING_DIAGNOSIS.ends_with("Risk Level: CRITICAL"));
    }

    #[test]
    fn test_customer_message_names_customer() {
        let msg = customer_message_template("Valued Customer");
        assert!(msg.starts_with("Hi Valued Customer,\n\n"));
        assert!(msg.contains("schedule a service appointment"));
    }

    #[test]
    fn test_feedback_cluster_boundary() {
        assert_eq!(manufacturing_feedback_template(&reading(100.5, 2.0, 13.0)).defect_cluster_id, "CLUSTER_THERM_001");
        assert_eq!(manufacturing_feedback_template(&reading(100.0, 2.0, 13.0)).defect_cluster_id, "CLUSTER_ELEC_002");
    }
}
