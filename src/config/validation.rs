//! Config validation: unknown-key detection with Levenshtein suggestions
//! and range checks.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use std::collections::HashSet;

use super::AftersalesConfig;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for AftersalesConfig.
///
/// Maintained by hand to match the struct hierarchy in aftersales_config.rs.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [simulation]
        "simulation",
        "simulation.noise_level",
        "simulation.vibration_noise_factor",
        "simulation.voltage_noise_factor",
        "simulation.history_size",
        // [baseline]
        "baseline",
        "baseline.temperature",
        "baseline.vibration",
        "baseline.voltage",
        // [generator]
        "generator",
        "generator.model",
        "generator.endpoint",
        "generator.timeout_secs",
        "generator.api_key",
        // [concierge]
        "concierge",
        "concierge.customer_name",
        // [booking]
        "booking",
        "booking.slot_count",
    ];
    keys.iter().copied().collect()
}

/// Recursively collect dotted key paths from a TOML value.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
///
/// Ties are broken alphabetically so the suggestion is stable.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (levenshtein(unknown, k), k))
        .filter(|(dist, _)| *dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys. Existing configs always continue to work.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are handled by serde later
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Range Validation
// ============================================================================

/// Validate value ranges on a parsed config. Returns one message per problem.
pub fn validate_ranges(config: &AftersalesConfig) -> Vec<String> {
    let mut errors = Vec::new();
    let s = &config.simulation;

    check_non_negative(s.noise_level, "simulation.noise_level", &mut errors);
    check_non_negative(s.vibration_noise_factor, "simulation.vibration_noise_factor", &mut errors);
    check_non_negative(s.voltage_noise_factor, "simulation.voltage_noise_factor", &mut errors);
    if s.history_size == 0 {
        errors.push("simulation.history_size must be at least 1".to_string());
    }

    let b = &config.baseline;
    for (value, name) in [
        (b.temperature, "baseline.temperature"),
        (b.vibration, "baseline.vibration"),
        (b.voltage, "baseline.voltage"),
    ] {
        if !value.is_finite() {
            errors.push(format!("{name} must be finite (got {value})"));
        }
    }

    if config.generator.timeout_secs == 0 {
        errors.push("generator.timeout_secs must be at least 1".to_string());
    }
    if config.generator.model.trim().is_empty() {
        errors.push("generator.model must not be empty".to_string());
    }
    if config.concierge.customer_name.trim().is_empty() {
        errors.push("concierge.customer_name must not be empty".to_string());
    }
    if config.booking.slot_count == 0 {
        errors.push("booking.slot_count must be at least 1".to_string());
    }

    errors
}

fn check_non_negative(value: f64, name: &str, errors: &mut Vec<String>) {
    // NaN comparisons silently pass, so check finiteness explicitly
    if !value.is_finite() || value < 0.0 {
        errors.push(format!("{name} must be a finite, non-negative number (got {value})"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("same", "same"), 0);
    }

    #[test]
    fn test_walk_nested_keys() {
        let value: toml::Value = "[booking]\nslot_count = 3\n".parse().unwrap();
        let keys = walk_toml_keys(&value, "");
        assert_eq!(keys, vec!["booking".to_string(), "booking.slot_count".to_string()]);
    }

    #[test]
    fn test_far_off_key_has_no_suggestion() {
        let warnings = validate_unknown_keys("[telemetry_uplink]\nenabled = true\n");
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.suggestion.is_none()));
    }
}
