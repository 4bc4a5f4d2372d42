//! Generator response parsing
//!
//! Models often wrap JSON in markdown code fences even when told not to, so
//! the fence is removed before the payload reaches serde.

use crate::types::ManufacturingFeedback;

/// Manufacturing feedback payload could not be used
#[derive(Debug, thiserror::Error)]
pub enum FeedbackParseError {
    #[error("invalid feedback JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("feedback field '{0}' is empty")]
    EmptyField(&'static str),
}

/// Strip a markdown code fence (```` ``` ```` or ```` ```json ````) around a payload.
///
/// Text before the opening fence and after the closing fence is dropped.
/// Text without a fence is returned trimmed.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(open) = trimmed.find("```") else {
        return trimmed;
    };

    let after_open = &trimmed[open + 3..];
    // Skip the info string (`json`, `JSON`, ...) on the opening fence
    let body_start = after_open
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        .unwrap_or(after_open.len());
    let body = &after_open[body_start..];

    match body.find("```") {
        Some(close) => body[..close].trim(),
        None => body.trim(),
    }
}

/// Parse a generator response into manufacturing feedback
pub fn parse_manufacturing_feedback(raw: &str) -> Result<ManufacturingFeedback, FeedbackParseError> {
    let feedback: ManufacturingFeedback = serde_json::from_str(strip_code_fences(raw))?;

    for (value, name) in [
        (&feedback.root_cause, "Root_Cause"),
        (&feedback.defect_cluster_id, "Defect_Cluster_ID"),
        (&feedback.design_improvement_suggestion, "Design_Improvement_Suggestion"),
    ] {
        if value.trim().is_empty() {
            return Err(FeedbackParseError::EmptyField(name));
        }
    }

    Ok(feedback)
}
