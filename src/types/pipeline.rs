//! Response pipeline output types

use serde::{Deserialize, Serialize};

use super::{Reading, Verdict};

/// Provenance of a pipeline stage's text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    /// Produced by the external text generator
    Generator,
    /// Deterministic fallback template
    Template,
}

impl std::fmt::Display for TextSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextSource::Generator => write!(f, "generator"),
            TextSource::Template => write!(f, "template"),
        }
    }
}

/// Value produced by one pipeline stage, tagged with where it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageOutput<T> {
    pub value: T,
    pub source: TextSource,
}

impl<T> StageOutput<T> {
    pub const fn generated(value: T) -> Self {
        Self {
            value,
            source: TextSource::Generator,
        }
    }

    pub const fn template(value: T) -> Self {
        Self {
            value,
            source: TextSource::Template,
        }
    }
}

/// Closed-loop design feedback for engineering / manufacturing
///
/// Serialized with the record keys the feedback prompt asks for
/// (`Root_Cause`, `Defect_Cluster_ID`, `Design_Improvement_Suggestion`).
/// snake_case keys are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturingFeedback {
    #[serde(rename = "Root_Cause", alias = "root_cause")]
    pub root_cause: String,
    #[serde(rename = "Defect_Cluster_ID", alias = "defect_cluster_id")]
    pub defect_cluster_id: String,
    #[serde(
        rename = "Design_Improvement_Suggestion",
        alias = "design_improvement_suggestion"
    )]
    pub design_improvement_suggestion: String,
}

/// Output of the three-stage response pipeline for one anomalous reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub diagnosis: String,
    pub customer_message: String,
    pub manufacturing_feedback: ManufacturingFeedback,
    pub diagnosis_source: TextSource,
    pub customer_message_source: TextSource,
    pub manufacturing_feedback_source: TextSource,
}

impl PipelineResult {
    pub fn from_stages(
        diagnosis: StageOutput<String>,
        customer_message: StageOutput<String>,
        manufacturing_feedback: StageOutput<ManufacturingFeedback>,
    ) -> Self {
        Self {
            diagnosis: diagnosis.value,
            customer_message: customer_message.value,
            manufacturing_feedback: manufacturing_feedback.value,
            diagnosis_source: diagnosis.source,
            customer_message_source: customer_message.source,
            manufacturing_feedback_source: manufacturing_feedback.source,
        }
    }

    /// True when every stage fell back to its template
    pub fn is_fully_templated(&self) -> bool {
        [
            self.diagnosis_source,
            self.customer_message_source,
            self.manufacturing_feedback_source,
        ]
        .iter()
        .all(|s| *s == TextSource::Template)
    }
}

/// Everything produced by one simulation tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub reading: Reading,
    pub verdict: Verdict,
    /// Present only when the verdict raised at least one finding
    pub response: Option<PipelineResult>,
}
