//! Response Pipeline Module
//!
//! ## Processing Sequence
//!
//! ```text
//! STEP 1: Simulate reading (Signal Simulator)
//! STEP 2: Classify reading (Sentinel)
//! STEP 3: Diagnosis (Mechanic agent, ONLY if findings raised)
//! STEP 4: Customer message (Concierge agent, input = step 3 text)
//! STEP 5: Manufacturing feedback (structured record)
//! ```
//!
//! Steps 3-5 ONLY execute if the Sentinel raised at least one finding.
//! Every stage tries the text generator first and falls back to a
//! deterministic template; no stage ever fails.

mod concierge;
mod coordinator;
mod manufacturing;
mod mechanic;
pub mod parsing;
pub mod prompts;
pub mod templates;

pub use concierge::ConciergeAgent;
pub use coordinator::{AftersalesCoordinator, CoordinatorStats};
pub use manufacturing::ManufacturingAgent;
pub use mechanic::MechanicAgent;

use std::sync::Arc;

use crate::config::{defaults, ConciergeConfig};
use crate::llm::{NullGenerator, TextGenerator};
use crate::types::{PipelineResult, Reading, Verdict};

/// Call the generator for one stage. `None` means "use the template".
///
/// Absence of the capability is expected and logged at debug; any other
/// failure, or an empty reply, is logged as a warning.
pub(crate) async fn attempt_generation(
    generator: &dyn TextGenerator,
    stage: &'static str,
    prompt: &str,
) -> Option<String> {
    match generator.generate(prompt).await {
        Ok(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Ok(_) => {
            tracing::warn!(stage, backend = generator.backend_name(), "Generator returned empty text, using template");
            None
        }
        Err(e) if e.is_unconfigured() => {
            tracing::debug!(stage, "No text generator configured, using template");
            None
        }
        Err(e) => {
            tracing::warn!(stage, backend = generator.backend_name(), error = %e, "Generator call failed, using template");
            None
        }
    }
}

/// Three-stage response chain: diagnosis → customer message → manufacturing feedback
///
/// Holds no per-call state, so one pipeline can serve independent readings
/// concurrently.
pub struct ResponsePipeline {
    mechanic: MechanicAgent,
    concierge: ConciergeAgent,
    manufacturing: ManufacturingAgent,
    customer_name: String,
    backend: &'static str,
}

impl ResponsePipeline {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            backend: generator.backend_name(),
            mechanic: MechanicAgent::new(Arc::clone(&generator)),
            concierge: ConciergeAgent::new(Arc::clone(&generator)),
            manufacturing: ManufacturingAgent::new(generator),
            customer_name: defaults::DEFAULT_CUSTOMER_NAME.to_string(),
        }
    }

    /// Pipeline that always answers from templates
    pub fn template_only() -> Self {
        Self::new(Arc::new(NullGenerator))
    }

    pub fn from_config(generator: Arc<dyn TextGenerator>, config: &ConciergeConfig) -> Self {
        Self::new(generator).with_customer_name(&config.customer_name)
    }

    #[must_use]
    pub fn with_customer_name(mut self, name: &str) -> Self {
        let name = name.trim();
        if !name.is_empty() {
            self.customer_name = name.to_string();
        }
        self
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend
    }

    /// Run the chain for an anomalous verdict; `None` for a healthy one
    pub async fn respond(&self, reading: &Reading, verdict: &Verdict) -> Option<PipelineResult> {
        if !verdict.is_anomalous() {
            return None;
        }
        Some(self.run(reading, verdict).await)
    }

    /// Run all three stages unconditionally, in order
    pub async fn run(&self, reading: &Reading, verdict: &Verdict) -> PipelineResult {
        let start = std::time::Instant::now();

        let diagnosis = self.mechanic.diagnose(reading, verdict).await;
        let message = self
            .concierge
            .draft_message(&diagnosis.value, &self.customer_name)
            .await;
        let feedback = self.manufacturing.feedback(reading, verdict).await;

        let result = PipelineResult::from_stages(diagnosis, message, feedback);

        tracing::debug!(
            latency_ms = start.elapsed().as_millis(),
            diagnosis_source = %result.diagnosis_source,
            message_source = %result.customer_message_source,
            feedback_source = %result.manufacturing_feedback_source,
            cluster = %result.manufacturing_feedback.defect_cluster_id,
            "Response pipeline completed"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::classify;
    use crate::llm::GeneratorError;
    use crate::types::TextSource;
    use async_trait::async_trait;

    /// Replies with the same text to every prompt
    struct EchoGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
            Ok(self.0.to_string())
        }

        fn backend_name(&self) -> &'static str {
            "echo"
        }
    }

    #[tokio::test]
    async fn test_healthy_reading_skips_pipeline() {
        let reading = Reading::now(75.0, 2.0, 13.2);
        let verdict = classify(&reading);
        assert!(ResponsePipeline::template_only().respond(&reading, &verdict).await.is_none());
    }

    #[tokio::test]
    async fn test_warning_only_reading_runs_pipeline() {
        let reading = Reading::now(100.0, 2.0, 13.2);
        let verdict = classify(&reading);
        let result = ResponsePipeline::template_only()
            .respond(&reading, &verdict)
            .await
            .unwrap();
        assert_eq!(result.diagnosis, templates::GENERIC_DIAGNOSIS);
        assert!(result.is_fully_templated());
    }

    #[tokio::test]
    async fn test_whitespace_reply_falls_back() {
        let pipeline = ResponsePipeline::new(Arc::new(EchoGenerator("   \n")));
        let reading = Reading::now(115.0, 2.0, 13.0);
        let result = pipeline.run(&reading, &classify(&reading)).await;
        assert!(result.is_fully_templated());
        assert_eq!(result.diagnosis, templates::OVERHEATING_DIAGNOSIS);
    }

    #[tokio::test]
    async fn test_plain_text_reply_only_fails_structured_stage() {
        let pipeline = ResponsePipeline::new(Arc::new(EchoGenerator("Check the coolant pump.")));
        let reading = Reading::now(115.0, 2.0, 13.0);
        let result = pipeline.run(&reading, &classify(&reading)).await;

        assert_eq!(result.diagnosis, "Check the coolant pump.");
        assert_eq!(result.diagnosis_source, TextSource::Generator);
        assert_eq!(result.customer_message_source, TextSource::Generator);
        assert_eq!(result.manufacturing_feedback_source, TextSource::Template);
        assert_eq!(result.manufacturing_feedback.defect_cluster_id, "CLUSTER_THERM_001");
    }

    #[test]
    fn test_blank_customer_name_keeps_default() {
        let pipeline = ResponsePipeline::template_only().with_customer_name("  ");
        assert_eq!(pipeline.customer_name(), "Valued Customer");
        assert_eq!(pipeline.backend_name(), "null");
    }
}
