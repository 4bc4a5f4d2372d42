//! Manufacturing Feedback - closed-loop design suggestions (stage C)
//!
//! Unlike the other stages the generator must return a structured record;
//! a reply that does not parse is treated the same as a failed call.

use std::sync::Arc;

use super::{attempt_generation, parsing, prompts, templates};
use crate::llm::TextGenerator;
use crate::types::{ManufacturingFeedback, Reading, StageOutput, Verdict};

pub struct ManufacturingAgent {
    generator: Arc<dyn TextGenerator>,
}

impl ManufacturingAgent {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn feedback(
        &self,
        reading: &Reading,
        verdict: &Verdict,
    ) -> StageOutput<ManufacturingFeedback> {
        let prompt = prompts::manufacturing_prompt(reading, verdict);

        if let Some(raw) =
            attempt_generation(self.generator.as_ref(), "manufacturing_feedback", &prompt).await
        {
            match parsing::parse_manufacturing_feedback(&raw) {
                Ok(feedback) => return StageOutput::generated(feedback),
                Err(e) => {
                    tracing::warn!(
                        backend = self.generator.backend_name(),
                        error = %e,
                        "Unparseable manufacturing feedback, using template"
                    );
                }
            }
        }

        StageOutput::template(templates::manufacturing_feedback_template(reading))
    }
}
