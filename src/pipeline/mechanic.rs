//! Mechanic Agent - root-cause diagnosis (stage A)

use std::sync::Arc;

use super::{attempt_generation, prompts, templates};
use crate::llm::TextGenerator;
use crate::types::{Reading, StageOutput, Verdict};

pub struct MechanicAgent {
    generator: Arc<dyn TextGenerator>,
}

impl MechanicAgent {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Diagnose the reading. Falls back to the priority-ordered template.
    pub async fn diagnose(&self, reading: &Reading, verdict: &Verdict) -> StageOutput<String> {
        let prompt = prompts::diagnosis_prompt(reading, verdict);
        match attempt_generation(self.generator.as_ref(), "diagnosis", &prompt).await {
            Some(text) => StageOutput::generated(text),
            None => StageOutput::template(templates::diagnosis_template(reading).to_string()),
        }
    }
}
