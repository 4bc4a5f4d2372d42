//! Concierge Agent - customer-facing message (stage B)

use std::sync::Arc;

use super::{attempt_generation, prompts, templates};
use crate::llm::TextGenerator;
use crate::types::StageOutput;

pub struct ConciergeAgent {
    generator: Arc<dyn TextGenerator>,
}

impl ConciergeAgent {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Draft a short message for the customer based on the diagnosis
    pub async fn draft_message(&self, diagnosis: &str, customer_name: &str) -> StageOutput<String> {
        let prompt = prompts::customer_message_prompt(diagnosis, customer_name);
        match attempt_generation(self.generator.as_ref(), "customer_message", &prompt).await {
            Some(text) => StageOutput::generated(text),
            None => StageOutput::template(templates::customer_message_template(customer_name)),
        }
    }
}
