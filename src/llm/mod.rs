//! Text-Generation Capability
//!
//! Provides a unified interface for the external text generator used by the
//! response pipeline.
//!
//! ## Architecture
//!
//! - **TextGenerator**: fallible `generate(prompt)`; may be absent
//! - **NullGenerator**: the "capability absent" implementation; always
//!   returns `GeneratorError::Unconfigured` so every stage uses its template
//! - **GeminiBackend**: REST adapter for the Generative Language API
//! - **GeneratorFactory**: turns a credential into a generator, verifying it
//!   once with a probe call before first use

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::config::GeneratorConfig;

mod gemini;
pub use gemini::GeminiBackend;

/// Text-generation errors. None of these escape a pipeline stage.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("text generator not configured")]
    Unconfigured,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("backend returned no text")]
    EmptyResponse,
}

impl GeneratorError {
    /// Expected absence of the capability, as opposed to a failed call
    pub const fn is_unconfigured(&self) -> bool {
        matches!(self, GeneratorError::Unconfigured)
    }
}

/// Unified trait for text-generation backends
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a response from the backend given a prompt
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;

    /// Get the backend name for logging
    fn backend_name(&self) -> &'static str;
}

/// Capability-absent generator
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGenerator;

#[async_trait]
impl TextGenerator for NullGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
        Err(GeneratorError::Unconfigured)
    }

    fn backend_name(&self) -> &'static str {
        "null"
    }
}

/// Factory for creating text generators
pub struct GeneratorFactory;

impl GeneratorFactory {
    /// Create a generator from a credential string.
    ///
    /// A missing or blank credential, a client that cannot be built, or a
    /// failed probe all yield `NullGenerator` (mock mode). Never fails.
    pub async fn from_credential(
        credential: Option<&str>,
        config: &GeneratorConfig,
    ) -> Arc<dyn TextGenerator> {
        let Some(api_key) = credential.map(str::trim).filter(|k| !k.is_empty()) else {
            tracing::info!("No text-generator credential, using mock mode (template responses)");
            return Arc::new(NullGenerator);
        };

        let backend = match GeminiBackend::new(api_key, config) {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to build text-generator client, using mock mode");
                return Arc::new(NullGenerator);
            }
        };

        tracing::info!(model = %config.model, "Verifying text-generator credential");
        match backend.probe().await {
            Ok(()) => {
                tracing::info!(backend = backend.backend_name(), model = %config.model, "Text generator ready");
                Arc::new(backend)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Text-generator configuration issue, using mock mode");
                Arc::new(NullGenerator)
            }
        }
    }
}
