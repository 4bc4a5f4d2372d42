//! Gemini Backend
//!
//! Calls the Generative Language REST API (`models/{model}:generateContent`).
//! The credential is sent in the `x-goog-api-key` header, never in the URL.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{GeneratorError, TextGenerator};
use crate::config::{defaults, GeneratorConfig};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if any
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// HTTP client for the Gemini text-generation API
#[derive(Clone)]
pub struct GeminiBackend {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    timeout: Duration,
}

impl std::fmt::Debug for GeminiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiBackend")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl GeminiBackend {
    /// Build a client. No request is made until `probe` or `generate`.
    pub fn new(api_key: &str, config: &GeneratorConfig) -> Result<Self, GeneratorError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.to_string(),
            timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Lightweight credential check. Succeeds on any 2xx reply, even one
    /// with no candidate text.
    pub async fn probe(&self) -> Result<(), GeneratorError> {
        self.request(defaults::PROBE_PROMPT).await.map(|_| ())
    }

    async fn request(&self, prompt: &str) -> Result<GenerateResponse, GeneratorError> {
        let body = GenerateRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };

        let resp = self
            .http
            .post(format!("{}/models/{}:generateContent", self.endpoint, self.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GeneratorError::Status(status));
        }

        resp.json::<GenerateResponse>()
            .await
            .map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, e: reqwest::Error) -> GeneratorError {
        if e.is_timeout() {
            GeneratorError::Timeout(self.timeout)
        } else {
            GeneratorError::Http(e)
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        let start = std::time::Instant::now();
        let response = self.request(prompt).await?;
        let text = response.text().ok_or(GeneratorError::EmptyResponse)?;

        tracing::debug!(
            model = %self.model,
            latency_ms = start.elapsed().as_millis(),
            chars = text.len(),
            "Text generated"
        );
        Ok(text)
    }

    fn backend_name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hello "}, {"text": "there"}], "role": "model"}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.text().as_deref(), Some("Hello there"));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"promptFeedback": {}}"#).unwrap();
        assert!(parsed.text().is_none());

        let blank: GenerateResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": [{"text": "  "}]}}]}"#).unwrap();
        assert!(blank.text().is_none());
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: "ping" }],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "ping");
    }

    #[test]
    fn test_debug_hides_credential() {
        let backend = GeminiBackend::new("secret-key", &GeneratorConfig::default()).unwrap();
        assert!(!format!("{backend:?}").contains("secret-key"));
        assert_eq!(backend.model(), "gemini-1.5-flash");
    }
}
