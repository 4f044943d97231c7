/// Generation client — the single point of entry for all generative-language
/// API calls in this service.
///
/// ARCHITECTURAL RULE: No other module may call the Generative Language API
/// directly. All text generation MUST go through this module, via the
/// `TextGenerator` trait held in `AppState`.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GENAI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Fixed sampling configuration. Every request uses the same parameters.
const TEMPERATURE: f64 = 0.8;
const TOP_K: u32 = 40;
const TOP_P: f64 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 2048;

#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("response contained no candidate text")]
    MalformedResponse,
}

/// Anything that can turn a prompt into generated text.
///
/// `AppState` carries an `Arc<dyn TextGenerator>` so handler tests can
/// substitute a fake implementation and exercise both the success path and
/// every failure path without network access.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (generateContent)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_k: u32,
    top_p: f64,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Extracts the first candidate's first text part, if the response has
    /// the expected shape.
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct GenAiErrorEnvelope {
    error: GenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GenAiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Client for the hosted generative-language service.
///
/// Performs exactly one attempt per call. No retry, no backoff: any failure
/// is reported to the caller, which substitutes deterministic fallback text.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            // No explicit timeout: the transport's own limits govern how long
            // a request may hang.
            client: Client::new(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError> {
        let url = format!("{}/{}:generateContent", GENAI_BASE_URL, self.model);

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the service's error envelope for a readable message
            let message = serde_json::from_str::<GenAiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GenAiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;

        let text = parsed.first_text().ok_or(GenAiError::MalformedResponse)?;

        debug!("generation succeeded ({} chars)", text.len());

        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_text_extracts_first_candidate() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hello there"}, {"text": "second"}]}},
                {"content": {"parts": [{"text": "other candidate"}]}}
            ]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_text(), Some("Hello there"));
    }

    #[test]
    fn test_first_text_none_when_no_candidates() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.first_text(), None);
    }

    #[test]
    fn test_first_text_none_when_candidate_has_no_content() {
        let json = r#"{"candidates": [{}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_text(), None);
    }

    #[test]
    fn test_first_text_none_when_parts_empty() {
        let json = r#"{"candidates": [{"content": {"parts": []}}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_text(), None);
    }

    #[test]
    fn test_first_text_none_when_part_has_no_text() {
        let json = r#"{"candidates": [{"content": {"parts": [{}]}}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_text(), None);
    }

    #[test]
    fn test_generation_config_serializes_camel_case() {
        let config = GenerationConfig {
            temperature: TEMPERATURE,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["temperature"], serde_json::json!(0.8));
        assert_eq!(json["topK"], serde_json::json!(40));
        assert_eq!(json["topP"], serde_json::json!(0.95));
        assert_eq!(json["maxOutputTokens"], serde_json::json!(2048));
    }

    #[test]
    fn test_error_envelope_parses_service_message() {
        let body = r#"{"error": {"message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        let envelope: GenAiErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.message, "API key not valid");
    }
}
