//! Text generation collaborator and its Gemini REST implementation.
use std::time::Duration;

use async_trait::async_trait;
use configs::ChatbotConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::ServiceError;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Transport errors end up in logs, so the request URL is dropped from the message.
fn upstream(e: reqwest::Error) -> ServiceError {
    ServiceError::Upstream(e.without_url().to_string())
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Model name reported back to chat clients.
    fn model(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String, ServiceError>;
}

/// Sampling settings sent with every request.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self { Self { temperature: 0.9, top_k: 40, top_p: 0.95, max_output_tokens: 4096 } }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
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
    content: Option<Content>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().map(|p| p.text).collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

/// Google Generative Language API client (`models/{model}:generateContent`).
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
    generation: GenerationConfig,
}

impl GeminiClient {
    pub fn from_config(cfg: &ChatbotConfig) -> Result<Self, ServiceError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .map_err(upstream)?;
        Ok(Self {
            http,
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
            model: cfg.model.clone(),
            generation: GenerationConfig::default(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn model(&self) -> &str { &self.model }

    #[instrument(skip_all, fields(model = %self.model, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        if self.api_key.is_empty() {
            return Err(ServiceError::Upstream("GEMINI_API_KEY is not configured".into()));
        }
        let body = GenerateRequest {
            contents: vec![RequestContent { parts: vec![RequestPart { text: prompt }] }],
            generation_config: self.generation,
        };
        let resp = self
            .http
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(upstream)?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(ServiceError::Upstream(format!("generateContent returned {}: {}", status, detail)));
        }
        let parsed: GenerateResponse = resp.json().await.map_err(upstream)?;
        let text = parsed.text().ok_or_else(|| ServiceError::Upstream("empty generation".into()))?;
        debug!(chars = text.len(), "generation_received");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_generate_content_shape() {
        let body = GenerateRequest {
            contents: vec![RequestContent { parts: vec![RequestPart { text: "hi" }] }],
            generation_config: GenerationConfig::default(),
        };
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(v["generationConfig"]["topK"], 40);
        assert_eq!(v["generationConfig"]["maxOutputTokens"], 4096);
    }

    #[test]
    fn response_text_joins_first_candidate_parts() {
        let raw = json!({
            "candidates": [
                {"content": {"parts": [{"text": "Hello "}, {"text": "there"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        });
        let parsed: GenerateResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.text().as_deref(), Some("Hello there"));
    }

    #[test]
    fn blocked_response_has_no_text() {
        let parsed: GenerateResponse = serde_json::from_value(json!({"promptFeedback": {}})).unwrap();
        assert!(parsed.text().is_none());
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let client = GeminiClient::from_config(&ChatbotConfig::default()).unwrap();
        assert!(client.endpoint().ends_with("/models/gemini-1.5-flash:generateContent"));
        let err = client.generate("hello").await;
        assert!(matches!(err, Err(ServiceError::Upstream(_))));
    }

    #[tokio::test]
    async fn transport_error_does_not_leak_api_key() {
        let cfg = ChatbotConfig {
            api_key: "SECRET-KEY-123".into(),
            api_base: "http://127.0.0.1:1/v1beta".into(),
            ..ChatbotConfig::default()
        };
        let client = GeminiClient::from_config(&cfg).unwrap();
        assert!(!client.endpoint().contains("SECRET-KEY-123"));
        let err = client.generate("hello").await.expect_err("nothing listens on port 1");
        let text = err.to_string();
        assert!(matches!(err, ServiceError::Upstream(_)));
        assert!(!text.contains("SECRET-KEY-123"), "{text}");
        assert!(!text.contains("127.0.0.1:1"), "{text}");
    }
}
