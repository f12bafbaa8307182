//! Text-generation backend.
//!
//! [`TextGenerator`] is the single-shot completion seam the dispatcher talks to.
//! [`GeminiClient`] implements it against the Gemini `generateContent` REST API.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("GEMINI_API_KEY is not configured")]
    NotConfigured,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("backend returned no text")]
    EmptyResponse,

    #[error("error decoding response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        BackendError::Transport(err.without_url().to_string())
    }
}

const API_KEY_HEADER: &str = "x-goog-api-key";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one instruction and returns the generated text. No conversation state.
    async fn complete(&self, instruction: &str) -> Result<String, BackendError>;
}

#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<SecretString>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.backend_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn complete(&self, instruction: &str) -> Result<String, BackendError> {
        let api_key = self.api_key.as_ref().ok_or(BackendError::NotConfigured)?;

        let body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: instruction }],
            }],
        };

        log::debug!(
            "Sending {} chars to Gemini model {}",
            instruction.len(),
            self.model
        );

        let response = self
            .http
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: response_text,
            });
        }

        extract_text(&response_text)
    }
}

/// Joins the text parts of the first candidate.
fn extract_text(response_text: &str) -> Result<String, BackendError> {
    let response: GeminiResponse = serde_json::from_str(response_text)
        .map_err(|e| BackendError::Decode(e.to_string()))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(BackendError::EmptyResponse);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_text_joins_first_candidate_parts() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Question: "}, {"text": "What?"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;

        assert_eq!(extract_text(body).expect("should extract"), "Question: What?");
    }

    #[test]
    fn extract_text_rejects_empty_candidates() {
        assert!(matches!(
            extract_text(r#"{"candidates": []}"#),
            Err(BackendError::EmptyResponse)
        ));
        assert!(matches!(
            extract_text(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#),
            Err(BackendError::EmptyResponse)
        ));
    }

    #[test]
    fn extract_text_reports_malformed_json() {
        assert!(matches!(extract_text("not json"), Err(BackendError::Decode(_))));
    }

    #[test]
    fn request_body_matches_gemini_shape() {
        let body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello" }],
            }],
        };

        let json = serde_json::to_value(&body).expect("should serialize");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn endpoint_includes_model_and_trims_slash() {
        let mut config = Config::test_config();
        config.gemini_base_url = "https://example.test/v1beta/".to_string();
        let client = GeminiClient::new(&config).expect("client should build");

        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-test:generateContent"
        );
    }

    #[tokio::test]
    async fn transport_error_does_not_leak_api_key() {
        let mut config = Config::test_config();
        config.gemini_api_key = Some(SecretString::from("SUPERSECRET123"));
        let client = GeminiClient::new(&config).expect("client should build");

        let err = client.complete("anything").await.unwrap_err();

        assert!(matches!(err, BackendError::Transport(_)));
        assert!(!err.to_string().contains("SUPERSECRET123"));
    }

    #[tokio::test]
    async fn missing_api_key_reports_not_configured() {
        let client = GeminiClient::new(&Config::test_config()).expect("client should build");

        let result = client.complete("anything").await;
        assert!(matches!(result, Err(BackendError::NotConfigured)));
    }
}
