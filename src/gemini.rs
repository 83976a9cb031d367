//! Gemini API client for the two synthesis calls
//!
//! Single capability: submit prompt text, receive response text.
//! Uses a long-lived reqwest::Client for connection pooling. One attempt
//! per call; the orchestrator owns all degradation policy.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

use crate::error::SynthesisError;

const DEFAULT_BASE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Seam between the orchestrator and the generation backend, so tests can
/// inject stub generators and fault injection per call.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Submit a prompt; `json_mode` requests a strictly-parseable JSON reply.
    async fn generate(&self, prompt: &str, json_mode: bool) -> crate::Result<String>;
}

/// Reusable Gemini client (connection-pooled)
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Credential is injected once at construction and never mutated.
    /// Absence is not validated here; it surfaces as a call failure.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a custom endpoint (mock server in tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(8)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, json_mode: bool) -> crate::Result<String> {
        if self.api_key.is_empty() {
            return Err(SynthesisError::Generation(
                "GEMINI_API_KEY not configured".to_string(),
            ));
        }

        let url = format!("{}?key={}", self.base_url, self.api_key);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.3,
                max_output_tokens: 2048,
                response_mime_type: json_mode.then(|| "application/json".to_string()),
            },
        };

        info!(json_mode, "Calling Gemini API");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini API request failed: {}", e);
                SynthesisError::Generation(format!("Gemini API error: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error response: {}", error_text);
            return Err(SynthesisError::Generation(format!(
                "Gemini API error: {}",
                error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Gemini response: {}", e);
            SynthesisError::Generation(format!("Gemini parse error: {}", e))
        })?;

        if gemini_response.candidates.is_empty() {
            return Err(SynthesisError::Generation(
                "No response from Gemini API".to_string(),
            ));
        }

        let text = gemini_response.candidates[0]
            .content
            .parts
            .first()
            .ok_or_else(|| {
                SynthesisError::Generation("Empty response from Gemini".to_string())
            })?
            .text
            .clone();

        info!(length = text.len(), "Gemini response received");

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "Summarize the market".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.3,
                max_output_tokens: 2048,
                response_mime_type: None,
            },
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("Summarize the market"));
        assert!(json.contains("generationConfig"));
        // Plain-text mode must not request a response MIME type.
        assert!(!json.contains("responseMimeType"));
    }

    #[test]
    fn test_json_mode_sets_mime_type() {
        let config = GenerationConfig {
            temperature: 0.3,
            max_output_tokens: 2048,
            response_mime_type: Some("application/json".to_string()),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"responseMimeType\":\"application/json\""));
    }

    #[tokio::test]
    async fn test_empty_api_key_fails_fast() {
        let client = GeminiClient::new(String::new());
        let result = client.generate("anything", false).await;
        assert!(matches!(result, Err(SynthesisError::Generation(_))));
    }
}
