//! Gemini API client.
//!
//! Sends document text with a fixed instruction prompt to Google's
//! generateContent endpoint and returns the raw model response. Errors
//! never escape [`GeminiClient::extract_structured`]: they are folded
//! into a synthetic JSON error object so the display layer always has
//! something in the expected shape.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::LlmSettings;

use super::prompt::EXTRACTION_PROMPT;

/// Errors that can occur talking to the Gemini API.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Failed to reach the API
    #[error("Connection error: {0}")]
    Connection(String),
    /// API returned an error
    #[error("API error: {0}")]
    Api(String),
    /// Failed to parse the response
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Gemini generateContent request format.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

/// Gemini generateContent response format.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiApiError>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiResponseContent,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    message: String,
}

/// Client for the Gemini generateContent API.
pub struct GeminiClient {
    settings: LlmSettings,
    client: Client,
}

impl GeminiClient {
    /// Create a new client from settings.
    pub fn new(settings: LlmSettings) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { settings, client }
    }

    /// Extract structured data from document text.
    ///
    /// Returns the raw model response, expected (but not guaranteed) to
    /// be a JSON object with `document_type`, `extracted_data` and
    /// `compliance_status`. Any failure yields a synthetic JSON error
    /// string with `document_type: "error"` instead; this never fails.
    pub async fn extract_structured(&self, text: &str) -> String {
        match self.generate(text).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Gemini request failed: {}", e);
                Self::error_payload(&e)
            }
        }
    }

    /// Call generateContent with the extraction prompt and document text.
    async fn generate(&self, text: &str) -> Result<String, LlmError> {
        let truncated = self.truncate_content(text);

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![
                    GeminiPart {
                        text: EXTRACTION_PROMPT.to_string(),
                    },
                    GeminiPart {
                        text: truncated.to_string(),
                    },
                ],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: self.settings.temperature,
                max_output_tokens: self.settings.max_output_tokens,
            },
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.settings.endpoint, self.settings.model, self.settings.api_key
        );

        debug!(model = %self.settings.model, chars = truncated.len(), "calling Gemini");

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!("HTTP {}: {}", status, body)));
        }

        let gemini_resp: GeminiResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        if let Some(error) = gemini_resp.error {
            return Err(LlmError::Api(error.message));
        }

        let text = gemini_resp
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(LlmError::Parse("Empty model response".to_string()));
        }

        Ok(text.to_string())
    }

    /// Build the synthetic JSON error string returned when the remote
    /// call fails. Matches the shape the prompt asks the model for.
    fn error_payload(err: &LlmError) -> String {
        serde_json::json!({
            "type": "object",
            "properties": {
                "document_type": "error",
                "extracted_data": { "error": format!("API Error: {}", err) }
            },
            "compliance_status": "Error occurred during processing",
            "name": "response"
        })
        .to_string()
    }

    /// Truncate content to the configured maximum (UTF-8 safe).
    fn truncate_content<'a>(&self, text: &'a str) -> &'a str {
        if text.len() <= self.settings.max_content_chars {
            return text;
        }
        // Find a valid UTF-8 boundary at or before the limit
        let mut end = self.settings.max_content_chars;
        while end > 0 && !text.is_char_boundary(end) {
            end -= 1;
        }
        &text[..end]
    }
}
