/// LLM Client — the single point of entry for all text-generation API calls.
///
/// No other module may call the Gemini API directly.
///
/// Model: gemini-2.5-flash (hardcoded — do not make configurable to prevent drift)
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
/// The model used for all LLM calls.
pub const MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM call timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata", default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Usage {
    #[serde(rename = "promptTokenCount", default)]
    pub prompt_tokens: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Text of the first part of the first candidate, trimmed. `None` if blank.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Wraps the Gemini `generateContent` endpoint. One attempt per call, bounded
/// by the client timeout; callers decide how to degrade on failure.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, LlmError> {
        Self::with_base_url(api_key, GEMINI_API_BASE, timeout)
    }

    pub fn with_base_url(
        api_key: String,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Makes a raw call to the API, returning the full response object.
    pub async fn call(&self, prompt: &str) -> Result<LlmResponse, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let url = format!("{}/v1/models/{MODEL}:generateContent", self.base_url);

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &llm_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_tokens, usage.output_tokens
            );
        }

        Ok(llm_response)
    }

    /// Calls the LLM and returns the trimmed text answer.
    pub async fn call_text(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}
