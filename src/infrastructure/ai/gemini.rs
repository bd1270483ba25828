//! Google Generative AI (`generateContent`) client.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::application::{
    ApplicationResult, error::ApplicationError, ports::ai::TextGenerator,
};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const INVALID_KEY: &str = "Invalid AI API key. Please contact the administrator.";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Model to use (e.g., "gemini-2.5-flash").
    pub model: String,
    /// API root up to and including the version segment.
    pub api_base: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
        }
    }
}

/// Google error wrapper.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: GoogleError,
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    message: String,
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Prompt feedback (for blocked prompts).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

pub struct GeminiTextGenerator {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiTextGenerator {
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Creates a generator with a custom HTTP client.
    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }
}

fn map_error_status(status: StatusCode, body: &str) -> ApplicationError {
    let parsed = serde_json::from_str::<ErrorResponse>(body).ok();
    let message = parsed
        .as_ref()
        .map_or_else(|| body.to_string(), |e| e.error.message.clone());
    let key_problem = message.contains("API_KEY")
        || message.contains("API key")
        || parsed
            .as_ref()
            .and_then(|e| e.error.status.as_deref())
            .is_some_and(|s| s == "UNAUTHENTICATED" || s == "PERMISSION_DENIED");

    if key_problem || status == StatusCode::UNAUTHORIZED {
        ApplicationError::unavailable(INVALID_KEY)
    } else {
        ApplicationError::infrastructure(format!("gemini returned {status}: {message}"))
    }
}

#[async_trait]
impl TextGenerator for GeminiTextGenerator {
    async fn generate(&self, prompt: &str) -> ApplicationResult<String> {
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        });

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("gemini request failed: {err}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("gemini read failed: {err}")))?;

        if !status.is_success() {
            return Err(map_error_status(status, &text));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text).map_err(|err| {
            ApplicationError::infrastructure(format!("invalid gemini response: {err}"))
        })?;

        if let Some(reason) = parsed
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
        {
            return Err(ApplicationError::infrastructure(format!(
                "prompt blocked: {reason}"
            )));
        }

        let reply: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if reply.is_empty() {
            return Err(ApplicationError::infrastructure("gemini returned no text"));
        }
        Ok(reply)
    }
}
