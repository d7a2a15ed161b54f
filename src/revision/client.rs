//! Claude API integration for AI-powered content revision
//!
//! Requires the `ai` feature to be enabled:
//! ```toml
//! geolens = { version = "0.3", features = ["ai"] }
//! ```

use std::time::Duration;
use thiserror::Error;

/// Error from the revision service
#[derive(Debug, Error)]
pub enum RevisionError {
    #[error("ANTHROPIC_API_KEY environment variable not set")]
    NoApiKey,
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Service returned empty content")]
    EmptyResponse,
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Rate limited - try again later")]
    RateLimited,
    #[error("API error: {0}")]
    Api(String),
    #[error("Gave up after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: String },
}

impl RevisionError {
    /// Transient failures are worth retrying; everything else fails fast
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            RevisionError::RequestFailed(_) | RevisionError::RateLimited
        )
    }
}

/// Anything that can turn a prompt into revised text
pub trait GenerativeService {
    fn generate(&self, prompt: &str) -> Result<String, RevisionError>;
}

/// Exponential-backoff retry parameters
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub initial_delay: Duration,
    pub multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            initial_delay: Duration::from_millis(500),
            multiplier: 2,
        }
    }
}

/// Call the service, retrying transient failures with exponential backoff
pub fn call_with_retry<S: GenerativeService>(
    service: &S,
    prompt: &str,
    policy: &RetryPolicy,
) -> Result<String, RevisionError> {
    let mut delay = policy.initial_delay;
    let mut last = String::new();

    for attempt in 1..=policy.attempts {
        match service.generate(prompt) {
            Ok(text) => return Ok(text),
            Err(e) if e.retryable() && attempt < policy.attempts => {
                last = e.to_string();
                std::thread::sleep(delay);
                delay *= policy.multiplier;
            }
            Err(e) if e.retryable() => {
                return Err(RevisionError::RetriesExhausted {
                    attempts: policy.attempts,
                    last: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    Err(RevisionError::RetriesExhausted {
        attempts: policy.attempts,
        last,
    })
}

/// Claude API client for generating content revisions
#[allow(dead_code)]
pub struct ClaudeClient {
    api_key: String,
    model: String,
    base_url: String,
}

impl ClaudeClient {
    /// Create a new Claude client using ANTHROPIC_API_KEY from environment
    pub fn from_env() -> Result<Self, RevisionError> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| RevisionError::NoApiKey)?;

        Ok(Self::with_key(api_key))
    }

    /// Create a client with a specific API key
    pub fn with_key(api_key: String) -> Self {
        Self {
            api_key,
            model: "claude-sonnet-4-20250514".to_string(),
            base_url: "https://api.anthropic.com/v1/messages".to_string(),
        }
    }

    /// Set the model to use
    pub fn model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Send a prompt to Claude and get the response text
    #[cfg(feature = "ai")]
    pub fn send_request(&self, prompt: &str) -> Result<String, RevisionError> {
        use serde_json::json;

        let client = reqwest::blocking::Client::new();

        let body = json!({
            "model": self.model,
            "max_tokens": 8192,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        let response = client
            .post(&self.base_url)
            .header("Content-Type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&body)
            .send()
            .map_err(|e| RevisionError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RevisionError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            return Err(RevisionError::Api(format!("{}: {}", status, error_text)));
        }

        let json: serde_json::Value = response
            .json()
            .map_err(|e| RevisionError::InvalidResponse(e.to_string()))?;

        let content = json["content"]
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|item| item["text"].as_str())
            .ok_or_else(|| RevisionError::InvalidResponse("No content in response".to_string()))?;

        if content.trim().is_empty() {
            return Err(RevisionError::EmptyResponse);
        }

        Ok(content.to_string())
    }

    /// Stub implementation when ai feature is disabled
    #[cfg(not(feature = "ai"))]
    pub fn send_request(&self, _prompt: &str) -> Result<String, RevisionError> {
        Err(RevisionError::RequestFailed(
            "AI feature not enabled. Rebuild with: cargo build --features ai".to_string(),
        ))
    }
}

impl GenerativeService for ClaudeClient {
    fn generate(&self, prompt: &str) -> Result<String, RevisionError> {
        self.send_request(prompt)
    }
}

/// Check if the AI feature is available
pub fn is_ai_available() -> bool {
    cfg!(feature = "ai")
}
