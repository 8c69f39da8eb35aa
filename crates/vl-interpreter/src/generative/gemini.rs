//! Gemini REST client for the generative collaborator boundary.
//!
//! Calls the Generative Language API (`models/{model}:generateContent`) and
//! returns the response body verbatim — unwrapping the envelope is the
//! parser's job, not the transport's.

use serde::{Deserialize, Serialize};

use super::GenerativeModel;
use crate::error::{InterpretError, InterpretResult};

/// Configuration for the Gemini collaborator. Explicit, passed in at
/// construction — no process-wide globals.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API key (GEMINI_API_KEY env var).
    #[serde(default)]
    pub api_key: String,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// API base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-1.5-flash".into()
}
fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".into()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            model: std::env::var("GEMINI_MODEL").unwrap_or(defaults.model),
            endpoint: std::env::var("GEMINI_ENDPOINT").unwrap_or(defaults.endpoint),
            timeout_secs: std::env::var("GEMINI_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

/// generateContent request body (only the fields we send).
#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Client for the Gemini generateContent endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build reqwest client");
        Self { client, config }
    }
}

#[async_trait::async_trait]
impl GenerativeModel for GeminiClient {
    async fn infer(&self, prompt: &str) -> InterpretResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, self.config.api_key
        );

        let body = GenerateRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| InterpretError::Upstream(format!("gemini request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "gemini returned non-success status");
            return Err(InterpretError::Upstream(format!(
                "gemini returned {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| InterpretError::Upstream(format!("gemini body read failed: {e}")))
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}
