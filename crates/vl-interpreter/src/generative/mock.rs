//! Mock generative model for tests — canned envelope or forced failure.

use async_trait::async_trait;

use super::GenerativeModel;
use crate::error::{InterpretError, InterpretResult};

/// A fake collaborator that replies with a pre-loaded raw body (or always
/// fails), so both parser and facade can be exercised without a network.
pub struct MockModel {
    reply: Result<String, String>,
}

impl MockModel {
    /// Model that replies with the given raw envelope body.
    pub fn replying(raw: impl Into<String>) -> Self {
        Self {
            reply: Ok(raw.into()),
        }
    }

    /// Model that replies with a well-formed envelope whose first part
    /// wraps `payload` in a ```json fence — the shape real replies take.
    pub fn replying_fenced(payload: &serde_json::Value) -> Self {
        let envelope = serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": format!("```json\n{payload}\n```") }]
                }
            }]
        });
        Self::replying(envelope.to_string())
    }

    /// Model whose transport always fails.
    pub fn unreachable() -> Self {
        Self {
            reply: Err("mock model unreachable".into()),
        }
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn infer(&self, _prompt: &str) -> InterpretResult<String> {
        self.reply
            .clone()
            .map_err(InterpretError::Upstream)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
