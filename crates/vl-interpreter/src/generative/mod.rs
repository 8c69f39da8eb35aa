//! Generative-fallback interpretation strategy.
//!
//! Builds the fixed prompt contract, invokes the external model
//! collaborator, and defensively parses its free-text reply into the same
//! `Action` shape the rule-based strategy produces.

pub mod envelope;
pub mod gemini;
pub mod mock;
pub mod prompt;

pub use gemini::{GeminiClient, GeminiConfig};
pub use mock::MockModel;

use async_trait::async_trait;

use vl_protocol::Action;

use crate::error::InterpretResult;

/// Boundary with the generative-model collaborator: one prompt string in,
/// the raw response envelope (JSON text) out. Transport/auth failures
/// surface as `InterpretError::Upstream`.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn infer(&self, prompt: &str) -> InterpretResult<String>;

    /// Collaborator name (for logging/audit).
    fn name(&self) -> &str;
}

/// Interprets transcripts by delegating to a generative model.
///
/// The collaborator is injected at construction so tests can substitute a
/// fake. No retry happens here; retry policy belongs to the caller.
pub struct GenerativeInterpreter {
    model: Box<dyn GenerativeModel>,
}

impl GenerativeInterpreter {
    pub fn new(model: Box<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Prompt → infer → parse. Fails whole, never partially: the result is
    /// a complete `Action` or a typed error.
    pub async fn interpret(&self, transcript: &str) -> InterpretResult<Action> {
        let prompt = prompt::build_prompt(transcript);
        let raw = self.model.infer(&prompt).await?;
        let action = envelope::parse_envelope(&raw)?;
        tracing::debug!(model = self.model.name(), kind = ?action.kind, "model reply parsed");
        Ok(action)
    }
}
