//! Command interpretation facade — the two entry points callers see.

use vl_protocol::Action;

use crate::error::InterpretResult;
use crate::generative::{GenerativeInterpreter, GenerativeModel};
use crate::rules;

/// The engine behind the voice endpoint.
///
/// Holds no mutable state; every call is independent and safe to run
/// concurrently across requests. The only blocking work is the injected
/// collaborator's network call, and timeout/cancellation around it belongs
/// to the caller.
pub struct Interpreter {
    generative: GenerativeInterpreter,
}

impl Interpreter {
    pub fn new(model: Box<dyn GenerativeModel>) -> Self {
        Self {
            generative: GenerativeInterpreter::new(model),
        }
    }

    /// Deterministic rule-based interpretation.
    ///
    /// Precondition: the transcript is already lowercased and trimmed.
    pub fn interpret(&self, transcript: &str) -> InterpretResult<Action> {
        rules::interpret(transcript)
    }

    /// Generative-fallback interpretation via the injected collaborator.
    /// A separate entry point with the same output contract, not a retry
    /// tier of [`Self::interpret`].
    pub async fn interpret_via_model(&self, transcript: &str) -> InterpretResult<Action> {
        self.generative.interpret(transcript).await
    }
}
