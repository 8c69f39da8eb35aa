//! Interpretation error types.

use thiserror::Error;

/// Errors reported by the two interpretation entry points.
#[derive(Debug, Error)]
pub enum InterpretError {
    /// Transcript matched no known intent. Recoverable — the user should
    /// rephrase the command.
    #[error("cannot determine command type")]
    Classification,

    /// The generative reply was malformed at a named stage.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Collaborator transport/auth failure. No retry happens inside the
    /// engine; retry policy belongs to the caller.
    #[error("model request failed: {0}")]
    Upstream(String),
}

/// Envelope parsing failures, one per documented stage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("envelope decode failed: {0}")]
    EnvelopeDecode(String),

    #[error("no candidates")]
    NoCandidates,

    #[error("no content parts")]
    NoContentParts,

    #[error("payload decode failed: {0}")]
    PayloadDecode(String),
}

/// Convenience alias for interpretation results.
pub type InterpretResult<T> = Result<T, InterpretError>;
