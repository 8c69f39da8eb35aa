//! Transcription error types.

use thiserror::Error;

/// Errors reported by the transcription collaborator.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Transport or auth failure talking to the speech service.
    #[error("transcription request failed: {0}")]
    Upstream(String),

    /// The speech service replied with an unexpected body.
    #[error("transcription response decode failed: {0}")]
    Decode(String),
}

/// Convenience alias for transcription results.
pub type SpeechResult<T> = Result<T, SpeechError>;
