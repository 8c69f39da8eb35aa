//! The transcription collaborator boundary.

use async_trait::async_trait;

use crate::error::SpeechResult;

/// Turns an audio byte stream into a single transcript string.
///
/// The engine's rule-based path expects the caller to lowercase and trim
/// the transcript before interpretation; implementations return the
/// service's text untouched.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8]) -> SpeechResult<String>;
}
