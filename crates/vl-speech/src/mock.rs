//! Mock transcriber for tests — canned transcript or forced failure.

use async_trait::async_trait;

use crate::error::{SpeechError, SpeechResult};
use crate::transcriber::Transcriber;

/// A fake speech collaborator serving a pre-loaded transcript.
pub struct MockTranscriber {
    reply: Result<String, String>,
}

impl MockTranscriber {
    /// Transcriber that returns the given text for any audio.
    pub fn returning(transcript: impl Into<String>) -> Self {
        Self {
            reply: Ok(transcript.into()),
        }
    }

    /// Transcriber whose transport always fails.
    pub fn unreachable() -> Self {
        Self {
            reply: Err("mock transcriber unreachable".into()),
        }
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, _audio: &[u8]) -> SpeechResult<String> {
        self.reply.clone().map_err(SpeechError::Upstream)
    }
}
