//! Audio transcription boundary for VoiceLedger.
//!
//! The interpretation engine consumes a transcript string; producing one
//! from an audio byte stream is this crate's job. The boundary is the
//! [`Transcriber`] trait — a Google Cloud Speech REST client implements it
//! for production, a mock implements it for tests.

pub mod error;
pub mod google;
pub mod mock;
pub mod transcriber;

pub use error::{SpeechError, SpeechResult};
pub use google::{GoogleSpeechClient, SpeechConfig};
pub use mock::MockTranscriber;
pub use transcriber::Transcriber;
