//! Google Cloud Speech REST client.
//!
//! Sends the audio blob to `speech:recognize` and concatenates every
//! result alternative into one transcript string separated by spaces.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crate::error::{SpeechError, SpeechResult};
use crate::transcriber::Transcriber;

/// Configuration for the speech collaborator. The defaults mirror the
/// reference integration: linear PCM at 48 kHz, Ukrainian.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// API key (SPEECH_API_KEY env var).
    #[serde(default)]
    pub api_key: String,
    /// API base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// BCP-47 language code of the spoken commands.
    #[serde(default = "default_language")]
    pub language: String,
    /// Sample rate of the caller-supplied audio.
    #[serde(default = "default_sample_rate_hz")]
    pub sample_rate_hz: u32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://speech.googleapis.com".into()
}
fn default_language() -> String {
    "uk-UA".into()
}
fn default_sample_rate_hz() -> u32 {
    48_000
}
fn default_timeout_secs() -> u64 {
    15
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            language: default_language(),
            sample_rate_hz: default_sample_rate_hz(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SpeechConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("SPEECH_API_KEY").unwrap_or_default(),
            endpoint: std::env::var("SPEECH_ENDPOINT").unwrap_or(defaults.endpoint),
            language: std::env::var("SPEECH_LANGUAGE").unwrap_or(defaults.language),
            sample_rate_hz: std::env::var("SPEECH_SAMPLE_RATE_HZ")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.sample_rate_hz),
            timeout_secs: std::env::var("SPEECH_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

/// speech:recognize request body.
#[derive(Serialize)]
struct RecognizeRequest<'a> {
    config: RecognitionConfig<'a>,
    audio: RecognitionAudio,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig<'a> {
    encoding: &'a str,
    sample_rate_hertz: u32,
    language_code: &'a str,
}

#[derive(Serialize)]
struct RecognitionAudio {
    content: String,
}

/// speech:recognize response (only the fields we read).
#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Deserialize)]
struct RecognitionAlternative {
    #[serde(default)]
    transcript: String,
}

/// Client for the Google Cloud Speech recognize endpoint.
pub struct GoogleSpeechClient {
    client: reqwest::Client,
    config: SpeechConfig,
}

impl GoogleSpeechClient {
    pub fn new(config: SpeechConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build reqwest client");
        Self { client, config }
    }
}

#[async_trait::async_trait]
impl Transcriber for GoogleSpeechClient {
    async fn transcribe(&self, audio: &[u8]) -> SpeechResult<String> {
        let url = format!(
            "{}/v1/speech:recognize?key={}",
            self.config.endpoint, self.config.api_key
        );

        let body = RecognizeRequest {
            config: RecognitionConfig {
                encoding: "LINEAR16",
                sample_rate_hertz: self.config.sample_rate_hz,
                language_code: &self.config.language,
            },
            audio: RecognitionAudio {
                content: BASE64.encode(audio),
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SpeechError::Upstream(format!("speech request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "speech service returned non-success status");
            return Err(SpeechError::Upstream(format!("speech returned {status}")));
        }

        let decoded: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::Decode(e.to_string()))?;

        let transcript = decoded
            .results
            .iter()
            .flat_map(|r| r.alternatives.iter())
            .map(|a| a.transcript.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Build a GoogleSpeechClient pointed at the mock server.
    fn client_for(server: &MockServer) -> GoogleSpeechClient {
        GoogleSpeechClient::new(SpeechConfig {
            api_key: "test-key".into(),
            endpoint: server.uri(),
            timeout_secs: 2,
            ..SpeechConfig::default()
        })
    }

    #[tokio::test]
    async fn alternatives_joined_with_spaces() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/speech:recognize"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    { "alternatives": [{ "transcript": "додай витрату" }] },
                    { "alternatives": [{ "transcript": "50 грн на їжу" }] }
                ]
            })))
            .mount(&server)
            .await;

        let transcript = client_for(&server).transcribe(b"pcm-bytes").await.unwrap();
        assert_eq!(transcript, "додай витрату 50 грн на їжу");
    }

    #[tokio::test]
    async fn empty_results_give_empty_transcript() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let transcript = client_for(&server).transcribe(b"silence").await.unwrap();
        assert_eq!(transcript, "");
    }

    #[tokio::test]
    async fn non_success_status_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server).transcribe(b"x").await.unwrap_err();
        assert!(matches!(err, SpeechError::Upstream(_)));
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).transcribe(b"x").await.unwrap_err();
        assert!(matches!(err, SpeechError::Decode(_)));
    }
}
