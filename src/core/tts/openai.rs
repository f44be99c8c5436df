//! OpenAI speech API client.
//!
//! One-shot REST client for `POST /v1/audio/speech`: the whole prompt goes
//! out in a single request and the full audio payload comes back in the
//! response body. Output format is fixed to mp3 to match the artifact
//! encoding the upload gateway expects.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::json;
use tracing::debug;

use super::config::{SpeechModel, VoiceType};
use super::{SpeechSynthesizer, TtsError, TtsResult};

/// OpenAI speech API endpoint
pub const OPENAI_TTS_URL: &str = "https://api.openai.com/v1/audio/speech";

/// OpenAI speech synthesis client.
///
/// The HTTP client is reused across requests for connection pooling, and
/// every call carries the configured timeout budget.
pub struct OpenAiSpeech {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: SpeechModel,
}

impl OpenAiSpeech {
    /// Create a new client against the given endpoint.
    ///
    /// `endpoint` is the full speech API URL; production uses
    /// [`OPENAI_TTS_URL`], tests point this at a mock server.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: SpeechModel,
        timeout: Duration,
    ) -> TtsResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model,
        })
    }

    /// Get the configured model.
    pub fn model(&self) -> SpeechModel {
        self.model
    }

    /// Build the HTTP request for a synthesis call.
    fn build_request(&self, voice: VoiceType, input: &str) -> reqwest::RequestBuilder {
        let body = json!({
            "model": self.model.as_str(),
            "input": input,
            "voice": voice.as_str(),
            "response_format": "mp3",
        });

        self.client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSpeech {
    async fn synthesize(&self, voice: VoiceType, input: &str) -> TtsResult<Bytes> {
        debug!(
            voice = voice.as_str(),
            model = self.model.as_str(),
            chars = input.len(),
            "sending synthesis request"
        );

        let response = self.build_request(voice, input).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TtsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let audio = response.bytes().await?;
        debug!(bytes = audio.len(), "synthesis response received");
        Ok(audio)
    }
}
