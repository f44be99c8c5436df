//! Speech synthesis clients.
//!
//! The `SpeechSynthesizer` trait is the seam between the generation workflow
//! and the remote text-to-speech service. The only shipped implementation is
//! the OpenAI speech API client; tests substitute their own endpoint.

mod config;
mod openai;

pub use config::{SpeechModel, VoiceType};
pub use openai::{OPENAI_TTS_URL, OpenAiSpeech};

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub type TtsResult<T> = Result<T, TtsError>;

/// Errors from the synthesis service.
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("synthesis request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("synthesis service returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Remote text-to-speech service.
///
/// Given a voice and input text, returns raw audio bytes in the provider's
/// configured output encoding (mp3 for the generation workflow).
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, voice: VoiceType, input: &str) -> TtsResult<Bytes>;
}
