//! Voice and model selection for speech synthesis.

use serde::{Deserialize, Serialize};

/// Supported synthesis models.
///
/// - `tts-1`: standard quality, lower latency
/// - `tts-1-hd`: high definition quality, higher latency
/// - `gpt-4o-mini-tts`: latest model with improved quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeechModel {
    /// Standard quality model - good balance of quality and latency
    #[default]
    #[serde(rename = "tts-1")]
    Tts1,
    /// High definition model - best quality, higher latency
    #[serde(rename = "tts-1-hd")]
    Tts1Hd,
    /// GPT-4o mini TTS model - latest improvements
    #[serde(rename = "gpt-4o-mini-tts")]
    Gpt4oMiniTts,
}

impl SpeechModel {
    /// Convert to the API parameter value.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tts1 => "tts-1",
            Self::Tts1Hd => "tts-1-hd",
            Self::Gpt4oMiniTts => "gpt-4o-mini-tts",
        }
    }

    /// Parse from string, with fallback to default.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "tts-1" | "tts1" => Self::Tts1,
            "tts-1-hd" | "tts1-hd" | "tts1hd" => Self::Tts1Hd,
            "gpt-4o-mini-tts" | "gpt4o-mini-tts" => Self::Gpt4oMiniTts,
            _ => Self::default(),
        }
    }
}

impl std::fmt::Display for SpeechModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supported voices for podcast generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceType {
    /// Alloy voice
    #[default]
    Alloy,
    /// Ash voice
    Ash,
    /// Ballad voice
    Ballad,
    /// Coral voice
    Coral,
    /// Echo voice
    Echo,
    /// Fable voice
    Fable,
    /// Onyx voice
    Onyx,
    /// Nova voice
    Nova,
    /// Sage voice
    Sage,
    /// Shimmer voice
    Shimmer,
    /// Verse voice
    Verse,
}

impl VoiceType {
    /// Convert to the API parameter value.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alloy => "alloy",
            Self::Ash => "ash",
            Self::Ballad => "ballad",
            Self::Coral => "coral",
            Self::Echo => "echo",
            Self::Fable => "fable",
            Self::Onyx => "onyx",
            Self::Nova => "nova",
            Self::Sage => "sage",
            Self::Shimmer => "shimmer",
            Self::Verse => "verse",
        }
    }

    /// Parse from string, with fallback to default.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "alloy" => Self::Alloy,
            "ash" => Self::Ash,
            "ballad" => Self::Ballad,
            "coral" => Self::Coral,
            "echo" => Self::Echo,
            "fable" => Self::Fable,
            "onyx" => Self::Onyx,
            "nova" => Self::Nova,
            "sage" => Self::Sage,
            "shimmer" => Self::Shimmer,
            "verse" => Self::Verse,
            _ => Self::default(),
        }
    }

    /// Get all available voices.
    pub fn all() -> &'static [VoiceType] {
        &[
            Self::Alloy,
            Self::Ash,
            Self::Ballad,
            Self::Coral,
            Self::Echo,
            Self::Fable,
            Self::Onyx,
            Self::Nova,
            Self::Sage,
            Self::Shimmer,
            Self::Verse,
        ]
    }
}

impl std::fmt::Display for VoiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
