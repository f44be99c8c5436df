//! Panel state: mode toggle, playback state, and the state-update interface.
//!
//! The panel renders two mutually exclusive modes, AI generation and local
//! upload, and owns the playback state the workflows publish into. State
//! mutation goes through the narrow `PlaybackSink` contract so the workflows
//! never reach into panel internals, and so tests can substitute a recorder.

mod notify;

pub use notify::{Notice, NoticeKind, Notifier, TracingNotifier};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::core::storage::StorageReference;
use crate::core::tts::VoiceType;

/// Panel input mode. Initial mode is AI generation; transitions happen only
/// via an explicit toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelMode {
    #[default]
    Ai,
    Upload,
}

/// Playback state owned by the panel.
///
/// `audio_url` and `audio_duration_secs` are set by different events (URL
/// resolution vs. the media-metadata event) and are not required to arrive
/// together.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    pub audio_url: Option<String>,
    pub storage_id: Option<StorageReference>,
    pub audio_duration_secs: Option<f64>,
    pub is_busy: bool,
}

/// Narrow state-update contract the workflows publish through.
pub trait PlaybackSink: Send + Sync {
    fn set_audio_url(&self, url: String);
    fn set_storage_id(&self, reference: StorageReference);
    fn set_prompt(&self, prompt: String);
    fn set_duration(&self, seconds: f64);
    fn set_busy(&self, busy: bool);
}

#[derive(Debug, Default)]
struct PanelInner {
    mode: PanelMode,
    prompt: String,
    voice: VoiceType,
    playback: PlaybackState,
}

/// The panel itself: mode, prompt/voice inputs, and playback state.
#[derive(Debug, Default)]
pub struct Panel {
    inner: RwLock<PanelInner>,
}

/// Serializable snapshot of the whole panel for the state endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSnapshot {
    pub mode: PanelMode,
    pub prompt: String,
    pub voice: VoiceType,
    #[serde(flatten)]
    pub playback: PlaybackState,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> PanelMode {
        self.inner.read().mode
    }

    pub fn set_mode(&self, mode: PanelMode) {
        self.inner.write().mode = mode;
    }

    pub fn prompt(&self) -> String {
        self.inner.read().prompt.clone()
    }

    pub fn voice(&self) -> VoiceType {
        self.inner.read().voice
    }

    pub fn set_voice(&self, voice: VoiceType) {
        self.inner.write().voice = voice;
    }

    /// The media-duration observer: called when the player loads media
    /// metadata, independent of the generate/upload success path.
    pub fn observe_media_metadata(&self, duration_secs: f64) {
        self.inner.write().playback.audio_duration_secs = Some(duration_secs);
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        let inner = self.inner.read();
        PanelSnapshot {
            mode: inner.mode,
            prompt: inner.prompt.clone(),
            voice: inner.voice,
            playback: inner.playback.clone(),
        }
    }
}

impl PlaybackSink for Panel {
    fn set_audio_url(&self, url: String) {
        self.inner.write().playback.audio_url = Some(url);
    }

    fn set_storage_id(&self, reference: StorageReference) {
        self.inner.write().playback.storage_id = Some(reference);
    }

    fn set_prompt(&self, prompt: String) {
        self.inner.write().prompt = prompt;
    }

    fn set_duration(&self, seconds: f64) {
        self.inner.write().playback.audio_duration_secs = Some(seconds);
    }

    fn set_busy(&self, busy: bool) {
        self.inner.write().playback.is_busy = busy;
    }
}
