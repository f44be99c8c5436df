//! Panel state endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use crate::panel::{PanelMode, PanelSnapshot, PlaybackSink};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SetModeBody {
    pub mode: PanelMode,
}

#[derive(Debug, Deserialize)]
pub struct SetPromptBody {
    pub prompt: String,
    /// Optional voice change alongside the prompt
    pub voice: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMetadataBody {
    pub duration_secs: f64,
}

/// Current panel snapshot: mode, prompt, voice, and playback state.
pub async fn get_panel(State(state): State<Arc<AppState>>) -> Json<PanelSnapshot> {
    Json(state.panel.snapshot())
}

/// Explicit mode toggle between AI generation and local upload.
pub async fn set_mode(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SetModeBody>,
) -> Json<PanelSnapshot> {
    state.panel.set_mode(body.mode);
    Json(state.panel.snapshot())
}

/// Update the prompt (and optionally the voice) the next generation uses.
pub async fn set_prompt(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SetPromptBody>,
) -> Json<PanelSnapshot> {
    state.panel.set_prompt(body.prompt);
    if let Some(voice) = body.voice {
        state
            .panel
            .set_voice(crate::core::tts::VoiceType::from_str_or_default(&voice));
    }
    Json(state.panel.snapshot())
}

/// Media-metadata event from the player. Writes the audio duration,
/// independent of the generate/upload success path.
pub async fn media_metadata(
    State(state): State<Arc<AppState>>,
    Json(body): Json<MediaMetadataBody>,
) -> Json<PanelSnapshot> {
    state.panel.observe_media_metadata(body.duration_secs);
    Json(state.panel.snapshot())
}
