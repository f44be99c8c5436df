//! Generate and upload endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};

use crate::core::artifact::GenerationRequest;
use crate::core::storage::StorageReference;
use crate::core::tts::VoiceType;
use crate::errors::{AppError, AppResult};
use crate::state::AppState;
use crate::workflow::PickedFile;

/// Body for the generate endpoint. Fields default to the panel's current
/// prompt and voice when omitted, mirroring the panel-owned inputs.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateBody {
    pub input: Option<String>,
    pub voice: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub storage_id: StorageReference,
    pub audio_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub uploaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_id: Option<StorageReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// Run the generation workflow.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    body: Option<Json<GenerateBody>>,
) -> AppResult<Json<GenerateResponse>> {
    let body = body.map(|Json(b)| b).unwrap_or_default();

    let prompt = body.input.unwrap_or_else(|| state.panel.prompt());
    let voice = body
        .voice
        .map(|v| VoiceType::from_str_or_default(&v))
        .unwrap_or_else(|| state.panel.voice());

    let outcome = state
        .generation
        .generate(GenerationRequest::new(voice, prompt))
        .await?;

    Ok(Json(GenerateResponse {
        storage_id: outcome.storage_id,
        audio_url: outcome.audio_url,
    }))
}

/// Run the upload workflow on the first file field of a multipart body.
/// A body without a file field is a no-op.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut picked: Option<PickedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.file_name().is_none() {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        picked = Some(PickedFile {
            file_name,
            content_type,
            bytes,
        });
        break;
    }

    let outcome = state.upload.upload(picked).await?;

    Ok(Json(match outcome {
        Some(outcome) => UploadResponse {
            uploaded: true,
            storage_id: Some(outcome.storage_id),
            audio_url: Some(outcome.audio_url),
        },
        None => UploadResponse {
            uploaded: false,
            storage_id: None,
            audio_url: None,
        },
    }))
}
