//! The upload workflow: local file -> upload gateway -> playback URL.
//!
//! A simpler sibling of the generation workflow: no synthesis, no busy
//! flag. The failure contract matches the generation path (the source
//! behavior let upload rejections propagate unhandled; that asymmetry was
//! judged an oversight and reconciled - see DESIGN.md).

use std::sync::Arc;

use bytes::Bytes;
use tracing::{error, info, warn};

use super::guard::FlightGuard;
use super::WorkflowError;
use crate::core::artifact::AudioArtifact;
use crate::core::storage::{ObjectGateway, StorageReference};
use crate::panel::{Notice, Notifier, PlaybackSink};
use crate::utils::validate_playback_url;

/// A file picked by the user.
#[derive(Debug, Clone)]
pub struct PickedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Result of a successful upload.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub storage_id: StorageReference,
    pub audio_url: String,
}

pub struct UploadWorkflow {
    gateway: Arc<dyn ObjectGateway>,
    sink: Arc<dyn PlaybackSink>,
    notifier: Arc<dyn Notifier>,
    guard: Arc<FlightGuard>,
}

impl UploadWorkflow {
    pub fn new(
        gateway: Arc<dyn ObjectGateway>,
        sink: Arc<dyn PlaybackSink>,
        notifier: Arc<dyn Notifier>,
        guard: Arc<FlightGuard>,
    ) -> Self {
        Self {
            gateway,
            sink,
            notifier,
            guard,
        }
    }

    /// Upload a picked file and publish its playback URL.
    ///
    /// No file is a no-op. Non-audio content is rejected before any remote
    /// call. Remote failures are logged and surfaced as a destructive
    /// notice; nothing is published.
    pub async fn upload(
        &self,
        file: Option<PickedFile>,
    ) -> Result<Option<UploadOutcome>, WorkflowError> {
        let Some(file) = file else {
            return Ok(None);
        };

        let Some(artifact) =
            AudioArtifact::from_upload(&file.file_name, &file.content_type, file.bytes)
        else {
            self.notifier
                .notify(Notice::info("Only audio files can be uploaded"));
            return Err(WorkflowError::UnsupportedMediaType(file.content_type));
        };

        let token = self.guard.open_epoch();
        let result = self.run(&artifact).await;

        match result {
            Ok(outcome) => {
                info!(
                    file = %artifact.file_name,
                    storage_id = %outcome.storage_id,
                    "audio uploaded"
                );
                if self.guard.is_current(&token) {
                    self.sink.set_storage_id(outcome.storage_id.clone());
                    self.sink.set_audio_url(outcome.audio_url.clone());
                } else {
                    warn!(storage_id = %outcome.storage_id, "discarding stale upload result");
                }
                Ok(Some(outcome))
            }
            Err(e) => {
                error!(file = %artifact.file_name, error = %e, "audio upload failed");
                self.notifier
                    .notify(Notice::destructive("Error uploading audio"));
                Err(e)
            }
        }
    }

    async fn run(&self, artifact: &AudioArtifact) -> Result<UploadOutcome, WorkflowError> {
        let storage_id = self.gateway.upload(artifact).await?;
        let audio_url = self.gateway.resolve_url(&storage_id).await?;
        validate_playback_url(&audio_url)?;

        Ok(UploadOutcome {
            storage_id,
            audio_url,
        })
    }
}
