//! The generation workflow: synthesis, packaging, upload, URL resolution.

use std::sync::Arc;

use tracing::{error, info, warn};

use super::guard::{FlightGuard, FlightToken};
use super::WorkflowError;
use crate::core::artifact::{AudioArtifact, GenerationRequest};
use crate::core::storage::{ObjectGateway, StorageReference};
use crate::core::tts::SpeechSynthesizer;
use crate::panel::{Notice, Notifier, PlaybackSink};
use crate::utils::validate_playback_url;

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub storage_id: StorageReference,
    pub audio_url: String,
}

/// Orchestrates synthesis -> packaging -> upload -> resolution, publishing
/// the result into panel state and holding the busy slot for the duration.
pub struct GenerationWorkflow {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    gateway: Arc<dyn ObjectGateway>,
    sink: Arc<dyn PlaybackSink>,
    notifier: Arc<dyn Notifier>,
    guard: Arc<FlightGuard>,
}

impl GenerationWorkflow {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        gateway: Arc<dyn ObjectGateway>,
        sink: Arc<dyn PlaybackSink>,
        notifier: Arc<dyn Notifier>,
        guard: Arc<FlightGuard>,
    ) -> Self {
        Self {
            synthesizer,
            gateway,
            sink,
            notifier,
            guard,
        }
    }

    /// Run one generation cycle.
    ///
    /// An empty prompt aborts before any remote call; an in-flight
    /// generation rejects the new request outright. Every other failure is
    /// caught here: logged, surfaced as a destructive notice, and nothing
    /// is published. The busy flag is cleared on every exit path.
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationOutcome, WorkflowError> {
        if request.is_empty() {
            self.notifier
                .notify(Notice::info("Please provide a prompt to generate a podcast"));
            return Err(WorkflowError::EmptyPrompt);
        }

        let Some(token) = self.guard.try_begin() else {
            self.notifier
                .notify(Notice::info("A podcast is already being generated"));
            return Err(WorkflowError::Busy);
        };
        self.sink.set_busy(true);

        let result = self.run(&request, &token).await;

        self.sink.set_busy(false);
        self.guard.finish(&token);

        match result {
            Ok(outcome) => {
                info!(
                    storage_id = %outcome.storage_id,
                    url = %outcome.audio_url,
                    "podcast generated"
                );
                self.notifier
                    .notify(Notice::success("Podcast generated successfully"));
                Ok(outcome)
            }
            Err(e) => {
                error!(error = %e, "podcast generation failed");
                self.notifier
                    .notify(Notice::destructive("Error creating a podcast"));
                Err(e)
            }
        }
    }

    async fn run(
        &self,
        request: &GenerationRequest,
        token: &FlightToken,
    ) -> Result<GenerationOutcome, WorkflowError> {
        let audio = self
            .synthesizer
            .synthesize(request.voice, &request.prompt)
            .await?;

        let artifact = AudioArtifact::generated(audio);
        let storage_id = self.gateway.upload(&artifact).await?;
        let audio_url = self.gateway.resolve_url(&storage_id).await?;
        validate_playback_url(&audio_url)?;

        if self.guard.is_current(token) {
            self.sink.set_storage_id(storage_id.clone());
            self.sink.set_audio_url(audio_url.clone());
        } else {
            warn!(storage_id = %storage_id, "discarding stale generation result");
        }

        Ok(GenerationOutcome {
            storage_id,
            audio_url,
        })
    }
}
