//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::core::storage::{HttpObjectGateway, ObjectGateway};
use crate::core::tts::{OpenAiSpeech, SpeechSynthesizer};
use crate::panel::{Notifier, Panel, TracingNotifier};
use crate::workflow::{FlightGuard, GenerationWorkflow, UploadWorkflow};

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    pub panel: Arc<Panel>,
    pub generation: GenerationWorkflow,
    pub upload: UploadWorkflow,
}

impl AppState {
    /// Build state from configuration with the real HTTP collaborators.
    pub fn from_config(config: ServerConfig) -> anyhow::Result<Arc<Self>> {
        let timeout = Duration::from_secs(config.request_timeout_secs);

        let synthesizer: Arc<dyn SpeechSynthesizer> = Arc::new(OpenAiSpeech::new(
            config.tts_endpoint.clone(),
            config.openai_api_key.clone(),
            config.tts_model,
            timeout,
        )?);
        let gateway: Arc<dyn ObjectGateway> = Arc::new(HttpObjectGateway::new(
            config.storage_url.clone(),
            config.storage_api_token.clone(),
            timeout,
        )?);
        let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);

        Ok(Self::with_components(config, synthesizer, gateway, notifier))
    }

    /// Build state from explicit collaborators. Used by tests to wire mock
    /// services behind the same wiring production uses.
    pub fn with_components(
        config: ServerConfig,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        gateway: Arc<dyn ObjectGateway>,
        notifier: Arc<dyn Notifier>,
    ) -> Arc<Self> {
        let panel = Arc::new(Panel::new());
        panel.set_voice(config.default_voice);
        let guard = Arc::new(FlightGuard::new());

        let generation = GenerationWorkflow::new(
            synthesizer,
            Arc::clone(&gateway),
            panel.clone() as _,
            Arc::clone(&notifier),
            Arc::clone(&guard),
        );
        let upload = UploadWorkflow::new(gateway, panel.clone() as _, notifier, guard);

        Arc::new(Self {
            config,
            panel,
            generation,
            upload,
        })
    }
}
