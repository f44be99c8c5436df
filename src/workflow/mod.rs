//! The generate and upload orchestrations.
//!
//! Both workflows call external collaborators in sequence and publish
//! results into panel state through the `PlaybackSink` interface. They share
//! one failure contract: remote failures are caught at the workflow
//! boundary, logged, surfaced as a destructive notice, and publish nothing.

mod generate;
mod guard;
mod upload;

pub use generate::{GenerationOutcome, GenerationWorkflow};
pub use guard::{FlightGuard, FlightToken};
pub use upload::{PickedFile, UploadOutcome, UploadWorkflow};

use thiserror::Error;

use crate::core::storage::StorageError;
use crate::core::tts::TtsError;
use crate::utils::PlaybackUrlError;

/// Errors raised by the two workflows.
///
/// `EmptyPrompt`, `Busy` and `UnsupportedMediaType` are validation errors:
/// no remote call has been made. The remaining variants are remote failures.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("voice prompt must not be empty")]
    EmptyPrompt,

    #[error("a generation request is already in flight")]
    Busy,

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error(transparent)]
    Synthesis(#[from] TtsError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    InvalidPlaybackUrl(#[from] PlaybackUrlError),
}
