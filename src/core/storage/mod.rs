//! Upload gateway and playback URL resolution.
//!
//! The gateway is two-phase: obtain a short-lived upload URL, then submit
//! the binary to it and read the storage identifier out of the response.
//! A second endpoint maps a storage identifier back to a fetchable playback
//! URL, with `null` as the absent-value sentinel.

mod http;

pub use http::HttpObjectGateway;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::artifact::AudioArtifact;

pub type StorageResult<T> = Result<T, StorageError>;

/// Opaque identifier returned by the upload gateway.
///
/// Owned by panel state once assigned; used exactly once per
/// generation/upload cycle to resolve a playback URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageReference(pub String);

impl StorageReference {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StorageReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors from the upload gateway or URL resolver.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upload gateway returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("no playback URL available for storage id {0}")]
    UrlUnavailable(StorageReference),
}

/// Managed file storage: binary upload plus playback URL resolution.
#[async_trait]
pub trait ObjectGateway: Send + Sync {
    /// Submit an artifact and return its storage identifier.
    async fn upload(&self, artifact: &AudioArtifact) -> StorageResult<StorageReference>;

    /// Resolve a storage identifier to a playback URL.
    async fn resolve_url(&self, reference: &StorageReference) -> StorageResult<String>;
}
