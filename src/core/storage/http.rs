//! HTTP client for the upload gateway.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{ObjectGateway, StorageError, StorageReference, StorageResult};
use crate::core::artifact::AudioArtifact;

/// Response from the upload-URL endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadUrlResponse {
    upload_url: String,
}

/// Response from the binary upload itself.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    storage_id: String,
}

/// Response from the URL resolver. `url: null` means the identifier has no
/// fetchable URL (the absent-value sentinel).
#[derive(Debug, Deserialize)]
struct ResolveResponse {
    url: Option<String>,
}

/// HTTP implementation of the two-phase upload gateway.
pub struct HttpObjectGateway {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpObjectGateway {
    pub fn new(
        base_url: impl Into<String>,
        api_token: Option<String>,
        timeout: Duration,
    ) -> StorageResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }

    fn with_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn check_status(response: reqwest::Response) -> StorageResult<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Phase one: ask the gateway for a short-lived upload URL.
    async fn obtain_upload_url(&self) -> StorageResult<String> {
        let request = self
            .with_auth(self.client.post(format!("{}/files/upload-url", self.base_url)));
        let response = Self::check_status(request.send().await?).await?;
        let parsed: UploadUrlResponse = response.json().await?;
        Ok(parsed.upload_url)
    }
}

#[async_trait]
impl ObjectGateway for HttpObjectGateway {
    async fn upload(&self, artifact: &AudioArtifact) -> StorageResult<StorageReference> {
        let upload_url = self.obtain_upload_url().await?;
        debug!(
            file = %artifact.file_name,
            bytes = artifact.bytes.len(),
            "uploading artifact"
        );

        // Phase two: submit the binary to the issued URL.
        let response = self
            .client
            .post(&upload_url)
            .header("Content-Type", &artifact.mime_type)
            .body(artifact.bytes.clone())
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let parsed: UploadResponse = response.json().await?;

        debug!(storage_id = %parsed.storage_id, "artifact uploaded");
        Ok(StorageReference(parsed.storage_id))
    }

    async fn resolve_url(&self, reference: &StorageReference) -> StorageResult<String> {
        let request = self.with_auth(self.client.get(format!(
            "{}/files/{}/url",
            self.base_url,
            reference.as_str()
        )));
        let response = Self::check_status(request.send().await?).await?;
        let parsed: ResolveResponse = response.json().await?;

        parsed
            .url
            .ok_or_else(|| StorageError::UrlUnavailable(reference.clone()))
    }
}
