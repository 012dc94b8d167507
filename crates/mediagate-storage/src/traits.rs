//! Media provider abstraction
//!
//! This module defines the `MediaClient` trait that every provider client implements,
//! together with the request and response shapes exchanged with it.

use async_trait::async_trait;
use http::StatusCode;
use mediagate_core::models::{DeletionRequest, StorageIdentifier, TransformationSpec};
use mediagate_core::{MediaResult, ResourceKind};
use tokio::io::AsyncRead;

/// Everything the provider needs for one upload
///
/// The stream is borrowed: the caller keeps ownership and the read cursor belongs to
/// this request until the upload call returns.
pub struct ProviderUploadRequest<'a> {
    pub stream: &'a mut (dyn AsyncRead + Send + Unpin),
    pub original_name: &'a str,
    pub resource_kind: ResourceKind,
    pub storage: StorageIdentifier,
    /// `None` uploads the asset untransformed
    pub transformation: Option<TransformationSpec>,
}

/// Raw provider answer to an upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderUploadResponse {
    pub status_code: StatusCode,
    pub public_id: Option<String>,
    pub url: Option<String>,
    pub secure_url: Option<String>,
}

/// Raw provider answer to a deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDestroyResponse {
    pub status_code: StatusCode,
    pub result: Option<String>,
}

/// Media provider client
///
/// Implementations own authentication and transport. They must be safe to share between
/// concurrent uploads. `Ok(None)` means the provider produced no response record;
/// `Err` is reserved for transport failures, which the uploader propagates untouched.
#[async_trait]
pub trait MediaClient: Send + Sync {
    /// Submit one asset with its storage identifier and transformation
    async fn upload(
        &self,
        request: ProviderUploadRequest<'_>,
    ) -> MediaResult<Option<ProviderUploadResponse>>;

    /// Delete one asset by public id
    async fn destroy(
        &self,
        request: DeletionRequest,
    ) -> MediaResult<Option<ProviderDestroyResponse>>;

    /// Short provider name used in logs
    fn provider_name(&self) -> &'static str;
}
