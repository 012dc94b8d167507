//! Upload and deletion orchestration
//!
//! `MediaUploader` is the single entry point for callers. For every upload it builds the
//! transformation and the storage identifier, submits one request to the provider and
//! normalizes the answer. Provider rejections and unusable names come back as
//! `Ok(None)` / `Ok(false)`; only transport and stream failures are errors.

use std::sync::Arc;
use std::time::Instant;

use mediagate_core::models::{
    DeletionRequest, ImageUpload, RawUpload, UploadOutcome, UploadRequest, VideoUpload,
};
use mediagate_core::{MediaResult, ResourceKind, UploaderConfig};
use mediagate_processing::{strip_extension, StorageNaming, TransformationBuilder};
use tokio::io::AsyncRead;

use crate::normalizer::{normalize_destroy, normalize_upload};
use crate::traits::{MediaClient, ProviderUploadRequest};

/// Upload orchestrator shared by all asset kinds
///
/// Cheap to clone; clones share the same provider client.
#[derive(Clone)]
pub struct MediaUploader {
    client: Arc<dyn MediaClient>,
    config: UploaderConfig,
}

impl MediaUploader {
    pub fn new(client: Arc<dyn MediaClient>, config: UploaderConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &UploaderConfig {
        &self.config
    }

    /// Upload an image, resized and optionally watermarked with overlay text.
    pub async fn upload_image(
        &self,
        options: ImageUpload,
        stream: &mut (dyn AsyncRead + Send + Unpin),
    ) -> MediaResult<Option<UploadOutcome>> {
        self.upload(options.into(), stream).await
    }

    /// Upload a video, trimmed to a window, faded and converted to mp4.
    pub async fn upload_video(
        &self,
        options: VideoUpload,
        stream: &mut (dyn AsyncRead + Send + Unpin),
    ) -> MediaResult<Option<UploadOutcome>> {
        self.upload(options.into(), stream).await
    }

    /// Upload a document as-is.
    pub async fn upload_raw_file(
        &self,
        options: RawUpload,
        stream: &mut (dyn AsyncRead + Send + Unpin),
    ) -> MediaResult<Option<UploadOutcome>> {
        self.upload(options.into(), stream).await
    }

    /// Upload any asset kind.
    ///
    /// Makes exactly one provider call, unless the logical name has no usable stem; that
    /// returns `None` without contacting the provider.
    pub async fn upload(
        &self,
        request: UploadRequest,
        stream: &mut (dyn AsyncRead + Send + Unpin),
    ) -> MediaResult<Option<UploadOutcome>> {
        if strip_extension(&request.logical_name).trim().is_empty() {
            tracing::debug!(
                asset_kind = %request.asset_kind,
                logical_name = %request.logical_name,
                "Skipping upload with empty public id"
            );
            return Ok(None);
        }

        let transformation =
            TransformationBuilder::build(&request, &self.config.transformation);
        let storage = StorageNaming::identify(
            &request.logical_name,
            request.asset_kind,
            self.config.naming,
        );
        let resource_kind = request.asset_kind.resource_kind();

        tracing::debug!(
            provider = self.client.provider_name(),
            asset_kind = %request.asset_kind,
            public_id = %storage.qualified_id(),
            has_transformation = transformation.is_some(),
            "Submitting upload"
        );

        let start = Instant::now();
        let response = self
            .client
            .upload(ProviderUploadRequest {
                stream,
                original_name: &request.original_name,
                resource_kind,
                storage,
                transformation,
            })
            .await?;

        let status = response.as_ref().map(|r| r.status_code.as_u16());
        let outcome = normalize_upload(response);
        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

        match &outcome {
            Some(outcome) => tracing::info!(
                asset_kind = %request.asset_kind,
                public_id = %outcome.public_id,
                duration_ms,
                "Upload successful"
            ),
            None => tracing::warn!(
                asset_kind = %request.asset_kind,
                logical_name = %request.logical_name,
                status = ?status,
                duration_ms,
                "Upload rejected by provider"
            ),
        }

        Ok(outcome)
    }

    /// Delete an asset. A blank id returns `false` without contacting the provider.
    pub async fn delete_asset(&self, id: &str, kind: ResourceKind) -> MediaResult<bool> {
        if id.trim().is_empty() {
            tracing::debug!("Skipping deletion of asset with empty id");
            return Ok(false);
        }

        let response = self.client.destroy(DeletionRequest::new(id, kind)).await?;
        let deleted = normalize_destroy(response);

        if deleted {
            tracing::info!(public_id = %id, resource_kind = %kind, "Asset deleted");
        } else {
            tracing::warn!(public_id = %id, resource_kind = %kind, "Asset deletion failed");
        }

        Ok(deleted)
    }
}
