//! Test helpers: a recording `MediaClient` with canned responses.

#![allow(dead_code)]

use async_trait::async_trait;
use http::StatusCode;
use mediagate_core::models::{DeletionRequest, StorageIdentifier, TransformationSpec};
use mediagate_core::{MediaError, MediaResult, ResourceKind, UploaderConfig};
use mediagate_storage::{
    MediaClient, MediaUploader, ProviderDestroyResponse, ProviderUploadRequest,
    ProviderUploadResponse,
};
use std::sync::{Arc, Mutex};
use tokio::io::AsyncReadExt;

/// What the mock saw for one upload call
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub original_name: String,
    pub resource_kind: ResourceKind,
    pub storage: StorageIdentifier,
    pub transformation: Option<TransformationSpec>,
    pub body: Vec<u8>,
}

/// Mock provider client
///
/// Returns the configured responses and records every call it receives.
pub struct MockMediaClient {
    upload_response: Option<ProviderUploadResponse>,
    destroy_response: Option<ProviderDestroyResponse>,
    fail_transport: bool,
    uploads: Mutex<Vec<RecordedUpload>>,
    destroys: Mutex<Vec<DeletionRequest>>,
}

impl MockMediaClient {
    pub fn new() -> Self {
        Self {
            upload_response: None,
            destroy_response: None,
            fail_transport: false,
            uploads: Mutex::new(Vec::new()),
            destroys: Mutex::new(Vec::new()),
        }
    }

    pub fn with_upload_response(mut self, response: ProviderUploadResponse) -> Self {
        self.upload_response = Some(response);
        self
    }

    pub fn with_destroy_response(mut self, status_code: StatusCode, result: &str) -> Self {
        self.destroy_response = Some(ProviderDestroyResponse {
            status_code,
            result: Some(result.to_string()),
        });
        self
    }

    pub fn failing_transport(mut self) -> Self {
        self.fail_transport = true;
        self
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn destroys(&self) -> Vec<DeletionRequest> {
        self.destroys.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.uploads.lock().unwrap().len() + self.destroys.lock().unwrap().len()
    }
}

#[async_trait]
impl MediaClient for MockMediaClient {
    async fn upload(
        &self,
        request: ProviderUploadRequest<'_>,
    ) -> MediaResult<Option<ProviderUploadResponse>> {
        let mut body = Vec::new();
        request.stream.read_to_end(&mut body).await?;

        self.uploads.lock().unwrap().push(RecordedUpload {
            original_name: request.original_name.to_string(),
            resource_kind: request.resource_kind,
            storage: request.storage,
            transformation: request.transformation,
            body,
        });

        if self.fail_transport {
            return Err(MediaError::transport(
                "Failed to send request",
                anyhow::anyhow!("connection refused"),
            ));
        }
        Ok(self.upload_response.clone())
    }

    async fn destroy(
        &self,
        request: DeletionRequest,
    ) -> MediaResult<Option<ProviderDestroyResponse>> {
        self.destroys.lock().unwrap().push(request);

        if self.fail_transport {
            return Err(MediaError::transport(
                "Failed to send request",
                anyhow::anyhow!("connection refused"),
            ));
        }
        Ok(self.destroy_response.clone())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// 200 response carrying both URL variants
pub fn ok_upload(public_id: &str, secure_url: &str) -> ProviderUploadResponse {
    ProviderUploadResponse {
        status_code: StatusCode::OK,
        public_id: Some(public_id.to_string()),
        url: Some(secure_url.replacen("https://", "http://", 1)),
        secure_url: Some(secure_url.to_string()),
    }
}

pub fn failed_upload(status_code: StatusCode) -> ProviderUploadResponse {
    ProviderUploadResponse {
        status_code,
        public_id: None,
        url: None,
        secure_url: None,
    }
}

pub fn uploader_with(client: Arc<MockMediaClient>, config: UploaderConfig) -> MediaUploader {
    MediaUploader::new(client, config)
}
