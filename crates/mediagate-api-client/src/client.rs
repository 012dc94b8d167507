//! HTTP implementation of `MediaClient` for Cloudinary-compatible upload APIs.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use mediagate_core::constants::DEFAULT_PROVIDER_API_URL;
use mediagate_core::models::DeletionRequest;
use mediagate_core::{MediaError, MediaResult, ProviderSettings, ResourceKind};
use mediagate_storage::{
    MediaClient, ProviderDestroyResponse, ProviderUploadRequest, ProviderUploadResponse,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::io::AsyncReadExt;

use crate::signing::{sign, SIGNATURE_ALGORITHM};
use crate::wire::upload_params;

const REQUEST_TIMEOUT_SECS: u64 = 60;
const ENV_API_URL: &str = "MEDIAGATE_API_URL";

#[derive(Debug, Default, Deserialize)]
struct UploadBody {
    public_id: Option<String>,
    url: Option<String>,
    secure_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct DestroyBody {
    result: Option<String>,
}

/// Provider client speaking the signed upload/destroy REST API.
#[derive(Clone)]
pub struct CloudinaryClient {
    client: Client,
    base_url: String,
    settings: ProviderSettings,
}

impl Debug for CloudinaryClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CloudinaryClient")
            .field("base_url", &self.base_url)
            .field("settings", &self.settings)
            .finish()
    }
}

impl CloudinaryClient {
    /// Create a client. Missing credentials are a configuration error.
    pub fn new(settings: ProviderSettings, base_url: impl Into<String>) -> MediaResult<Self> {
        settings.check()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                MediaError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        tracing::info!(
            cloud_name = %settings.cloud_name,
            base_url = %base_url,
            "Media provider client initialized"
        );

        Ok(Self {
            client,
            base_url,
            settings,
        })
    }

    /// Create client from environment: MEDIAGATE_API_KEY, MEDIAGATE_API_SECRET,
    /// MEDIAGATE_CLOUD_NAME and optionally MEDIAGATE_API_URL.
    pub fn from_env() -> MediaResult<Self> {
        let settings = ProviderSettings::from_env()?;
        let base_url =
            std::env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_PROVIDER_API_URL.to_string());
        Self::new(settings, base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/v1_1/{cloud}/{resource_kind}/{action}`
    pub fn endpoint(&self, kind: ResourceKind, action: &str) -> String {
        format!(
            "{}/v1_1/{}/{}/{}",
            self.base_url,
            self.settings.cloud_name,
            kind.as_str(),
            action
        )
    }

    /// Append timestamp, api key and signature to `params`.
    fn signed(&self, mut params: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
        params.push(("timestamp", chrono::Utc::now().timestamp().to_string()));
        let signature = sign(&params, &self.settings.api_secret);
        params.push(("api_key", self.settings.api_key.clone()));
        params.push(("signature", signature));
        params.push(("signature_algorithm", SIGNATURE_ALGORITHM.to_string()));
        params
    }
}

#[async_trait]
impl MediaClient for CloudinaryClient {
    async fn upload(
        &self,
        request: ProviderUploadRequest<'_>,
    ) -> MediaResult<Option<ProviderUploadResponse>> {
        let mut data = Vec::new();
        request.stream.read_to_end(&mut data).await?;
        let size_bytes = data.len();

        let params = self.signed(upload_params(
            &request.storage,
            request.transformation.as_ref(),
        ));
        let form = params
            .into_iter()
            .fold(Form::new(), |form, (key, value)| form.text(key, value))
            .part(
                "file",
                Part::bytes(data).file_name(request.original_name.to_string()),
            );

        let url = self.endpoint(request.resource_kind, "upload");
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, size_bytes, "Upload request failed");
                MediaError::transport("Failed to send upload request", e)
            })?;

        let status_code = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| MediaError::transport("Failed to read upload response", e))?;
        let body: UploadBody = parse_body(&text, status_code, "upload");

        tracing::debug!(
            status = status_code.as_u16(),
            public_id = ?body.public_id,
            size_bytes,
            "Upload response received"
        );

        Ok(Some(ProviderUploadResponse {
            status_code,
            public_id: body.public_id,
            url: body.url,
            secure_url: body.secure_url,
        }))
    }

    async fn destroy(
        &self,
        request: DeletionRequest,
    ) -> MediaResult<Option<ProviderDestroyResponse>> {
        let params = self.signed(vec![("public_id", request.public_id.clone())]);

        let url = self.endpoint(request.resource_kind, "destroy");
        let response = self
            .client
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, "Destroy request failed");
                MediaError::transport("Failed to send destroy request", e)
            })?;

        let status_code = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| MediaError::transport("Failed to read destroy response", e))?;
        let body: DestroyBody = parse_body(&text, status_code, "destroy");

        tracing::debug!(
            status = status_code.as_u16(),
            public_id = %request.public_id,
            result = ?body.result,
            "Destroy response received"
        );

        Ok(Some(ProviderDestroyResponse {
            status_code,
            result: body.result,
        }))
    }

    fn provider_name(&self) -> &'static str {
        "cloudinary"
    }
}

/// Decode a provider JSON body. An unreadable body yields empty fields, which the
/// normalizer treats as a failed call.
fn parse_body<T>(text: &str, status_code: StatusCode, action: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match serde_json::from_str(text) {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(
                error = %e,
                status = status_code.as_u16(),
                action,
                body_len = text.len(),
                "Unparseable provider response body"
            );
            T::default()
        }
    }
}
