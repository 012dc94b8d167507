use std::path::Path;

use mediagate_core::models::UploadOutcome;
use serde::Serialize;

/// JSON printed for every command.
#[derive(Debug, Serialize)]
pub struct CommandReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl CommandReport {
    pub fn from_upload(outcome: Option<UploadOutcome>) -> Self {
        match outcome {
            Some(outcome) => Self {
                success: true,
                public_id: Some(outcome.public_id),
                url: Some(outcome.url),
            },
            None => Self {
                success: false,
                public_id: None,
                url: None,
            },
        }
    }

    pub fn from_delete(public_id: &str, deleted: bool) -> Self {
        Self {
            success: deleted,
            public_id: Some(public_id.to_string()),
            url: None,
        }
    }
}

/// Final path component of `path`, used as the default logical and original name.
pub fn file_name_of(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
