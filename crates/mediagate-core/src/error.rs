//! Error types module
//!
//! `MediaError` covers the failures that are surfaced to callers as errors: bad
//! configuration, invalid caller input, transport failures and stream I/O. Provider-side
//! rejections are not errors; they are reported as `None` / `false` outcomes by the
//! uploader.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata describing how an error should be reported
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "CONFIGURATION_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether the operation may succeed if issued again
    fn is_recoverable(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for mediagate operations
pub type MediaResult<T> = Result<T, MediaError>;

impl MediaError {
    /// Wrap a transport-level failure with a short description of the failed step.
    pub fn transport(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        MediaError::Transport {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Error message followed by its source chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl From<validator::ValidationErrors> for MediaError {
    fn from(err: validator::ValidationErrors) -> Self {
        MediaError::Configuration(format!("Validation error: {}", err))
    }
}

impl ErrorMetadata for MediaError {
    fn error_code(&self) -> &'static str {
        match self {
            MediaError::Configuration(_) => "CONFIGURATION_ERROR",
            MediaError::InvalidInput(_) => "INVALID_INPUT",
            MediaError::Transport { .. } => "TRANSPORT_ERROR",
            MediaError::Io(_) => "IO_ERROR",
        }
    }

    fn is_recoverable(&self) -> bool {
        matches!(self, MediaError::Transport { .. })
    }

    fn log_level(&self) -> LogLevel {
        match self {
            MediaError::InvalidInput(_) => LogLevel::Debug,
            MediaError::Transport { .. } => LogLevel::Warn,
            MediaError::Configuration(_) | MediaError::Io(_) => LogLevel::Error,
        }
    }
}
