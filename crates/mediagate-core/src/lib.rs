//! Mediagate Core Library
//!
//! This crate provides the domain models, error types and configuration shared by every
//! mediagate component: the transformation builder, the upload orchestrator and the
//! provider HTTP client.

pub mod asset_types;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use asset_types::{AssetKind, ResourceKind};
pub use config::{NamingPolicy, ProviderSettings, TransformationDefaults, UploaderConfig};
pub use error::{ErrorMetadata, LogLevel, MediaError, MediaResult};
