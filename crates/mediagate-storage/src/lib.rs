//! Mediagate Storage Library
//!
//! This crate provides the `MediaClient` provider abstraction and the `MediaUploader`
//! orchestrator built on top of it.
//!
//! # Outcomes
//!
//! Provider-side failures never surface as errors:
//!
//! - uploads return `Ok(None)` when the provider answers with anything but a complete
//!   200 response;
//! - uploads whose logical name has no usable stem return `Ok(None)` without a call;
//! - deletions return `Ok(false)` for blank ids, non-200 answers, or a result other
//!   than `"ok"`.
//!
//! `Err` is reserved for transport and stream I/O failures raised by the client.

pub mod normalizer;
pub mod traits;
pub mod uploader;

// Re-export commonly used types
pub use normalizer::{normalize_destroy, normalize_upload};
pub use traits::{
    MediaClient, ProviderDestroyResponse, ProviderUploadRequest, ProviderUploadResponse,
};
pub use uploader::MediaUploader;
