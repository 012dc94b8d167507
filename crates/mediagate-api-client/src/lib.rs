//! Mediagate API client
//!
//! `CloudinaryClient` implements `mediagate_storage::MediaClient` over the provider's
//! signed REST API. Wire encoding of transformations and request signing live in
//! their own modules so they can be tested without a server.

pub mod client;
pub mod signing;
pub mod wire;

pub use client::CloudinaryClient;
pub use wire::{transformation_string, upload_params};
