//! Upload request and outcome models

use serde::{Deserialize, Serialize};

use crate::asset_types::AssetKind;

/// Normalized description of one upload, independent of the asset kind
///
/// The byte stream travels separately so the caller keeps ownership of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRequest {
    pub asset_kind: AssetKind,
    /// Desired name; its stem becomes the provider public id
    pub logical_name: String,
    /// Name of the file as it was uploaded by the end user
    pub original_name: String,
    pub target_width: Option<u32>,
    pub target_height: Option<u32>,
    pub overlay_text: Option<String>,
    pub start_offset_seconds: Option<u32>,
    pub duration_seconds: Option<u32>,
    /// Upload the bytes as-is, skipping sizing, timing and format conversion
    #[serde(default)]
    pub untransformed: bool,
}

impl UploadRequest {
    pub fn new(
        asset_kind: AssetKind,
        logical_name: impl Into<String>,
        original_name: impl Into<String>,
    ) -> Self {
        Self {
            asset_kind,
            logical_name: logical_name.into(),
            original_name: original_name.into(),
            target_width: None,
            target_height: None,
            overlay_text: None,
            start_offset_seconds: None,
            duration_seconds: None,
            untransformed: false,
        }
    }

    /// Overlay text, if it contains anything other than whitespace
    pub fn effective_overlay(&self) -> Option<&str> {
        self.overlay_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// Successful upload: the provider id and the URL the asset is served from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOutcome {
    pub public_id: String,
    pub url: String,
}

/// Options for an image upload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageUpload {
    pub name: String,
    pub original_name: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub overlay_text: Option<String>,
    pub untransformed: bool,
}

impl ImageUpload {
    pub fn new(name: impl Into<String>, original_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            original_name: original_name.into(),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_overlay(mut self, text: impl Into<String>) -> Self {
        self.overlay_text = Some(text.into());
        self
    }

    /// Upload the file exactly as received.
    pub fn untransformed(mut self) -> Self {
        self.untransformed = true;
        self
    }
}

impl From<ImageUpload> for UploadRequest {
    fn from(upload: ImageUpload) -> Self {
        UploadRequest {
            target_width: upload.width,
            target_height: upload.height,
            overlay_text: upload.overlay_text,
            untransformed: upload.untransformed,
            ..UploadRequest::new(AssetKind::Image, upload.name, upload.original_name)
        }
    }
}

/// Options for a video upload
///
/// Videos are submitted under their logical name; there is no separate original name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoUpload {
    pub name: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub start_offset_seconds: Option<u32>,
    pub duration_seconds: Option<u32>,
    pub overlay_text: Option<String>,
    pub untransformed: bool,
}

impl VideoUpload {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_window(mut self, start_offset_seconds: u32, duration_seconds: u32) -> Self {
        self.start_offset_seconds = Some(start_offset_seconds);
        self.duration_seconds = Some(duration_seconds);
        self
    }

    pub fn with_overlay(mut self, text: impl Into<String>) -> Self {
        self.overlay_text = Some(text.into());
        self
    }

    /// Upload the video without trimming, fading or conversion.
    pub fn untransformed(mut self) -> Self {
        self.untransformed = true;
        self
    }
}

impl From<VideoUpload> for UploadRequest {
    fn from(upload: VideoUpload) -> Self {
        UploadRequest {
            target_width: upload.width,
            target_height: upload.height,
            overlay_text: upload.overlay_text,
            start_offset_seconds: upload.start_offset_seconds,
            duration_seconds: upload.duration_seconds,
            untransformed: upload.untransformed,
            ..UploadRequest::new(AssetKind::Video, upload.name.clone(), upload.name)
        }
    }
}

/// Options for a raw document upload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawUpload {
    pub name: String,
    pub original_name: String,
}

impl RawUpload {
    pub fn new(name: impl Into<String>, original_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            original_name: original_name.into(),
        }
    }
}

impl From<RawUpload> for UploadRequest {
    fn from(upload: RawUpload) -> Self {
        UploadRequest::new(AssetKind::RawDocument, upload.name, upload.original_name)
    }
}
