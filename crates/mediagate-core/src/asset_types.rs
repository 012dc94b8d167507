use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::MediaError;

/// Category of an uploaded asset
///
/// Each kind has its own default transformation, storage folder and collision policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Image,
    Video,
    RawDocument,
}

impl AssetKind {
    /// Folder the provider stores this kind under
    pub fn folder(&self) -> &'static str {
        match self {
            AssetKind::Image => "images",
            AssetKind::Video => "videos",
            AssetKind::RawDocument => "documents",
        }
    }

    /// Provider resource type this kind is uploaded as
    pub fn resource_kind(&self) -> ResourceKind {
        match self {
            AssetKind::Image => ResourceKind::Image,
            AssetKind::Video => ResourceKind::Video,
            AssetKind::RawDocument => ResourceKind::Raw,
        }
    }
}

impl Display for AssetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AssetKind::Image => write!(f, "image"),
            AssetKind::Video => write!(f, "video"),
            AssetKind::RawDocument => write!(f, "raw_document"),
        }
    }
}

/// Provider resource type, used in upload/destroy endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Image,
    Video,
    Raw,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Image => "image",
            ResourceKind::Video => "video",
            ResourceKind::Raw => "raw",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "image" => Ok(ResourceKind::Image),
            "video" => Ok(ResourceKind::Video),
            "raw" => Ok(ResourceKind::Raw),
            _ => Err(MediaError::InvalidInput(format!(
                "Invalid resource kind: {}",
                s
            ))),
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
