//! Configuration module
//!
//! Provider credentials and the upload policy (naming, crop mode, video timing). Both are
//! read from the environment (with `.env` support) and validated once, at construction
//! time; nothing here is re-read per request.

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{
    DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, DEFAULT_OVERLAY_FONT,
    DEFAULT_VIDEO_DURATION_SECS, DEFAULT_VIDEO_FADE_MS, DEFAULT_VIDEO_HEIGHT,
    DEFAULT_VIDEO_START_OFFSET_SECS, DEFAULT_VIDEO_WIDTH,
};
use crate::error::{MediaError, MediaResult};
use crate::models::CropMode;

const ENV_API_KEY: &str = "MEDIAGATE_API_KEY";
const ENV_API_SECRET: &str = "MEDIAGATE_API_SECRET";
const ENV_CLOUD_NAME: &str = "MEDIAGATE_CLOUD_NAME";
const ENV_NAMING_POLICY: &str = "MEDIAGATE_NAMING_POLICY";
const ENV_CROP_MODE: &str = "MEDIAGATE_CROP_MODE";
const ENV_VIDEO_START_OFFSET: &str = "MEDIAGATE_VIDEO_START_OFFSET_SECS";
const ENV_VIDEO_DURATION: &str = "MEDIAGATE_VIDEO_DURATION_SECS";
const ENV_VIDEO_FADE: &str = "MEDIAGATE_VIDEO_FADE_MS";
const ENV_OVERLAY_FONT: &str = "MEDIAGATE_OVERLAY_FONT";

/// Provider account credentials
///
/// Deserialize only, and the secret is redacted from `Debug`.
#[derive(Clone, Deserialize, Validate)]
pub struct ProviderSettings {
    #[validate(length(min = 1, message = "api_key cannot be empty"))]
    pub api_key: String,
    #[validate(length(min = 1, message = "api_secret cannot be empty"))]
    pub api_secret: String,
    #[validate(length(min = 1, message = "cloud_name cannot be empty"))]
    pub cloud_name: String,
}

impl Debug for ProviderSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ProviderSettings")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("cloud_name", &self.cloud_name)
            .finish()
    }
}

impl ProviderSettings {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        cloud_name: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            cloud_name: cloud_name.into(),
        }
    }

    /// Load credentials from MEDIAGATE_API_KEY, MEDIAGATE_API_SECRET and MEDIAGATE_CLOUD_NAME.
    pub fn from_env() -> MediaResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Missing or empty values are fatal.
    pub fn from_lookup<F>(lookup: F) -> MediaResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| MediaError::Configuration(format!("{} is not set", key)))
        };

        let settings = Self {
            api_key: required(ENV_API_KEY)?,
            api_secret: required(ENV_API_SECRET)?,
            cloud_name: required(ENV_CLOUD_NAME)?,
        };
        settings.check()?;
        Ok(settings)
    }

    /// Validate that every credential is present.
    pub fn check(&self) -> MediaResult<()> {
        self.validate()?;
        Ok(())
    }
}

/// How public ids are laid out on the provider
///
/// Exactly one policy is active for a given uploader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingPolicy {
    /// `public_id = <stem>` stored under a per-kind folder
    #[default]
    Folder,
    /// `public_id = <kind-folder>/<stem>` with no folder field
    PathEmbedded,
}

impl FromStr for NamingPolicy {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "folder" => Ok(NamingPolicy::Folder),
            "path" | "path_embedded" | "path-embedded" => Ok(NamingPolicy::PathEmbedded),
            _ => Err(MediaError::Configuration(format!(
                "Invalid naming policy: {}",
                s
            ))),
        }
    }
}

impl FromStr for CropMode {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "limit" => Ok(CropMode::Limit),
            "fill" => Ok(CropMode::Fill),
            _ => Err(MediaError::Configuration(format!("Invalid crop mode: {}", s))),
        }
    }
}

/// Defaults applied by the transformation builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformationDefaults {
    pub crop_mode: CropMode,
    pub image_width: u32,
    pub image_height: u32,
    pub video_width: u32,
    pub video_height: u32,
    pub video_start_offset_secs: u32,
    pub video_duration_secs: u32,
    /// Length of both the fade-in and the fade-out
    pub video_fade_ms: u32,
    pub overlay_font_family: String,
}

impl Default for TransformationDefaults {
    fn default() -> Self {
        Self {
            crop_mode: CropMode::Limit,
            image_width: DEFAULT_IMAGE_WIDTH,
            image_height: DEFAULT_IMAGE_HEIGHT,
            video_width: DEFAULT_VIDEO_WIDTH,
            video_height: DEFAULT_VIDEO_HEIGHT,
            video_start_offset_secs: DEFAULT_VIDEO_START_OFFSET_SECS,
            video_duration_secs: DEFAULT_VIDEO_DURATION_SECS,
            video_fade_ms: DEFAULT_VIDEO_FADE_MS,
            overlay_font_family: DEFAULT_OVERLAY_FONT.to_string(),
        }
    }
}

/// Upload policy selected once per deployment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploaderConfig {
    pub naming: NamingPolicy,
    pub transformation: TransformationDefaults,
}

impl UploaderConfig {
    pub fn from_env() -> MediaResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the policy from a key lookup. Unset keys fall back to defaults; values that
    /// do not parse are a configuration error.
    pub fn from_lookup<F>(lookup: F) -> MediaResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = TransformationDefaults::default();

        let naming = parse_or(&lookup, ENV_NAMING_POLICY, NamingPolicy::Folder)?;
        let crop_mode = parse_or(&lookup, ENV_CROP_MODE, defaults.crop_mode)?;
        let video_start_offset_secs = parse_number_or(
            &lookup,
            ENV_VIDEO_START_OFFSET,
            defaults.video_start_offset_secs,
        )?;
        let video_duration_secs =
            parse_number_or(&lookup, ENV_VIDEO_DURATION, defaults.video_duration_secs)?;
        let video_fade_ms = parse_number_or(&lookup, ENV_VIDEO_FADE, defaults.video_fade_ms)?;
        let overlay_font_family = lookup(ENV_OVERLAY_FONT)
            .map(|font| font.trim().to_string())
            .filter(|font| !font.is_empty())
            .unwrap_or(defaults.overlay_font_family.clone());

        if video_duration_secs == 0 {
            return Err(MediaError::Configuration(format!(
                "{} must be greater than zero",
                ENV_VIDEO_DURATION
            )));
        }

        tracing::debug!(
            naming = ?naming,
            crop_mode = crop_mode.as_str(),
            video_start_offset_secs,
            video_duration_secs,
            video_fade_ms,
            overlay_font = %overlay_font_family,
            "Uploader configuration loaded"
        );

        Ok(Self {
            naming,
            transformation: TransformationDefaults {
                crop_mode,
                video_start_offset_secs,
                video_duration_secs,
                video_fade_ms,
                overlay_font_family,
                ..defaults
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> MediaResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr<Err = MediaError>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value.parse(),
        _ => Ok(default),
    }
}

fn parse_number_or<F>(lookup: &F, key: &str, default: u32) -> MediaResult<u32>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value.trim().parse::<u32>().map_err(|e| {
            MediaError::Configuration(format!("{} must be a non-negative integer: {}", key, e))
        }),
        _ => Ok(default),
    }
}
