//! Transformation descriptor sent to the provider alongside the asset bytes

use serde::{Deserialize, Serialize};

/// How the provider fits the asset into the requested box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropMode {
    /// Scale down to fit within the box, preserving aspect ratio; never upscales
    Limit,
    /// Fill the box exactly, cropping what does not fit
    Fill,
}

impl CropMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropMode::Limit => "limit",
            CropMode::Fill => "fill",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gravity {
    Auto,
    SouthEast,
}

impl Gravity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gravity::Auto => "auto",
            Gravity::SouthEast => "south_east",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Auto,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Auto => "auto",
        }
    }
}

/// Text overlay rendered onto an image or video by the provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverlaySpec {
    pub text: String,
    pub font_family: String,
    pub font_size: u32,
    pub gravity: Gravity,
    /// Percentage, 0-100
    pub opacity: u8,
    pub offset_x: u32,
    pub offset_y: u32,
}

/// Trim window applied to video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimingWindow {
    pub start_offset_seconds: u32,
    pub duration_seconds: u32,
}

/// Symmetric fade in / fade out applied to video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FadeEffect {
    pub fade_in_ms: u32,
    pub fade_out_ms: u32,
}

impl FadeEffect {
    pub fn symmetric(duration_ms: u32) -> Self {
        Self {
            fade_in_ms: duration_ms,
            fade_out_ms: duration_ms,
        }
    }
}

/// Immutable transformation descriptor
///
/// Built once per upload by the transformation builder. Fields are only readable;
/// a spec is consumed by exactly one provider request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransformationSpec {
    width: u32,
    height: u32,
    crop_mode: CropMode,
    gravity: Gravity,
    quality: Quality,
    overlay: Option<OverlaySpec>,
    timing_window: Option<TimingWindow>,
    fade: Option<FadeEffect>,
    target_format: Option<String>,
}

impl TransformationSpec {
    /// Sized transformation with automatic gravity and quality.
    pub fn sized(width: u32, height: u32, crop_mode: CropMode) -> Self {
        Self {
            width,
            height,
            crop_mode,
            gravity: Gravity::Auto,
            quality: Quality::Auto,
            overlay: None,
            timing_window: None,
            fade: None,
            target_format: None,
        }
    }

    pub fn with_overlay(mut self, overlay: Option<OverlaySpec>) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn with_timing(mut self, window: TimingWindow, fade: FadeEffect) -> Self {
        self.timing_window = Some(window);
        self.fade = Some(fade);
        self
    }

    pub fn with_target_format(mut self, format: impl Into<String>) -> Self {
        self.target_format = Some(format.into());
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn crop_mode(&self) -> CropMode {
        self.crop_mode
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn overlay(&self) -> Option<&OverlaySpec> {
        self.overlay.as_ref()
    }

    pub fn timing_window(&self) -> Option<TimingWindow> {
        self.timing_window
    }

    pub fn fade(&self) -> Option<FadeEffect> {
        self.fade
    }

    pub fn target_format(&self) -> Option<&str> {
        self.target_format.as_deref()
    }
}
