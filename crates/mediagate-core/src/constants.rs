//! Default values used when a caller or the environment leaves a setting unspecified.

pub const DEFAULT_IMAGE_WIDTH: u32 = 320;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 320;

pub const DEFAULT_VIDEO_WIDTH: u32 = 720;
pub const DEFAULT_VIDEO_HEIGHT: u32 = 480;
pub const DEFAULT_VIDEO_START_OFFSET_SECS: u32 = 2;
pub const DEFAULT_VIDEO_DURATION_SECS: u32 = 120;
pub const DEFAULT_VIDEO_FADE_MS: u32 = 1000;
pub const VIDEO_OUTPUT_FORMAT: &str = "mp4";

pub const DEFAULT_OVERLAY_FONT: &str = "Arial";
pub const OVERLAY_OPACITY: u8 = 60;
pub const OVERLAY_OFFSET_X: u32 = 10;
pub const OVERLAY_OFFSET_Y: u32 = 10;

/// Access mode applied to raw documents
pub const RAW_ACCESS_MODE: &str = "public";

pub const DEFAULT_PROVIDER_API_URL: &str = "https://api.cloudinary.com";
