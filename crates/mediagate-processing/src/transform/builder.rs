//! Transformation builder - derives the provider transformation for an upload
//!
//! Building is a pure mapping from the request and the configured defaults: the same
//! inputs always produce the same `TransformationSpec`, so a repeated upload sends
//! byte-identical parameters.

use mediagate_core::constants::VIDEO_OUTPUT_FORMAT;
use mediagate_core::models::{FadeEffect, TimingWindow, TransformationSpec, UploadRequest};
use mediagate_core::{AssetKind, TransformationDefaults};

use super::overlay::OverlayBuilder;

pub struct TransformationBuilder;

impl TransformationBuilder {
    /// Build the transformation for `request`.
    ///
    /// Returns `None` for raw documents and for requests marked untransformed, which are
    /// stored as received.
    pub fn build(
        request: &UploadRequest,
        defaults: &TransformationDefaults,
    ) -> Option<TransformationSpec> {
        if request.untransformed {
            return None;
        }

        match request.asset_kind {
            AssetKind::Image => Some(Self::image(request, defaults)),
            AssetKind::Video => Some(Self::video(request, defaults)),
            AssetKind::RawDocument => None,
        }
    }

    fn image(request: &UploadRequest, defaults: &TransformationDefaults) -> TransformationSpec {
        let width = positive_or(request.target_width, defaults.image_width);
        let height = positive_or(request.target_height, defaults.image_height);

        tracing::debug!(
            width,
            height,
            crop = defaults.crop_mode.as_str(),
            "Building image transformation"
        );

        TransformationSpec::sized(width, height, defaults.crop_mode).with_overlay(
            OverlayBuilder::build(
                request.effective_overlay(),
                width,
                &defaults.overlay_font_family,
            ),
        )
    }

    fn video(request: &UploadRequest, defaults: &TransformationDefaults) -> TransformationSpec {
        let width = positive_or(request.target_width, defaults.video_width);
        let height = positive_or(request.target_height, defaults.video_height);
        let window = TimingWindow {
            start_offset_seconds: request
                .start_offset_seconds
                .unwrap_or(defaults.video_start_offset_secs),
            duration_seconds: positive_or(request.duration_seconds, defaults.video_duration_secs),
        };

        tracing::debug!(
            width,
            height,
            start_offset = window.start_offset_seconds,
            duration = window.duration_seconds,
            "Building video transformation"
        );

        TransformationSpec::sized(width, height, defaults.crop_mode)
            .with_timing(window, FadeEffect::symmetric(defaults.video_fade_ms))
            .with_overlay(OverlayBuilder::build(
                request.effective_overlay(),
                width,
                &defaults.overlay_font_family,
            ))
            .with_target_format(VIDEO_OUTPUT_FORMAT)
    }
}

/// Use `value` when it is a positive number, otherwise `default`.
fn positive_or(value: Option<u32>, default: u32) -> u32 {
    value.filter(|v| *v > 0).unwrap_or(default)
}
