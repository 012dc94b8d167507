use mediagate_core::constants::{OVERLAY_OFFSET_X, OVERLAY_OFFSET_Y, OVERLAY_OPACITY};
use mediagate_core::models::{Gravity, OverlaySpec};

/// Font size for overlay text, stepped by the output width
pub fn overlay_font_size(width: u32) -> u32 {
    match width {
        0..=320 => 10,
        321..=640 => 14,
        _ => 18,
    }
}

pub struct OverlayBuilder;

impl OverlayBuilder {
    /// Build a bottom-right text overlay, or `None` when the text is blank.
    ///
    /// Placement is the same for every asset kind; only the font size depends on `width`.
    pub fn build(text: Option<&str>, width: u32, font_family: &str) -> Option<OverlaySpec> {
        let text = text.filter(|t| !t.trim().is_empty())?;

        Some(OverlaySpec {
            text: text.to_string(),
            font_family: font_family.to_string(),
            font_size: overlay_font_size(width),
            gravity: Gravity::SouthEast,
            opacity: OVERLAY_OPACITY,
            offset_x: OVERLAY_OFFSET_X,
            offset_y: OVERLAY_OFFSET_Y,
        })
    }
}
