//! Transformation module
//!
//! - `builder`: the per-kind transformation descriptor
//! - `overlay`: text overlay composition

pub mod builder;
pub mod overlay;

pub use builder::TransformationBuilder;
pub use overlay::{overlay_font_size, OverlayBuilder};
