//! Upload parameter derivation
//!
//! Pure functions that turn an upload request into the descriptors a provider needs:
//! - Transformation building (sizing, crop, overlay, video timing)
//! - Naming (public id, folder and collision flags)

pub mod naming;
pub mod transform;

pub use naming::{strip_extension, StorageNaming};
pub use transform::{overlay_font_size, OverlayBuilder, TransformationBuilder};
