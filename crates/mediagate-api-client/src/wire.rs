//! Provider wire format for upload parameters
//!
//! Transformations are serialized as comma-separated `key_value` components chained
//! with `/`. Keys inside a component are sorted, so a given spec always yields the same
//! string.

use mediagate_core::models::{OverlaySpec, StorageIdentifier, TransformationSpec};

/// Serialize a transformation into the provider's chained component syntax.
pub fn transformation_string(spec: &TransformationSpec) -> String {
    let mut base = vec![
        format!("c_{}", spec.crop_mode().as_str()),
        format!("g_{}", spec.gravity().as_str()),
        format!("h_{}", spec.height()),
        format!("q_{}", spec.quality().as_str()),
        format!("w_{}", spec.width()),
    ];
    if let Some(window) = spec.timing_window() {
        base.push(format!("du_{}", window.duration_seconds));
        base.push(format!("so_{}", window.start_offset_seconds));
    }
    base.sort();

    let mut components = vec![base.join(",")];

    if let Some(fade) = spec.fade() {
        components.push(format!("e_fade:{}", fade.fade_in_ms));
        components.push(format!("e_fade:-{}", fade.fade_out_ms));
    }
    if let Some(overlay) = spec.overlay() {
        components.push(overlay_component(overlay));
    }
    if let Some(format) = spec.target_format() {
        components.push(format!("f_{}", format));
    }

    components.join("/")
}

fn overlay_component(overlay: &OverlaySpec) -> String {
    format!(
        "l_text:{}_{}:{},g_{},o_{},x_{},y_{}",
        escape_layer_part(&overlay.font_family),
        overlay.font_size,
        escape_layer_part(&overlay.text),
        overlay.gravity.as_str(),
        overlay.opacity,
        overlay.offset_x,
        overlay.offset_y
    )
}

/// Percent-encode text so separators (`,` `/` `:`) cannot break the component syntax.
fn escape_layer_part(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// Signed upload parameters derived from the storage identifier and transformation.
///
/// Only parameters with a value are emitted; `file`, `api_key` and the signature itself
/// are added by the client.
pub fn upload_params(
    storage: &StorageIdentifier,
    transformation: Option<&TransformationSpec>,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("public_id", storage.public_id.clone()),
        ("use_filename", storage.use_filename.to_string()),
        ("unique_filename", storage.unique_filename.to_string()),
    ];
    if let Some(folder) = &storage.folder {
        params.push(("folder", folder.clone()));
    }
    if let Some(overwrite) = storage.overwrite {
        params.push(("overwrite", overwrite.to_string()));
    }
    if let Some(access_mode) = &storage.access_mode {
        params.push(("access_mode", access_mode.clone()));
    }
    if let Some(spec) = transformation {
        params.push(("transformation", transformation_string(spec)));
    }
    params
}
