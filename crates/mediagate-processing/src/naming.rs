//! Storage naming - maps a logical file name to a provider identifier
//!
//! The public id is always derived from the caller's logical name, never from the name
//! of the file that was actually uploaded.

use mediagate_core::constants::RAW_ACCESS_MODE;
use mediagate_core::models::StorageIdentifier;
use mediagate_core::{AssetKind, NamingPolicy};

pub struct StorageNaming;

impl StorageNaming {
    /// Build the storage identifier for `logical_name` under `policy`.
    pub fn identify(
        logical_name: &str,
        kind: AssetKind,
        policy: NamingPolicy,
    ) -> StorageIdentifier {
        let stem = strip_extension(logical_name);
        let access_mode = match kind {
            AssetKind::RawDocument => Some(RAW_ACCESS_MODE.to_string()),
            _ => None,
        };

        match policy {
            NamingPolicy::Folder => StorageIdentifier {
                folder: Some(kind.folder().to_string()),
                public_id: stem.to_string(),
                use_filename: false,
                // Images are overwritten on re-upload; videos and documents get a unique suffix
                unique_filename: !matches!(kind, AssetKind::Image),
                overwrite: match kind {
                    AssetKind::Video => Some(false),
                    _ => None,
                },
                access_mode,
            },
            NamingPolicy::PathEmbedded => StorageIdentifier {
                folder: None,
                public_id: format!("{}/{}", kind.folder(), stem),
                use_filename: false,
                unique_filename: false,
                overwrite: None,
                access_mode,
            },
        }
    }
}

/// File name without its directory and without one trailing extension.
///
/// `"cat.final.jpg"` becomes `"cat.final"`; dot-files such as `".env"` are kept whole.
pub fn strip_extension(name: &str) -> &str {
    let file_name = name.rsplit(['/', '\\']).next().unwrap_or(name);

    match file_name.rfind('.') {
        Some(idx) if idx > 0 => &file_name[..idx],
        _ => file_name,
    }
}
