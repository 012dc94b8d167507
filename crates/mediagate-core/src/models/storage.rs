//! Storage identifier model: where and under which name the provider keeps an asset.

use serde::{Deserialize, Serialize};

/// Provider-side naming and collision settings for one upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageIdentifier {
    pub folder: Option<String>,
    pub public_id: String,
    /// Always false: the provider never derives the id from the uploaded file name
    pub use_filename: bool,
    pub unique_filename: bool,
    pub overwrite: Option<bool>,
    pub access_mode: Option<String>,
}

impl StorageIdentifier {
    /// Full provider id, including the folder prefix when one is set
    pub fn qualified_id(&self) -> String {
        match &self.folder {
            Some(folder) => format!("{}/{}", folder, self.public_id),
            None => self.public_id.clone(),
        }
    }
}
