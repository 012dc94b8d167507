use serde::{Deserialize, Serialize};

use crate::asset_types::ResourceKind;

/// Provider deletion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionRequest {
    pub public_id: String,
    pub resource_kind: ResourceKind,
}

impl DeletionRequest {
    pub fn new(public_id: impl Into<String>, resource_kind: ResourceKind) -> Self {
        Self {
            public_id: public_id.into(),
            resource_kind,
        }
    }
}
