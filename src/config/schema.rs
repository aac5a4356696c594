//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::factory::BackendKind;

/// Root configuration for the request builder.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct BuilderConfig {
    /// Backend probe order for auto-discovery (first match wins).
    pub backend_order: Vec<BackendKind>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            backend_order: BackendKind::DEFAULT_ORDER.to_vec(),
        }
    }
}
