//! Response payloads returned by catalog repositories.
//!
//! The services hand these back to callers untouched; they only need to be
//! serializable for the HTTP tier.

use serde::{Deserialize, Serialize};

pub mod insurance;
pub mod prediction;
pub mod program;
pub mod regions;
pub mod vehicles;

/// Code/label pair shared by the simple lookup lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub code: String,
    pub name: String,
}

impl CatalogEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}
