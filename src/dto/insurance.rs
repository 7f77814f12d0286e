//! DTOs for insurance lookups.

use serde::{Deserialize, Serialize};

use crate::dto::CatalogEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceTypesResponse {
    pub data: Vec<CatalogEntry>,
}

/// Insurance product available for a branch, category and condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insurance {
    pub insurance_code: String,
    pub insurance_name: String,
    pub insurance_type_code: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsuranceResponse {
    pub data: Vec<Insurance>,
}
