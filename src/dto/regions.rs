//! DTOs for province and city lookups.

use serde::{Deserialize, Serialize};

use crate::dto::CatalogEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvincesResponse {
    pub data: Vec<CatalogEntry>,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub code: String,
    pub name: String,
    pub province_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitiesResponse {
    pub data: Vec<City>,
    pub total: usize,
}
