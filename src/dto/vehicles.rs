//! DTOs for vehicle catalog lookups.

use serde::{Deserialize, Serialize};

use crate::dto::CatalogEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub code: String,
    pub name: String,
    pub model_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantsResponse {
    pub data: Vec<Variant>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub code: String,
    pub name: String,
    pub brand_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub data: Vec<Model>,
}

/// One page of brands plus the unpaginated match count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandsResponse {
    pub data: Vec<CatalogEntry>,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleCategoryResponse {
    pub data: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCodeResponse {
    pub asset_code: String,
    pub description: String,
}
