//! Parameters for brand, model and asset code lookups.

use serde::Deserialize;
use validator::Validate;

use crate::repository::{AssetCodeQuery, BrandsQuery, ModelsQuery};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ModelsRequest {
    #[validate(length(min = 1, max = 100))]
    pub brand: String,
}

/// Paginated brand search. An empty keyword lists every brand.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BrandsRequest {
    #[serde(default)]
    #[validate(length(max = 100))]
    pub keyword: String,
    #[validate(range(min = 1, max = 100))]
    pub limit: i32,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub offset: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssetCodeRequest {
    #[validate(length(min = 1, max = 100))]
    pub variant_name: String,
    #[validate(length(min = 1, max = 20))]
    pub car_condition: String,
    #[validate(range(min = 1900, max = 2100))]
    pub manufactured_year: i32,
    #[validate(length(min = 1, max = 100))]
    pub model_name: String,
    #[validate(length(min = 1, max = 100))]
    pub brand_name: String,
}

impl From<ModelsRequest> for ModelsQuery {
    fn from(request: ModelsRequest) -> Self {
        Self {
            brand: request.brand,
        }
    }
}

impl From<BrandsRequest> for BrandsQuery {
    fn from(request: BrandsRequest) -> Self {
        Self {
            keyword: request.keyword,
            limit: request.limit,
            offset: request.offset,
        }
    }
}

impl From<AssetCodeRequest> for AssetCodeQuery {
    fn from(request: AssetCodeRequest) -> Self {
        Self {
            variant_name: request.variant_name,
            car_condition: request.car_condition,
            manufactured_year: request.manufactured_year,
            model_name: request.model_name,
            brand_name: request.brand_name,
        }
    }
}
