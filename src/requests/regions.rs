//! Parameters for province and city lookups.

use serde::Deserialize;
use validator::Validate;

use crate::repository::{CitiesQuery, ProvincesQuery};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProvincesRequest {
    #[serde(default)]
    #[validate(length(max = 100))]
    pub search: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub offset: i32,
    #[validate(range(min = 1, max = 100))]
    pub limit: i32,
}

/// Cities are always listed within a single province.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CitiesRequest {
    #[serde(default)]
    #[validate(length(max = 100))]
    pub search: String,
    #[validate(length(min = 1, max = 20))]
    pub province_code: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub offset: i32,
    #[validate(range(min = 1, max = 100))]
    pub limit: i32,
}

impl From<ProvincesRequest> for ProvincesQuery {
    fn from(request: ProvincesRequest) -> Self {
        Self {
            search: request.search,
            offset: request.offset,
            limit: request.limit,
        }
    }
}

impl From<CitiesRequest> for CitiesQuery {
    fn from(request: CitiesRequest) -> Self {
        Self {
            search: request.search,
            province_code: request.province_code,
            offset: request.offset,
            limit: request.limit,
        }
    }
}
