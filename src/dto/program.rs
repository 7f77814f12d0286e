//! DTOs for financing program lookups.

use serde::{Deserialize, Serialize};

use crate::dto::CatalogEntry;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalInsurance {
    pub code: String,
    pub name: String,
    /// Premium rate in percent of the financed amount.
    pub rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalInsuranceResponse {
    pub data: Vec<AdditionalInsurance>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageNameResponse {
    pub data: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarConditionResponse {
    pub data: Vec<CatalogEntry>,
}

/// A single financing package offered for a vehicle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub package_id: String,
    pub package_name: String,
    pub tenor: u32,
    pub down_payment: i64,
    pub installment: i64,
    pub interest_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageResponse {
    pub data: Vec<Package>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTypesResponse {
    pub data: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub branch_id: String,
    pub branch_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchResponse {
    pub data: Vec<Branch>,
}
