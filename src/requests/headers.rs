//! Identity headers supplied by the calling application.

use serde::Deserialize;
use validator::Validate;

use crate::repository::{ApplicationScope, PackageNameScope};

/// Header carrying only the calling application's name.
///
/// Shared by the packages, variants and asset code lookups.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationHeader {
    #[validate(length(min = 1, max = 100))]
    pub application_name: String,
}

/// Header identifying the application, asset and branch for package names.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PackageNameHeader {
    #[validate(length(min = 1, max = 100))]
    pub application_name: String,
    #[validate(length(min = 1, max = 50))]
    pub asset_code: String,
    #[validate(length(min = 1, max = 50))]
    pub branch_code: String,
}

impl From<ApplicationHeader> for ApplicationScope {
    fn from(header: ApplicationHeader) -> Self {
        Self {
            application_name: header.application_name,
        }
    }
}

impl From<PackageNameHeader> for PackageNameScope {
    fn from(header: PackageNameHeader) -> Self {
        Self {
            application_name: header.application_name,
            asset_code: header.asset_code,
            branch_code: header.branch_code,
        }
    }
}
