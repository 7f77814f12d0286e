//! Parameters for package and package name lookups.

use serde::Deserialize;
use validator::Validate;

use crate::repository::{PackageNameFilter, PackageQuery};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PackageNameParams {
    #[validate(length(min = 1, max = 20))]
    pub car_condition: String,
}

/// Request body describing the vehicle and location a package is sought for.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PackageRequest {
    #[validate(length(min = 1, max = 100))]
    pub brand: String,
    #[validate(length(min = 1, max = 100))]
    pub model: String,
    #[validate(length(min = 1, max = 100))]
    pub variant: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub province: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub city: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub package_name: String,
    #[validate(length(min = 1, max = 20))]
    pub car_condition: String,
}

impl From<PackageNameParams> for PackageNameFilter {
    fn from(params: PackageNameParams) -> Self {
        Self {
            car_condition: params.car_condition,
        }
    }
}

impl From<PackageRequest> for PackageQuery {
    fn from(request: PackageRequest) -> Self {
        Self {
            brand: request.brand,
            model: request.model,
            variant: request.variant,
            province: request.province,
            city: request.city,
            package_name: request.package_name,
            car_condition: request.car_condition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package_request() -> PackageRequest {
        PackageRequest {
            brand: "Toyota".to_string(),
            model: "Avanza".to_string(),
            variant: "1.5 G MT".to_string(),
            province: "DKI Jakarta".to_string(),
            city: "Jakarta Selatan".to_string(),
            package_name: "Regular".to_string(),
            car_condition: "NEW".to_string(),
        }
    }

    #[test]
    fn package_request_accepts_empty_location() {
        let request = PackageRequest {
            province: String::new(),
            city: String::new(),
            package_name: String::new(),
            ..package_request()
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn package_request_requires_vehicle_fields() {
        let request = PackageRequest {
            variant: String::new(),
            car_condition: String::new(),
            ..package_request()
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("variant"));
        assert!(fields.contains_key("car_condition"));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn package_request_projects_all_fields() {
        let query = PackageQuery::from(package_request());

        assert_eq!(query.brand, "Toyota");
        assert_eq!(query.model, "Avanza");
        assert_eq!(query.variant, "1.5 G MT");
        assert_eq!(query.province, "DKI Jakarta");
        assert_eq!(query.city, "Jakarta Selatan");
        assert_eq!(query.package_name, "Regular");
        assert_eq!(query.car_condition, "NEW");
    }

    #[test]
    fn package_name_params_reject_long_condition() {
        let params = PackageNameParams {
            car_condition: "X".repeat(21),
        };

        assert!(params.validate().is_err());
    }
}
