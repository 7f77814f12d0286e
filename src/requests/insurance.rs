use serde::Deserialize;
use validator::Validate;

use crate::repository::InsuranceQuery;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceRequest {
    #[validate(length(min = 1, max = 50))]
    pub dsf_branch_id: String,
    #[validate(length(min = 1, max = 50))]
    pub vehicle_category: String,
    #[validate(length(min = 1, max = 50))]
    pub insurance_type_code: String,
    #[validate(length(min = 1, max = 20))]
    pub car_condition: String,
}

impl From<InsuranceRequest> for InsuranceQuery {
    fn from(request: InsuranceRequest) -> Self {
        Self {
            dsf_branch_id: request.dsf_branch_id,
            vehicle_category: request.vehicle_category,
            insurance_type_code: request.insurance_type_code,
            car_condition: request.car_condition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insurance_request_requires_every_code() {
        let request = InsuranceRequest {
            dsf_branch_id: "0101".to_string(),
            ..InsuranceRequest::default()
        };

        let errors = request.validate().unwrap_err();

        assert_eq!(errors.field_errors().len(), 3);
    }

    #[test]
    fn insurance_request_projects_all_fields() {
        let request = InsuranceRequest {
            dsf_branch_id: "0101".to_string(),
            vehicle_category: "PASSENGER".to_string(),
            insurance_type_code: "TLO".to_string(),
            car_condition: "NEW".to_string(),
        };
        assert!(request.validate().is_ok());

        let query = InsuranceQuery::from(request);

        assert_eq!(query.dsf_branch_id, "0101");
        assert_eq!(query.vehicle_category, "PASSENGER");
        assert_eq!(query.insurance_type_code, "TLO");
        assert_eq!(query.car_condition, "NEW");
    }
}
