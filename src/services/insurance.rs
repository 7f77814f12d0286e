use validator::Validate;

use crate::dto::insurance::{InsuranceResponse, InsuranceTypesResponse};
use crate::repository::InsuranceReader;
use crate::requests::insurance::InsuranceRequest;
use crate::services::ServiceResult;

pub fn get_insurance_types<R>(repo: &R) -> ServiceResult<InsuranceTypesResponse>
where
    R: InsuranceReader + ?Sized,
{
    let result = repo.get_insurance_types().map_err(|err| {
        log::error!("Failed to load insurance types: {err}");
        err
    })?;

    Ok(result)
}

/// Lists insurance products for a branch, vehicle category and condition.
pub fn get_insurance<R>(repo: &R, params: InsuranceRequest) -> ServiceResult<InsuranceResponse>
where
    R: InsuranceReader + ?Sized,
{
    params.validate().map_err(|err| {
        log::debug!("Rejected insurance request: {err}");
        err
    })?;

    let result = repo.get_insurance(params.into()).map_err(|err| {
        log::error!("Failed to load insurance: {err}");
        err
    })?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::CatalogEntry;
    use crate::dto::insurance::Insurance;
    use crate::repository::InsuranceQuery;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    fn insurance_request() -> InsuranceRequest {
        InsuranceRequest {
            dsf_branch_id: "0101".to_string(),
            vehicle_category: "PASSENGER".to_string(),
            insurance_type_code: "TLO".to_string(),
            car_condition: "NEW".to_string(),
        }
    }

    #[test]
    fn insurance_types_delegates_once() {
        let mut repo = MockRepository::new();
        repo.expect_get_insurance_types().times(1).returning(|| {
            Ok(InsuranceTypesResponse {
                data: vec![
                    CatalogEntry::new("TLO", "Total Loss Only"),
                    CatalogEntry::new("COMP", "Comprehensive"),
                ],
            })
        });

        let result = get_insurance_types(&repo).expect("should load insurance types");

        assert_eq!(result.data.len(), 2);
    }

    #[test]
    fn insurance_types_returns_repository_error_unchanged() {
        let mut repo = MockRepository::new();
        repo.expect_get_insurance_types()
            .times(1)
            .returning(|| Err(RepositoryError::DatabaseError("locked".to_string())));

        let result = get_insurance_types(&repo);

        assert_eq!(
            result.unwrap_err(),
            ServiceError::Repository(RepositoryError::DatabaseError("locked".to_string()))
        );
    }

    #[test]
    fn insurance_rejects_missing_type_code() {
        let mut repo = MockRepository::new();
        repo.expect_get_insurance().times(0);
        let params = InsuranceRequest {
            insurance_type_code: String::new(),
            ..insurance_request()
        };
        let expected = params.validate().unwrap_err();

        let result = get_insurance(&repo, params);

        assert_eq!(result.unwrap_err(), ServiceError::Validation(expected));
    }

    #[test]
    fn insurance_forwards_every_field() {
        let expected = InsuranceResponse {
            data: vec![Insurance {
                insurance_code: "INS-01".to_string(),
                insurance_name: "Astra Garda Oto".to_string(),
                insurance_type_code: "TLO".to_string(),
                rate: 1.2,
            }],
        };
        let returned = expected.clone();
        let mut repo = MockRepository::new();
        repo.expect_get_insurance()
            .withf(|query| {
                query
                    == &InsuranceQuery {
                        dsf_branch_id: "0101".to_string(),
                        vehicle_category: "PASSENGER".to_string(),
                        insurance_type_code: "TLO".to_string(),
                        car_condition: "NEW".to_string(),
                    }
            })
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let result = get_insurance(&repo, insurance_request()).expect("should load insurance");

        assert_eq!(result, expected);
    }
}
