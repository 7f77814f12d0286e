//! Province and city lookups.

use validator::Validate;

use crate::dto::regions::{CitiesResponse, ProvincesResponse};
use crate::repository::RegionReader;
use crate::requests::regions::{CitiesRequest, ProvincesRequest};
use crate::services::ServiceResult;

pub fn get_provinces<R>(repo: &R, params: ProvincesRequest) -> ServiceResult<ProvincesResponse>
where
    R: RegionReader + ?Sized,
{
    params.validate().map_err(|err| {
        log::debug!("Rejected provinces request: {err}");
        err
    })?;

    let result = repo.get_provinces(params.into()).map_err(|err| {
        log::error!("Failed to load provinces: {err}");
        err
    })?;

    Ok(result)
}

pub fn get_cities<R>(repo: &R, params: CitiesRequest) -> ServiceResult<CitiesResponse>
where
    R: RegionReader + ?Sized,
{
    params.validate().map_err(|err| {
        log::debug!("Rejected cities request: {err}");
        err
    })?;

    let result = repo.get_cities(params.into()).map_err(|err| {
        log::error!("Failed to load cities: {err}");
        err
    })?;

    Ok(result)
}
