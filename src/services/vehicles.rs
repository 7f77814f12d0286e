//! Vehicle catalog lookups: brands, models, variants, categories and asset
//! codes.

use validator::Validate;

use crate::dto::vehicles::{
    AssetCodeResponse, BrandsResponse, ModelsResponse, VariantsResponse, VehicleCategoryResponse,
};
use crate::repository::VehicleReader;
use crate::requests::headers::ApplicationHeader;
use crate::requests::vehicles::{AssetCodeRequest, BrandsRequest, ModelsRequest};
use crate::services::ServiceResult;

/// Lists the unit variants visible to the calling application.
pub fn get_variants<R>(repo: &R, header: ApplicationHeader) -> ServiceResult<VariantsResponse>
where
    R: VehicleReader + ?Sized,
{
    header.validate().map_err(|err| {
        log::debug!("Rejected variants header: {err}");
        err
    })?;

    let result = repo.get_variants(header.into()).map_err(|err| {
        log::error!("Failed to load variants: {err}");
        err
    })?;

    Ok(result)
}

/// Lists the models of a single brand.
pub fn get_models<R>(repo: &R, params: ModelsRequest) -> ServiceResult<ModelsResponse>
where
    R: VehicleReader + ?Sized,
{
    params.validate().map_err(|err| {
        log::debug!("Rejected models request: {err}");
        err
    })?;

    let result = repo.get_models(params.into()).map_err(|err| {
        log::error!("Failed to load models: {err}");
        err
    })?;

    Ok(result)
}

/// Searches brands by keyword, one page at a time.
pub fn get_brands<R>(repo: &R, params: BrandsRequest) -> ServiceResult<BrandsResponse>
where
    R: VehicleReader + ?Sized,
{
    params.validate().map_err(|err| {
        log::debug!("Rejected brands request: {err}");
        err
    })?;

    let result = repo.get_brands(params.into()).map_err(|err| {
        log::error!("Failed to load brands: {err}");
        err
    })?;

    Ok(result)
}

pub fn get_vehicle_category<R>(repo: &R) -> ServiceResult<VehicleCategoryResponse>
where
    R: VehicleReader + ?Sized,
{
    let result = repo.get_vehicle_category().map_err(|err| {
        log::error!("Failed to load vehicle categories: {err}");
        err
    })?;

    Ok(result)
}

/// Resolves the asset code of a brand/model/variant for a given year and
/// condition.
pub fn get_asset_code<R>(
    repo: &R,
    header: ApplicationHeader,
    body: AssetCodeRequest,
) -> ServiceResult<AssetCodeResponse>
where
    R: VehicleReader + ?Sized,
{
    header.validate().map_err(|err| {
        log::debug!("Rejected asset code header: {err}");
        err
    })?;
    body.validate().map_err(|err| {
        log::debug!("Rejected asset code body: {err}");
        err
    })?;

    let result = repo
        .get_asset_code(header.into(), body.into())
        .map_err(|err| {
            log::error!("Failed to resolve asset code: {err}");
            err
        })?;

    Ok(result)
}
