//! Financing program lookups: additional insurance, packages, payment types
//! and branches.

use validator::Validate;

use crate::dto::program::{
    AdditionalInsuranceResponse, BranchResponse, CarConditionResponse, PackageNameResponse,
    PackageResponse, PaymentTypesResponse,
};
use crate::repository::ProgramReader;
use crate::requests::headers::{ApplicationHeader, PackageNameHeader};
use crate::requests::packages::{PackageNameParams, PackageRequest};
use crate::services::ServiceResult;

pub fn get_additional_insurance<R>(repo: &R) -> ServiceResult<AdditionalInsuranceResponse>
where
    R: ProgramReader + ?Sized,
{
    let result = repo.get_additional_insurance().map_err(|err| {
        log::error!("Failed to load additional insurance: {err}");
        err
    })?;

    Ok(result)
}

/// Lists the package names available to the asset and branch in the header.
pub fn get_package_names<R>(
    repo: &R,
    header: PackageNameHeader,
    params: PackageNameParams,
) -> ServiceResult<PackageNameResponse>
where
    R: ProgramReader + ?Sized,
{
    header.validate().map_err(|err| {
        log::debug!("Rejected package names header: {err}");
        err
    })?;
    params.validate().map_err(|err| {
        log::debug!("Rejected package names params: {err}");
        err
    })?;

    let result = repo
        .get_package_names(header.into(), params.into())
        .map_err(|err| {
            log::error!("Failed to load package names: {err}");
            err
        })?;

    Ok(result)
}

pub fn get_car_conditions<R>(repo: &R) -> ServiceResult<CarConditionResponse>
where
    R: ProgramReader + ?Sized,
{
    let result = repo.get_car_conditions().map_err(|err| {
        log::error!("Failed to load car conditions: {err}");
        err
    })?;

    Ok(result)
}

/// Looks up the financing packages for the vehicle and location in `body`.
pub fn get_packages<R>(
    repo: &R,
    header: ApplicationHeader,
    body: PackageRequest,
) -> ServiceResult<PackageResponse>
where
    R: ProgramReader + ?Sized,
{
    header.validate().map_err(|err| {
        log::debug!("Rejected packages header: {err}");
        err
    })?;
    body.validate().map_err(|err| {
        log::debug!("Rejected packages body: {err}");
        err
    })?;

    let result = repo
        .get_packages(header.into(), body.into())
        .map_err(|err| {
            log::error!("Failed to load packages: {err}");
            err
        })?;

    Ok(result)
}

pub fn get_payment_types<R>(repo: &R) -> ServiceResult<PaymentTypesResponse>
where
    R: ProgramReader + ?Sized,
{
    let result = repo.get_payment_types().map_err(|err| {
        log::error!("Failed to load payment types: {err}");
        err
    })?;

    Ok(result)
}

pub fn get_branch_id<R>(repo: &R) -> ServiceResult<BranchResponse>
where
    R: ProgramReader + ?Sized,
{
    let result = repo.get_branch_id().map_err(|err| {
        log::error!("Failed to load branches: {err}");
        err
    })?;

    Ok(result)
}
