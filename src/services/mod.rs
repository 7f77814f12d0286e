//! Catalog query services.
//!
//! Each operation validates its parameter objects, projects them into the
//! repository's query values and returns whatever the repository reports.
//! The free functions are generic over the narrowest reader trait they need;
//! [`CatalogService`] bundles all of them behind a single repository handle.

use crate::dto::insurance::{InsuranceResponse, InsuranceTypesResponse};
use crate::dto::program::{
    AdditionalInsuranceResponse, BranchResponse, CarConditionResponse, PackageNameResponse,
    PackageResponse, PaymentTypesResponse,
};
use crate::dto::regions::{CitiesResponse, ProvincesResponse};
use crate::dto::vehicles::{
    AssetCodeResponse, BrandsResponse, ModelsResponse, VariantsResponse, VehicleCategoryResponse,
};
use crate::repository::CatalogRepository;
use crate::requests::headers::{ApplicationHeader, PackageNameHeader};
use crate::requests::insurance::InsuranceRequest;
use crate::requests::packages::{PackageNameParams, PackageRequest};
use crate::requests::regions::{CitiesRequest, ProvincesRequest};
use crate::requests::vehicles::{AssetCodeRequest, BrandsRequest, ModelsRequest};

pub mod errors;
pub mod insurance;
pub mod program;
pub mod regions;
pub mod vehicles;

pub use errors::{ServiceError, ServiceResult};

/// Catalog query façade over a single repository.
///
/// Holds nothing but the repository, so it is `Send + Sync` whenever the
/// repository is and can be shared between threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CatalogService<R> {
    repo: R,
}

impl<R> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrow the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }
}

impl<R> CatalogService<R>
where
    R: CatalogRepository,
{
    pub fn get_additional_insurance(&self) -> ServiceResult<AdditionalInsuranceResponse> {
        program::get_additional_insurance(&self.repo)
    }

    pub fn get_package_names(
        &self,
        header: PackageNameHeader,
        params: PackageNameParams,
    ) -> ServiceResult<PackageNameResponse> {
        program::get_package_names(&self.repo, header, params)
    }

    pub fn get_car_conditions(&self) -> ServiceResult<CarConditionResponse> {
        program::get_car_conditions(&self.repo)
    }

    pub fn get_packages(
        &self,
        header: ApplicationHeader,
        body: PackageRequest,
    ) -> ServiceResult<PackageResponse> {
        program::get_packages(&self.repo, header, body)
    }

    pub fn get_variants(&self, header: ApplicationHeader) -> ServiceResult<VariantsResponse> {
        vehicles::get_variants(&self.repo, header)
    }

    pub fn get_payment_types(&self) -> ServiceResult<PaymentTypesResponse> {
        program::get_payment_types(&self.repo)
    }

    pub fn get_models(&self, params: ModelsRequest) -> ServiceResult<ModelsResponse> {
        vehicles::get_models(&self.repo, params)
    }

    pub fn get_brands(&self, params: BrandsRequest) -> ServiceResult<BrandsResponse> {
        vehicles::get_brands(&self.repo, params)
    }

    pub fn get_vehicle_category(&self) -> ServiceResult<VehicleCategoryResponse> {
        vehicles::get_vehicle_category(&self.repo)
    }

    pub fn get_branch_id(&self) -> ServiceResult<BranchResponse> {
        program::get_branch_id(&self.repo)
    }

    pub fn get_insurance_types(&self) -> ServiceResult<InsuranceTypesResponse> {
        insurance::get_insurance_types(&self.repo)
    }

    pub fn get_insurance(&self, params: InsuranceRequest) -> ServiceResult<InsuranceResponse> {
        insurance::get_insurance(&self.repo, params)
    }

    pub fn get_asset_code(
        &self,
        header: ApplicationHeader,
        body: AssetCodeRequest,
    ) -> ServiceResult<AssetCodeResponse> {
        vehicles::get_asset_code(&self.repo, header, body)
    }

    pub fn get_provinces(&self, params: ProvincesRequest) -> ServiceResult<ProvincesResponse> {
        regions::get_provinces(&self.repo, params)
    }

    pub fn get_cities(&self, params: CitiesRequest) -> ServiceResult<CitiesResponse> {
        regions::get_cities(&self.repo, params)
    }
}
