//! Repository abstraction consumed by the catalog services.
//!
//! The query values below are what a repository receives. They are built by
//! the `requests` module from already validated inbound parameters and never
//! share storage with them.

use crate::{
    dto::{
        insurance::{InsuranceResponse, InsuranceTypesResponse},
        program::{
            AdditionalInsuranceResponse, BranchResponse, CarConditionResponse,
            PackageNameResponse, PackageResponse, PaymentTypesResponse,
        },
        regions::{CitiesResponse, ProvincesResponse},
        vehicles::{
            AssetCodeResponse, BrandsResponse, ModelsResponse, VariantsResponse,
            VehicleCategoryResponse,
        },
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Page size used by the query builders until `paginate` overrides it.
pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// Identity of the calling application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationScope {
    pub application_name: String,
}

/// Identity context used when listing package names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNameScope {
    pub application_name: String,
    pub asset_code: String,
    pub branch_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNameFilter {
    pub car_condition: String,
}

/// Filter describing a single vehicle/location combination for package lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageQuery {
    pub brand: String,
    pub model: String,
    pub variant: String,
    pub province: String,
    pub city: String,
    pub package_name: String,
    pub car_condition: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelsQuery {
    pub brand: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandsQuery {
    pub keyword: String,
    pub limit: i32,
    pub offset: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsuranceQuery {
    pub dsf_branch_id: String,
    pub vehicle_category: String,
    pub insurance_type_code: String,
    pub car_condition: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCodeQuery {
    pub variant_name: String,
    pub car_condition: String,
    pub manufactured_year: i32,
    pub model_name: String,
    pub brand_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvincesQuery {
    pub search: String,
    pub offset: i32,
    pub limit: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitiesQuery {
    pub search: String,
    pub province_code: String,
    pub offset: i32,
    pub limit: i32,
}

impl BrandsQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }

    pub fn paginate(mut self, limit: i32, offset: i32) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }
}

impl ProvincesQuery {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn paginate(mut self, limit: i32, offset: i32) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }
}

impl CitiesQuery {
    pub fn new(province_code: impl Into<String>) -> Self {
        Self {
            search: String::new(),
            province_code: province_code.into(),
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn paginate(mut self, limit: i32, offset: i32) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }
}

/// Financing program lookups: packages, payment types and branch data.
pub trait ProgramReader {
    fn get_additional_insurance(&self) -> RepositoryResult<AdditionalInsuranceResponse>;
    fn get_package_names(
        &self,
        scope: PackageNameScope,
        filter: PackageNameFilter,
    ) -> RepositoryResult<PackageNameResponse>;
    fn get_car_conditions(&self) -> RepositoryResult<CarConditionResponse>;
    fn get_packages(
        &self,
        scope: ApplicationScope,
        query: PackageQuery,
    ) -> RepositoryResult<PackageResponse>;
    fn get_payment_types(&self) -> RepositoryResult<PaymentTypesResponse>;
    fn get_branch_id(&self) -> RepositoryResult<BranchResponse>;
}

/// Vehicle catalog lookups.
pub trait VehicleReader {
    fn get_variants(&self, scope: ApplicationScope) -> RepositoryResult<VariantsResponse>;
    fn get_models(&self, query: ModelsQuery) -> RepositoryResult<ModelsResponse>;
    fn get_brands(&self, query: BrandsQuery) -> RepositoryResult<BrandsResponse>;
    fn get_vehicle_category(&self) -> RepositoryResult<VehicleCategoryResponse>;
    fn get_asset_code(
        &self,
        scope: ApplicationScope,
        query: AssetCodeQuery,
    ) -> RepositoryResult<AssetCodeResponse>;
}

pub trait InsuranceReader {
    fn get_insurance_types(&self) -> RepositoryResult<InsuranceTypesResponse>;
    fn get_insurance(&self, query: InsuranceQuery) -> RepositoryResult<InsuranceResponse>;
}

pub trait RegionReader {
    fn get_provinces(&self, query: ProvincesQuery) -> RepositoryResult<ProvincesResponse>;
    fn get_cities(&self, query: CitiesQuery) -> RepositoryResult<CitiesResponse>;
}

/// Every capability the catalog façade needs from its data source.
pub trait CatalogRepository: ProgramReader + VehicleReader + InsuranceReader + RegionReader {}

impl<T> CatalogRepository for T where
    T: ProgramReader + VehicleReader + InsuranceReader + RegionReader + ?Sized
{
}
