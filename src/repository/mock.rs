//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::dto::insurance::{InsuranceResponse, InsuranceTypesResponse};
use crate::dto::program::{
    AdditionalInsuranceResponse, BranchResponse, CarConditionResponse, PackageNameResponse,
    PackageResponse, PaymentTypesResponse,
};
use crate::dto::regions::{CitiesResponse, ProvincesResponse};
use crate::dto::vehicles::{
    AssetCodeResponse, BrandsResponse, ModelsResponse, VariantsResponse, VehicleCategoryResponse,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ApplicationScope, AssetCodeQuery, BrandsQuery, CitiesQuery, InsuranceQuery, InsuranceReader,
    ModelsQuery, PackageNameFilter, PackageNameScope, PackageQuery, ProgramReader, ProvincesQuery,
    RegionReader, VehicleReader,
};

mock! {
    pub Repository {}

    impl ProgramReader for Repository {
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

    impl VehicleReader for Repository {
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

    impl InsuranceReader for Repository {
        fn get_insurance_types(&self) -> RepositoryResult<InsuranceTypesResponse>;
        fn get_insurance(&self, query: InsuranceQuery) -> RepositoryResult<InsuranceResponse>;
    }

    impl RegionReader for Repository {
        fn get_provinces(&self, query: ProvincesQuery) -> RepositoryResult<ProvincesResponse>;
        fn get_cities(&self, query: CitiesQuery) -> RepositoryResult<CitiesResponse>;
    }
}
