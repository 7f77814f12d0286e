//! Configuration model loaded from external sources.

use std::env;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;

use crate::repository::DEFAULT_PAGE_SIZE;
use crate::requests::headers::{ApplicationHeader, PackageNameHeader};
use crate::requests::regions::{CitiesRequest, ProvincesRequest};
use crate::requests::vehicles::BrandsRequest;

fn default_page_size() -> i32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Clone, Debug, Deserialize)]
/// Identity and paging defaults used when building catalog requests.
pub struct CatalogConfig {
    pub application_name: String,
    pub branch_code: String,
    #[serde(default = "default_page_size")]
    pub default_page_size: i32,
}

impl CatalogConfig {
    /// Loads the profile named by `APP_ENV` (defaults to `local`).
    ///
    /// `.env` is read first so it can select the profile.
    pub fn load(config_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenv().ok();
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());
        Self::load_profile(config_dir, &app_env)
    }

    /// Layers `default.yaml`, the optional `<profile>.yaml` and `APP_*`
    /// environment variables, in that order.
    pub fn load_profile(config_dir: impl AsRef<Path>, profile: &str) -> Result<Self, ConfigError> {
        dotenv().ok();

        let dir = config_dir.as_ref();
        let settings = Config::builder()
            .add_source(File::with_name(&dir.join("default").to_string_lossy()))
            .add_source(File::with_name(&dir.join(profile).to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?;

        let config = settings.try_deserialize::<CatalogConfig>()?;
        log::info!(
            "Loaded catalog config profile `{profile}` for application {}",
            config.application_name
        );

        Ok(config)
    }

    pub fn application_header(&self) -> ApplicationHeader {
        ApplicationHeader {
            application_name: self.application_name.clone(),
        }
    }

    pub fn package_name_header(&self, asset_code: impl Into<String>) -> PackageNameHeader {
        PackageNameHeader {
            application_name: self.application_name.clone(),
            asset_code: asset_code.into(),
            branch_code: self.branch_code.clone(),
        }
    }

    /// First page of brands matching `keyword`.
    pub fn brands_request(&self, keyword: impl Into<String>) -> BrandsRequest {
        BrandsRequest {
            keyword: keyword.into(),
            limit: self.default_page_size,
            offset: 0,
        }
    }

    pub fn provinces_request(&self, search: impl Into<String>) -> ProvincesRequest {
        ProvincesRequest {
            search: search.into(),
            offset: 0,
            limit: self.default_page_size,
        }
    }

    pub fn cities_request(
        &self,
        province_code: impl Into<String>,
        search: impl Into<String>,
    ) -> CitiesRequest {
        CitiesRequest {
            search: search.into(),
            province_code: province_code.into(),
            offset: 0,
            limit: self.default_page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    fn catalog_config() -> CatalogConfig {
        CatalogConfig {
            application_name: "dsf-web".to_string(),
            branch_code: "JKT".to_string(),
            default_page_size: 20,
        }
    }

    #[test]
    fn builds_identity_headers() {
        let config = catalog_config();

        let header = config.package_name_header("AST-01");

        assert_eq!(header.application_name, "dsf-web");
        assert_eq!(header.asset_code, "AST-01");
        assert_eq!(header.branch_code, "JKT");
        assert!(header.validate().is_ok());
        assert!(config.application_header().validate().is_ok());
    }

    #[test]
    fn first_page_requests_use_default_page_size() {
        let config = catalog_config();

        let brands = config.brands_request("toy");
        let provinces = config.provinces_request("");
        let cities = config.cities_request("32", "band");

        assert_eq!((brands.limit, brands.offset), (20, 0));
        assert_eq!((provinces.limit, provinces.offset), (20, 0));
        assert_eq!(cities.province_code, "32");
        assert_eq!(cities.limit, 20);
        assert!(brands.validate().is_ok());
        assert!(provinces.validate().is_ok());
        assert!(cities.validate().is_ok());
    }
}
