#![cfg(feature = "settings")]

use std::fs;

use dsf_catalog::models::config::CatalogConfig;
use tempfile::TempDir;

fn write_profile(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(format!("{name}.yaml")), contents).expect("write profile");
}

#[test]
fn loads_default_profile() {
    let dir = TempDir::new().expect("temp dir");
    write_profile(
        &dir,
        "default",
        "application_name: dsf-web\nbranch_code: JKT\n",
    );

    let config = CatalogConfig::load_profile(dir.path(), "missing").expect("config loads");

    assert_eq!(config.application_name, "dsf-web");
    assert_eq!(config.branch_code, "JKT");
    assert_eq!(config.default_page_size, 10);
}

#[test]
fn profile_overrides_default_values() {
    let dir = TempDir::new().expect("temp dir");
    write_profile(
        &dir,
        "default",
        "application_name: dsf-web\nbranch_code: JKT\ndefault_page_size: 10\n",
    );
    write_profile(&dir, "staging", "branch_code: BDG\ndefault_page_size: 25\n");

    let config = CatalogConfig::load_profile(dir.path(), "staging").expect("config loads");

    assert_eq!(config.application_name, "dsf-web");
    assert_eq!(config.branch_code, "BDG");
    assert_eq!(config.provinces_request("").limit, 25);
}

#[test]
fn missing_default_profile_is_an_error() {
    let dir = TempDir::new().expect("temp dir");

    assert!(CatalogConfig::load_profile(dir.path(), "local").is_err());
}
