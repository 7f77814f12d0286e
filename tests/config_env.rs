#![cfg(feature = "settings")]

//! Kept in its own test binary: it changes the working directory and relies on
//! `APP_ENV` coming from `.env`.

use std::env;
use std::fs;

use dsf_catalog::models::config::CatalogConfig;
use tempfile::TempDir;

#[test]
fn dotenv_selects_profile_on_first_load() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join(".env"), "APP_ENV=staging\n").expect("write .env");
    fs::write(
        dir.path().join("default.yaml"),
        "application_name: dsf-web\nbranch_code: JKT\n",
    )
    .expect("write default profile");
    fs::write(dir.path().join("staging.yaml"), "branch_code: BDG\n")
        .expect("write staging profile");
    env::set_current_dir(dir.path()).expect("enter temp dir");

    let first = CatalogConfig::load(dir.path()).expect("config loads");
    let second = CatalogConfig::load(dir.path()).expect("config loads again");

    assert_eq!(first.branch_code, "BDG");
    assert_eq!(second.branch_code, first.branch_code);
    assert_eq!(first.application_name, "dsf-web");
}
