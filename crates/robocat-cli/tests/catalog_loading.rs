//! Catalog Source Resolution Tests
//!
//! The binary always has the bundled catalog available; --data and the
//! ROBOCAT_CATALOG environment variable override it.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use robocat_testing::{TestWorld, fixtures};

#[test]
fn test_bundled_catalog_is_used_without_data_flag() {
    // No --data, no env: the compiled-in dataset answers
    Command::cargo_bin("robocat")
        .unwrap()
        .env_remove("ROBOCAT_CATALOG")
        .args(["brands"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Irayple"));
}

#[test]
fn test_data_flag_replaces_bundled_catalog() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::single_brand_catalog());

    let result = world.run(&["brands"])?;

    assert!(result.success());
    assert!(result.stdout.contains("Solo Robotics"));
    assert!(!result.stdout.contains("Irayple"));
    Ok(())
}

#[test]
fn test_env_var_overrides_bundled_catalog() -> Result<()> {
    let world = TestWorld::new().with_catalog(&fixtures::single_brand_catalog());
    let path = world.catalog_path().unwrap().to_path_buf();

    Command::cargo_bin("robocat")
        .unwrap()
        .env("ROBOCAT_CATALOG", &path)
        .args(["brands"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solo Robotics"));
    Ok(())
}

#[test]
fn test_missing_data_file_is_an_error() {
    Command::cargo_bin("robocat")
        .unwrap()
        .env_remove("ROBOCAT_CATALOG")
        .args(["brands", "--data", "/nonexistent/catalog.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load catalog"));
}

#[test]
fn test_malformed_catalog_is_an_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json")?;

    Command::cargo_bin("robocat")
        .unwrap()
        .env_remove("ROBOCAT_CATALOG")
        .args(["brands", "--data", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load catalog"));
    Ok(())
}
