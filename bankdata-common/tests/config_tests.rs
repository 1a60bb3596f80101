//! Tests for root folder resolution priority
//!
//! Env-var tests are serialized because they mutate process state.

use bankdata_common::config::{
    database_path, ensure_directories, resolve_root_folder, uploads_dir, ROOT_ENV_VAR,
};
use serial_test::serial;
use std::path::PathBuf;

#[test]
#[serial]
fn test_cli_arg_takes_priority() {
    std::env::set_var(ROOT_ENV_VAR, "/tmp/bankdata-env");

    let resolved = resolve_root_folder(Some("/tmp/bankdata-cli")).unwrap();
    assert_eq!(resolved, PathBuf::from("/tmp/bankdata-cli"));

    std::env::remove_var(ROOT_ENV_VAR);
}

#[test]
#[serial]
fn test_env_var_used_when_no_cli_arg() {
    std::env::set_var(ROOT_ENV_VAR, "/tmp/bankdata-env");

    let resolved = resolve_root_folder(None).unwrap();
    assert_eq!(resolved, PathBuf::from("/tmp/bankdata-env"));

    std::env::remove_var(ROOT_ENV_VAR);
}

#[test]
#[serial]
fn test_blank_env_var_ignored() {
    std::env::set_var(ROOT_ENV_VAR, "  ");

    // Falls through to config file / OS default; must not be blank
    let resolved = resolve_root_folder(None).unwrap();
    assert!(!resolved.as_os_str().is_empty());
    assert_ne!(resolved, PathBuf::from("  "));

    std::env::remove_var(ROOT_ENV_VAR);
}

#[test]
#[serial]
fn test_fallback_resolution_succeeds() {
    std::env::remove_var(ROOT_ENV_VAR);

    let resolved = resolve_root_folder(None).unwrap();
    assert!(!resolved.as_os_str().is_empty());
}

#[test]
fn test_derived_paths() {
    let root = PathBuf::from("/tmp/bankdata-root");
    assert_eq!(database_path(&root), root.join("bankdata.db"));
    assert_eq!(uploads_dir(&root), root.join("uploads"));
}

#[test]
fn test_ensure_directories_creates_uploads() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("nested").join("root");

    ensure_directories(&root).unwrap();

    assert!(root.is_dir());
    assert!(uploads_dir(&root).is_dir());
}
