//! Environment-driven configuration. Tests touching process environment
//! run serially.

use eeum::config::{BASE_URL_ENV, DEV_BASE_URL, DEV_ENV, RELEASE_BASE_URL};
use eeum::{ClientConfig, Services};
use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    std::env::remove_var(DEV_ENV);
    std::env::remove_var(BASE_URL_ENV);
}

#[test]
#[serial]
fn test_defaults_to_release_backend() {
    clear_env();

    assert_eq!(ClientConfig::from_env().base_url(), RELEASE_BASE_URL);
}

#[test]
#[serial]
fn test_dev_flag_selects_dev_backend() {
    clear_env();
    std::env::set_var(DEV_ENV, "1");

    assert_eq!(ClientConfig::from_env().base_url(), DEV_BASE_URL);

    std::env::set_var(DEV_ENV, "false");
    assert_eq!(ClientConfig::from_env().base_url(), RELEASE_BASE_URL);
    clear_env();
}

#[test]
#[serial]
fn test_base_url_override_wins() {
    clear_env();
    std::env::set_var(DEV_ENV, "1");
    std::env::set_var(BASE_URL_ENV, "http://localhost:8080/");

    let config = ClientConfig::from_env();

    assert!(config.dev_mode);
    assert_eq!(config.base_url(), "http://localhost:8080/");
    clear_env();
}

#[tokio::test]
#[serial]
async fn test_production_services_use_configured_token_path() {
    clear_env();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prefs.json");

    let services =
        Services::production(ClientConfig::from_env().with_token_path(path.clone())).unwrap();

    assert_eq!(services.config().token_path.as_deref(), Some(path.as_path()));
    assert_eq!(services.config().base_url(), RELEASE_BASE_URL);
}
