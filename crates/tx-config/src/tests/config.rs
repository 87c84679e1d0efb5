use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_load_then_defaults() {
    let (_temp, _guard) = setup_config_dir();

    let config = Config::load().unwrap();

    assert_that!(config.storage.path, eq("profiles.json"));
    assert_eq!(config.storage.quota_bytes, 5 * 1024 * 1024);
    assert_eq!(config.auth.credentials.len(), 3);
    assert_eq!(config.auth.credentials[0].email, "demo@thrivex.com");
    assert!(config.logging.file.is_none());
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_config_toml_when_load_then_values_applied() {
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [storage]
            path = "demo-store.json"
            quota_bytes = 65536

            [logging]
            level = "debug"
            file = "thrivex.log"

            [[auth.credentials]]
            email = "founder@thrivex.com"
            password = "secret1"
        "#,
    )
    .unwrap();

    let config = Config::load().unwrap();

    assert_that!(config.storage.path, eq("demo-store.json"));
    assert_eq!(config.storage.quota_bytes, 65536);
    assert_eq!(config.logging.level.0, log::LevelFilter::Debug);
    assert_that!(config.logging.file.as_deref().unwrap(), eq("thrivex.log"));
    assert_eq!(config.auth.credentials.len(), 1);
    assert_eq!(config.auth.credentials[0].email, "founder@thrivex.com");
}

#[test]
#[serial]
fn given_env_overrides_when_load_then_they_win_over_file() {
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [storage]
            path = "from-file.json"
        "#,
    )
    .unwrap();
    let _path = EnvGuard::set("TX_STORAGE_PATH", "from-env.json");
    let _quota = EnvGuard::set("TX_STORAGE_QUOTA_BYTES", "8192");
    let _level = EnvGuard::set("TX_LOG_LEVEL", "trace");

    let config = Config::load().unwrap();

    assert_that!(config.storage.path, eq("from-env.json"));
    assert_eq!(config.storage.quota_bytes, 8192);
    assert_eq!(config.logging.level.0, log::LevelFilter::Trace);
}

#[test]
#[serial]
fn given_non_numeric_quota_override_when_load_then_ignored() {
    let (_temp, _guard) = setup_config_dir();
    let _quota = EnvGuard::set("TX_STORAGE_QUOTA_BYTES", "plenty");

    let config = Config::load().unwrap();

    assert_eq!(config.storage.quota_bytes, 5 * 1024 * 1024);
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_parse_error_names_file() {
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[storage\npath=").unwrap();

    let result = Config::load();

    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("TOML parse error"));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("deeper").join("still");
    let _dir = EnvGuard::set("TX_CONFIG_DIR", nested.to_str().unwrap());

    Config::load().unwrap();

    assert!(nested.exists());
}

#[test]
#[serial]
fn given_config_when_store_path_then_joined_under_config_dir() {
    let (temp, _guard) = setup_config_dir();

    let config = Config::load().unwrap();
    let store_path = config.store_path().unwrap();

    assert_eq!(store_path, temp.path().join("profiles.json"));
    assert!(config.log_file_path().unwrap().is_none());
}
