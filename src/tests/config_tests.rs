//! Tests for the configuration module.
//!
//! Each test that loads configuration uses its own environment prefix so that
//! tests running in parallel cannot see each other's variables.

use crate::config::persistence::BlacklistScope;
use crate::config::{BloomgateConfig, ConfigLoader, Validate};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use test_case::test_case;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = BloomgateConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.server.port, 4000);
    assert_eq!(config.filter.size_bits, 1024);
    assert_eq!(config.filter.hash_iterations, vec![3, 5]);
    assert_eq!(config.persistence.blacklist_scope, BlacklistScope::Shared);
}

#[test_case(80 ; "privileged port")]
#[test_case(1024 ; "just below range")]
#[test_case(0 ; "zero")]
fn test_port_out_of_range(port: u16) {
    let mut config = BloomgateConfig::default();
    config.server.port = port;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));
}

#[test_case(1025 ; "lowest")]
#[test_case(65535 ; "highest")]
fn test_port_in_range(port: u16) {
    let mut config = BloomgateConfig::default();
    config.server.port = port;
    assert!(config.validate().is_ok());
}

#[test_case(0 ; "zero")]
#[test_case(1000 ; "not a power of two")]
fn test_invalid_filter_size(size_bits: usize) {
    let mut config = BloomgateConfig::default();
    config.filter.size_bits = size_bits;
    assert!(config.validate().is_err());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = BloomgateConfig::default();

    config.filter.hash_iterations.clear();
    assert!(config.validate().is_err());

    config.filter.hash_iterations = vec![3, 0];
    assert!(config.validate().is_err());

    config.filter.hash_iterations = vec![1];
    config.server.worker_threads = 0;
    assert!(config.validate().is_err());

    config.server.worker_threads = 2;
    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.persistence.blacklist_file = config.persistence.bloom_file.clone();
    assert!(config.validate().is_err());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.toml",
            r#"
            [server]
            port = 5050
            worker_threads = 2

            [filter]
            size_bits = 4096
            hash_iterations = [4, 6]

            [persistence]
            blacklist_scope = "per_session"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.server.port, 5050);
    assert_eq!(config.server.worker_threads, 2);
    assert_eq!(config.filter.size_bits, 4096);
    assert_eq!(config.filter.hash_iterations, vec![4, 6]);
    assert_eq!(config.persistence.blacklist_scope, BlacklistScope::PerSession);

    // Other values should be defaults
    assert_eq!(config.server.backlog, 50);
    assert_eq!(config.persistence.bloom_file, "bloom_shared.bin");
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config_env_test.toml", "[server]\nport = 5050\n")
        .unwrap();

    fixture.set_env("TEST_ENV__SERVER__PORT", "6060");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "debug");

    let loader = ConfigLoader::new(Some(&config_path), "TEST_ENV");
    let config = loader.load().unwrap();

    assert_eq!(config.server.port, 6060);
    assert_eq!(config.log.level, "debug");
}

#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("absent.toml");

    let loader = ConfigLoader::new(Some(&path), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(p)) if p == path));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("invalid.toml", "[server\nport = not-a-port\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// A file that parses but fails validation is rejected.
#[test]
fn test_load_rejects_invalid_values() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("bad_size.toml", "[filter]\nsize_bits = 1000\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_BAD_SIZE");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));
}

#[test]
fn test_generated_config_round_trips() {
    let config = BloomgateConfig::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: BloomgateConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_filter_config_converts() {
    let config = BloomgateConfig::default();
    let bloom = config.filter.to_bloom_config();
    assert_eq!(bloom.get_size_bits(), 1024);
    assert_eq!(bloom.get_hash_iterations(), &[3, 5]);
}
