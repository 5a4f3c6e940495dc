use reelmatch_lib::application::config::AppConfig;
use reelmatch_lib::application::{Cli, EnvironmentConfig};
use reelmatch_lib::primitives::{ColorIntent, ConfigError, LogLevel};
use clap::Parser;

fn no_env() -> EnvironmentConfig {
    EnvironmentConfig::default()
}

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert!(config.net_timeout > 0);
    assert_eq!(config.color, ColorIntent::Auto);
    assert!(config.credential().is_none());
}

#[test]
fn test_config_merging_integration() {
    let base_config = AppConfig::default();
    let override_config = AppConfig {
        log_level: 3,
        jobs: 8,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let merged = base_config.merge_with(override_config);

    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.jobs, 8);
    assert_eq!(merged.color, ColorIntent::Never);
    assert_eq!(merged.net_timeout, 10);
    assert_eq!(merged.to_logger_config().level, LogLevel::Debug);
}

#[test]
fn test_cli_flags_flow_into_config() {
    let cli = Cli::try_parse_from([
        "reelmatch",
        "--tmdb-api-key",
        "k",
        "--cache-ttl",
        "30",
        "--language",
        "en-US",
        "similarity",
        "a",
        "b",
    ])
    .unwrap();

    let config = AppConfig::load_with_env(cli.config, &no_env()).unwrap();
    assert_eq!(config.tmdb_api_key.as_deref(), Some("k"));
    assert_eq!(config.cache_ttl, 30);
    assert_eq!(config.language, "en-US");
}

#[test]
fn test_invalid_cli_values_fail_validation() {
    let cli = Cli::try_parse_from(["reelmatch", "--cache-capacity", "0", "normalize", "x"]).unwrap();

    let err = AppConfig::load_with_env(cli.config, &no_env()).unwrap_err();
    match err {
        ConfigError::ValidationFailed { reason } => assert!(reason.contains("cache-capacity")),
        other => panic!("unexpected error: {other}"),
    }
}
