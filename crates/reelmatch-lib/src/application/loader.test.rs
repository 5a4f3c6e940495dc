use super::*;
use crate::primitives::ColorIntent;

fn env_of(pairs: &[(&str, &str)]) -> EnvironmentConfig {
    EnvironmentConfig::from_pairs(
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string())),
    )
    .unwrap()
}

#[test]
fn test_load_with_defaults() {
    let config = AppConfig::load_with_env(AppConfig::default(), &env_of(&[])).unwrap();
    assert_eq!(config.log_level, 0);
    assert_eq!(config.net_timeout, 10);
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_environment_color_applies_to_default() {
    let config = AppConfig::load_with_env(AppConfig::default(), &env_of(&[("NO_COLOR", "1")])).unwrap();
    assert_eq!(config.color, ColorIntent::Never);
}

#[test]
fn test_cli_color_beats_environment() {
    let cli = AppConfig {
        color: ColorIntent::Always,
        ..AppConfig::default()
    };
    let config = AppConfig::load_with_env(cli, &env_of(&[("NO_COLOR", "1")])).unwrap();
    assert_eq!(config.color, ColorIntent::Always);
}

#[test]
fn test_cli_values_are_validated() {
    let cli = AppConfig {
        jobs: 0,
        ..AppConfig::default()
    };
    let err = AppConfig::load_with_env(cli, &env_of(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_cli_overrides_survive_merge() {
    let cli = AppConfig {
        tmdb_api_key: Some("key".to_string()),
        tmdb_base_url: "http://127.0.0.1:1234/".to_string(),
        jobs: 8,
        ..AppConfig::default()
    };
    let config = AppConfig::load_with_env(cli, &env_of(&[])).unwrap();
    assert_eq!(config.tmdb_api_key.as_deref(), Some("key"));
    assert_eq!(config.tmdb_base_url, "http://127.0.0.1:1234");
    assert_eq!(config.jobs, 8);
}
