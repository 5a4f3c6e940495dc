use super::*;

#[test]
fn test_config_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.tmdb_api_key, None);
    assert_eq!(config.tmdb_base_url, "https://api.themoviedb.org/3");
    assert_eq!(config.language, "zh-CN");
    assert_eq!(config.net_timeout, 10);
    assert_eq!(config.resolve_timeout, 30);
    assert_eq!(config.cache_ttl, 600);
    assert_eq!(config.cache_capacity, 256);
    assert_eq!(config.jobs, 4);
    assert_eq!(config.log_level, 0);
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_config_merging() {
    let base = AppConfig {
        tmdb_api_key: Some("from-env-file".to_string()),
        ..AppConfig::default()
    };
    let override_config = AppConfig {
        log_level: 3,
        color: ColorIntent::Never,
        cache_capacity: 16,
        ..AppConfig::default()
    };

    let merged = base.merge_with(override_config);
    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.color, ColorIntent::Never);
    assert_eq!(merged.cache_capacity, 16);
    assert_eq!(merged.tmdb_api_key.as_deref(), Some("from-env-file"));
    assert_eq!(merged.net_timeout, 10);
}

#[test]
fn test_validate_rejects_zero_values() {
    for mutate in [
        (|c: &mut AppConfig| c.net_timeout = 0) as fn(&mut AppConfig),
        |c| c.resolve_timeout = 0,
        |c| c.cache_ttl = 0,
        |c| c.cache_capacity = 0,
        |c| c.jobs = 0,
    ] {
        let mut config = AppConfig::default();
        mutate(&mut config);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationFailed { .. })
        ));
    }
}

#[test]
fn test_validate_normalizes_base_url() {
    let mut config = AppConfig {
        tmdb_base_url: " http://127.0.0.1:8080/3/ ".to_string(),
        ..AppConfig::default()
    };
    config.validate().unwrap();
    assert_eq!(config.tmdb_base_url, "http://127.0.0.1:8080/3");

    let mut bad = AppConfig {
        tmdb_base_url: "ftp://example.org".to_string(),
        ..AppConfig::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn test_derived_configs() {
    let config = AppConfig {
        net_timeout: 5,
        jobs: 2,
        cache_ttl: 60,
        cache_capacity: 8,
        log_level: 2,
        ..AppConfig::default()
    };

    let networking = config.to_networking_config();
    assert_eq!(networking.max_jobs, 2);
    assert_eq!(networking.timeout, Duration::from_secs(5));

    let cache = config.to_cache_config();
    assert_eq!(cache.ttl, Duration::from_secs(60));
    assert_eq!(cache.capacity, 8);

    assert_eq!(config.to_logger_config().level, LogLevel::Info);
    assert_eq!(config.resolve_deadline(), Duration::from_secs(30));
}

#[test]
fn test_credential_from_config() {
    let none = AppConfig::default();
    assert!(none.credential().is_none());

    let blank = AppConfig {
        tmdb_api_key: Some("  ".to_string()),
        ..AppConfig::default()
    };
    assert!(blank.credential().is_none());

    let key = AppConfig {
        tmdb_api_key: Some("abc".to_string()),
        ..AppConfig::default()
    };
    assert_eq!(key.credential(), Some(TmdbCredential::ApiKey("abc".to_string())));
}
