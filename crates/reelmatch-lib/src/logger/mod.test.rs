use super::*;

#[test]
fn test_filter_directives_scope_reelmatch_at_level() {
    let directives = filter_directives(LogLevel::Debug);
    assert!(directives.starts_with("reelmatch=debug,reelmatch_lib=debug"));
    assert!(directives.contains("reqwest=warn"));
    assert!(directives.contains("hyper_util=warn"));
    assert!(directives.ends_with(",debug"));
}

#[test]
fn test_filter_directives_parse_as_env_filter() {
    for level in [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        let directives = filter_directives(level);
        assert!(
            EnvFilter::try_new(&directives).is_ok(),
            "directives should parse: {directives}"
        );
    }
}

#[test]
fn test_logger_not_initialized_by_library_code() {
    // Only the binary installs the global subscriber
    assert!(!Logger::is_initialized());
    assert!(Logger::global().is_none());
}

#[test]
fn test_quiet_crates_held_at_warn_for_trace() {
    let directives = filter_directives(LogLevel::Trace);
    for name in QUIET_CRATES {
        assert!(directives.contains(&format!("{name}=warn")));
    }
    assert!(directives.contains("reelmatch_lib=trace"));
}
