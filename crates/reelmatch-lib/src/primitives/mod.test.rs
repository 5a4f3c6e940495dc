use super::*;

// =============================================================================
// PARSING: every variant and alias
// =============================================================================

macro_rules! test_enum_completeness {
    ($enum_type:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            for variant in <$enum_type>::value_variants() {
                let possible_value = variant.to_possible_value();
                assert!(
                    possible_value.is_some(),
                    "PossibleValue should exist for all variants"
                );

                // Round-trip through primary name
                let possible_val = possible_value.unwrap();
                let primary_name = possible_val.get_name();
                let parsed: Result<$enum_type, _> = primary_name.parse();
                assert!(
                    parsed.is_ok(),
                    "Primary name '{}' should parse correctly",
                    primary_name
                );
                assert_eq!(parsed.unwrap(), *variant);
            }
        }
    };
}

macro_rules! test_fromstr_aliases {
    ($enum_type:ty, $test_name:ident, $expected_mappings:expr) => {
        #[test]
        fn $test_name() {
            let mappings: &[(&str, $enum_type)] = &$expected_mappings;

            for (input, expected) in mappings {
                let parsed: Result<$enum_type, _> = input.parse();
                assert!(
                    parsed.is_ok(),
                    "Failed to parse '{}' for {}",
                    input,
                    stringify!($enum_type)
                );
                assert_eq!(
                    parsed.unwrap(),
                    *expected,
                    "Wrong variant for input '{}', expected {:?}",
                    input,
                    expected
                );
            }
        }
    };
}

test_enum_completeness!(LogLevel, test_log_level_completeness);
test_enum_completeness!(LogFormat, test_log_format_completeness);
test_enum_completeness!(LogOutput, test_log_output_completeness);
test_enum_completeness!(ColorIntent, test_color_intent_completeness);
test_enum_completeness!(MediaType, test_media_type_completeness);

test_fromstr_aliases!(
    LogLevel,
    test_log_level_aliases,
    [
        ("error", LogLevel::Error),
        ("err", LogLevel::Error),
        ("warn", LogLevel::Warning),
        ("warning", LogLevel::Warning),
        ("info", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("trace", LogLevel::Trace),
        ("verbose", LogLevel::Trace),
    ]
);

test_fromstr_aliases!(
    LogFormat,
    test_log_format_aliases,
    [
        ("text", LogFormat::Text),
        ("plain", LogFormat::Text),
        ("json", LogFormat::Json),
        ("pretty", LogFormat::Pretty),
        ("yaml", LogFormat::Pretty),
    ]
);

test_fromstr_aliases!(
    ColorIntent,
    test_color_intent_aliases,
    [
        ("auto", ColorIntent::Auto),
        ("detect", ColorIntent::Auto),
        ("always", ColorIntent::Always),
        ("force", ColorIntent::Always),
        ("never", ColorIntent::Never),
        ("off", ColorIntent::Never),
    ]
);

test_fromstr_aliases!(
    MediaType,
    test_media_type_aliases,
    [
        ("movie", MediaType::Movie),
        ("film", MediaType::Movie),
        ("tv", MediaType::Tv),
        ("TV", MediaType::Tv),
        ("series", MediaType::Tv),
    ]
);

// =============================================================================
// BEHAVIORS
// =============================================================================

#[test]
fn test_invalid_media_type_reports_value() {
    let err = "person".parse::<MediaType>().unwrap_err();
    match err {
        ConfigError::ParseError { value, .. } => assert_eq!(value, "person"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_media_type_other_is_involution() {
    assert_eq!(MediaType::Movie.other(), MediaType::Tv);
    assert_eq!(MediaType::Tv.other(), MediaType::Movie);
    assert_eq!(MediaType::Movie.other().other(), MediaType::Movie);
}

#[test]
fn test_media_type_from_reported_rejects_person() {
    assert_eq!(MediaType::from_reported("movie"), Some(MediaType::Movie));
    assert_eq!(MediaType::from_reported(" TV "), Some(MediaType::Tv));
    assert_eq!(MediaType::from_reported("person"), None);
    assert_eq!(MediaType::from_reported(""), None);
}

#[test]
fn test_search_endpoint_year_params() {
    assert_eq!(SearchEndpoint::Movie.year_param(), Some("year"));
    assert_eq!(
        SearchEndpoint::Tv.year_param(),
        Some("first_air_date_year")
    );
    assert_eq!(SearchEndpoint::Multi.year_param(), None);
    assert_eq!(SearchEndpoint::from(MediaType::Tv), SearchEndpoint::Tv);
    assert_eq!(SearchEndpoint::Multi.media_type(), None);
}

#[test]
fn test_log_level_from_verbosity_boundary_conditions() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warning);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(u8::MAX), LogLevel::Trace);
}

#[test]
fn test_color_intent_explicit_values() {
    assert!(ColorIntent::Always.enabled());
    assert!(!ColorIntent::Never.enabled());
}
