use super::*;

fn env_of(pairs: &[(&str, &str)]) -> EnvironmentConfig {
    EnvironmentConfig::from_pairs(
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string())),
    )
    .unwrap()
}

#[test]
fn test_no_color_environment_variable() {
    let env_config = env_of(&[("NO_COLOR", "1")]);
    assert_eq!(env_config.apply_color_config(ColorIntent::Auto), ColorIntent::Never);
}

#[test]
fn test_force_color_environment_variable() {
    let env_config = env_of(&[("FORCE_COLOR", "1")]);
    assert_eq!(env_config.apply_color_config(ColorIntent::Auto), ColorIntent::Always);

    let env_config = env_of(&[("FORCE_COLOR", "false")]);
    assert_eq!(env_config.apply_color_config(ColorIntent::Always), ColorIntent::Never);
}

#[test]
fn test_environment_variable_precedence() {
    let env_config = env_of(&[("CLICOLOR", "0"), ("NO_COLOR", "1"), ("FORCE_COLOR", "1")]);

    // FORCE_COLOR wins over NO_COLOR and CLICOLOR
    assert_eq!(env_config.apply_color_config(ColorIntent::Auto), ColorIntent::Always);
}

#[test]
fn test_ci_environment_variable() {
    let env_config = env_of(&[("CI", "true"), ("FORCE_COLOR", "1")]);
    assert_eq!(env_config.apply_color_config(ColorIntent::Always), ColorIntent::Never);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let env_config = env_of(&[("NO_COLOR", "")]);
    assert_eq!(env_config.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_invalid_force_color_is_ignored() {
    let env_config = env_of(&[("FORCE_COLOR", "maybe")]);
    assert_eq!(env_config.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_unrelated_variables_are_ignored() {
    let env_config = env_of(&[("PATH", "/usr/bin"), ("HOME", "/root")]);
    assert_eq!(env_config.apply_color_config(ColorIntent::Never), ColorIntent::Never);
}
