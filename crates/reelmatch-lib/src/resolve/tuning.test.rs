use super::*;

#[test]
fn test_containment_steps_boundaries() {
    let tuning = MatchTuning::default();

    assert_eq!(tuning.containment_for_coverage(1.0), 0.98);
    assert_eq!(tuning.containment_for_coverage(0.92), 0.98);
    assert_eq!(tuning.containment_for_coverage(0.8), 0.90);
    assert_eq!(tuning.containment_for_coverage(0.75), 0.90);
    assert_eq!(tuning.containment_for_coverage(0.6), 0.80);
    assert_eq!(tuning.containment_for_coverage(0.5), 0.68);
    assert!((tuning.containment_for_coverage(0.25) - 0.1).abs() < 1e-12);
}

#[test]
fn test_year_adjustment() {
    let tuning = MatchTuning::default();

    assert_eq!(tuning.year_adjustment(Some(2022), Some(2022)), 0.08);
    assert_eq!(tuning.year_adjustment(Some(2022), Some(2021)), 0.03);
    assert_eq!(tuning.year_adjustment(Some(2021), Some(2022)), 0.03);
    assert_eq!(tuning.year_adjustment(Some(2022), Some(2019)), -0.08);
    assert_eq!(tuning.year_adjustment(None, Some(2019)), 0.0);
    assert_eq!(tuning.year_adjustment(Some(2019), None), 0.0);
}

#[test]
fn test_thresholds() {
    let tuning = MatchTuning::default();
    assert_eq!(tuning.threshold(true), 0.58);
    assert_eq!(tuning.threshold(false), 0.34);
}

#[test]
fn test_partial_override_from_json_keeps_defaults() {
    let tuning: MatchTuning =
        serde_json::from_str(r#"{"default_threshold": 0.5, "max_results_per_search": 5}"#).unwrap();

    assert_eq!(tuning.default_threshold, 0.5);
    assert_eq!(tuning.max_results_per_search, 5);
    assert_eq!(tuning.noisy_threshold, 0.58);
    assert_eq!(tuning.containment_steps[0].score, 0.98);
}
