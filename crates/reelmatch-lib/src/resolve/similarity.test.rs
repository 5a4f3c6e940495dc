use super::*;

fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

// ============================================================================
// Bounds and identities
// ============================================================================

#[test]
fn test_identical_titles_score_one() {
    for title in ["流浪地球", "a", "strangerthings", "权力的游戏"] {
        assert_eq!(similarity(title, title), 1.0, "identity for {title:?}");
    }
}

#[test]
fn test_empty_input_scores_zero() {
    assert_eq!(similarity("", "流浪地球"), 0.0);
    assert_eq!(similarity("流浪地球", ""), 0.0);
    assert_eq!(similarity("", ""), 0.0);
}

#[test]
fn test_similarity_is_symmetric_and_bounded() {
    let titles = [
        "流浪地球",
        "流浪地球2",
        "strangerthings",
        "stranger",
        "a",
        "ab",
        "ba",
        "aaaa",
        "权力的游戏",
        "游戏",
        "dune",
        "duneparttwo",
    ];

    for a in titles {
        for b in titles {
            let forward = similarity(a, b);
            let backward = similarity(b, a);
            assert_eq!(forward, backward, "symmetry for {a:?} / {b:?}");
            assert!(
                (0.0..=1.0).contains(&forward),
                "bounds for {a:?} / {b:?}: {forward}"
            );
        }
    }
}

// ============================================================================
// Dice coefficient
// ============================================================================

#[test]
fn test_dice_counts_repeated_bigrams_as_multiset() {
    // "aaaa" has three "aa" grams, "aa" has one
    assert!(approx(dice_coefficient("aaaa", "aa"), 2.0 * 1.0 / 4.0));
}

#[test]
fn test_dice_single_character_titles() {
    assert_eq!(dice_coefficient("a", "a"), 1.0);
    assert_eq!(dice_coefficient("a", "b"), 0.0);
    assert_eq!(dice_coefficient("", ""), 0.0);
}

#[test]
fn test_dice_partial_overlap() {
    // 流浪/浪地/地球 vs 流浪/浪地/地球/球2
    assert!(approx(dice_coefficient("流浪地球", "流浪地球2"), 6.0 / 7.0));
}

// ============================================================================
// Containment score
// ============================================================================

#[test]
fn test_containment_requires_substring() {
    let tuning = MatchTuning::default();
    assert_eq!(containment_score("dune", "arrival", &tuning), 0.0);
    assert_eq!(containment_score("ab", "ba", &tuning), 0.0);
}

#[test]
fn test_containment_step_mapping() {
    let tuning = MatchTuning::default();

    // 4 of 5 chars covered -> 0.8 -> 0.90
    assert_eq!(containment_score("流浪地球", "流浪地球2", &tuning), 0.90);
    // 4 of 11 -> 0.36 -> linear 0.4 * coverage
    assert!(approx(
        containment_score("dune", "duneparttwo", &tuning),
        4.0 / 11.0 * 0.4
    ));
    // 2 of 5 -> 0.4 (below 0.45)
    assert!(approx(containment_score("游戏", "权力的游戏", &tuning), 0.4 * 0.4));
    // 3 of 5 -> 0.6 -> 0.80
    assert_eq!(containment_score("的游戏", "权力的游戏", &tuning), 0.80);
}

#[test]
fn test_containment_beats_dice_for_near_equal_substrings() {
    let score = similarity("流浪地球", "流浪地球2");
    assert_eq!(score, 0.90);
    assert!(score > 0.34);
}

// ============================================================================
// Raw title similarity
// ============================================================================

#[test]
fn test_title_similarity_normalizes_both_sides() {
    assert_eq!(title_similarity("《流浪地球》", "流浪地球 电影"), 1.0);
    assert_eq!(
        title_similarity("Stranger Things Season 4", "stranger things"),
        1.0
    );
    assert_eq!(title_similarity("", "Stranger Things"), 0.0);
}

#[test]
fn test_custom_tuning_changes_containment() {
    let mut tuning = MatchTuning::default();
    tuning.containment_steps[1].score = 0.5;

    // Dice (6/7) now wins over the lowered containment step
    assert!(approx(
        similarity_with("流浪地球", "流浪地球2", &tuning),
        6.0 / 7.0
    ));
}
