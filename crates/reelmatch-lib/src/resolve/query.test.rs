use super::*;

// ============================================================================
// Scoring variants
// ============================================================================

#[test]
fn test_query_variants_plain_title() {
    assert_eq!(build_query_title_variants("流浪地球"), vec!["流浪地球"]);
}

#[test]
fn test_query_variants_extract_bracketed_title() {
    let variants = build_query_title_variants("电影《流浪地球2》今日上映");
    assert_eq!(variants[0], "流浪地球2 今日上映");
    assert!(variants.contains(&"流浪地球2".to_string()));
}

#[test]
fn test_query_variants_first_clause() {
    let variants = build_query_title_variants("Mission: Impossible - Dead Reckoning");
    assert_eq!(
        variants,
        vec!["mission impossible dead reckoning", "mission"]
    );
}

#[test]
fn test_query_variants_season_title_collapses_to_one() {
    // Season hint is removed by normalization and by stripping alike
    assert_eq!(
        build_query_title_variants("权力的游戏 第二季"),
        vec!["权力的游戏"]
    );
}

#[test]
fn test_query_variants_ignore_short_brackets() {
    // One character inside the brackets is below the extraction minimum
    let variants = build_query_title_variants("《X》");
    assert_eq!(variants, vec!["x"]);
}

#[test]
fn test_query_variants_blank_input() {
    assert!(build_query_title_variants("").is_empty());
    assert!(build_query_title_variants("   ").is_empty());
}

// ============================================================================
// Search variants
// ============================================================================

#[test]
fn test_search_variants_keep_case_and_punctuation() {
    let variants = build_search_query_variants("Stranger  Things: Season 4");
    assert_eq!(
        variants,
        vec![
            "Stranger Things: Season 4",
            "Stranger Things:",
            "Stranger Things",
        ]
    );
}

#[test]
fn test_search_variants_season_query() {
    let variants = build_search_query_variants("怪奇物语 第四季");
    assert_eq!(variants, vec!["怪奇物语 第四季", "怪奇物语"]);
}

#[test]
fn test_search_variants_deduplicate() {
    assert_eq!(build_search_query_variants("Dune"), vec!["Dune"]);
}

#[test]
fn test_search_variants_blank_input() {
    assert!(build_search_query_variants(" \t ").is_empty());
}

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn test_bracketed_title_variants() {
    assert_eq!(bracketed_title("「进击的巨人」"), Some("进击的巨人".to_string()));
    assert_eq!(bracketed_title("『千与千寻』"), Some("千与千寻".to_string()));
    assert_eq!(bracketed_title("no brackets"), None);
    assert_eq!(bracketed_title("《 》"), None);
}

#[test]
fn test_first_clause() {
    assert_eq!(first_clause("寄生虫：黑白版"), Some("寄生虫"));
    assert_eq!(first_clause("Dune, Part Two"), Some("Dune"));
    assert_eq!(first_clause("Spider-Man"), None);
    assert_eq!(first_clause(": leading"), None);
}
