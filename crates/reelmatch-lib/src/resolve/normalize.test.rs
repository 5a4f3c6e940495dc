use super::*;

// ============================================================================
// normalize_title_for_match
// ============================================================================

#[test]
fn test_normalize_strips_cjk_season_suffix() {
    assert_eq!(normalize_title_for_match("权力的游戏 第二季"), "权力的游戏");
    assert_eq!(normalize_title_for_match("怪奇物语 第 4 季"), "怪奇物语");
    assert_eq!(normalize_title_for_match("请回答1988 第1部"), "请回答1988");
}

#[test]
fn test_normalize_strips_english_season_and_media_words() {
    assert_eq!(
        normalize_title_for_match("Stranger Things Season 4"),
        "stranger things"
    );
    assert_eq!(normalize_title_for_match("The Bear S02"), "the bear");
    assert_eq!(normalize_title_for_match("Fargo TV Series 3"), "fargo");
    assert_eq!(normalize_title_for_match("The Movie Show"), "the");
}

#[test]
fn test_normalize_strips_cjk_media_words() {
    assert_eq!(normalize_title_for_match("繁花 电视剧"), "繁花");
    assert_eq!(normalize_title_for_match("流浪地球 電影"), "流浪地球");
    assert_eq!(normalize_title_for_match("乘风破浪 综艺"), "乘风破浪");
}

#[test]
fn test_normalize_folds_full_width_and_case() {
    assert_eq!(normalize_title_for_match("ＡＢＣ　Ｄｅｆ"), "abc def");
    assert_eq!(normalize_title_for_match("  Dune:   Part Two "), "dune part two");
}

#[test]
fn test_normalize_replaces_quotes_and_separators() {
    assert_eq!(normalize_title_for_match("《流浪地球》"), "流浪地球");
    assert_eq!(
        normalize_title_for_match("「进击的巨人」—最终季"),
        "进击的巨人 最终季"
    );
    assert_eq!(
        normalize_title_for_match("Spider-Man: Across the Spider-Verse"),
        "spider man across the spider verse"
    );
    assert_eq!(normalize_title_for_match("Tom & Jerry"), "tom jerry");
}

#[test]
fn test_normalize_drops_source_code_tokens() {
    assert_eq!(normalize_title_for_match("Dune hevc-1080"), "dune");
    assert_eq!(normalize_title_for_match("Dune [HEVC_2160]"), "dune");
}

#[test]
fn test_normalize_blank_input() {
    assert_eq!(normalize_title_for_match(""), "");
    assert_eq!(normalize_title_for_match("   \t\n "), "");
    assert_eq!(normalize_title_for_match("《》"), "");
}

#[test]
fn test_normalize_is_idempotent() {
    let samples = [
        "权力的游戏 第二季",
        "Stranger Things Season 4",
        "Movie.Name.2023.1080p-GROUP",
        "s tv 1",
        "《流浪地球2》",
        "ＳＰＹ×ＦＡＭＩＬＹ 第2部",
        "The Office (US) - Series 09",
        "Blade Runner 2049",
        "",
        "a",
        "tv movie show",
        "x-men: days of future past",
    ];

    for sample in samples {
        let once = normalize_title_for_match(sample);
        let twice = normalize_title_for_match(&once);
        assert_eq!(once, twice, "normalization should be idempotent for {sample:?}");
    }
}

#[test]
fn test_normalize_reaches_fixed_point_on_deep_nesting() {
    // Each pass pairs one more `s` with a `1`, so this needs ten passes
    let raw = format!("{}{}", "s ".repeat(10), "1 ".repeat(10));

    let once = normalize_title_for_match(&raw);
    assert_eq!(once, "");
    assert_eq!(normalize_title_for_match(&once), once);
}

#[test]
fn test_normalize_strips_latin_tokens_glued_to_cjk() {
    assert_eq!(normalize_title_for_match("怪奇物语tv"), "怪奇物语");
    assert_eq!(normalize_title_for_match("绝命毒师S05"), "绝命毒师");
    assert_eq!(normalize_title_for_match("怪奇物语Season4"), "怪奇物语");
    assert_eq!(normalize_title_for_match("流浪地球hevc1080"), "流浪地球");
}

#[test]
fn test_compact_removes_all_whitespace() {
    assert_eq!(
        to_compact_title_for_match("Stranger Things Season 4"),
        "strangerthings"
    );
    assert_eq!(to_compact_title_for_match("流浪 地球"), "流浪地球");
    assert_eq!(to_compact_title_for_match(""), "");
}

// ============================================================================
// has_season_intent
// ============================================================================

#[test]
fn test_season_intent_detection() {
    assert!(has_season_intent("权力的游戏 第二季"));
    assert!(!has_season_intent("权力的游戏"));
    assert!(has_season_intent("怪奇物语 第四季"));
    assert!(has_season_intent("The Bear Season 2"));
    assert!(has_season_intent("The Bear s02"));
    assert!(has_season_intent("Ｓｅａｓｏｎ　３"));
    assert!(!has_season_intent("Seven Samurai"));
    assert!(!has_season_intent("Blade Runner 2049"));
    assert!(!has_season_intent(""));
}

#[test]
fn test_season_intent_glued_to_cjk_title() {
    assert!(has_season_intent("绝命毒师S05"));
    assert!(has_season_intent("怪奇物语Season4"));
    assert!(has_season_intent("怪奇物语 S4"));
    assert!(!has_season_intent("怪奇物语tv"));
}

// ============================================================================
// strip_season_and_media_words
// ============================================================================

#[test]
fn test_strip_keeps_case_and_punctuation() {
    assert_eq!(
        strip_season_and_media_words("Stranger Things: Season 4"),
        "Stranger Things:"
    );
    assert_eq!(strip_season_and_media_words("权力的游戏 第二季"), "权力的游戏");
    assert_eq!(strip_season_and_media_words("繁花 电视剧"), "繁花");
    assert_eq!(strip_season_and_media_words("Dune"), "Dune");
}

// ============================================================================
// is_likely_noisy_query_title
// ============================================================================

#[test]
fn test_release_name_is_noisy() {
    assert!(is_likely_noisy_query_title("Movie.Name.2023.1080p-GROUP"));
    assert!(is_likely_noisy_query_title("Dune.Part.Two.2024.2160p.WEB-DL.x265"));
    assert!(is_likely_noisy_query_title("dune hevc-1080"));
    assert!(is_likely_noisy_query_title("流浪地球1080p"));
    assert!(is_likely_noisy_query_title("流浪地球abc123"));
}

#[test]
fn test_code_token_must_be_joined_to_count_as_noise() {
    assert!(is_likely_noisy_query_title("Apollo_13"));
    assert!(is_likely_noisy_query_title("apollo13"));
    assert!(!is_likely_noisy_query_title("Apollo 13"));
    assert!(!is_likely_noisy_query_title("Ocean 11"));
}

#[test]
fn test_plain_titles_are_not_noisy() {
    assert!(!is_likely_noisy_query_title("流浪地球"));
    assert!(!is_likely_noisy_query_title("权力的游戏 第二季"));
    assert!(!is_likely_noisy_query_title("Blade Runner 2049"));
    assert!(!is_likely_noisy_query_title("Spider-Man: No Way Home"));
    assert!(!is_likely_noisy_query_title(""));
}

#[test]
fn test_long_punctuation_heavy_query_is_noisy() {
    // 3+ marks and a compact form of 18+ characters
    assert!(is_likely_noisy_query_title(
        "the.lord.of.the.rings.fellowship"
    ));
    // Same punctuation but too short once compacted
    assert!(!is_likely_noisy_query_title("a.b.c.d"));
}
