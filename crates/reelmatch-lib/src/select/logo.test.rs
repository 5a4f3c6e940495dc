use super::*;

fn logo(path: &str, language: Option<&str>, vote: f64, width: u32) -> LogoImage {
    LogoImage {
        file_path: path.to_string(),
        iso_639_1: language.map(str::to_string),
        vote_average: vote,
        width,
        height: 0,
        aspect_ratio: None,
    }
}

#[test]
fn test_language_beats_vote_average() {
    let logos = [
        logo("/en.png", Some("en"), 5.0, 500),
        logo("/zh.png", Some("zh"), 3.0, 500),
        logo("/null.png", None, 9.0, 500),
    ];

    let selected = select_logo(&logos, LanguagePreference::ZhFirst).unwrap();
    assert_eq!(selected.file_path, "/zh.png");
}

#[test]
fn test_unspecified_language_ranks_between_named_ones() {
    let logos = [
        logo("/en.png", Some("en"), 9.0, 500),
        logo("/null.png", None, 1.0, 500),
        logo("/ja.png", Some("ja"), 10.0, 500),
    ];

    assert_eq!(
        select_logo(&logos, LanguagePreference::ZhFirst)
            .unwrap()
            .file_path,
        "/null.png"
    );
    assert_eq!(
        select_logo(&logos, LanguagePreference::EnFirst)
            .unwrap()
            .file_path,
        "/en.png"
    );
}

#[test]
fn test_vote_then_width_break_ties() {
    let logos = [
        logo("/small.png", Some("zh"), 5.0, 300),
        logo("/large.png", Some("zh"), 5.0, 900),
        logo("/low.png", Some("zh"), 4.0, 2000),
    ];

    assert_eq!(
        select_logo(&logos, LanguagePreference::ZhFirst)
            .unwrap()
            .file_path,
        "/large.png"
    );
}

#[test]
fn test_language_rank_ordering() {
    let zh = LanguagePreference::ZhFirst;
    assert!(zh.rank(Some("zh")) > zh.rank(None));
    assert!(zh.rank(None) > zh.rank(Some("en")));
    assert!(zh.rank(Some("en")) > zh.rank(Some("fr")));
    assert_eq!(zh.rank(Some("")), zh.rank(None));
    assert_eq!(zh.rank(Some("ZH")), 3);
}

#[test]
fn test_aspect_ratio_derivation() {
    assert_eq!(logo_aspect_ratio(Some(4.2), 800, 200), Some(4.2));
    assert_eq!(logo_aspect_ratio(Some(0.0), 800, 200), Some(4.0));
    assert_eq!(logo_aspect_ratio(None, 800, 200), Some(4.0));
    assert_eq!(logo_aspect_ratio(None, 800, 0), None);
    assert_eq!(logo_aspect_ratio(Some(-1.0), 0, 0), None);
}

#[test]
fn test_selected_logo_carries_aspect_ratio() {
    let mut only = logo("/zh.png", Some("zh"), 1.0, 600);
    only.height = 200;

    let selected = select_logo(&[only], LanguagePreference::ZhFirst).unwrap();
    assert_eq!(selected.aspect_ratio, Some(3.0));

    let no_ratio = select_logo(&[logo("/x.png", None, 0.0, 0)], LanguagePreference::ZhFirst);
    assert_eq!(no_ratio.unwrap().aspect_ratio, None);
}

#[test]
fn test_empty_and_pathless_logos() {
    assert!(select_logo(&[], LanguagePreference::ZhFirst).is_none());
    assert!(select_logo(&[logo(" ", Some("zh"), 9.0, 100)], LanguagePreference::ZhFirst).is_none());
}
