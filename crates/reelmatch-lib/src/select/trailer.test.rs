use super::*;

fn video(key: &str, official: bool, language: Option<&str>) -> Video {
    Video {
        key: key.to_string(),
        site: "YouTube".to_string(),
        video_type: "Trailer".to_string(),
        official,
        iso_639_1: language.map(str::to_string),
        name: None,
    }
}

#[test]
fn test_official_beats_language() {
    let videos = [video("zh-fan", false, Some("zh")), video("en-official", true, Some("en"))];

    assert_eq!(
        select_trailer_url(&videos),
        "https://www.youtube.com/watch?v=en-official"
    );
}

#[test]
fn test_language_order_among_equals() {
    let videos = [
        video("fr", true, Some("fr")),
        video("none", true, None),
        video("en", true, Some("en")),
        video("zh", true, Some("zh")),
    ];
    assert_eq!(select_trailer(&videos).map(|v| v.key.as_str()), Some("zh"));

    let videos = [video("fr", true, Some("fr")), video("none", true, None)];
    assert_eq!(select_trailer(&videos).map(|v| v.key.as_str()), Some("none"));
}

#[test]
fn test_filters_site_type_and_key() {
    let mut vimeo = video("vimeo", true, Some("zh"));
    vimeo.site = "Vimeo".to_string();
    let mut teaser = video("teaser", true, Some("zh"));
    teaser.video_type = "Teaser".to_string();
    let keyless = video("  ", true, Some("zh"));
    let fallback = video("plain", false, Some("ja"));

    let videos = [vimeo, teaser, keyless, fallback];
    assert_eq!(select_trailer(&videos).map(|v| v.key.as_str()), Some("plain"));
}

#[test]
fn test_no_trailer_yields_empty_url() {
    assert_eq!(select_trailer_url(&[]), "");

    let mut clip = video("clip", true, None);
    clip.video_type = "Clip".to_string();
    assert_eq!(select_trailer_url(&[clip]), "");
}

#[test]
fn test_language_rank() {
    assert_eq!(language_rank(Some("zh")), 3);
    assert_eq!(language_rank(Some("EN")), 2);
    assert_eq!(language_rank(None), 1);
    assert_eq!(language_rank(Some(" ")), 1);
    assert_eq!(language_rank(Some("ko")), 0);
}
