use super::*;

#[test]
fn test_plain_styling_is_identity() {
    let styling = StyleManager::new(false);

    assert!(!styling.color_enabled());
    assert_eq!(styling.style_success("ok"), "ok");
    assert_eq!(styling.style_error("bad"), "bad");
    assert_eq!(styling.style_subtle("quiet"), "quiet");
    assert_eq!(styling.format_field("rating", "US PG-13"), "rating: US PG-13");
}

#[test]
fn test_forced_color_emits_ansi() {
    let styling = StyleManager::new(true);

    let styled = styling.style_error("bad");
    assert!(styled.contains("\u{1b}["));
    assert_eq!(console::strip_ansi_codes(&styled), "bad");
}

#[test]
fn test_formatted_messages_keep_text() {
    let styling = StyleManager::new(false);

    assert!(styling.format_success("resolved").ends_with(" resolved"));
    assert!(styling.format_error("not found").ends_with(" not found"));
    assert!(styling.format_warning("slow").ends_with(" slow"));
}
