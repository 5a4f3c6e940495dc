use super::*;

#[test]
fn test_hidden_bar_tracks_position() {
    let styling = StyleManager::new(false);
    let progress = ProgressDisplay::new(&styling, false);

    let bar = progress.bar(3, "Resolving titles");
    assert_eq!(bar.length(), Some(3));
    assert_eq!(bar.position(), 0);

    bar.inc();
    bar.clone().inc();
    assert_eq!(bar.position(), 2);
}

#[test]
fn test_finish_marks_bar_finished() {
    let styling = StyleManager::new(false);
    let progress = ProgressDisplay::new(&styling, false);

    let bar = progress.bar(1, "Resolving titles");
    bar.inc();
    bar.finish("Resolved 1 title");
    assert!(bar.is_finished());

    let abandoned = progress.bar(2, "Resolving titles");
    abandoned.abandon("Interrupted");
    assert!(abandoned.is_finished());
}

#[test]
fn test_display_plain_hides_progress() {
    let display = crate::display::Display::plain();
    assert!(!display.styling().color_enabled());

    let bar = display.progress().bar(5, "Resolving titles");
    bar.set_message("Dune");
    bar.finish_clear();
    assert!(bar.is_finished());
}
