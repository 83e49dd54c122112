//! Slide paging through the editor.

use super::*;
use slidecanvas_core::EditorError;

#[test]
fn test_go_to_slide_bounds() {
    let (mut editor, _deck) = editor();

    assert_eq!(
        editor.go_to_slide(3),
        Err(EditorError::InvalidSlide {
            index: 3,
            slide_count: 3
        })
    );
    assert_eq!(editor.go_to_slide(0), Ok(false));
    assert_eq!(editor.go_to_slide(2), Ok(true));
    assert_eq!(editor.active_slide(), 2);
}

#[test]
fn test_next_and_previous_stop_at_ends() {
    let (mut editor, _deck) = editor();

    assert!(!editor.previous_slide());
    assert!(editor.next_slide());
    assert!(editor.next_slide());
    assert!(!editor.next_slide());
    assert_eq!(editor.view().nav.current, 3);
    assert!(editor.previous_slide());
    assert_eq!(editor.active_slide(), 1);
}

#[test]
fn test_add_text_goes_to_active_slide() {
    let (mut editor, _deck) = editor();
    editor.go_to_slide(1).expect("slide 1 exists");
    let id = editor.add_text().expect("slide 1 exists");
    assert_eq!(editor.registry().get(id).map(|o| o.slide_index()), Some(1));
    assert_eq!(editor.registry().count_for_slide(0), 0);
}

#[test]
fn test_selection_from_other_slide_disables_form() {
    let (mut editor, _deck) = editor();
    let id = editor.add_text().expect("slide 0 exists");
    editor.select(Some(id));
    editor.next_slide();

    assert!(!editor.view().form.is_enabled());
    editor.previous_slide();
    assert!(editor.view().form.is_enabled());
}
