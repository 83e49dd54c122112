//! Adding, deleting, resetting and seeding overlays.

use super::*;
use proptest::prelude::*;
use slidecanvas_core::OverlayId;
use slidecanvas_editor::{PropertyForm, PLACEHOLDER_TEXT};

#[test]
fn test_second_overlay_is_offset_by_thirty() {
    let (mut editor, _deck) = editor();
    let first = editor.add_text().expect("slide 0 exists");
    let second = editor.add_text().expect("slide 0 exists");

    let g1 = editor.registry().get(first).expect("first").geometry();
    let g2 = editor.registry().get(second).expect("second").geometry();
    assert_eq!((g1.left, g1.top), (300.0, 220.0));
    assert_eq!(g2.left - g1.left, 30.0);
    assert_eq!(g2.top - g1.top, 30.0);
}

#[test]
fn test_add_text_uses_inputs_and_resets_content() {
    let (mut editor, _deck) = editor();
    editor.set_content_input("Hello");
    let id = editor.add_text().expect("slide 0 exists");

    assert_eq!(editor.registry().get(id).map(|o| o.content()), Some("Hello"));
    assert_eq!(editor.content_input(), PLACEHOLDER_TEXT);
    assert_eq!(editor.registry().selected_id(), None);
}

#[test]
fn test_add_text_with_empty_input_uses_placeholder() {
    let (mut editor, _deck) = editor();
    editor.set_content_input("");
    let id = editor.add_text().expect("slide 0 exists");
    assert_eq!(
        editor.registry().get(id).map(|o| o.content()),
        Some(PLACEHOLDER_TEXT)
    );
}

#[test]
fn test_delete_selected_clears_form() {
    let (mut editor, _deck) = editor();
    let id = editor.add_text().expect("slide 0 exists");
    editor.select(Some(id));
    assert!(editor.view().form.is_enabled());

    assert!(editor.delete_selected());
    assert_eq!(editor.registry().selected_id(), None);
    assert_eq!(editor.view().form, PropertyForm::Disabled);
    assert_eq!(editor.content_input(), "");
}

#[test]
fn test_delete_missing_is_noop() {
    let (mut editor, _deck) = editor();
    editor.add_text().expect("slide 0 exists");
    let revision = editor.registry().revision();

    assert!(!editor.delete_overlay(OverlayId(12345)));
    assert_eq!(editor.registry().revision(), revision);
    assert_eq!(editor.registry().len(), 1);
}

#[test]
fn test_reset_active_slide_leaves_other_slides() {
    let (mut editor, _deck) = editor();
    assert_eq!(editor.seed_default_content(), 6);
    let on_slide_one = editor
        .registry()
        .overlays_for_slide(1)
        .next()
        .map(|o| o.id());
    editor.select(on_slide_one);

    assert_eq!(editor.reset_active_slide(), 2);
    assert_eq!(editor.registry().count_for_slide(0), 0);
    assert_eq!(editor.registry().count_for_slide(1), 2);
    assert_eq!(editor.registry().count_for_slide(2), 2);
    assert_eq!(
        editor.registry().selected_id(),
        on_slide_one,
        "selection on another slide survives"
    );
}

#[test]
fn test_reset_clears_selection_on_that_slide() {
    let (mut editor, _deck) = editor();
    let id = editor.add_text().expect("slide 0 exists");
    editor.select(Some(id));

    editor.reset_active_slide();
    assert_eq!(editor.registry().selected_id(), None);
}

#[test]
fn test_seeded_content_matches_defaults() {
    let (mut editor, _deck) = editor();
    editor.seed_default_content();

    let labels: Vec<_> = editor
        .registry()
        .overlays_for_slide(0)
        .map(|o| o.content().to_string())
        .collect();
    assert_eq!(labels, vec!["Welcome to Canvas", "Create beautiful designs"]);

    let first = editor.registry().overlays_for_slide(0).next().expect("seed");
    assert_eq!((first.geometry().left, first.geometry().top), (80.0, 100.0));
    assert_eq!(first.style().font_size_px, 32.0);
}

#[test]
fn test_seeding_skips_missing_slides() {
    let deck = shared(DeckPager::new(1, Size::new(800.0, 500.0)));
    let pager: Shared<dyn SlidePager> = deck;
    let mut editor = EditorState::new(pager, EditorConfig::default());
    assert_eq!(editor.seed_default_content(), 2);
}

#[derive(Debug, Clone)]
enum Action {
    Add,
    Select(usize),
    Deselect,
    Delete(usize),
    Next,
    Previous,
    Reset,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Add),
        (0usize..8).prop_map(Action::Select),
        Just(Action::Deselect),
        (0usize..8).prop_map(Action::Delete),
        Just(Action::Next),
        Just(Action::Previous),
        Just(Action::Reset),
    ]
}

proptest! {
    #[test]
    fn prop_selection_always_points_at_a_live_overlay(actions in prop::collection::vec(action(), 1..40)) {
        let (mut editor, _deck) = editor();
        for action in actions {
            let ids: Vec<OverlayId> = editor.registry().iter().map(|o| o.id()).collect();
            match action {
                Action::Add => { editor.add_text().ok(); }
                Action::Select(i) => { editor.select(ids.get(i).copied()); }
                Action::Deselect => { editor.select(None); }
                Action::Delete(i) => { if let Some(id) = ids.get(i) { editor.delete_overlay(*id); } }
                Action::Next => { editor.next_slide(); }
                Action::Previous => { editor.previous_slide(); }
                Action::Reset => { editor.reset_active_slide(); }
            }

            if let Some(selected) = editor.registry().selected_id() {
                prop_assert!(editor.registry().get(selected).is_some());
            }
            let active_rows = editor.view().panel.rows.iter().filter(|r| r.active).count();
            prop_assert!(active_rows <= 1);
        }
    }

    #[test]
    fn prop_reset_removes_exactly_one_slide(adds in prop::collection::vec(0usize..3, 1..20), target in 0usize..3) {
        let (mut editor, _deck) = editor();
        for slide in &adds {
            editor.go_to_slide(*slide).ok();
            editor.add_text().ok();
        }
        let before: Vec<usize> = (0..3).map(|s| editor.registry().count_for_slide(s)).collect();

        editor.go_to_slide(target).ok();
        let removed = editor.reset_active_slide();

        prop_assert_eq!(removed, before[target]);
        for slide in 0..3 {
            let expected = if slide == target { 0 } else { before[slide] };
            prop_assert_eq!(editor.registry().count_for_slide(slide), expected);
        }
    }
}
