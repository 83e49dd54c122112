//! Style and content inputs.

use super::*;
use slidecanvas_editor::{Color, FontFamily, TextAlign};

#[test]
fn test_inputs_update_selected_overlay() {
    let (mut editor, _deck) = editor();
    let id = editor.add_text().expect("slide 0 exists");
    editor.select(Some(id));

    assert!(editor.set_font_family(FontFamily::new("'Dancing Script', cursive")));
    assert!(editor.set_text_align(TextAlign::Right));
    assert!(editor.set_font_size(40.0));
    assert!(editor.set_text_color("#112233"));
    assert!(editor.set_background_color("rgba(10, 20, 30, 0.5)"));

    let style = editor.registry().get(id).expect("overlay").style().clone();
    assert_eq!(style.font_family.display_name(), "Dancing Script");
    assert_eq!(style.text_align, TextAlign::Right);
    assert_eq!(style.font_size_px, 40.0);
    assert_eq!(style.text_color, Color::rgb(0x11, 0x22, 0x33));
    assert_eq!(style.background_color, Color::rgba(10, 20, 30, 0.5));

    let fields = editor.view().form.fields().cloned().expect("form enabled");
    assert_eq!(fields.background_hex, "#0a141e");
    assert_eq!(fields.align, TextAlign::Right);
}

#[test]
fn test_inputs_without_selection_only_change_draft() {
    let (mut editor, _deck) = editor();
    let existing = editor.add_text().expect("slide 0 exists");

    assert!(!editor.set_font_size(48.0));
    assert_eq!(editor.draft_style().font_size_px, 48.0);
    assert_eq!(
        editor.registry().get(existing).map(|o| o.style().font_size_px),
        Some(24.0)
    );

    let next = editor.add_text().expect("slide 0 exists");
    assert_eq!(
        editor.registry().get(next).map(|o| o.style().font_size_px),
        Some(48.0)
    );
}

#[test]
fn test_font_size_is_coerced() {
    let (mut editor, _deck) = editor();
    let id = editor.add_text().expect("slide 0 exists");
    editor.select(Some(id));

    editor.set_font_size(500.0);
    assert_eq!(editor.registry().get(id).map(|o| o.style().font_size_px), Some(120.0));
    editor.set_font_size(f64::NAN);
    assert_eq!(editor.registry().get(id).map(|o| o.style().font_size_px), Some(8.0));
}

#[test]
fn test_malformed_colors_fall_back() {
    let (mut editor, _deck) = editor();
    let id = editor.add_text().expect("slide 0 exists");
    editor.select(Some(id));
    editor.set_text_color("#000000");
    editor.set_background_color("#000000");

    editor.set_text_color("not-a-color");
    editor.set_background_color("rgb(1, 2)");

    let fields = editor.view().form.fields().cloned().expect("form enabled");
    assert_eq!(fields.text_color_hex, "#ffffff");
    assert_eq!(fields.background_hex, "#8b5a2b");
}

#[test]
fn test_content_input_edits_selected_overlay() {
    let (mut editor, _deck) = editor();
    let id = editor.add_text().expect("slide 0 exists");
    editor.select(Some(id));

    assert!(editor.set_content_input("Edited"));
    assert_eq!(editor.registry().get(id).map(|o| o.content()), Some("Edited"));
    assert_eq!(editor.view().panel.rows[0].label, "Edited");
}

#[test]
fn test_in_place_edit_syncs_content_input() {
    let (mut editor, _deck) = editor();
    let id = editor.add_text().expect("slide 0 exists");
    editor.select(Some(id));

    assert!(editor.edit_content(id, "Typed on canvas"));
    assert_eq!(editor.content_input(), "Typed on canvas");
    assert!(!editor.edit_content(id, "Typed on canvas"));
}

#[test]
fn test_selecting_loads_overlay_style_into_draft() {
    let (mut editor, _deck) = editor();
    editor.seed_default_content();
    let second = editor
        .registry()
        .overlays_for_slide(0)
        .nth(1)
        .map(|o| o.id());

    editor.select(second);
    assert_eq!(editor.draft_style().font_family.display_name(), "Great Vibes");
    assert_eq!(editor.draft_style().background_color, Color::rgba(139, 90, 43, 0.8));
    assert_eq!(editor.content_input(), "Create beautiful designs");
}
