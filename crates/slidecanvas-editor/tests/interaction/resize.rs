//! Resize gestures from the corner handle.

use super::*;
use slidecanvas_editor::{GestureMode, GestureOutcome, PointerEvent, MIN_HEIGHT, MIN_WIDTH};

fn sized(editor: &mut EditorState, left: f64, top: f64, width: f64, height: f64) -> OverlayId {
    let id = place(editor, left, top);
    editor.set_geometry(id, left, top, Some(width), Some(height));
    id
}

fn size_of(editor: &EditorState, id: OverlayId) -> (Option<f64>, Option<f64>) {
    let g = editor.registry().get(id).expect("overlay").geometry();
    (g.width, g.height)
}

#[test]
fn test_resize_clamps_to_container_edge() {
    let (mut editor, _deck) = editor_with_surface(600.0, 400.0);
    let id = sized(&mut editor, 500.0, 100.0, 80.0, 40.0);
    assert_eq!(size_of(&editor, id), (Some(80.0), Some(40.0)));

    let started = editor.handle_pointer(PointerEvent::down(1, pt(578.0, 138.0), handle(id)));
    assert_eq!(
        started,
        GestureOutcome::Started {
            id,
            mode: GestureMode::Resizing
        }
    );
    editor.handle_pointer(PointerEvent::moved(1, pt(778.0, 138.0)));
    editor.handle_pointer(PointerEvent::up(1, pt(778.0, 138.0)));

    assert_eq!(
        size_of(&editor, id),
        (Some(100.0), Some(40.0)),
        "width should clamp to 600 - 500"
    );
    assert_eq!(position(&editor, id), (500.0, 100.0));
}

#[test]
fn test_resize_respects_minimum() {
    let (mut editor, _deck) = editor();
    let id = sized(&mut editor, 100.0, 100.0, 200.0, 100.0);

    editor.handle_pointer(PointerEvent::down(1, pt(300.0, 200.0), handle(id)));
    editor.handle_pointer(PointerEvent::moved(1, pt(0.0, 0.0)));
    editor.handle_pointer(PointerEvent::up(1, pt(0.0, 0.0)));

    assert_eq!(size_of(&editor, id), (Some(MIN_WIDTH), Some(MIN_HEIGHT)));
    assert_eq!(position(&editor, id), (100.0, 100.0));
}

#[test]
fn test_resize_of_auto_sized_overlay_starts_from_measured_extent() {
    let (mut editor, _deck) = editor();
    let id = place(&mut editor, 100.0, 100.0);
    let measured = editor
        .registry()
        .get(id)
        .expect("overlay")
        .rect(&slidecanvas_editor::ApproxTextMetrics::default());
    assert_eq!(size_of(&editor, id), (None, None));

    editor.handle_pointer(PointerEvent::down(1, pt(200.0, 150.0), handle(id)));
    editor.handle_pointer(PointerEvent::moved(1, pt(220.0, 160.0)));
    editor.handle_pointer(PointerEvent::up(1, pt(220.0, 160.0)));

    let (width, height) = size_of(&editor, id);
    assert_eq!(width, Some(measured.width + 20.0));
    assert_eq!(height, Some(measured.height + 10.0));
}

#[test]
fn test_resize_handle_does_not_drag() {
    let (mut editor, _deck) = editor();
    let id = sized(&mut editor, 100.0, 100.0, 120.0, 60.0);

    editor.handle_pointer(PointerEvent::down(1, pt(220.0, 160.0), handle(id)));
    assert_eq!(editor.gesture_mode(), Some(GestureMode::Resizing));
    editor.handle_pointer(PointerEvent::moved(1, pt(260.0, 190.0)));
    let outcome = editor.handle_pointer(PointerEvent::up(1, pt(260.0, 190.0)));

    assert_eq!(
        outcome,
        GestureOutcome::Finished {
            id,
            mode: GestureMode::Resizing
        }
    );
    assert_eq!(position(&editor, id), (100.0, 100.0));
    assert_eq!(size_of(&editor, id), (Some(160.0), Some(90.0)));
}
