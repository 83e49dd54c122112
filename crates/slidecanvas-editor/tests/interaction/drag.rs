//! Drag gestures: positioning, clamping, clicks and pager suspension.

use super::*;
use proptest::prelude::*;
use slidecanvas_editor::{GestureMode, GestureOutcome, PointerEvent};

#[test]
fn test_drag_moves_by_pointer_delta() {
    let (mut editor, deck) = editor();
    let id = place(&mut editor, 50.0, 50.0);

    let started = editor.handle_pointer(PointerEvent::down(1, pt(100.0, 100.0), body(id)));
    assert_eq!(
        started,
        GestureOutcome::Started {
            id,
            mode: GestureMode::Dragging
        }
    );
    assert!(
        !deck.borrow().allows_gestures(),
        "pager swipe should be suspended during the drag"
    );

    editor.handle_pointer(PointerEvent::moved(1, pt(120.0, 130.0)));
    editor.handle_pointer(PointerEvent::up(1, pt(120.0, 130.0)));

    assert_eq!(position(&editor, id), (70.0, 80.0));
    assert!(deck.borrow().allows_gestures());
    assert_eq!(deck.borrow().suspend_calls(), 1);
    assert_eq!(
        deck.borrow().resume_calls(),
        1,
        "pager must be resumed exactly once"
    );
    assert_eq!(editor.gesture_mode(), None);
}

#[test]
fn test_drag_selects_overlay_and_loads_inputs() {
    let (mut editor, _deck) = editor();
    let id = place(&mut editor, 50.0, 50.0);

    editor.handle_pointer(PointerEvent::down(1, pt(60.0, 60.0), body(id)));
    assert_eq!(editor.registry().selected_id(), Some(id));
    assert_eq!(editor.content_input(), "Hello");
}

#[test]
fn test_last_move_before_up_wins() {
    let (mut editor, _deck) = editor();
    let id = place(&mut editor, 100.0, 100.0);

    editor.handle_pointer(PointerEvent::down(1, pt(150.0, 150.0), body(id)));
    for step in 1..=10 {
        let offset = step as f64 * 7.0;
        editor.handle_pointer(PointerEvent::moved(1, pt(150.0 + offset, 150.0 + offset / 2.0)));
    }
    // The up position is not applied.
    editor.handle_pointer(PointerEvent::up(1, pt(400.0, 400.0)));

    assert_eq!(position(&editor, id), (170.0, 135.0));
}

#[test]
fn test_drag_clamps_to_slide() {
    let (mut editor, _deck) = editor();
    let id = place(&mut editor, 50.0, 50.0);
    let extent = editor
        .registry()
        .get(id)
        .expect("overlay")
        .rect(&slidecanvas_editor::ApproxTextMetrics::default());

    editor.handle_pointer(PointerEvent::down(1, pt(60.0, 60.0), body(id)));
    editor.handle_pointer(PointerEvent::moved(1, pt(-500.0, 2000.0)));
    editor.handle_pointer(PointerEvent::up(1, pt(-500.0, 2000.0)));

    let (left, top) = position(&editor, id);
    assert_eq!(left, 0.0);
    assert!(
        (top - (500.0 - extent.height)).abs() < 1e-9,
        "top should pin to the bottom edge, got {}",
        top
    );
}

#[test]
fn test_drag_round_trip_restores_position() {
    let (mut editor, _deck) = editor();
    let id = place(&mut editor, 200.0, 150.0);

    editor.handle_pointer(PointerEvent::down(1, pt(210.0, 160.0), body(id)));
    editor.handle_pointer(PointerEvent::moved(1, pt(245.0, 140.0)));
    editor.handle_pointer(PointerEvent::up(1, pt(245.0, 140.0)));
    assert_eq!(position(&editor, id), (235.0, 130.0));

    editor.handle_pointer(PointerEvent::down(1, pt(245.0, 140.0), body(id)));
    editor.handle_pointer(PointerEvent::moved(1, pt(210.0, 160.0)));
    editor.handle_pointer(PointerEvent::up(1, pt(210.0, 160.0)));
    assert_eq!(position(&editor, id), (200.0, 150.0));
}

#[test]
fn test_click_selects_without_moving() {
    let (mut editor, deck) = editor();
    let id = place(&mut editor, 50.0, 50.0);

    editor.handle_pointer(PointerEvent::down(1, pt(70.0, 70.0), body(id)));
    let outcome = editor.handle_pointer(PointerEvent::up(1, pt(71.0, 72.0)));

    assert_eq!(outcome, GestureOutcome::Clicked { id, nudged: false });
    assert_eq!(position(&editor, id), (50.0, 50.0));
    assert_eq!(editor.registry().selected_id(), Some(id));
    assert_eq!(deck.borrow().resume_calls(), 1);
}

#[test]
fn test_short_drag_still_moves() {
    let (mut editor, _deck) = editor();
    let id = place(&mut editor, 50.0, 50.0);

    editor.handle_pointer(PointerEvent::down(1, pt(100.0, 100.0), body(id)));
    let step = editor.handle_pointer(PointerEvent::moved(1, pt(102.0, 102.0)));
    let outcome = editor.handle_pointer(PointerEvent::up(1, pt(102.0, 102.0)));

    assert_eq!(step, GestureOutcome::Updated { id });
    assert_eq!(outcome, GestureOutcome::Clicked { id, nudged: true });
    assert_eq!(position(&editor, id), (52.0, 52.0));
}

#[test]
fn test_content_press_selects_without_gesture() {
    let (mut editor, deck) = editor();
    let id = place(&mut editor, 50.0, 50.0);

    let outcome = editor.handle_pointer(PointerEvent::down(1, pt(70.0, 70.0), content(id)));
    assert_eq!(outcome, GestureOutcome::Ignored);
    assert_eq!(editor.registry().selected_id(), Some(id));
    assert_eq!(deck.borrow().suspend_calls(), 0);

    let moved = editor.handle_pointer(PointerEvent::moved(1, pt(200.0, 200.0)));
    assert_eq!(moved, GestureOutcome::Ignored);
    assert_eq!(position(&editor, id), (50.0, 50.0));
}

#[test]
fn test_background_press_clears_selection() {
    let (mut editor, _deck) = editor();
    let id = place(&mut editor, 50.0, 50.0);
    editor.select(Some(id));
    assert_eq!(editor.content_input(), "Hello");

    editor.handle_pointer(PointerEvent::down(1, pt(700.0, 400.0), HitTarget::SlideBackground));
    assert_eq!(editor.registry().selected_id(), None);
    assert_eq!(editor.content_input(), "");
    assert!(!editor.view().form.is_enabled());
}

fn drag_by(editor: &mut EditorState, id: OverlayId, from: Point, dx: f64, dy: f64) {
    let to = pt(from.x + dx, from.y + dy);
    editor.handle_pointer(PointerEvent::down(1, from, body(id)));
    editor.handle_pointer(PointerEvent::moved(1, to));
    editor.handle_pointer(PointerEvent::up(1, to));
}

proptest! {
    #[test]
    fn prop_drag_and_reverse_drag_restore_position(dx in -190i32..480, dy in -140i32..280) {
        let (mut editor, _deck) = editor();
        let id = place(&mut editor, 200.0, 150.0);
        let (dx, dy) = (f64::from(dx), f64::from(dy));

        drag_by(&mut editor, id, pt(210.0, 160.0), dx, dy);
        prop_assert_eq!(position(&editor, id), (200.0 + dx, 150.0 + dy));

        drag_by(&mut editor, id, pt(210.0 + dx, 160.0 + dy), -dx, -dy);
        prop_assert_eq!(position(&editor, id), (200.0, 150.0));
    }
}
