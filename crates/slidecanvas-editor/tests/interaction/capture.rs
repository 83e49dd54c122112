//! Pointer capture and abnormal gesture exits.

use super::*;
use slidecanvas_editor::{GestureMode, GestureOutcome, PointerButton, PointerEvent};

#[test]
fn test_lost_capture_resumes_pager() {
    let (mut editor, deck) = editor();
    let id = place(&mut editor, 50.0, 50.0);

    editor.handle_pointer(PointerEvent::down(1, pt(100.0, 100.0), body(id)));
    editor.handle_pointer(PointerEvent::moved(1, pt(110.0, 120.0)));
    let outcome = editor.handle_pointer(PointerEvent::lost_capture(1));

    assert_eq!(
        outcome,
        GestureOutcome::Cancelled {
            id,
            mode: GestureMode::Dragging
        }
    );
    assert_eq!(editor.gesture_mode(), None);
    assert!(deck.borrow().allows_gestures());
    assert_eq!(deck.borrow().resume_calls(), 1);
    // Geometry keeps the last applied move.
    assert_eq!(position(&editor, id), (60.0, 70.0));

    // Later moves are not routed anywhere.
    let after = editor.handle_pointer(PointerEvent::moved(1, pt(300.0, 300.0)));
    assert_eq!(after, GestureOutcome::Ignored);
    assert_eq!(position(&editor, id), (60.0, 70.0));
}

#[test]
fn test_cancel_resumes_pager() {
    let (mut editor, deck) = editor();
    let id = place(&mut editor, 50.0, 50.0);

    editor.handle_pointer(PointerEvent::down(3, pt(60.0, 60.0), handle(id)));
    editor.handle_pointer(PointerEvent::cancel(3));

    assert!(deck.borrow().allows_gestures());
    assert_eq!(deck.borrow().resume_calls(), 1);
}

#[test]
fn test_second_pointer_is_ignored_while_captured() {
    let (mut editor, deck) = editor();
    let a = place(&mut editor, 50.0, 50.0);
    let b = place(&mut editor, 300.0, 300.0);

    editor.handle_pointer(PointerEvent::down(1, pt(60.0, 60.0), body(a)));
    let second = editor.handle_pointer(PointerEvent::down(2, pt(310.0, 310.0), body(b)));
    assert_eq!(second, GestureOutcome::Ignored);
    assert_eq!(editor.registry().selected_id(), Some(a));

    editor.handle_pointer(PointerEvent::moved(2, pt(400.0, 400.0)));
    editor.handle_pointer(PointerEvent::up(2, pt(400.0, 400.0)));
    assert_eq!(editor.gesture_mode(), Some(GestureMode::Dragging));
    assert_eq!(position(&editor, a), (50.0, 50.0));
    assert_eq!(position(&editor, b), (300.0, 300.0));

    editor.handle_pointer(PointerEvent::up(1, pt(60.0, 60.0)));
    assert_eq!(deck.borrow().suspend_calls(), 1);
    assert_eq!(deck.borrow().resume_calls(), 1);
}

#[test]
fn test_non_primary_button_is_ignored() {
    let (mut editor, deck) = editor();
    let id = place(&mut editor, 50.0, 50.0);

    let event = PointerEvent::down(1, pt(60.0, 60.0), body(id)).with_button(PointerButton::Secondary);
    assert_eq!(editor.handle_pointer(event), GestureOutcome::Ignored);
    assert_eq!(deck.borrow().suspend_calls(), 0);
}

#[test]
fn test_deleting_dragged_overlay_ends_gesture() {
    let (mut editor, deck) = editor();
    let id = place(&mut editor, 50.0, 50.0);

    editor.handle_pointer(PointerEvent::down(1, pt(60.0, 60.0), body(id)));
    assert!(editor.delete_overlay(id));

    assert_eq!(editor.gesture_mode(), None);
    assert!(deck.borrow().allows_gestures());
    assert_eq!(deck.borrow().resume_calls(), 1);
}

#[test]
fn test_paging_mid_drag_ends_gesture() {
    let (mut editor, deck) = editor();
    let id = place(&mut editor, 50.0, 50.0);

    editor.handle_pointer(PointerEvent::down(1, pt(60.0, 60.0), body(id)));
    assert!(editor.next_slide());

    assert_eq!(editor.gesture_mode(), None);
    assert!(deck.borrow().allows_gestures());
    let late = editor.handle_pointer(PointerEvent::up(1, pt(60.0, 60.0)));
    assert_eq!(late, GestureOutcome::Ignored);
    assert_eq!(deck.borrow().resume_calls(), 1);
}
