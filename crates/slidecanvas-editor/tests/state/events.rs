//! Events the editor publishes on its bus.

use super::*;
use slidecanvas_core::{
    AppEvent, EventCategory, EventFilter, GestureEvent, GestureKind, NotificationEvent,
    OverlayEvent, SlideEvent,
};
use slidecanvas_editor::{HitTarget, OverlayPart, Point, PointerEvent, DESIGN_SAVED_MESSAGE, TEXT_ADDED_MESSAGE};
use std::sync::Mutex;

#[test]
fn test_add_publishes_added_and_toast() {
    let (mut editor, bus) = recording_editor();
    let id = editor.add_text().expect("slide 0 exists");

    let history = bus.history();
    assert!(history.contains(&AppEvent::Overlay(OverlayEvent::Added { id, slide: 0 })));
    assert!(history.contains(&AppEvent::Notification(NotificationEvent::Shown {
        message: TEXT_ADDED_MESSAGE.to_string()
    })));
}

#[test]
fn test_save_shows_toast() {
    let (mut editor, bus) = recording_editor();
    editor.save();
    assert_eq!(
        bus.history(),
        vec![AppEvent::Notification(NotificationEvent::Shown {
            message: DESIGN_SAVED_MESSAGE.to_string()
        })]
    );
}

#[test]
fn test_gesture_lifecycle_events() {
    let (mut editor, bus) = recording_editor();
    let id = editor.add_text().expect("slide 0 exists");
    bus.clear_history();

    let body = HitTarget::Overlay {
        id,
        part: OverlayPart::Body,
    };
    editor.handle_pointer(PointerEvent::down(1, Point::new(310.0, 230.0), body));
    editor.handle_pointer(PointerEvent::moved(1, Point::new(330.0, 240.0)));
    editor.handle_pointer(PointerEvent::up(1, Point::new(330.0, 240.0)));

    let history = bus.history();
    assert_eq!(
        history,
        vec![
            AppEvent::Overlay(OverlayEvent::SelectionChanged { selected: Some(id) }),
            AppEvent::Gesture(GestureEvent::Started {
                id,
                kind: GestureKind::Drag
            }),
            AppEvent::Gesture(GestureEvent::Finished {
                id,
                kind: GestureKind::Drag
            }),
            AppEvent::Overlay(OverlayEvent::GeometryChanged {
                id,
                left: 320.0,
                top: 230.0,
                width: None,
                height: None
            }),
        ]
    );
}

#[test]
fn test_slide_change_reaches_filtered_subscriber() {
    let (mut editor, bus) = recording_editor();
    let seen = std::sync::Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let subscription = bus.subscribe(
        EventFilter::Categories(vec![EventCategory::Slide]),
        move |event| {
            if let Ok(mut events) = sink.lock() {
                events.push(event);
            }
        },
    );

    editor.add_text().expect("slide 0 exists");
    editor.next_slide();
    editor.next_slide();
    assert!(bus.unsubscribe(subscription));
    editor.previous_slide();

    let events = seen.lock().map(|e| e.clone()).unwrap_or_default();
    assert_eq!(
        events,
        vec![
            AppEvent::Slide(SlideEvent::Changed { from: 0, to: 1 }),
            AppEvent::Slide(SlideEvent::Changed { from: 1, to: 2 }),
        ]
    );
}

#[test]
fn test_reset_publishes_slide_reset() {
    let (mut editor, bus) = recording_editor();
    editor.add_text().expect("slide 0 exists");
    editor.add_text().expect("slide 0 exists");
    editor.reset_active_slide();

    assert!(bus
        .history()
        .contains(&AppEvent::Overlay(OverlayEvent::SlideReset {
            slide: 0,
            removed: 2
        })));
}

#[test]
fn test_nudging_click_publishes_geometry() {
    let (mut editor, bus) = recording_editor();
    let id = editor.add_text().expect("slide 0 exists");
    let body = HitTarget::Overlay {
        id,
        part: OverlayPart::Body,
    };

    editor.handle_pointer(PointerEvent::down(1, Point::new(310.0, 230.0), body));
    editor.handle_pointer(PointerEvent::up(1, Point::new(310.0, 230.0)));
    assert!(!bus
        .history()
        .iter()
        .any(|e| matches!(e, AppEvent::Overlay(OverlayEvent::GeometryChanged { .. }))));

    bus.clear_history();
    editor.handle_pointer(PointerEvent::down(1, Point::new(310.0, 230.0), body));
    editor.handle_pointer(PointerEvent::moved(1, Point::new(312.0, 231.0)));
    editor.handle_pointer(PointerEvent::up(1, Point::new(312.0, 231.0)));

    assert_eq!(
        bus.history().last(),
        Some(&AppEvent::Overlay(OverlayEvent::GeometryChanged {
            id,
            left: 302.0,
            top: 221.0,
            width: None,
            height: None
        }))
    );
}
