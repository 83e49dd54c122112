//! Pointer input routing for editor state.

use super::EditorState;
use crate::gesture::{
    GestureContext, GestureOutcome, HitTarget, OverlayPart, PointerEvent, PointerEventKind,
};
use slidecanvas_core::{AppEvent, GestureEvent, GestureKind, OverlayEvent, OverlayId};

impl EditorState {
    /// Feeds one pointer event to the editor.
    ///
    /// Presses on an overlay's body or resize handle start a gesture. A
    /// press on an overlay's content selects it, and a press on the bare
    /// slide clears the selection.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> GestureOutcome {
        let previous = self.registry.selected_id();

        if event.kind == PointerEventKind::Down && !self.gestures.is_active() {
            match event.target {
                HitTarget::Overlay {
                    id,
                    part: OverlayPart::Content,
                } => {
                    self.select(Some(id));
                    return GestureOutcome::Ignored;
                }
                HitTarget::SlideBackground => {
                    self.select(None);
                    return GestureOutcome::Ignored;
                }
                _ => {}
            }
        }

        let outcome = {
            let mut cx = GestureContext {
                registry: &mut self.registry,
                pager: &self.pager,
                config: &self.config,
                measurer: self.measurer.as_ref(),
            };
            self.gestures.handle(&event, &mut cx)
        };

        self.selection_settled(previous);
        self.publish_outcome(outcome);
        outcome
    }

    fn publish_outcome(&self, outcome: GestureOutcome) {
        match outcome {
            GestureOutcome::Started { id, mode } => {
                self.publish(AppEvent::Gesture(GestureEvent::Started {
                    id,
                    kind: mode.kind(),
                }));
            }
            GestureOutcome::Clicked { id, nudged } => {
                self.publish(AppEvent::Gesture(GestureEvent::Finished {
                    id,
                    kind: GestureKind::Drag,
                }));
                if nudged {
                    self.publish_geometry(id);
                }
            }
            GestureOutcome::Finished { id, mode } => {
                self.publish(AppEvent::Gesture(GestureEvent::Finished {
                    id,
                    kind: mode.kind(),
                }));
                self.publish_geometry(id);
            }
            GestureOutcome::Cancelled { id, mode } => {
                self.publish(AppEvent::Gesture(GestureEvent::Cancelled {
                    id,
                    kind: mode.kind(),
                }));
                self.publish_geometry(id);
            }
            GestureOutcome::Updated { .. } | GestureOutcome::Ignored => {}
        }
    }

    pub(crate) fn publish_geometry(&self, id: OverlayId) {
        if let Some(g) = self.registry.get(id).map(|overlay| overlay.geometry()) {
            self.publish(AppEvent::Overlay(OverlayEvent::GeometryChanged {
                id,
                left: g.left,
                top: g.top,
                width: g.width,
                height: g.height,
            }));
        }
    }
}
