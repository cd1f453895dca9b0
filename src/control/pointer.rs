//! Pointer handling: click to place the caret, drag to select.

use crate::control::ControlCore;
use crate::control::state::{ControlState, Invalidation, InteractionState};
use crate::geometry::Point;
use crate::input::{PointerEvent, PointerEventKind, PointerResponse};
use crate::text::SelectionSpan;
use crate::wrapper::BackendKind;

impl ControlCore {
    fn response(&self, handled: bool) -> PointerResponse {
        PointerResponse {
            handled,
            stop_propagation: self.options.auto_prevent_interaction,
        }
    }

    /// Char offset under a control-local position.
    fn hit(&self, position: Point) -> usize {
        let origin = self.content_origin();
        self.pixel_to_text(Point::new(position.x - origin.x, position.y - origin.y))
    }

    pub(super) fn handle_pointer(&mut self, event: &PointerEvent) -> PointerResponse {
        match event.kind {
            PointerEventKind::Down => self.pointer_down(event),
            PointerEventKind::Move => self.pointer_move(event),
            PointerEventKind::Up => self.pointer_up(event),
            PointerEventKind::UpOutside => self.pointer_up_outside(event),
        }
    }

    pub(super) fn pointer_down(&mut self, event: &PointerEvent) -> PointerResponse {
        if !event.is_primary() {
            return self.response(false);
        }
        self.mouse_down = true;
        self.set_state(ControlState::Down);
        self.focus();
        self.ensure_layout();

        let pos = self.hit(event.position);
        self.drag_anchor = pos;
        self.interaction = InteractionState::Dragging;
        if self.with_wrapper(|w| w.update_selection(pos, pos)) == Some(true) {
            self.invalid |= Invalidation::SELECTION;
        }
        self.prev_selection = Some(SelectionSpan::caret(pos));
        self.cursor_pos = pos;
        self.update_caret();
        tracing::trace!(id = self.id.get(), pos, "selection drag started");
        self.response(true)
    }

    pub(super) fn pointer_move(&mut self, event: &PointerEvent) -> PointerResponse {
        if !self.has_focus || !self.mouse_down {
            return self.response(false);
        }
        self.ensure_layout();
        let pos = self.hit(event.position);
        let anchor = self.drag_anchor;
        if self.with_wrapper(|w| w.update_selection(anchor, pos)) == Some(true) {
            self.prev_selection = Some(SelectionSpan::new(anchor, pos).normalized());
            self.cursor_pos = pos;
            self.invalid |= Invalidation::CURSOR | Invalidation::SELECTION;
            self.update_caret();
        }
        self.response(true)
    }

    fn end_drag(&mut self) -> bool {
        let was_down = self.mouse_down;
        self.mouse_down = false;
        if self.has_focus {
            self.interaction = InteractionState::Focused;
        }
        self.set_state(ControlState::Up);
        was_down
    }

    pub(super) fn pointer_up(&mut self, event: &PointerEvent) -> PointerResponse {
        if !event.is_primary() {
            return self.response(false);
        }
        let handled = self.end_drag();
        self.response(handled)
    }

    /// Release outside the control. Emulated backends lose focus here;
    /// native fields keep it so the platform can finish its own gesture.
    pub(super) fn pointer_up_outside(&mut self, event: &PointerEvent) -> PointerResponse {
        if !event.is_primary() {
            return self.response(false);
        }
        let handled = self.end_drag();
        let native = self.with_wrapper(|w| w.kind()) == Some(BackendKind::Native);
        if self.has_focus && !native {
            self.blur();
        }
        self.response(handled)
    }
}

#[cfg(test)]
mod tests {
    use crate::control::{ControlState, InputControl, InputOptions, InteractionState};
    use crate::geometry::ViewOffset;
    use crate::input::{PointerButton, PointerEvent};
    use crate::text::{MonospaceMetrics, SelectionSpan};
    use crate::InputContext;

    fn control(ctx: &InputContext, options: InputOptions) -> InputControl {
        let c = InputControl::new(ctx, options.with_view_offset(ViewOffset::uniform(0.0))).unwrap();
        c.set_size(200.0, 20.0);
        c.redraw(std::time::Instant::now());
        c
    }

    fn ctx() -> InputContext {
        InputContext::new(MonospaceMetrics::new(10.0, 20.0))
    }

    #[test]
    fn test_click_focuses_and_places_caret() {
        let ctx = ctx();
        let c = control(&ctx, InputOptions::default().with_text("hello"));
        let r = c.pointer_down(&PointerEvent::down(21.0, 5.0));
        assert!(r.handled);
        assert!(!r.stop_propagation);
        assert!(c.has_focus());
        assert_eq!(c.interaction_state(), InteractionState::Dragging);
        assert_eq!(c.state(), ControlState::Down);
        assert_eq!(c.cursor_pos(), 2);
        assert_eq!(c.selection(), SelectionSpan::caret(2));

        c.pointer_up(&PointerEvent::up(21.0, 5.0));
        assert_eq!(c.interaction_state(), InteractionState::Focused);
        assert_eq!(c.state(), ControlState::Up);
    }

    #[test]
    fn test_drag_selects_backwards() {
        let ctx = ctx();
        let c = control(&ctx, InputOptions::default().with_text("hello"));
        c.pointer_down(&PointerEvent::down(41.0, 5.0));
        assert_eq!(c.cursor_pos(), 4);
        c.pointer_move(&PointerEvent::move_to(5.0, 5.0));
        assert_eq!(c.selection(), SelectionSpan::new(0, 4));
        assert_eq!(c.cursor_pos(), 0);
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let ctx = ctx();
        let c = control(&ctx, InputOptions::default().with_text("hello"));
        let r = c.pointer_move(&PointerEvent::move_to(30.0, 5.0));
        assert!(!r.handled);
        assert!(!c.has_focus());
    }

    #[test]
    fn test_secondary_button_ignored() {
        let ctx = ctx();
        let c = control(&ctx, InputOptions::default().with_auto_prevent_interaction(true));
        let r = c.pointer_down(&PointerEvent::down(5.0, 5.0).with_button(PointerButton::Secondary));
        assert!(!r.handled);
        assert!(r.stop_propagation);
        assert!(!c.has_focus());
    }

    #[test]
    fn test_up_outside_blurs_emulated_backend() {
        let ctx = ctx();
        let c = control(&ctx, InputOptions::default().with_text("hello"));
        c.pointer_down(&PointerEvent::down(10.0, 5.0));
        let r = c.pointer_up_outside(&PointerEvent::up_outside(500.0, 5.0));
        assert!(r.handled);
        assert!(!c.has_focus());
        assert_eq!(c.interaction_state(), InteractionState::Blurred);
    }
}
