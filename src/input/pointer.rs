//! Pointer (mouse/touch) event types.

use crate::geometry::Point;

/// Pointer button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary button or touch contact.
    #[default]
    Primary,
    /// Middle button (scroll wheel click).
    Middle,
    /// Secondary (right) button.
    Secondary,
}

/// Kind of pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Button pressed inside the control.
    Down,
    /// Pointer moved.
    Move,
    /// Button released inside the control.
    Up,
    /// Button released outside the control's bounds.
    UpOutside,
}

/// A pointer event in control-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Position relative to the control's top-left corner.
    pub position: Point,
    /// Button involved.
    pub button: PointerButton,
    /// Kind of event.
    pub kind: PointerEventKind,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub fn new(position: Point, button: PointerButton, kind: PointerEventKind) -> Self {
        Self {
            position,
            button,
            kind,
        }
    }

    /// Primary-button press at `(x, y)`.
    #[must_use]
    pub fn down(x: f32, y: f32) -> Self {
        Self::new(Point::new(x, y), PointerButton::Primary, PointerEventKind::Down)
    }

    /// Move to `(x, y)`.
    #[must_use]
    pub fn move_to(x: f32, y: f32) -> Self {
        Self::new(Point::new(x, y), PointerButton::Primary, PointerEventKind::Move)
    }

    /// Primary-button release at `(x, y)`.
    #[must_use]
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(Point::new(x, y), PointerButton::Primary, PointerEventKind::Up)
    }

    /// Primary-button release outside the control.
    #[must_use]
    pub fn up_outside(x: f32, y: f32) -> Self {
        Self::new(
            Point::new(x, y),
            PointerButton::Primary,
            PointerEventKind::UpOutside,
        )
    }

    /// Use a different button.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Check if the event involves the primary button.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.button == PointerButton::Primary
    }
}

/// What a control did with a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerResponse {
    /// The control consumed the event.
    pub handled: bool,
    /// Ancestors must not see the event (auto-prevent-interaction).
    pub stop_propagation: bool,
}

impl PointerResponse {
    /// The event was not for this control.
    #[must_use]
    pub const fn ignored(stop_propagation: bool) -> Self {
        Self {
            handled: false,
            stop_propagation,
        }
    }

    /// The event was consumed.
    #[must_use]
    pub const fn handled(stop_propagation: bool) -> Self {
        Self {
            handled: true,
            stop_propagation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let down = PointerEvent::down(3.0, 4.0);
        assert_eq!(down.kind, PointerEventKind::Down);
        assert_eq!(down.position, Point::new(3.0, 4.0));
        assert!(down.is_primary());

        let right = PointerEvent::down(0.0, 0.0).with_button(PointerButton::Secondary);
        assert!(!right.is_primary());
    }

    #[test]
    fn test_response() {
        assert!(PointerResponse::handled(false).handled);
        assert!(PointerResponse::ignored(true).stop_propagation);
    }
}
