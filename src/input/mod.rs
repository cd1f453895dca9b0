//! Keyboard and pointer event types delivered to controls.
//!
//! The host application translates its platform events into these types
//! and hands keyboard events to [`InputContext`](crate::InputContext) and
//! pointer events to the control under the pointer.

mod keyboard;
mod pointer;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers, KeyPhase};
pub use pointer::{PointerButton, PointerEvent, PointerEventKind, PointerResponse};
