//! Test harness: a context with fixed-cell metrics plus typing helpers.

use std::cell::RefCell;
use std::rc::Rc;

use caret_ui::{
    ControlEvent, InputContext, InputControl, KeyCode, KeyEvent, MonospaceMetrics,
};
use tracing::Level;

/// Cell width used by every harness context.
pub const CELL: f32 = 10.0;

/// Font height used by every harness context.
pub const FONT_HEIGHT: f32 = 20.0;

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_test_writer()
        .try_init();
}

pub fn metrics() -> MonospaceMetrics {
    MonospaceMetrics::new(CELL, FONT_HEIGHT)
}

/// Context over the emulated backend.
pub fn emulated() -> InputContext {
    init_logging();
    InputContext::new(metrics())
}

/// Type each char of `text` as a key press and release.
pub fn type_text(ctx: &InputContext, text: &str) {
    for ch in text.chars() {
        let event = KeyEvent::char(ch);
        ctx.key_down(&event);
        ctx.key_up(&event);
    }
}

/// Press and release a key.
pub fn press(ctx: &InputContext, event: KeyEvent) -> bool {
    let consumed = ctx.key_down(&event);
    ctx.key_up(&event);
    consumed
}

pub fn press_key(ctx: &InputContext, code: KeyCode) -> bool {
    press(ctx, KeyEvent::key(code))
}

/// Record event names (and change payloads) emitted by a control.
pub fn record(control: &InputControl) -> Rc<RefCell<Vec<String>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    control.on(move |event| {
        let entry = match event {
            ControlEvent::Change { old, new } => format!("change:{old}->{new}"),
            other => other.name().to_string(),
        };
        sink.borrow_mut().push(entry);
    });
    log
}
