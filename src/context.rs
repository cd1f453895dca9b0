//! Shared collaborators for a set of controls.

use std::rc::Rc;
use std::time::Instant;

use crate::control::InputOptions;
use crate::error::Result;
use crate::focus::FocusController;
use crate::input::{KeyEvent, KeyPhase};
use crate::text::FontMetrics;
use crate::text_area::TextArea;
use crate::text_input::TextInput;
use crate::wrapper::{
    self, BackendKind, EmulatedWrapper, Platform, SharedWrapper, TextEditingWrapper,
};

/// Focus controller, text backend and default font metrics shared by
/// every control of one UI.
///
/// The host routes keyboard events through [`InputContext::key_down`] and
/// [`InputContext::key_up`] and calls [`InputContext::tick`] once per
/// frame so deferred backend work runs.
///
/// # Example
///
/// ```
/// use caret_ui::{InputContext, InputOptions, KeyEvent, MonospaceMetrics};
///
/// let ctx = InputContext::new(MonospaceMetrics::new(8.0, 16.0));
/// let name = ctx.text_input(InputOptions::default().with_tab(0, None)).unwrap();
/// name.focus();
/// ctx.key_down(&KeyEvent::char('h'));
/// ctx.key_down(&KeyEvent::char('i'));
/// assert_eq!(name.text(), "hi");
/// ```
pub struct InputContext {
    focus: Rc<FocusController>,
    wrapper: SharedWrapper,
    metrics: Rc<dyn FontMetrics>,
}

impl std::fmt::Debug for InputContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputContext")
            .field("focus", &self.focus)
            .field("backend", &self.backend_kind())
            .finish_non_exhaustive()
    }
}

impl InputContext {
    /// Context with the emulated backend.
    pub fn new(metrics: impl FontMetrics + 'static) -> Self {
        Self::with_backend(Box::new(EmulatedWrapper::new()), metrics)
    }

    /// Context using the platform's text fields when available.
    pub fn with_platform(platform: &mut dyn Platform, metrics: impl FontMetrics + 'static) -> Self {
        Self::with_backend(wrapper::detect(Some(platform)), metrics)
    }

    /// Context over an explicit backend.
    pub fn with_backend(
        backend: Box<dyn TextEditingWrapper>,
        metrics: impl FontMetrics + 'static,
    ) -> Self {
        Self {
            focus: Rc::new(FocusController::new()),
            wrapper: wrapper::share(backend),
            metrics: Rc::new(metrics),
        }
    }

    #[must_use]
    pub fn focus(&self) -> &Rc<FocusController> {
        &self.focus
    }

    #[must_use]
    pub fn wrapper(&self) -> &SharedWrapper {
        &self.wrapper
    }

    /// Default metrics for new controls.
    #[must_use]
    pub fn metrics(&self) -> Rc<dyn FontMetrics> {
        Rc::clone(&self.metrics)
    }

    /// Kind of the text backend, or `None` while it is borrowed.
    #[must_use]
    pub fn backend_kind(&self) -> Option<BackendKind> {
        self.wrapper.try_borrow().ok().map(|w| w.kind())
    }

    /// Create a single-line input.
    pub fn text_input(&self, options: InputOptions) -> Result<TextInput> {
        TextInput::new(self, options)
    }

    /// Create a multi-line text area.
    pub fn text_area(&self, options: InputOptions) -> Result<TextArea> {
        TextArea::new(self, options)
    }

    /// Route a key press.
    ///
    /// Focus navigation (Tab, Shift+Tab, arrows, Enter) is tried first;
    /// otherwise the key goes to the text backend and the focused control
    /// resyncs. Returns true when the host should suppress its own
    /// handling of the key.
    pub fn key_down(&self, event: &KeyEvent) -> bool {
        if self.focus.key_down(event) {
            tracing::trace!(?event.code, "key consumed by focus navigation");
            return true;
        }
        self.forward_key(KeyPhase::Down, event)
    }

    /// Route a key release to the text backend.
    pub fn key_up(&self, event: &KeyEvent) -> bool {
        self.forward_key(KeyPhase::Up, event)
    }

    fn forward_key(&self, phase: KeyPhase, event: &KeyEvent) -> bool {
        let (changed, listener) = match self.wrapper.try_borrow_mut() {
            Ok(mut w) => (w.handle_key(phase, event), w.key_listener()),
            Err(_) => {
                tracing::warn!("text backend busy, key dropped");
                return false;
            }
        };
        // Listener runs with the backend released so the control can read it
        if let Some(listener) = listener {
            listener(phase, event);
        }
        changed
    }

    /// Run deferred backend work due at `now`.
    pub fn tick(&self, now: Instant) {
        match self.wrapper.try_borrow_mut() {
            Ok(mut w) => w.poll(now),
            Err(_) => tracing::warn!("text backend busy, tick skipped"),
        }
    }
}
