//! Editable input control core.
//!
//! [`InputControl`] is a cheap-to-clone handle to the state machine shared
//! by [`TextInput`](crate::TextInput) and [`TextArea`](crate::TextArea):
//!
//! ```text
//! Blurred --focus()--> Focused --pointer down--> Dragging
//!    ^                    |  ^                      |
//!    +------blur()--------+  +-----pointer up-------+
//! ```
//!
//! While focused the control is bound to the context's text-editing
//! backend: the backend owns text and selection, and the control mirrors
//! them after every key event, draws the caret and selection highlight,
//! and maps pointer positions to text offsets.
//!
//! Events ([`ControlEvent`]) go through the context's shared event queue
//! and reach listeners only after the outermost control update has
//! returned, so listeners may call back into any control, including the
//! one whose focus change raised the event.

mod options;
mod pointer;
mod render;
mod scene;
mod state;

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};
use std::time::Instant;

use regex::Regex;

use crate::InputContext;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::event::{ControlEvent, EventListeners, EventQueue, ListenerId};
use crate::focus::{FocusCapability, FocusController, FocusId, UNORDERED_TAB_INDEX};
use crate::geometry::{Point, Rect, ViewOffset};
use crate::input::{KeyEvent, KeyPhase, PointerEvent, PointerResponse};
use crate::style::TextStyle;
use crate::text::{FontMetrics, LineLayout, SelectionSpan, normalize_line_endings};
use crate::wrapper::{InputType, KeyListener, SharedWrapper, TextEditingWrapper};

pub use options::{
    DEFAULT_BLINK_INTERVAL, DEFAULT_CARET_WIDTH, DEFAULT_SELECTION_COLOR, InputKind, InputMode,
    InputOptions,
};
pub use scene::{CaretNode, ControlScene, SelectionNode, TextNode};
pub use state::{ControlState, InteractionState, Invalidation};

/// Glyph used to mask password text.
pub const PASSWORD_MASK: char = '*';

fn compile_pattern(pattern: &str) -> Result<Option<Regex>> {
    if pattern.is_empty() {
        return Ok(None);
    }
    Regex::new(pattern)
        .map(Some)
        .map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Run `f` on a control reached from a callback, then queue its events.
///
/// Returns `None` (and logs) if the control is already borrowed.
fn dispatch<R>(
    core: &Rc<RefCell<ControlCore>>,
    queue: &Rc<EventQueue>,
    f: impl FnOnce(&mut ControlCore) -> R,
) -> Option<R> {
    let _hold = queue.hold();
    let Ok(mut guard) = core.try_borrow_mut() else {
        tracing::warn!("input control busy, callback skipped");
        return None;
    };
    let result = f(&mut guard);
    let events = std::mem::take(&mut guard.events);
    queue.push(Rc::clone(&guard.listeners), events);
    drop(guard);
    Some(result)
}

pub(crate) struct ControlCore {
    self_ref: Weak<RefCell<ControlCore>>,
    id: FocusId,
    focus: Rc<FocusController>,
    queue: Rc<EventQueue>,
    wrapper: SharedWrapper,
    metrics: Rc<dyn FontMetrics>,
    options: InputOptions,
    pattern: Option<Regex>,

    value: String,
    mask_password: bool,
    layout: LineLayout,

    size: (f32, f32),
    clip: (f32, f32),
    text_origin: Point,
    caret: CaretNode,
    selection_rects: Vec<Rect>,

    cursor_pos: usize,
    prev_selection: Option<SelectionSpan>,
    drag_anchor: usize,
    mouse_down: bool,
    has_focus: bool,
    enabled: bool,
    interaction: InteractionState,
    state: ControlState,
    invalid: Invalidation,
    blink_timer: Option<Instant>,

    events: Vec<ControlEvent>,
    listeners: Rc<EventListeners>,
}

impl ControlCore {
    fn create(
        focus: Rc<FocusController>,
        wrapper: SharedWrapper,
        metrics: Rc<dyn FontMetrics>,
        options: InputOptions,
    ) -> Result<Rc<RefCell<Self>>> {
        let pattern = compile_pattern(&options.pattern)?;
        let tab_index = options.tab_index.unwrap_or(UNORDERED_TAB_INDEX);
        let tab_group = options.tab_group.clone();
        let initial_text = options.text.clone();
        let multi = options.mode == InputMode::Multi;
        let id = focus.allocate_id();

        let caret = CaretNode {
            position: Point::default(),
            width: options.caret_width,
            height: 0.0,
            color: options.caret_color,
            visible: false,
        };

        let core = Rc::new_cyclic(|weak| {
            RefCell::new(Self {
                self_ref: weak.clone(),
                id,
                focus: Rc::clone(&focus),
                queue: Rc::clone(focus.event_queue()),
                wrapper,
                metrics,
                options,
                pattern,
                value: String::new(),
                mask_password: false,
                layout: LineLayout::default(),
                size: (0.0, 0.0),
                clip: (0.0, 0.0),
                text_origin: Point::default(),
                caret,
                selection_rects: Vec::new(),
                cursor_pos: 0,
                prev_selection: None,
                drag_anchor: 0,
                mouse_down: false,
                has_focus: false,
                enabled: true,
                interaction: InteractionState::Blurred,
                state: ControlState::Up,
                invalid: Invalidation::all(),
                blink_timer: None,
                events: Vec::new(),
                listeners: Rc::new(EventListeners::new()),
            })
        });

        {
            let mut c = core.borrow_mut();
            c.mask_password = c.options.input_type == InputType::Password;
            c.set_text(&initial_text);
            c.events.clear();
            c.refresh_clip();
            c.rebuild_layout();
        }

        focus.register(
            id,
            Self::capability(&core),
            tab_index,
            tab_group.as_deref(),
        )?;
        if multi {
            focus.set_arrow_navigation(id, false);
        }
        tracing::debug!(id = id.get(), tab_index, multi, "input control created");
        Ok(core)
    }

    fn capability(core: &Rc<RefCell<Self>>) -> FocusCapability {
        let queue = Rc::clone(&core.borrow().queue);
        let on_focus = (Rc::downgrade(core), Rc::clone(&queue));
        let on_blur = (Rc::downgrade(core), queue);
        FocusCapability::new()
            .on_focus(move || {
                if let Some(core) = on_focus.0.upgrade() {
                    dispatch(&core, &on_focus.1, Self::focus);
                }
            })
            .on_blur(move || {
                if let Some(core) = on_blur.0.upgrade() {
                    dispatch(&core, &on_blur.1, Self::blur);
                }
            })
    }

    fn key_listener(&self) -> KeyListener {
        let weak = self.self_ref.clone();
        let queue = Rc::clone(&self.queue);
        Rc::new(move |phase: KeyPhase, event: &KeyEvent| {
            if let Some(core) = weak.upgrade() {
                dispatch(&core, &queue, |c| c.on_key(phase, event));
            }
        })
    }

    fn with_wrapper<R>(&self, f: impl FnOnce(&mut dyn TextEditingWrapper) -> R) -> Option<R> {
        match self.wrapper.try_borrow_mut() {
            Ok(mut wrapper) => Some(f(wrapper.as_mut())),
            Err(_) => {
                tracing::warn!(id = self.id.get(), "text backend busy");
                None
            }
        }
    }

    fn is_multi_line(&self) -> bool {
        self.options.mode == InputMode::Multi
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn effective_input_type(&self) -> InputType {
        if self.mask_password {
            InputType::Password
        } else {
            self.options.input_type
        }
    }

    /// Text used for layout and measurement: the value, masked if needed.
    fn geometry_text(&self) -> String {
        if self.mask_password {
            std::iter::repeat_n(PASSWORD_MASK, self.char_len()).collect()
        } else {
            self.value.clone()
        }
    }

    fn shows_placeholder(&self) -> bool {
        self.value.is_empty() && !self.options.placeholder.is_empty()
    }

    // Focus

    fn focus(&mut self) {
        if self.has_focus {
            return;
        }
        // Blurs whichever control held focus before touching the backend
        self.focus.set_current(self.id);
        self.has_focus = true;
        self.interaction = InteractionState::Focused;

        let listener = self.key_listener();
        let value = self.value.clone();
        let input_type = self.effective_input_type();
        let max_chars = self.options.max_chars;
        let variant = self.options.kind.variant();
        let restore = self.prev_selection;
        let cursor = self.cursor_pos;
        let bound = self.with_wrapper(|w| {
            // Variant first: native backends keep one field per variant
            w.focus(variant);
            w.set_text(&value);
            w.set_input_type(input_type);
            w.set_max_chars(max_chars);
            match restore {
                Some(span) => {
                    w.update_selection(span.start, span.end);
                }
                None => w.set_cursor_pos(cursor),
            }
            w.set_key_listener(Some(listener));
            w.selection()
        });
        // A rejected first keystroke restores this selection
        if let Some(selection) = bound {
            self.prev_selection = Some(selection);
        }

        self.caret.visible = false;
        self.blink_timer = None;
        self.invalid |= Invalidation::CURSOR | Invalidation::SELECTION;
        if !self.mouse_down {
            self.update_caret();
        }
        tracing::debug!(id = self.id.get(), "input focused");
        self.events.push(ControlEvent::FocusIn);
    }

    fn blur(&mut self) {
        if !self.has_focus {
            return;
        }
        if let Some(selection) = self.with_wrapper(|w| {
            let selection = w.selection();
            w.blur();
            w.set_key_listener(None);
            selection
        }) {
            self.prev_selection = Some(selection);
        }
        self.focus.release(self.id);

        self.has_focus = false;
        self.mouse_down = false;
        self.interaction = InteractionState::Blurred;
        self.caret.visible = false;
        self.blink_timer = None;
        self.invalid |= Invalidation::SELECTION | Invalidation::CURSOR;
        tracing::debug!(id = self.id.get(), "input blurred");
        self.events.push(ControlEvent::FocusOut);
    }

    // Text

    fn set_text(&mut self, text: &str) -> bool {
        let text = normalize_line_endings(text);
        let len = text.chars().count();
        let max = self.options.max_chars;
        if max > 0 && len > max {
            tracing::debug!(id = self.id.get(), len, max, "text longer than max chars rejected");
            return false;
        }
        if text == self.value {
            return false;
        }

        let old = std::mem::replace(&mut self.value, text.clone());
        self.cursor_pos = self.cursor_pos.min(len);
        self.prev_selection = self.prev_selection.map(|s| s.clamped(len));

        if self.has_focus {
            let cursor = self.cursor_pos;
            self.with_wrapper(|w| {
                if w.text() != text {
                    w.set_text(&text);
                    if w.selection().normalized().end > len {
                        w.set_cursor_pos(cursor);
                    }
                }
            });
        }

        self.invalid |= Invalidation::TEXT | Invalidation::CURSOR | Invalidation::SELECTION;
        self.events.push(ControlEvent::Change { old, new: text });
        true
    }

    fn accepts(&self, text: &str) -> bool {
        let max = self.options.max_chars;
        if max > 0 && text.chars().count() > max {
            return false;
        }
        self.pattern
            .as_ref()
            .is_none_or(|re| text.is_empty() || re.is_match(text))
    }

    /// Mirror the backend after it processed input.
    fn on_input_changed(&mut self) {
        if !self.has_focus {
            return;
        }
        let Some((text, selection)) = self.with_wrapper(|w| (w.text(), w.selection())) else {
            return;
        };

        if text == self.value {
            self.prev_selection = Some(selection);
        } else if self.accepts(&text) {
            self.set_text(&text);
            self.prev_selection = Some(selection);
        } else {
            tracing::debug!(id = self.id.get(), "input rejected, restoring previous value");
            let value = self.value.clone();
            let restore = self
                .prev_selection
                .unwrap_or_else(|| SelectionSpan::caret(self.cursor_pos));
            self.with_wrapper(|w| {
                w.set_text(&value);
                w.update_selection(restore.start, restore.end);
            });
        }

        if let Some(caret) = self.with_wrapper(|w| w.caret()) {
            self.cursor_pos = caret.min(self.char_len());
        }
        self.invalid |= Invalidation::CURSOR | Invalidation::SELECTION;
        self.update_caret();
    }

    fn on_key(&mut self, phase: KeyPhase, event: &KeyEvent) {
        self.on_input_changed();
        self.events.push(match phase {
            KeyPhase::Down => ControlEvent::KeyDown(*event),
            KeyPhase::Up => ControlEvent::KeyUp(*event),
        });
    }

    fn set_max_chars(&mut self, max_chars: usize) {
        self.options.max_chars = max_chars;
        if max_chars > 0 && self.char_len() > max_chars {
            let truncated: String = self.value.chars().take(max_chars).collect();
            self.set_text(&truncated);
        }
        if self.has_focus {
            self.with_wrapper(|w| w.set_max_chars(max_chars));
        }
    }

    fn push_input_type(&mut self) {
        if self.has_focus {
            let input_type = self.effective_input_type();
            self.with_wrapper(|w| w.set_input_type(input_type));
        }
    }

    fn selection(&self) -> SelectionSpan {
        if self.has_focus {
            if let Some(span) = self.with_wrapper(|w| w.selection()) {
                return span;
            }
        }
        self.prev_selection
            .unwrap_or(SelectionSpan::caret(self.cursor_pos))
    }

    fn set_selection(&mut self, start: usize, end: usize) -> bool {
        let span = SelectionSpan::new(start, end)
            .normalized()
            .clamped(self.char_len());
        let changed = if self.has_focus {
            self.with_wrapper(|w| w.update_selection(span.start, span.end))
                .unwrap_or(false)
        } else {
            self.prev_selection != Some(span)
        };
        if changed {
            self.prev_selection = Some(span);
            self.cursor_pos = span.start;
            self.invalid |= Invalidation::CURSOR | Invalidation::SELECTION;
            self.update_caret();
        }
        changed
    }

    fn set_state(&mut self, state: ControlState) {
        if self.state != state {
            self.state = state;
            self.invalid |= Invalidation::SKIN;
        }
    }

    fn invalidate_text(&mut self) {
        self.invalid |= Invalidation::TEXT | Invalidation::CURSOR | Invalidation::SELECTION;
    }
}

impl Drop for ControlCore {
    fn drop(&mut self) {
        if self.has_focus {
            if let Ok(mut w) = self.wrapper.try_borrow_mut() {
                w.blur();
                w.set_key_listener(None);
            }
        }
        self.focus.remove(self.id);
    }
}

/// Handle to an editable, focusable text control.
///
/// Clones share the same control. The control unregisters from focus
/// navigation when the last handle is dropped.
///
/// Methods borrow the control for their duration; calling a method on a
/// control from inside one of its own in-progress operations panics.
/// Event listeners run once every control of the context is released and
/// are safe.
#[derive(Clone)]
pub struct InputControl {
    core: Rc<RefCell<ControlCore>>,
    queue: Rc<EventQueue>,
}

impl std::fmt::Debug for InputControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let core = self.core.borrow();
        f.debug_struct("InputControl")
            .field("id", &core.id)
            .field("value", &core.value)
            .field("interaction", &core.interaction)
            .finish_non_exhaustive()
    }
}

impl InputControl {
    /// Create a control bound to a context's focus controller and backend.
    pub fn new(ctx: &InputContext, options: InputOptions) -> Result<Self> {
        Self::with_parts(
            Rc::clone(ctx.focus()),
            Rc::clone(ctx.wrapper()),
            ctx.metrics(),
            options,
        )
    }

    /// Create a control from explicit collaborators.
    pub fn with_parts(
        focus: Rc<FocusController>,
        wrapper: SharedWrapper,
        metrics: Rc<dyn FontMetrics>,
        options: InputOptions,
    ) -> Result<Self> {
        let queue = Rc::clone(focus.event_queue());
        Ok(Self {
            core: ControlCore::create(focus, wrapper, metrics, options)?,
            queue,
        })
    }

    fn read(&self) -> Ref<'_, ControlCore> {
        self.core.borrow()
    }

    fn update<R>(&self, f: impl FnOnce(&mut ControlCore) -> R) -> R {
        let _hold = self.queue.hold();
        let mut core = self.core.borrow_mut();
        let result = f(&mut core);
        let events = std::mem::take(&mut core.events);
        self.queue.push(Rc::clone(&core.listeners), events);
        drop(core);
        result
    }

    /// Identity in the focus controller.
    #[must_use]
    pub fn id(&self) -> FocusId {
        self.read().id
    }

    // Focus

    /// Take keyboard focus, blurring the previously focused control.
    pub fn focus(&self) {
        self.update(ControlCore::focus);
    }

    /// Give up keyboard focus.
    pub fn blur(&self) {
        self.update(ControlCore::blur);
    }

    #[must_use]
    pub fn has_focus(&self) -> bool {
        self.read().has_focus
    }

    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.read().interaction
    }

    /// Allow or prevent navigation from focusing this control.
    pub fn set_enabled(&self, enabled: bool) {
        self.update(|c| {
            c.enabled = enabled;
            c.focus.set_enabled(c.id, enabled);
        });
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.read().enabled
    }

    /// Action run when Enter is pressed while this control is current.
    pub fn on_enter<F: Fn() + 'static>(&self, action: F) {
        let c = self.read();
        c.focus.set_enter_action(c.id, Some(Rc::new(action)));
    }

    // Text

    /// Current value (empty while the placeholder is shown).
    #[must_use]
    pub fn text(&self) -> String {
        self.read().value.clone()
    }

    /// Replace the value.
    ///
    /// Text longer than a positive max-chars limit is rejected and the value
    /// stays unchanged. Returns whether the value changed.
    pub fn set_text(&self, text: &str) -> bool {
        self.update(|c| c.set_text(text))
    }

    #[must_use]
    pub fn max_chars(&self) -> usize {
        self.read().options.max_chars
    }

    /// Change the length limit, truncating the value if it is longer.
    pub fn set_max_chars(&self, max_chars: usize) {
        self.update(|c| c.set_max_chars(max_chars));
    }

    #[must_use]
    pub fn pattern(&self) -> String {
        self.read().options.pattern.clone()
    }

    /// Change the pattern new input must match. An empty pattern accepts all.
    pub fn set_pattern(&self, pattern: &str) -> Result<()> {
        let compiled = compile_pattern(pattern)?;
        self.update(|c| {
            c.pattern = compiled;
            c.options.pattern = pattern.to_string();
        });
        Ok(())
    }

    #[must_use]
    pub fn input_type(&self) -> InputType {
        self.read().effective_input_type()
    }

    pub fn set_input_type(&self, input_type: InputType) {
        self.update(|c| {
            c.options.input_type = input_type;
            c.push_input_type();
        });
    }

    #[must_use]
    pub fn placeholder(&self) -> String {
        self.read().options.placeholder.clone()
    }

    pub fn set_placeholder(&self, placeholder: &str) {
        self.update(|c| {
            c.options.placeholder = placeholder.to_string();
            c.invalidate_text();
        });
    }

    pub fn set_placeholder_style(&self, style: TextStyle) {
        self.update(|c| {
            c.options.placeholder_style = style;
            c.invalidate_text();
        });
    }

    /// Check if the placeholder is displayed instead of the value.
    #[must_use]
    pub fn displays_placeholder(&self) -> bool {
        self.read().shows_placeholder()
    }

    #[must_use]
    pub fn style(&self) -> TextStyle {
        self.read().options.style
    }

    pub fn set_style(&self, style: TextStyle) {
        self.update(|c| {
            c.options.style = style;
            c.invalidate_text();
        });
    }

    /// Replace the font metrics used for measurement.
    pub fn set_metrics(&self, metrics: Rc<dyn FontMetrics>) {
        self.update(|c| {
            c.metrics = metrics;
            c.invalidate_text();
        });
    }

    pub fn set_caret_color(&self, color: Rgba) {
        self.update(|c| {
            c.options.caret_color = color;
            c.caret.color = color;
        });
    }

    pub fn set_selection_color(&self, color: Rgba) {
        self.update(|c| c.options.selection_color = color);
    }

    /// Display lines: the whole (masked) text for single-line controls,
    /// the word-wrapped lines for multi-line ones.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.update(|c| {
            c.ensure_layout();
            c.layout
                .line_texts()
                .into_iter()
                .map(str::to_string)
                .collect()
        })
    }

    // Selection and caret

    /// Current selection (saved selection while blurred).
    #[must_use]
    pub fn selection(&self) -> SelectionSpan {
        self.read().selection()
    }

    /// Select a range; returns whether the selection changed.
    pub fn set_selection(&self, start: usize, end: usize) -> bool {
        self.update(|c| c.set_selection(start, end))
    }

    /// Char offset of the caret.
    #[must_use]
    pub fn cursor_pos(&self) -> usize {
        self.read().cursor_pos
    }

    /// Check if the caret is currently drawn.
    #[must_use]
    pub fn caret_visible(&self) -> bool {
        self.read().caret.visible
    }

    // Geometry

    /// Set the control's bounds.
    pub fn set_size(&self, width: f32, height: f32) {
        self.update(|c| c.set_size(width, height));
    }

    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        self.read().size
    }

    pub fn set_view_offset(&self, offset: ViewOffset) {
        self.update(|c| {
            c.options.view_offset = offset;
            c.invalid |= Invalidation::CLIPPING;
        });
    }

    pub fn set_clip_content(&self, clip: bool) {
        self.update(|c| {
            c.options.clip_content = clip;
            c.invalid |= Invalidation::CLIPPING | Invalidation::CURSOR;
        });
    }

    /// Size of the clip region.
    #[must_use]
    pub fn clip_size(&self) -> (f32, f32) {
        self.update(|c| {
            c.ensure_layout();
            c.clip
        })
    }

    /// Height of one text line.
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.read().line_height()
    }

    /// Offset of the text inside the clip region (negative when scrolled).
    #[must_use]
    pub fn text_origin(&self) -> Point {
        self.read().text_origin
    }

    /// Pixel position of a char offset in content coordinates.
    #[must_use]
    pub fn text_to_pixel(&self, pos: usize) -> Point {
        self.update(|c| {
            c.ensure_layout();
            c.text_to_pixel(pos)
        })
    }

    /// Char offset under a point in content coordinates.
    #[must_use]
    pub fn pixel_to_text(&self, point: Point) -> usize {
        self.update(|c| {
            c.ensure_layout();
            c.pixel_to_text(point)
        })
    }

    // Skin state

    #[must_use]
    pub fn state(&self) -> ControlState {
        self.read().state
    }

    pub fn set_state(&self, state: ControlState) {
        self.update(|c| c.set_state(state));
    }

    /// Set the skin state by name (`"up"`, `"down"` or `"hover"`).
    pub fn set_state_name(&self, name: &str) -> Result<()> {
        let state = name.parse()?;
        self.set_state(state);
        Ok(())
    }

    // Pointer

    /// Route a pointer event to the matching handler.
    pub fn handle_pointer(&self, event: &PointerEvent) -> PointerResponse {
        self.update(|c| c.handle_pointer(event))
    }

    pub fn pointer_down(&self, event: &PointerEvent) -> PointerResponse {
        self.update(|c| c.pointer_down(event))
    }

    pub fn pointer_move(&self, event: &PointerEvent) -> PointerResponse {
        self.update(|c| c.pointer_move(event))
    }

    pub fn pointer_up(&self, event: &PointerEvent) -> PointerResponse {
        self.update(|c| c.pointer_up(event))
    }

    pub fn pointer_up_outside(&self, event: &PointerEvent) -> PointerResponse {
        self.update(|c| c.pointer_up_outside(event))
    }

    // Rendering

    /// Per-frame update: blink the caret and recompute invalid geometry.
    pub fn redraw(&self, now: Instant) {
        self.update(|c| c.redraw(now));
    }

    /// Parts still waiting for a redraw.
    #[must_use]
    pub fn invalidation(&self) -> Invalidation {
        self.read().invalid
    }

    /// Clear the skin flag once the host has re-skinned the control.
    pub fn skin_updated(&self) {
        self.update(|c| c.invalid.remove(Invalidation::SKIN));
    }

    /// Snapshot of the drawable nodes.
    #[must_use]
    pub fn scene(&self) -> ControlScene {
        self.read().scene()
    }

    // Events

    /// Register an event listener.
    pub fn on<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&ControlEvent) + 'static,
    {
        let listeners = Rc::clone(&self.read().listeners);
        listeners.on(listener)
    }

    /// Remove an event listener.
    pub fn off(&self, id: ListenerId) -> bool {
        let listeners = Rc::clone(&self.read().listeners);
        listeners.off(id)
    }

    pub(crate) fn set_display_as_password(&self, mask: bool) {
        self.update(|c| {
            if c.mask_password != mask {
                c.mask_password = mask;
                c.push_input_type();
                c.invalidate_text();
            }
        });
    }

    pub(crate) fn displays_as_password(&self) -> bool {
        self.read().mask_password
    }
}
