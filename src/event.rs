//! Control event listeners.
//!
//! Listeners are invoked synchronously, in registration order, on the
//! thread that emits the event. Controls that share a focus controller
//! also share an [`EventQueue`]: events raised while any of them is
//! mid-update are held until the outermost update returns, then delivered
//! in the order they were raised.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::input::KeyEvent;

/// Notifications emitted by an input control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    /// The control gained focus.
    FocusIn,
    /// The control lost focus.
    FocusOut,
    /// The control's value changed.
    Change { old: String, new: String },
    /// A key was pressed while the control was bound to the backend.
    KeyDown(KeyEvent),
    /// A key was released while the control was bound to the backend.
    KeyUp(KeyEvent),
}

impl ControlEvent {
    /// Short event name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::FocusIn => "focusIn",
            Self::FocusOut => "focusOut",
            Self::Change { .. } => "change",
            Self::KeyDown(_) => "keydown",
            Self::KeyUp(_) => "keyup",
        }
    }
}

/// Handle returned by [`EventListeners::on`], used to remove a listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(&ControlEvent)>;

/// Ordered set of event listeners.
#[derive(Default)]
pub struct EventListeners {
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_id: Cell<u64>,
}

impl std::fmt::Debug for EventListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListeners")
            .field("len", &self.len())
            .finish()
    }
}

impl EventListeners {
    /// Create an empty listener set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn on<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&ControlEvent) + 'static,
    {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn off(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    /// Deliver an event to every listener.
    ///
    /// The listener list is snapshotted first, so listeners may register or
    /// remove listeners while being called.
    pub fn emit(&self, event: &ControlEvent) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        tracing::trace!(event = event.name(), listeners = snapshot.len(), "emit");
        for listener in snapshot {
            listener(event);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Check if no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

type Batch = (Rc<EventListeners>, Vec<ControlEvent>);

/// FIFO of event batches waiting for every control update to finish.
#[derive(Debug, Default)]
pub(crate) struct EventQueue {
    depth: Cell<usize>,
    pending: RefCell<VecDeque<Batch>>,
}

/// Keeps an [`EventQueue`] from delivering until dropped.
#[must_use]
pub(crate) struct DeliveryHold {
    queue: Rc<EventQueue>,
}

impl Drop for DeliveryHold {
    fn drop(&mut self) {
        self.queue.release();
    }
}

impl EventQueue {
    /// Hold delivery until the returned guard drops.
    pub(crate) fn hold(self: &Rc<Self>) -> DeliveryHold {
        self.depth.set(self.depth.get() + 1);
        DeliveryHold {
            queue: Rc::clone(self),
        }
    }

    /// Queue `events` for `listeners`.
    pub(crate) fn push(&self, listeners: Rc<EventListeners>, events: Vec<ControlEvent>) {
        if events.is_empty() {
            return;
        }
        self.pending.borrow_mut().push_back((listeners, events));
    }

    /// Number of queued batches.
    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    fn release(&self) {
        let depth = self.depth.get().saturating_sub(1);
        self.depth.set(depth);
        if depth > 0 || std::thread::panicking() {
            return;
        }
        // Listeners may queue more batches; the borrow ends before each emit
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some((listeners, events)) = next else {
                break;
            };
            for event in &events {
                listeners.emit(event);
            }
        }
    }
}
