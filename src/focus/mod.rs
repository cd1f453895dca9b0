//! Focus coordination and tab navigation.
//!
//! A [`FocusController`] is an explicitly constructed object owned by the
//! application root (see [`InputContext`](crate::InputContext)), so several
//! independent UI roots can coexist. It keeps:
//!
//! - tab groups: named, ordered lists of focusable items sorted by tab
//!   index (stable, so ties keep insertion order)
//! - the single current item across all groups
//!
//! Items are identified by [`FocusId`] and expose what they can do through a
//! [`FocusCapability`]. Callbacks are cloned out of the registry before they
//! run, so a callback may call back into the controller.
//!
//! # Examples
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use caret_ui::focus::{FocusCapability, FocusController};
//!
//! let focus = Rc::new(FocusController::new());
//! let a = focus.allocate_id();
//! let b = focus.allocate_id();
//!
//! let blurred = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&blurred);
//! focus
//!     .register(a, FocusCapability::new().on_blur(move || flag.set(true)), 0, None)
//!     .unwrap();
//!
//! focus.set_current(a);
//! focus.set_current(b);
//! assert!(blurred.get());
//! assert_eq!(focus.current(), Some(b));
//! ```

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::event::EventQueue;
use crate::input::{KeyCode, KeyEvent};

/// Group used for items registered without a tab group.
pub const DEFAULT_GROUP: &str = "default";

/// Tab index given to items that do not specify one.
pub const UNORDERED_TAB_INDEX: i32 = -1;

/// Identity of a focusable item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FocusId(u64);

impl FocusId {
    /// Raw numeric value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

type Action = Rc<dyn Fn()>;

/// What a focusable item can do when navigation reaches it.
#[derive(Clone, Default)]
pub struct FocusCapability {
    focus: Option<Action>,
    blur: Option<Action>,
    enter: Option<Action>,
}

impl std::fmt::Debug for FocusCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusCapability")
            .field("focus", &self.focus.is_some())
            .field("blur", &self.blur.is_some())
            .field("enter", &self.enter.is_some())
            .finish()
    }
}

impl FocusCapability {
    /// Capability with no actions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Action invoked when navigation focuses the item.
    #[must_use]
    pub fn on_focus<F: Fn() + 'static>(mut self, f: F) -> Self {
        self.focus = Some(Rc::new(f));
        self
    }

    /// Action invoked when another item takes over focus.
    #[must_use]
    pub fn on_blur<F: Fn() + 'static>(mut self, f: F) -> Self {
        self.blur = Some(Rc::new(f));
        self
    }

    /// Action invoked on Enter while the item is current.
    #[must_use]
    pub fn on_enter<F: Fn() + 'static>(mut self, f: F) -> Self {
        self.enter = Some(Rc::new(f));
        self
    }

    /// Check if the item can be focused by navigation.
    #[must_use]
    pub fn can_focus(&self) -> bool {
        self.focus.is_some()
    }
}

#[derive(Debug)]
struct FocusEntry {
    id: FocusId,
    tab_index: i32,
    enabled: bool,
    use_tab: bool,
    arrow_navigation: bool,
    capability: FocusCapability,
}

impl FocusEntry {
    fn is_eligible(&self) -> bool {
        self.enabled && self.use_tab && self.capability.can_focus()
    }
}

#[derive(Debug, Default)]
struct Registry {
    groups: BTreeMap<String, Vec<FocusEntry>>,
    current: Option<FocusId>,
}

impl Registry {
    fn find(&self, id: FocusId) -> Option<(&str, usize)> {
        self.groups.iter().find_map(|(name, items)| {
            items
                .iter()
                .position(|e| e.id == id)
                .map(|i| (name.as_str(), i))
        })
    }

    fn entry(&self, id: FocusId) -> Option<&FocusEntry> {
        self.find(id)
            .and_then(|(group, i)| self.groups.get(group).and_then(|items| items.get(i)))
    }

    fn entry_mut(&mut self, id: FocusId) -> Option<&mut FocusEntry> {
        self.groups
            .values_mut()
            .find_map(|items| items.iter_mut().find(|e| e.id == id))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Next,
    Prev,
}

/// Ordered tab-group registry with a single current item.
#[derive(Debug, Default)]
pub struct FocusController {
    registry: RefCell<Registry>,
    next_id: Cell<u64>,
    events: Rc<EventQueue>,
}

impl FocusController {
    /// Create an empty controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Event queue shared by the controls registered here.
    pub(crate) fn event_queue(&self) -> &Rc<EventQueue> {
        &self.events
    }

    /// Hand out a fresh item identity.
    pub fn allocate_id(&self) -> FocusId {
        let id = FocusId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        id
    }

    /// Register an item in a tab group (`None` means [`DEFAULT_GROUP`]).
    ///
    /// Returns `Ok(false)` without changes if the item is already in that
    /// group. An item lives in one group at a time: registering it in a
    /// different group moves it there.
    pub fn register(
        &self,
        id: FocusId,
        capability: FocusCapability,
        tab_index: i32,
        group: Option<&str>,
    ) -> Result<bool> {
        if tab_index < UNORDERED_TAB_INDEX {
            return Err(Error::InvalidTabIndex(tab_index));
        }
        let group = group.unwrap_or(DEFAULT_GROUP);
        let mut registry = self.registry.borrow_mut();

        let mut moved = None;
        let existing = registry.find(id).map(|(g, i)| (g.to_string(), i));
        if let Some((existing, i)) = existing {
            if existing == group {
                return Ok(false);
            }
            moved = registry
                .groups
                .get_mut(&existing)
                .map(|items| items.remove(i));
        }

        let entry = match moved {
            Some(mut entry) => {
                entry.tab_index = tab_index;
                entry.capability = capability;
                entry
            }
            None => FocusEntry {
                id,
                tab_index,
                enabled: true,
                use_tab: true,
                arrow_navigation: true,
                capability,
            },
        };

        let items = registry.groups.entry(group.to_string()).or_default();
        items.push(entry);
        items.sort_by_key(|e| e.tab_index);
        tracing::debug!(id = id.0, tab_index, group, "focus item registered");
        Ok(true)
    }

    /// Remove an item, clearing the current item if it was this one.
    pub fn remove(&self, id: FocusId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let Some((group, i)) = registry.find(id).map(|(g, i)| (g.to_string(), i)) else {
            return false;
        };
        let mut now_empty = false;
        if let Some(items) = registry.groups.get_mut(&group) {
            items.remove(i);
            now_empty = items.is_empty();
        }
        if now_empty {
            registry.groups.remove(&group);
        }
        if registry.current == Some(id) {
            registry.current = None;
        }
        true
    }

    /// Drop a whole tab group.
    pub fn remove_group(&self, group: &str) -> bool {
        let mut registry = self.registry.borrow_mut();
        let Some(items) = registry.groups.remove(group) else {
            return false;
        };
        if let Some(current) = registry.current {
            if items.iter().any(|e| e.id == current) {
                registry.current = None;
            }
        }
        true
    }

    /// Items of a group in tab order.
    #[must_use]
    pub fn items(&self, group: &str) -> Vec<FocusId> {
        self.registry
            .borrow()
            .groups
            .get(group)
            .map(|items| items.iter().map(|e| e.id).collect())
            .unwrap_or_default()
    }

    /// Group an item is registered in.
    #[must_use]
    pub fn group_of(&self, id: FocusId) -> Option<String> {
        self.registry.borrow().find(id).map(|(g, _)| g.to_string())
    }

    /// Tab index of a registered item.
    #[must_use]
    pub fn tab_index(&self, id: FocusId) -> Option<i32> {
        self.registry.borrow().entry(id).map(|e| e.tab_index)
    }

    /// Check if an item is registered in any group.
    #[must_use]
    pub fn is_registered(&self, id: FocusId) -> bool {
        self.registry.borrow().find(id).is_some()
    }

    /// Enable or disable an item for navigation.
    pub fn set_enabled(&self, id: FocusId, enabled: bool) -> bool {
        self.update_entry(id, |e| e.enabled = enabled)
    }

    /// Include or exclude an item from tab navigation.
    pub fn set_use_tab(&self, id: FocusId, use_tab: bool) -> bool {
        self.update_entry(id, |e| e.use_tab = use_tab)
    }

    /// Let Up/Down move focus away from this item (on by default).
    ///
    /// Multi-line editors turn this off so arrow keys move the caret.
    pub fn set_arrow_navigation(&self, id: FocusId, enabled: bool) -> bool {
        self.update_entry(id, |e| e.arrow_navigation = enabled)
    }

    /// Replace an item's enter action.
    pub fn set_enter_action(&self, id: FocusId, action: Option<Rc<dyn Fn()>>) -> bool {
        self.update_entry(id, |e| e.capability.enter = action)
    }

    fn update_entry(&self, id: FocusId, f: impl FnOnce(&mut FocusEntry)) -> bool {
        let mut registry = self.registry.borrow_mut();
        registry.entry_mut(id).map(f).is_some()
    }

    /// The current item.
    #[must_use]
    pub fn current(&self) -> Option<FocusId> {
        self.registry.borrow().current
    }

    /// Make `id` current, blurring the previous current item first.
    ///
    /// No-op if `id` is already current. The item does not need to be
    /// registered.
    pub fn set_current(&self, id: FocusId) {
        let (previous, blur) = {
            let registry = self.registry.borrow();
            if registry.current == Some(id) {
                return;
            }
            let previous = registry.current;
            let blur = previous
                .and_then(|p| registry.entry(p))
                .and_then(|e| e.capability.blur.clone());
            (previous, blur)
        };

        if let Some(blur) = blur {
            tracing::debug!(previous = previous.map(FocusId::get), "blurring previous focus");
            blur();
        }

        self.registry.borrow_mut().current = Some(id);
        tracing::debug!(id = id.0, "focus current set");
    }

    /// Forget the current item without blurring it.
    pub fn clear_current(&self) {
        self.registry.borrow_mut().current = None;
    }

    /// Clear the current item if it is `id`. Returns whether it was.
    pub fn release(&self, id: FocusId) -> bool {
        let mut registry = self.registry.borrow_mut();
        if registry.current == Some(id) {
            registry.current = None;
            true
        } else {
            false
        }
    }

    fn find(&self, direction: Direction) -> Option<FocusId> {
        let registry = self.registry.borrow();
        let current = registry.current?;
        let (group, index) = registry.find(current)?;
        let items = registry.groups.get(group)?;
        let len = items.len();

        let mut i = index;
        for _ in 0..len {
            i = match direction {
                Direction::Next => (i + 1) % len,
                Direction::Prev => (i + len - 1) % len,
            };
            if items[i].is_eligible() {
                return Some(items[i].id);
            }
        }
        None
    }

    /// Next eligible item after the current one in its group, wrapping
    /// around. May be the current item itself if it is the only eligible one.
    #[must_use]
    pub fn find_next(&self) -> Option<FocusId> {
        self.find(Direction::Next)
    }

    /// Previous eligible item before the current one in its group.
    #[must_use]
    pub fn find_prev(&self) -> Option<FocusId> {
        self.find(Direction::Prev)
    }

    fn fire(&self, direction: Direction) -> bool {
        let Some(target) = self.find(direction) else {
            return false;
        };
        let action = self
            .registry
            .borrow()
            .entry(target)
            .and_then(|e| e.capability.focus.clone());
        tracing::debug!(target = target.0, ?direction, "tab navigation");
        match action {
            Some(focus) => {
                focus();
                true
            }
            None => false,
        }
    }

    /// Focus the next item (Tab).
    pub fn fire_tab(&self) -> bool {
        self.fire(Direction::Next)
    }

    /// Focus the next item.
    pub fn fire_next(&self) -> bool {
        self.fire(Direction::Next)
    }

    /// Focus the previous item.
    pub fn fire_prev(&self) -> bool {
        self.fire(Direction::Prev)
    }

    /// Run the current item's enter action.
    pub fn enter(&self) -> bool {
        let action = {
            let registry = self.registry.borrow();
            registry
                .current
                .and_then(|c| registry.entry(c))
                .and_then(|e| e.capability.enter.clone())
        };
        match action {
            Some(enter) => {
                enter();
                true
            }
            None => false,
        }
    }

    fn current_allows_arrows(&self) -> bool {
        let registry = self.registry.borrow();
        registry
            .current
            .and_then(|c| registry.entry(c))
            .is_some_and(|e| e.arrow_navigation)
    }

    /// Handle navigation keys.
    ///
    /// Tab moves forward, Shift+Tab and Up move back, Down moves forward and
    /// Enter runs the current item's enter action. Returns true when the key
    /// was consumed and default handling should be suppressed.
    pub fn key_down(&self, event: &KeyEvent) -> bool {
        if event.is_back_tab() {
            return self.fire_prev();
        }
        match event.code {
            KeyCode::Tab => self.fire_tab(),
            KeyCode::Up if self.current_allows_arrows() => self.fire_prev(),
            KeyCode::Down if self.current_allows_arrows() => self.fire_next(),
            KeyCode::Enter => self.enter(),
            _ => false,
        }
    }
}
