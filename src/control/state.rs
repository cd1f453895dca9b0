//! Control state: skin state, interaction state and invalidation flags.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::{Error, Result};

/// Skin state of a control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ControlState {
    /// Pointer released or away.
    #[default]
    Up,
    /// Pointer pressed on the control.
    Down,
    /// Pointer over the control.
    Hover,
}

impl ControlState {
    /// All recognized states.
    pub const ALL: [Self; 3] = [Self::Up, Self::Down, Self::Hover];

    /// State name as used by skins.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Hover => "hover",
        }
    }
}

impl fmt::Display for ControlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ControlState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|state| state.name() == s)
            .ok_or_else(|| Error::InvalidState(s.to_string()))
    }
}

/// Focus and drag state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    #[default]
    Blurred,
    Focused,
    /// Focused with the primary pointer held for a selection drag.
    Dragging,
}

bitflags! {
    /// Parts of a control that must be recomputed on the next redraw.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Invalidation: u8 {
        /// Caret position.
        const CURSOR = 0b0000_0001;
        /// Selection highlight.
        const SELECTION = 0b0000_0010;
        /// Clip mask and wrap width.
        const CLIPPING = 0b0000_0100;
        /// Line layout of the text.
        const TEXT = 0b0000_1000;
        /// Skin for the current state.
        const SKIN = 0b0001_0000;
    }
}
