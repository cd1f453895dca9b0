//! `caret_ui` - text input core for custom-rendered GUIs
//!
//! Focus routing between controls, text and selection synchronization with
//! a platform or emulated editing backend, and the caret, selection and
//! pixel/text-offset geometry a retained-mode renderer needs to paint a
//! text field.

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Intentional pixel/index casts
#![allow(clippy::cast_sign_loss)] // Intentional pixel/index conversions
#![allow(clippy::cast_precision_loss)] // Intentional for line offsets
#![allow(clippy::module_name_repetitions)] // Allow control::ControlState etc
#![allow(clippy::struct_excessive_bools)] // Control state needs multiple flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod color;
pub mod context;
pub mod control;
pub mod error;
pub mod event;
pub mod focus;
pub mod geometry;
pub mod input;
pub mod style;
pub mod text;
pub mod text_area;
pub mod text_input;
pub mod unicode;
pub mod wrapper;

// Re-export core types at crate root
pub use color::Rgba;
pub use context::InputContext;
pub use error::{Error, Result};
pub use event::{ControlEvent, ListenerId};
pub use geometry::{Point, Rect, ViewOffset};
pub use style::TextStyle;

// Re-export controls
pub use control::{
    ControlScene, ControlState, InputControl, InputKind, InputMode, InputOptions,
    InteractionState, Invalidation,
};
pub use text_area::TextArea;
pub use text_input::TextInput;

// Re-export focus and input types
pub use focus::{FocusCapability, FocusController, FocusId};
pub use input::{KeyCode, KeyEvent, KeyModifiers, KeyPhase, PointerEvent, PointerResponse};

// Re-export text measurement and backends
pub use text::{BitmapFontMetrics, FontMetrics, MonospaceMetrics, SelectionSpan};
pub use unicode::WidthMethod;
pub use wrapper::{
    BackendKind, EmulatedWrapper, InputType, NativeWrapper, Platform, PlatformTextField,
    TextEditingWrapper,
};
