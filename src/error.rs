//! Error types for caret_ui.

use thiserror::Error;

/// Result type alias for caret_ui operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for caret_ui operations.
///
/// Every variant is a configuration mistake made by the caller. Runtime
/// conditions that arise from normal pointer and selection arithmetic
/// (positions past the end of the text, empty groups) are clamped or
/// reported as `None`/`false` instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A state name outside the control's recognized state set.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// A tab index below `-1` (the "unordered" sentinel).
    #[error("invalid tab index: {0}")]
    InvalidTabIndex(i32),
    /// An input pattern that does not compile.
    #[error("invalid input pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// An input type name that is not recognized.
    #[error("invalid input type: {0}")]
    InvalidInputType(String),
    /// Invalid color format (e.g., malformed hex string).
    #[error("invalid color format: {0}")]
    InvalidColor(String),
}
