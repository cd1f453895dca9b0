//! Text measurement, layout and storage.
//!
//! Key types:
//!
//! - [`FontMetrics`]: glyph advances, kerning and font height
//! - [`LineLayout`]: display lines with char-offset ↔ pixel mapping
//! - [`SelectionSpan`]: a selection range plus its highlight geometry
//! - [`TextStore`]: rope-backed text and selection for in-memory editing
//!
//! # Examples
//!
//! ```
//! use caret_ui::geometry::Point;
//! use caret_ui::text::{LineLayout, MonospaceMetrics};
//!
//! let metrics = MonospaceMetrics::new(10.0, 20.0);
//! let layout = LineLayout::wrap("abc def", Some(40.0), &metrics);
//! assert_eq!(layout.line_texts(), vec!["abc", "def"]);
//!
//! // Char 5 is the 'e' on the second line
//! let pos = layout.position_of(5, &metrics, 20.0);
//! assert_eq!(pos, Point::new(10.0, 20.0));
//! assert_eq!(layout.index_at(Point::new(15.0, 25.0), &metrics, 20.0), 5);
//! ```

mod layout;
mod metrics;
mod selection;
mod store;

pub use layout::{LINE_BREAK, LayoutLine, LineLayout};
pub use metrics::{BitmapFontMetrics, FontMetrics, MonospaceMetrics};
pub use selection::{SelectionSpan, multi_line_rects, single_line_rects};
pub use store::{TextStore, normalize_line_endings};
