//! Unicode utilities for grapheme handling and display width.

mod grapheme;
mod width;

pub use grapheme::{
    byte_to_char, char_to_byte, next_grapheme_boundary, next_word_boundary,
    prev_grapheme_boundary, prev_word_boundary,
};
pub use width::{WidthMethod, display_width, display_width_char};
