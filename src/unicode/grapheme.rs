//! Grapheme and word boundaries expressed in char offsets.
//!
//! Text positions throughout the crate count Unicode scalar values. These
//! helpers let caret movement and deletion step over whole grapheme
//! clusters and words while still speaking char offsets.

use unicode_segmentation::UnicodeSegmentation;

/// Byte index of the `char_idx`-th char, clamped to the end of `s`.
#[must_use]
pub fn char_to_byte(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(b, _)| b)
}

/// Number of chars in `s[..byte_idx]`.
#[must_use]
pub fn byte_to_char(s: &str, byte_idx: usize) -> usize {
    s[..byte_idx.min(s.len())].chars().count()
}

/// Char offset of the grapheme boundary after `char_idx`.
#[must_use]
pub fn next_grapheme_boundary(s: &str, char_idx: usize) -> usize {
    let byte = char_to_byte(s, char_idx);
    s[byte..]
        .graphemes(true)
        .next()
        .map_or(char_idx, |g| char_idx + g.chars().count())
}

/// Char offset of the grapheme boundary before `char_idx`.
#[must_use]
pub fn prev_grapheme_boundary(s: &str, char_idx: usize) -> usize {
    let byte = char_to_byte(s, char_idx);
    s[..byte]
        .graphemes(true)
        .next_back()
        .map_or(0, |g| byte_to_char(s, byte - g.len()))
}

/// Char offset of the end of the next word at or after `char_idx`.
#[must_use]
pub fn next_word_boundary(s: &str, char_idx: usize) -> usize {
    let byte = char_to_byte(s, char_idx);
    let mut seen_word = false;
    for (start, segment) in s[byte..].split_word_bound_indices() {
        let is_word = segment.chars().any(char::is_alphanumeric);
        if is_word {
            seen_word = true;
        } else if seen_word {
            return byte_to_char(s, byte + start);
        }
    }
    s.chars().count()
}

/// Char offset of the start of the word before `char_idx`.
#[must_use]
pub fn prev_word_boundary(s: &str, char_idx: usize) -> usize {
    let byte = char_to_byte(s, char_idx);
    let mut boundary = 0;
    let mut seen_word = false;
    for (start, segment) in s[..byte].split_word_bound_indices().rev() {
        let is_word = segment.chars().any(char::is_alphanumeric);
        if is_word {
            seen_word = true;
            boundary = start;
        } else if seen_word {
            break;
        }
    }
    byte_to_char(s, boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_byte_conversion() {
        let s = "aé漢b";
        assert_eq!(char_to_byte(s, 0), 0);
        assert_eq!(char_to_byte(s, 2), 3);
        assert_eq!(char_to_byte(s, 99), s.len());
        assert_eq!(byte_to_char(s, 6), 3);
    }

    #[test]
    fn test_grapheme_steps_over_combining() {
        // e + combining acute accent is one cluster of two chars
        let s = "xe\u{0301}y";
        assert_eq!(next_grapheme_boundary(s, 1), 3);
        assert_eq!(prev_grapheme_boundary(s, 3), 1);
        assert_eq!(prev_grapheme_boundary(s, 0), 0);
        assert_eq!(next_grapheme_boundary(s, 4), 4);
    }

    #[test]
    fn test_word_boundaries() {
        let s = "hello world test";
        assert_eq!(next_word_boundary(s, 0), 5);
        assert_eq!(next_word_boundary(s, 5), 11);
        assert_eq!(next_word_boundary(s, 12), 16);
        assert_eq!(prev_word_boundary(s, 16), 12);
        assert_eq!(prev_word_boundary(s, 12), 6);
        assert_eq!(prev_word_boundary(s, 3), 0);
    }
}
