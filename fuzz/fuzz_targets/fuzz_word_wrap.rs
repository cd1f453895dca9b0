//! Fuzz target for word wrapping and text/pixel mapping.
//!
//! Wraps arbitrary text at an arbitrary width and checks that every
//! offset locates inside the layout and maps to a pixel and back without
//! panicking.

#![no_main]

use arbitrary::Arbitrary;
use caret_ui::Point;
use caret_ui::text::{LineLayout, MonospaceMetrics};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct WrapInput {
    text: String,
    /// Wrap width in cells; zero disables wrapping.
    cells: u8,
    hit_x: i16,
    hit_y: i16,
}

fuzz_target!(|input: WrapInput| {
    let metrics = MonospaceMetrics::new(7.0, 14.0);
    let width = (input.cells > 0).then(|| f32::from(input.cells) * 7.0);
    let layout = LineLayout::wrap(&input.text, width, &metrics);
    assert!(!layout.is_empty());

    let len = layout.char_count();
    for index in 0..=len.min(512) {
        let (row, col) = layout.locate(index);
        assert!(row < layout.len());
        assert!(col <= layout.lines()[row].len());
        let _ = layout.position_of(index, &metrics, 14.0);
    }

    let hit = Point::new(f32::from(input.hit_x), f32::from(input.hit_y));
    assert!(layout.index_at(hit, &metrics, 14.0) <= len);
});
