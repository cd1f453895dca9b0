//! Fuzz target for the emulated text store.
//!
//! Applies arbitrary edit and caret operations and checks that the
//! selection stays inside the text and the length limit holds.

#![no_main]

use arbitrary::Arbitrary;
use caret_ui::text::TextStore;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Insert(String),
    Backspace { by_word: bool },
    Delete { by_word: bool },
    Select { start: u16, end: u16 },
    Left { extend: bool, by_word: bool },
    Right { extend: bool, by_word: bool },
    Up { extend: bool },
    Down { extend: bool },
    Home { extend: bool },
    End { extend: bool },
    SelectAll,
    SetText(String),
}

#[derive(Arbitrary, Debug)]
struct StoreInput {
    initial: String,
    max_chars: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: StoreInput| {
    let max = usize::from(input.max_chars);
    let mut store = TextStore::with_text(&input.initial);
    for op in input.ops.into_iter().take(64) {
        let before = store.len_chars();
        match op {
            Op::Insert(text) => {
                store.insert(&text, max);
                if max > 0 {
                    assert!(store.len_chars() <= max.max(before));
                }
            }
            Op::Backspace { by_word } => {
                store.delete_backward(by_word);
            }
            Op::Delete { by_word } => {
                store.delete_forward(by_word);
            }
            Op::Select { start, end } => {
                store.update_selection(usize::from(start), usize::from(end));
            }
            Op::Left { extend, by_word } => store.move_left(extend, by_word),
            Op::Right { extend, by_word } => store.move_right(extend, by_word),
            Op::Up { extend } => store.move_up(extend),
            Op::Down { extend } => store.move_down(extend),
            Op::Home { extend } => store.move_home(extend),
            Op::End { extend } => store.move_end(extend),
            Op::SelectAll => store.select_all(),
            Op::SetText(text) => store.set_text(&text),
        }
        let span = store.selection();
        assert!(span.start <= span.end);
        assert!(span.end <= store.len_chars());
        assert!(store.head() <= store.len_chars());
    }
});
