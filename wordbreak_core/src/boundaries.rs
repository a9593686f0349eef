//! Public iterators over word-boundary positions.

use crate::engine::Engine;
use crate::scalar::{Utf16Source, Utf8Source};

/// Yields word-boundary positions (UTF-8 byte offsets) over `&str` text, in
/// increasing order, per UAX #29 §4.1.
///
/// Empty input yields no positions. Non-empty input always starts with `0`
/// and ends with `text.len()`.
pub struct Boundaries<'a> {
    engine: Engine<Utf8Source<'a>>,
}

impl<'a> Boundaries<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            engine: Engine::new(Utf8Source::new(text)),
        }
    }
}

impl Iterator for Boundaries<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.engine.next()
    }
}

impl core::iter::FusedIterator for Boundaries<'_> {}

/// Yields word-boundary positions (UTF-16 code unit offsets) over a
/// `&[u16]` buffer, in increasing order, per UAX #29 §4.1.
///
/// Unpaired surrogates are treated as `Word_Break::Other` and never split
/// mid-pair; see [`crate::find_boundaries_utf16`].
pub struct BoundariesUtf16<'a> {
    engine: Engine<Utf16Source<'a>>,
}

impl<'a> BoundariesUtf16<'a> {
    pub(crate) fn new(units: &'a [u16]) -> Self {
        Self {
            engine: Engine::new(Utf16Source::new(units)),
        }
    }
}

impl Iterator for BoundariesUtf16<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.engine.next()
    }
}

impl core::iter::FusedIterator for BoundariesUtf16<'_> {}

/// Finds all word-boundary positions in `text`.
#[inline]
#[must_use]
pub fn find_boundaries(text: &str) -> Boundaries<'_> {
    Boundaries::new(text)
}

/// Finds all word-boundary positions in a UTF-16 code unit buffer.
#[inline]
#[must_use]
pub fn find_boundaries_utf16(units: &[u16]) -> BoundariesUtf16<'_> {
    BoundariesUtf16::new(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_boundaries() {
        assert_eq!(find_boundaries("").collect::<Vec<_>>(), Vec::<usize>::new());
    }

    #[test]
    fn boundaries_start_at_zero_and_end_at_len() {
        let text = "hello world";
        let bs: Vec<_> = find_boundaries(text).collect();
        assert_eq!(bs[0], 0);
        assert_eq!(bs[bs.len() - 1], text.len());
    }

    #[test]
    fn utf16_boundaries_match_utf8_word_count() {
        let text = "go 🏃 run";
        let units: Vec<u16> = text.encode_utf16().collect();
        let utf8_count = find_boundaries(text).count();
        let utf16_count = find_boundaries_utf16(&units).count();
        assert_eq!(utf8_count, utf16_count);
    }
}
