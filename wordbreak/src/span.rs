//! Span and word producers built on top of `wordbreak_core`'s boundary
//! stream.

use core::ops::Range;
use wordbreak_core::{find_boundaries, find_boundaries_utf16, Boundaries, BoundariesUtf16};

/// A maximal run of text between two adjacent word boundaries.
///
/// Every scalar in `text` belongs to exactly one span; concatenating every
/// span's `text` in order reconstructs the original input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub range: Range<usize>,
}

/// Iterates over every span in `text`, in order, including spans made up
/// entirely of whitespace or punctuation.
///
/// See [`split_words`] to skip the non-word spans.
pub struct SpanIter<'a> {
    boundaries: Boundaries<'a>,
    text: &'a str,
    prev: Option<usize>,
}

impl<'a> Iterator for SpanIter<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        let start = match self.prev {
            Some(start) => start,
            None => self.boundaries.next()?,
        };
        let end = self.boundaries.next()?;
        self.prev = Some(end);
        Some(Span {
            text: &self.text[start..end],
            range: start..end,
        })
    }
}

impl core::iter::FusedIterator for SpanIter<'_> {}

/// Splits `text` into its spans.
#[inline]
#[must_use]
pub fn iterate_spans(text: &str) -> SpanIter<'_> {
    SpanIter {
        boundaries: find_boundaries(text),
        text,
        prev: None,
    }
}

/// A maximal run of UTF-16 text between two adjacent word boundaries,
/// reported as code-unit offsets into the source buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanUtf16 {
    pub range: Range<usize>,
}

/// Iterates over every span in a UTF-16 code unit buffer, in order.
pub struct SpanIterUtf16<'a> {
    boundaries: BoundariesUtf16<'a>,
    prev: Option<usize>,
}

impl Iterator for SpanIterUtf16<'_> {
    type Item = SpanUtf16;

    fn next(&mut self) -> Option<SpanUtf16> {
        let start = match self.prev {
            Some(start) => start,
            None => self.boundaries.next()?,
        };
        let end = self.boundaries.next()?;
        self.prev = Some(end);
        Some(SpanUtf16 { range: start..end })
    }
}

impl core::iter::FusedIterator for SpanIterUtf16<'_> {}

/// Splits a UTF-16 code unit buffer into its spans.
#[inline]
#[must_use]
pub fn iterate_spans_utf16(units: &[u16]) -> SpanIterUtf16<'_> {
    SpanIterUtf16 {
        boundaries: find_boundaries_utf16(units),
        prev: None,
    }
}
