//! Unicode word-boundary segmentation (UAX #29 §4.1).
//!
//! This crate is the thin public surface over two standalone pieces:
//! [`wordbreak_tables`] resolves a scalar's `Word_Break` property, and
//! [`wordbreak_core`] runs the boundary rule table over a stream of those
//! properties. This crate just wires the two together into spans and
//! words, for both `&str` and raw UTF-16 buffers.
//!
//! ```
//! let words: Vec<&str> = wordbreak::split_words("The quick, brown fox.").collect();
//! assert_eq!(words, vec!["The", "quick", "brown", "fox"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

mod span;
mod words;

pub use span::{iterate_spans, iterate_spans_utf16, Span, SpanIter, SpanIterUtf16, SpanUtf16};
pub use words::{split_words, SplitWords};

pub use wordbreak_core::{find_boundaries, find_boundaries_utf16, Boundaries, BoundariesUtf16};
pub use wordbreak_tables::{is_extended_pictographic, word_break_property, WordBreakProperty};
