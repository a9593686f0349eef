//! Word_Break and Extended_Pictographic property tables.
//!
//! This crate is the standalone, zero-dependency half of the word
//! segmentation stack: it maps a [`char`] to its `Word_Break` property
//! (UAX #29 §4.1) and answers `Extended_Pictographic` membership queries.
//! It has no notion of boundaries or rules -- that lives in
//! `wordbreak_core`, which consumes this crate's lookups one scalar at a
//! time.
//!
//! # Stability
//!
//! [`WordBreakProperty`] is `#[non_exhaustive]`: new variants may be added
//! as Unicode revises the property. Match arms should include a wildcard.

#![no_std]

mod pictographic;
mod property;
mod ranges;

pub use pictographic::is_extended_pictographic;
pub use property::WordBreakProperty;
pub use ranges::word_break_property;
