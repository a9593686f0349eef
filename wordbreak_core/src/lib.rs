//! The UAX #29 §4.1 word-boundary state machine.
//!
//! `wordbreak_core` turns a scalar stream into a sequence of boundary
//! positions. It has no notion of spans or words -- that is built on top,
//! in the `wordbreak` crate -- and no notion of what a code point's
//! `Word_Break` property even is, which is `wordbreak_tables`'s job. This
//! crate is purely the rule table and the window it runs over.
#![cfg_attr(not(feature = "std"), no_std)]

mod boundaries;
mod engine;
mod scalar;

pub use boundaries::{find_boundaries, find_boundaries_utf16, Boundaries, BoundariesUtf16};
