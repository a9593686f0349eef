//! `split_words`: the subset of [`crate::iterate_spans`] that looks like a
//! word rather than whitespace or punctuation.

use crate::span::{iterate_spans, SpanIter};
use wordbreak_tables::{word_break_property, WordBreakProperty};

/// A span counts as a word if any scalar in it carries a property the
/// word-break rules treat as "content": a letter, a digit, or a Katakana
/// character. A connector like `ExtendNumLet` only ever keeps a span
/// together via the letter/digit next to it -- a span made up solely of
/// connectors and punctuation is not a word.
fn is_word_like(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(
            word_break_property(c),
            WordBreakProperty::ALetter
                | WordBreakProperty::HebrewLetter
                | WordBreakProperty::Numeric
                | WordBreakProperty::Katakana
        )
    })
}

/// Iterates over the word-like spans of `text`, skipping whitespace and
/// punctuation spans.
pub struct SplitWords<'a> {
    spans: SpanIter<'a>,
}

impl<'a> Iterator for SplitWords<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.spans.by_ref().map(|span| span.text).find(|text| is_word_like(text))
    }
}

impl core::iter::FusedIterator for SplitWords<'_> {}

/// Splits `text` into its word-like spans, dropping whitespace and
/// punctuation.
#[inline]
#[must_use]
pub fn split_words(text: &str) -> SplitWords<'_> {
    SplitWords {
        spans: iterate_spans(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_whitespace_and_punctuation() {
        let words: Vec<_> = split_words("The quick, brown fox.").collect();
        assert_eq!(words, vec!["The", "quick", "brown", "fox"]);
    }

    #[test]
    fn keeps_contractions_whole() {
        let words: Vec<_> = split_words("ain't that something").collect();
        assert_eq!(words, vec!["ain't", "that", "something"]);
    }

    #[test]
    fn keeps_numbers_with_punctuation_whole() {
        let words: Vec<_> = split_words("price: 1,000 units").collect();
        assert_eq!(words, vec!["price", "1,000", "units"]);
    }

    #[test]
    fn empty_text_has_no_words() {
        assert_eq!(split_words("").count(), 0);
    }

    #[test]
    fn all_whitespace_has_no_words() {
        assert_eq!(split_words("   \t\n  ").count(), 0);
    }

    #[test]
    fn a_lone_connector_is_not_a_word() {
        assert_eq!(split_words("_").count(), 0);
    }
}
