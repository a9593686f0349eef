//! End-to-end scenarios exercising the full span/word stack across
//! scripts.

use wordbreak::{iterate_spans, iterate_spans_utf16, split_words};

#[test]
fn english_sentence_with_curly_quotes_and_a_contraction() {
    let text = "\u{201C}It\u{2019}s fine,\u{201D} she said.";
    let words: Vec<_> = split_words(text).collect();
    assert_eq!(words, vec!["It's", "fine", "she", "said"]);

    let rebuilt: String = iterate_spans(text).map(|s| s.text).collect();
    assert_eq!(rebuilt, text);
}

#[test]
fn russian_sentence_keeps_cyrillic_words_whole() {
    let text = "\u{041C}\u{044B} \u{0438}\u{0434}\u{0451}\u{043C} \u{0434}\u{043E}\u{043C}\u{043E}\u{0439}.";
    let words: Vec<_> = split_words(text).collect();
    assert_eq!(words, vec!["\u{041C}\u{044B}", "\u{0438}\u{0434}\u{0451}\u{043C}", "\u{0434}\u{043E}\u{043C}\u{043E}\u{0439}"]);
}

#[test]
fn canadian_syllabics_sentence_joins_across_narrow_no_break_space() {
    // The syllabics full stop (U+166E) is its own span; the narrow
    // no-break space (U+202F) is ExtendNumLet and glues its neighbors.
    let text = "\u{1401}\u{202F}\u{1403}\u{166E}";
    let spans: Vec<_> = iterate_spans(text).map(|s| s.text).collect();
    assert_eq!(spans, vec!["\u{1401}\u{202F}\u{1403}", "\u{166E}"]);

    let words: Vec<_> = split_words(text).collect();
    assert_eq!(words, vec!["\u{1401}\u{202F}\u{1403}"]);
}

#[test]
fn utf16_spans_over_an_emoji_sequence() {
    let text = "go\u{1F3C3}run";
    let units: Vec<u16> = text.encode_utf16().collect();
    let spans: Vec<_> = iterate_spans_utf16(&units).map(|s| s.range).collect();

    // "go" | the runner emoji | "run", contiguous and covering the buffer.
    assert_eq!(spans.len(), 3);
    assert_eq!(spans[0], 0..2);
    assert_eq!(spans[2].end, units.len());
    for pair in spans.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}
