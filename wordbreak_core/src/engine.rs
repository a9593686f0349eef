//! The boundary state machine: a four-slot sliding window plus an ordered
//! rule table, applied one scalar at a time over a [`ScalarSource`].
//!
//! The window never holds an `Extend`/`Format` scalar in `left` or `right`:
//! [`Engine::pull_significant`] folds WB4's "ignore" behavior into the act
//! of refilling a slot, so the rule table in [`Engine::classify`] only ever
//! sees the scalars the rules actually talk about. `ZWJ` is the one
//! exception -- it is ignorable too, but WB3c needs to see it sitting in
//! `left`, so a surfaced `ZWJ` is allowed into the window when it precedes
//! an `Extended_Pictographic` scalar. [`Rule::Wb4`] then keeps the
//! transition *into* that `ZWJ` from producing a boundary of its own.

use crate::scalar::ScalarSource;
use wordbreak_tables::{is_extended_pictographic, word_break_property, WordBreakProperty};

#[derive(Clone, Copy, Debug)]
pub(crate) struct Scalar {
    pub(crate) pos: usize,
    pub(crate) ch: char,
    pub(crate) prop: WordBreakProperty,
}

enum Rule {
    Emit,
    Keep,
}

/// Implements UAX #29 §4.1's rule table over a pull-based scalar source.
///
/// `Engine::next` returns one boundary position per call, the same shape
/// as the public iterators built on top of it, so advancing the engine and
/// advancing the word-break walk are the same operation.
pub(crate) struct Engine<S> {
    source: S,
    peek: [Option<Scalar>; 2],
    peek_len: usize,
    lookbehind: Option<Scalar>,
    left: Option<Scalar>,
    right: Option<Scalar>,
    right_pos: usize,
    lookahead: Option<Scalar>,
    /// Length of the run of consecutive `Regional_Indicator` scalars ending
    /// at `left` (zero if `left` is `None` or is not itself RI). Updated in
    /// [`Self::shift`], each time a new scalar becomes `left`, so WB15/WB16
    /// always see the run length as of *before* `right` joins it.
    ri_run: u32,
    len: usize,
    started: bool,
    done: bool,
}

impl<S: ScalarSource> Engine<S> {
    pub(crate) fn new(source: S) -> Self {
        let len = source.len();
        Self {
            source,
            peek: [None, None],
            peek_len: 0,
            lookbehind: None,
            left: None,
            right: None,
            right_pos: 0,
            lookahead: None,
            ri_run: 0,
            len,
            started: false,
            done: false,
        }
    }

    fn pull_raw(&mut self) -> Option<Scalar> {
        if self.peek_len > 0 {
            let scalar = self.peek[0];
            self.peek[0] = self.peek[1];
            self.peek[1] = None;
            self.peek_len -= 1;
            scalar
        } else {
            self.source
                .next_scalar()
                .map(|(pos, ch)| Scalar { pos, ch, prop: word_break_property(ch) })
        }
    }

    /// Ensures `self.peek[n]` is populated (or known to be past the end)
    /// without consuming it.
    fn peek_at(&mut self, n: usize) -> Option<Scalar> {
        while self.peek_len <= n {
            let next = self
                .source
                .next_scalar()
                .map(|(pos, ch)| Scalar { pos, ch, prop: word_break_property(ch) });
            let slot_is_none = next.is_none();
            self.peek[self.peek_len] = next;
            self.peek_len += 1;
            if slot_is_none {
                break;
            }
        }
        self.peek.get(n).copied().flatten()
    }

    /// Pulls the next scalar the rule table should see, absorbing any
    /// `Extend`/`Format` run (and a non-protecting `ZWJ`) along the way.
    ///
    /// `preceding` is the property of the scalar this one would ride along
    /// with; WB4 does not apply to the first scalar after `sot`, `CR`,
    /// `LF`, or `Newline`, so that one scalar is let through unabsorbed
    /// even if it is itself `Extend`/`Format`/`ZWJ`.
    fn pull_significant(&mut self, preceding: Option<WordBreakProperty>) -> Option<Scalar> {
        let mut suppressed = matches!(
            preceding,
            None | Some(WordBreakProperty::CR)
                | Some(WordBreakProperty::LF)
                | Some(WordBreakProperty::Newline)
        );
        loop {
            let raw = self.pull_raw()?;
            let this_suppressed = suppressed;
            suppressed = false;
            match raw.prop {
                WordBreakProperty::Extend | WordBreakProperty::Format if !this_suppressed => {
                    if self.zwj_protects_pictograph() {
                        match self.pull_raw() {
                            Some(zwj) => return Some(zwj),
                            None => continue,
                        }
                    }
                }
                WordBreakProperty::ZWJ if !this_suppressed => {
                    if self.peek_at(0).is_some_and(|s| is_extended_pictographic(s.ch)) {
                        return Some(raw);
                    }
                }
                _ => return Some(raw),
            }
        }
    }

    /// `true` when the next raw scalar is `ZWJ` and the one after that is
    /// `Extended_Pictographic` -- the lookahead pattern that must survive
    /// WB4's sweep so WB3c gets a chance to fire.
    fn zwj_protects_pictograph(&mut self) -> bool {
        self.peek_at(0).is_some_and(|s| s.prop == WordBreakProperty::ZWJ)
            && self.peek_at(1).is_some_and(|s| is_extended_pictographic(s.ch))
    }

    fn refill_lookahead(&mut self) {
        self.lookahead = match self.right {
            Some(r) => self.pull_significant(Some(r.prop)),
            None => None,
        };
    }

    fn shift(&mut self) {
        self.lookbehind = self.left;
        self.left = self.right;
        self.ri_run = match self.left {
            Some(s) if s.prop == WordBreakProperty::RegionalIndicator => self.ri_run + 1,
            _ => 0,
        };
        self.right = self.lookahead;
        self.right_pos = self.right.map_or(self.len, |s| s.pos);
        self.refill_lookahead();
    }

    fn classify(&mut self) -> Rule {
        let Some(right) = self.right else {
            return Rule::Emit; // WB2
        };
        let Some(left) = self.left else {
            return Rule::Emit; // WB1
        };

        use WordBreakProperty::{
            CR, DoubleQuote, ExtendNumLet, HebrewLetter, Katakana, LF, Newline, Numeric,
            RegionalIndicator, SingleQuote, WSegSpace, ZWJ,
        };

        if left.prop == CR && right.prop == LF {
            return Rule::Keep; // WB3
        }
        if matches!(left.prop, Newline | CR | LF) {
            return Rule::Emit; // WB3a
        }
        if matches!(right.prop, Newline | CR | LF) {
            return Rule::Emit; // WB3b
        }
        if left.prop == ZWJ && is_extended_pictographic(right.ch) {
            return Rule::Keep; // WB3c
        }
        if left.prop == WSegSpace && right.prop == WSegSpace {
            return Rule::Keep; // WB3d
        }
        if right.prop == ZWJ {
            return Rule::Keep; // WB4, the transition into a surfaced ZWJ
        }
        if left.prop.is_ahletter() && right.prop.is_ahletter() {
            return Rule::Keep; // WB5
        }
        if left.prop.is_ahletter()
            && right.prop.is_mid_letter_or_mid_num_let_q()
            && self.lookahead.is_some_and(|s| s.prop.is_ahletter())
        {
            return Rule::Keep; // WB6
        }
        if left.prop.is_mid_letter_or_mid_num_let_q()
            && right.prop.is_ahletter()
            && self.lookbehind.is_some_and(|s| s.prop.is_ahletter())
        {
            return Rule::Keep; // WB7
        }
        if left.prop == HebrewLetter && right.prop == SingleQuote {
            return Rule::Keep; // WB7a
        }
        if left.prop == HebrewLetter
            && right.prop == DoubleQuote
            && self.lookahead.is_some_and(|s| s.prop == HebrewLetter)
        {
            return Rule::Keep; // WB7b
        }
        if left.prop == DoubleQuote
            && right.prop == HebrewLetter
            && self.lookbehind.is_some_and(|s| s.prop == HebrewLetter)
        {
            return Rule::Keep; // WB7c
        }
        if left.prop == Numeric && right.prop == Numeric {
            return Rule::Keep; // WB8
        }
        if left.prop.is_ahletter() && right.prop == Numeric {
            return Rule::Keep; // WB9
        }
        if left.prop == Numeric && right.prop.is_ahletter() {
            return Rule::Keep; // WB10
        }
        if left.prop.is_mid_num_or_mid_num_let_q()
            && right.prop == Numeric
            && self.lookbehind.is_some_and(|s| s.prop == Numeric)
        {
            return Rule::Keep; // WB11
        }
        if left.prop == Numeric
            && right.prop.is_mid_num_or_mid_num_let_q()
            && self.lookahead.is_some_and(|s| s.prop == Numeric)
        {
            return Rule::Keep; // WB12
        }
        if left.prop == Katakana && right.prop == Katakana {
            return Rule::Keep; // WB13
        }
        if (left.prop.joins_extend_num_let() || left.prop == ExtendNumLet)
            && right.prop == ExtendNumLet
        {
            return Rule::Keep; // WB13a
        }
        if left.prop == ExtendNumLet && right.prop.joins_extend_num_let() {
            return Rule::Keep; // WB13b
        }
        if left.prop == RegionalIndicator && right.prop == RegionalIndicator && self.ri_run % 2 == 1
        {
            return Rule::Keep; // WB15/WB16
        }

        Rule::Emit // WB999
    }

    pub(crate) fn next(&mut self) -> Option<usize> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            self.right = self.pull_significant(None);
            self.right_pos = self.right.map_or(self.len, |s| s.pos);
            if self.right.is_none() {
                self.done = true;
                return None;
            }
            self.refill_lookahead();
        }
        loop {
            let boundary_pos = self.right_pos;
            let eot_reached = self.right.is_none();
            let rule = self.classify();
            self.shift();
            if matches!(rule, Rule::Emit) {
                if eot_reached {
                    self.done = true;
                }
                return Some(boundary_pos);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Utf8Source;

    fn boundaries(text: &str) -> Vec<usize> {
        let mut engine = Engine::new(Utf8Source::new(text));
        let mut out = Vec::new();
        while let Some(pos) = engine.next() {
            out.push(pos);
        }
        out
    }

    #[test]
    fn empty_string_has_no_boundaries() {
        assert_eq!(boundaries(""), Vec::<usize>::new());
    }

    #[test]
    fn single_ascii_word() {
        assert_eq!(boundaries("cat"), vec![0, 3]);
    }

    #[test]
    fn cr_lf_stays_joined() {
        assert_eq!(boundaries("a\r\nb"), vec![0, 1, 3, 4]);
    }

    #[test]
    fn lone_cr_breaks_before_following_text() {
        assert_eq!(boundaries("a\rb"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn vertical_tab_is_its_own_newline_span() {
        assert_eq!(boundaries("a\u{000B}b"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn combining_mark_glues_to_base_letter() {
        // "pho" + COMBINING HORN + COMBINING HOOK ABOVE, one span throughout.
        assert_eq!(boundaries("pho\u{031B}\u{0309}"), vec![0, 7]);
    }

    #[test]
    fn soft_hyphen_is_invisible_to_the_rules() {
        assert_eq!(boundaries("co\u{00AD}op"), vec![0, 6]);
    }

    #[test]
    fn zwj_emoji_sequence_is_one_span() {
        // fairy + skin tone modifier + ZWJ + male sign + VS16, one span.
        let text = "\u{1F9DA}\u{1F3FD}\u{200D}\u{2642}\u{FE0F}";
        assert_eq!(boundaries(text), vec![0, text.len()]);
    }

    #[test]
    fn bare_zwj_between_pictographs_is_also_joined() {
        let text = "\u{1F600}\u{200D}\u{1F600}";
        assert_eq!(boundaries(text), vec![0, text.len()]);
    }

    #[test]
    fn zwj_without_trailing_pictograph_is_still_invisible() {
        // ZWJ is Extend/Format/ZWJ-ignorable either way; with no pictograph
        // on either side it just rides along and WB5 joins the letters.
        let text = "a\u{200D}b";
        assert_eq!(boundaries(text), vec![0, text.len()]);
    }

    #[test]
    fn hebrew_letters_join_like_ahletters() {
        assert_eq!(boundaries("\u{05D0}\u{05D1}"), vec![0, 4]);
    }

    #[test]
    fn contraction_stays_one_word() {
        assert_eq!(boundaries("ain't"), vec![0, 5]);
    }

    #[test]
    fn sentence_final_period_splits_off() {
        assert_eq!(boundaries("cat."), vec![0, 3, 4]);
    }

    #[test]
    fn decimal_with_comma_group_stays_joined() {
        assert_eq!(boundaries("1,000"), vec![0, 5]);
    }

    #[test]
    fn katakana_run_is_one_word() {
        assert_eq!(boundaries("\u{30A2}\u{30A4}"), vec![0, 6]);
    }

    #[test]
    fn underscore_extends_a_letter_run() {
        assert_eq!(boundaries("foo_bar"), vec![0, 7]);
    }

    #[test]
    fn cjk_ideographs_each_stand_alone() {
        assert_eq!(boundaries("\u{7C73}\u{56FD}"), vec![0, 3, 6]);
    }

    #[test]
    fn regional_indicator_pairs_form_flags() {
        let flag = "\u{1F1FA}\u{1F1F8}";
        assert_eq!(boundaries(flag), vec![0, 8]);
        let two_flags = "\u{1F1FA}\u{1F1F8}\u{1F1EC}\u{1F1E7}";
        assert_eq!(boundaries(two_flags), vec![0, 8, 16]);
    }

    #[test]
    fn odd_trailing_regional_indicator_stands_alone() {
        let text = "\u{1F1FA}\u{1F1F8}\u{1F1EC}";
        assert_eq!(boundaries(text), vec![0, 8, 12]);
    }

    #[test]
    fn regional_indicator_after_a_letter_does_not_glue_to_it() {
        let text = "a\u{1F1FA}\u{1F1F8}";
        assert_eq!(boundaries(text), vec![0, 1, 9]);
    }

    #[test]
    fn regional_indicator_after_a_space_does_not_glue_to_it() {
        let text = "a \u{1F1FA}\u{1F1F8}";
        assert_eq!(boundaries(text), vec![0, 1, 2, 10]);
    }
}
