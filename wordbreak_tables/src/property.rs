//! The `Word_Break` property enum.

/// `Word_Break` classification of a Unicode scalar value (UAX #29 §4.1).
///
/// Does not include `Extended_Pictographic`: that is a separate boolean
/// property (see [`crate::is_extended_pictographic`]) that a code point may
/// carry *in addition to* its `Word_Break` value -- a base emoji is
/// typically `Word_Break::Other` and `is_extended_pictographic() == true`
/// at the same time.
///
/// Does not include the `sot`/`eot` sentinels from spec §3 either; those
/// are not properties of a code point, they mark the edges of a walk and
/// live in `wordbreak_core`'s window type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum WordBreakProperty {
    /// Everything not covered by a more specific variant, including most
    /// punctuation and all CJK ideographs (Han characters break on every
    /// boundary by the WB999 default, which is exactly what `Other` falls
    /// through to).
    Other = 0,
    /// Carriage return (U+000D).
    CR = 1,
    /// Line feed (U+000A).
    LF = 2,
    /// Other mandatory line-break characters (U+000B, U+000C, U+0085,
    /// U+2028, U+2029).
    Newline = 3,
    /// Combining marks and other characters that should be invisible to
    /// the rules but ride along with the preceding scalar (WB4).
    Extend = 4,
    /// Formatting and bidi control characters, also invisible to the
    /// rules (WB4).
    Format = 5,
    /// Katakana script characters (WB13).
    Katakana = 6,
    /// Latin/other alphabetic letters (the "ALetter" half of AHLetter).
    ALetter = 7,
    /// Mid-word letter punctuation such as `:` and the middle dot (WB6/7).
    MidLetter = 8,
    /// Mid-number punctuation such as `,` and `;` (WB11/12).
    MidNum = 9,
    /// Punctuation that behaves as both MidLetter and MidNum, such as `.`
    /// and the curly apostrophe (WB6/7, WB11/12 via `MidNumLetQ`).
    MidNumLet = 10,
    /// Decimal digits (WB8/9/10).
    Numeric = 11,
    /// Connector punctuation that extends a run of letters/digits/Katakana,
    /// such as `_` (WB13a/13b).
    ExtendNumLet = 12,
    /// Regional indicator symbols used in pairs for flag sequences
    /// (WB15/16).
    RegionalIndicator = 13,
    /// Hebrew script letters (the "Hebrew_Letter" half of AHLetter, and the
    /// left/right side of WB7a/7b/7c).
    HebrewLetter = 14,
    /// ASCII apostrophe (U+0027) -- the "Single_Quote" half of
    /// `MidNumLetQ`, and the right side of WB7a.
    SingleQuote = 15,
    /// ASCII quotation mark (U+0022) -- both sides of WB7b/7c.
    DoubleQuote = 16,
    /// Space separators that merge with their neighbors (WB3d), excluding
    /// no-break spaces.
    WSegSpace = 17,
    /// Zero width joiner (U+200D): glues an `Extended_Pictographic`
    /// sequence together (WB3c).
    ZWJ = 18,
}

impl WordBreakProperty {
    /// Returns `true` for `ALetter` or `HebrewLetter` -- the `AHLetter`
    /// macro from spec §4.2.
    #[inline]
    #[must_use]
    pub const fn is_ahletter(self) -> bool {
        matches!(self, Self::ALetter | Self::HebrewLetter)
    }

    /// Returns `true` for `MidNumLet` or `SingleQuote` -- the `MidNumLetQ`
    /// macro from spec §4.2.
    #[inline]
    #[must_use]
    pub const fn is_mid_num_let_q(self) -> bool {
        matches!(self, Self::MidNumLet | Self::SingleQuote)
    }

    /// Returns `true` for the three properties WB4 skips over when
    /// advancing `right`/`lookahead`: `Extend`, `Format`, `ZWJ`.
    #[inline]
    #[must_use]
    pub const fn is_ignorable(self) -> bool {
        matches!(self, Self::Extend | Self::Format | Self::ZWJ)
    }

    /// Returns `true` for `MidLetter` or `MidNumLetQ` -- the right-hand
    /// side of WB6 and the left-hand side of WB7.
    #[inline]
    #[must_use]
    pub const fn is_mid_letter_or_mid_num_let_q(self) -> bool {
        matches!(self, Self::MidLetter) || self.is_mid_num_let_q()
    }

    /// Returns `true` for `MidNum` or `MidNumLetQ` -- the left-hand side of
    /// WB11 and the right-hand side of WB12.
    #[inline]
    #[must_use]
    pub const fn is_mid_num_or_mid_num_let_q(self) -> bool {
        matches!(self, Self::MidNum) || self.is_mid_num_let_q()
    }

    /// Returns `true` for `AHLetter`, `Numeric`, or `Katakana` -- the
    /// `ExtendNumLet` neighbor set shared by WB13a and WB13b.
    #[inline]
    #[must_use]
    pub const fn joins_extend_num_let(self) -> bool {
        self.is_ahletter() || matches!(self, Self::Numeric | Self::Katakana)
    }
}
