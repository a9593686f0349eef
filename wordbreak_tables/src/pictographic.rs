//! `Extended_Pictographic` membership, independent of `Word_Break`.
//!
//! A code point can be `Word_Break::Other` and `Extended_Pictographic` at
//! the same time -- most base emoji are. This is why the property lives in
//! its own small range table rather than as a `WordBreakProperty` variant:
//! WB3c needs to ask "is this an emoji base?" of a scalar whose
//! `Word_Break` value is otherwise unremarkable.

#[rustfmt::skip]
const PICTOGRAPHIC_RANGES: &[(u32, u32)] = &[
    (0x00A9, 0x00A9),     // COPYRIGHT SIGN
    (0x00AE, 0x00AE),     // REGISTERED SIGN
    (0x203C, 0x2049),     // double/interrobang marks used as emoji
    (0x2122, 0x2122),     // TRADE MARK SIGN
    (0x2600, 0x27BF),     // Miscellaneous Symbols, Dingbats (incl. U+2642)
    (0x2B00, 0x2BFF),     // Miscellaneous Symbols and Arrows
    (0x1F000, 0x1F0FF),   // Playing Cards
    (0x1F300, 0x1F5FF),   // Misc Symbols and Pictographs
    (0x1F600, 0x1F64F),   // Emoticons
    (0x1F680, 0x1F6FF),   // Transport and Map Symbols
    (0x1F780, 0x1F7FF),   // Geometric Shapes Extended
    (0x1F900, 0x1F9FF),   // Supplemental Symbols and Pictographs (incl. U+1F9DA)
    (0x1FA70, 0x1FAFF),   // Symbols and Pictographs Extended-A
];

/// Returns `true` if `c` carries the `Extended_Pictographic` property.
#[inline]
#[must_use]
pub fn is_extended_pictographic(c: char) -> bool {
    let cp = c as u32;
    PICTOGRAPHIC_RANGES
        .iter()
        .any(|&(start, end)| cp >= start && cp <= end)
}
