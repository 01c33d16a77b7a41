//! Unicode code point tables used by the hashtag and URL scanners.
//!
//! Ranges are inclusive `(start, end)` pairs. They are the single source of truth for
//! both the regex fragments in [`super::patterns`] and the character predicates used by
//! the explicit domain scanner.

/// Inclusive code point range.
pub type CodeRange = (u32, u32);

/// Byte order marks and non-characters that never appear inside an entity.
pub const INVALID_CHARS: &[CodeRange] = &[
    (0xFFFE, 0xFFFE),
    (0xFEFF, 0xFEFF), // BOM
    (0xFFFF, 0xFFFF),
];

/// Unicode `White_Space` code points.
pub const UNICODE_SPACES: &[CodeRange] = &[
    (0x0009, 0x000D), // <control-0009>..<control-000D>
    (0x0020, 0x0020), // SPACE
    (0x0085, 0x0085), // <control-0085>
    (0x00A0, 0x00A0), // NO-BREAK SPACE
    (0x1680, 0x1680), // OGHAM SPACE MARK
    (0x180E, 0x180E), // MONGOLIAN VOWEL SEPARATOR
    (0x2000, 0x200A), // EN QUAD..HAIR SPACE
    (0x2028, 0x2028), // LINE SEPARATOR
    (0x2029, 0x2029), // PARAGRAPH SEPARATOR
    (0x202F, 0x202F), // NARROW NO-BREAK SPACE
    (0x205F, 0x205F), // MEDIUM MATHEMATICAL SPACE
    (0x3000, 0x3000), // IDEOGRAPHIC SPACE
];

/// Latin letters with diacritics. U+00D7 (multiplication sign) is left out, it is a
/// confusable of "x".
pub const LATIN_ACCENTS: &[CodeRange] = &[
    (0x00C0, 0x00D6),
    (0x00D8, 0x00F6),
    (0x00F8, 0x00FF),
    // Latin Extended A and B
    (0x0100, 0x024F),
    // IPA Extensions
    (0x0253, 0x0254),
    (0x0256, 0x0257),
    (0x0259, 0x0259),
    (0x025B, 0x025B),
    (0x0263, 0x0263),
    (0x0268, 0x0268),
    (0x026F, 0x026F),
    (0x0272, 0x0272),
    (0x0289, 0x0289),
    (0x028B, 0x028B),
    // Okina for Hawaiian
    (0x02BB, 0x02BB),
    // Combining diacritics
    (0x0300, 0x036F),
    // Latin Extended Additional
    (0x1E00, 0x1EFF),
];

/// Letters of the non-Latin scripts accepted in hashtag bodies.
pub const NON_LATIN_HASHTAG_CHARS: &[CodeRange] = &[
    // Cyrillic
    (0x0400, 0x04FF),
    (0x0500, 0x0527), // Cyrillic Supplement
    (0x2DE0, 0x2DFF), // Cyrillic Extended A
    (0xA640, 0xA69F), // Cyrillic Extended B
    // Hebrew
    (0x0591, 0x05BF),
    (0x05C1, 0x05C2),
    (0x05C4, 0x05C5),
    (0x05C7, 0x05C7),
    (0x05D0, 0x05EA),
    (0x05F0, 0x05F4),
    (0xFB12, 0xFB28), // Hebrew Presentation Forms
    (0xFB2A, 0xFB36),
    (0xFB38, 0xFB3C),
    (0xFB3E, 0xFB3E),
    (0xFB40, 0xFB41),
    (0xFB43, 0xFB44),
    (0xFB46, 0xFB4F),
    // Arabic
    (0x0610, 0x061A),
    (0x0620, 0x065F),
    (0x066E, 0x06D3),
    (0x06D5, 0x06DC),
    (0x06DE, 0x06E8),
    (0x06EA, 0x06EF),
    (0x06FA, 0x06FC),
    (0x06FF, 0x06FF),
    (0x0750, 0x077F), // Arabic Supplement
    (0x08A0, 0x08A0), // Arabic Extended A
    (0x08A2, 0x08AC),
    (0x08E4, 0x08FE),
    (0xFB50, 0xFBB1), // Arabic Presentation Forms A
    (0xFBD3, 0xFD3D),
    (0xFD50, 0xFD8F),
    (0xFD92, 0xFDC7),
    (0xFDF0, 0xFDFB),
    (0xFE70, 0xFE74), // Arabic Presentation Forms B
    (0xFE76, 0xFEFC),
    (0x200C, 0x200C), // Zero-Width Non-Joiner
    // Thai
    (0x0E01, 0x0E3A),
    (0x0E40, 0x0E4E),
    // Hangul
    (0x1100, 0x11FF), // Hangul Jamo
    (0x3130, 0x3185), // Hangul Compatibility Jamo
    (0xA960, 0xA97F), // Hangul Jamo Extended-A
    (0xAC00, 0xD7AF), // Hangul Syllables
    (0xD7B0, 0xD7FF), // Hangul Jamo Extended-B
    (0xFFA1, 0xFFDC), // half-width Hangul
    // Japanese and Chinese
    (0x30A1, 0x30FA), // Katakana (full-width)
    (0x30FC, 0x30FE), // Katakana Chouon and iteration marks (full-width)
    (0xFF66, 0xFF9F), // Katakana (half-width)
    (0xFF70, 0xFF70), // Katakana Chouon (half-width)
    (0xFF10, 0xFF19), // Latin digits (full-width)
    (0xFF21, 0xFF3A), // Latin upper case (full-width)
    (0xFF41, 0xFF5A), // Latin lower case (full-width)
    (0x3041, 0x3096), // Hiragana
    (0x3099, 0x309E), // Hiragana voicing and iteration mark
    (0x3400, 0x4DBF), // Kanji (CJK Extension A)
    (0x4E00, 0x9FFF), // Kanji (Unified)
    (0x20000, 0x2A6DF), // Kanji (CJK Extension B)
    (0x2A700, 0x2B73F), // Kanji (CJK Extension C)
    (0x2B740, 0x2B81F), // Kanji (CJK Extension D)
    (0x2F800, 0x2FA1F), // Kanji (CJK supplement)
    (0x3003, 0x3003), // Kanji iteration mark
    (0x3005, 0x3005), // Kanji iteration mark
    (0x303B, 0x303B), // Han iteration mark
];

/// ASCII punctuation that terminates a domain label.
///
/// `"` and `` ` `` are deliberately absent: they are legal label characters and get
/// peeled off later by the ASCII-only domain rescan.
pub const DOMAIN_PUNCTUATION: &str = "!'#%&()*+,\\-./:;<=>?@[]^_{|}~$";

/// Returns true if `c` falls inside one of `ranges`.
pub fn in_ranges(c: char, ranges: &[CodeRange]) -> bool {
    let cp = c as u32;
    ranges.iter().any(|&(start, end)| cp >= start && cp <= end)
}

/// Renders `ranges` as the body of a regex character class (without brackets).
pub fn class_body(ranges: &[CodeRange]) -> String {
    let mut body = String::with_capacity(ranges.len() * 18);
    for &(start, end) in ranges {
        body.push_str(&format!("\\x{{{start:04X}}}"));
        if end != start {
            body.push_str(&format!("-\\x{{{end:04X}}}"));
        }
    }
    body
}

/// Renders literal characters as a character class body. Every character is hex
/// escaped so class metacharacters (`-`, `]`, `^`, `&&`, `~~`) never need special care.
pub fn literal_class_body(chars: &str) -> String {
    chars.chars().map(|c| format!("\\x{{{:04X}}}", c as u32)).collect()
}
