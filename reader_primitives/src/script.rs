// Copyright 2025 the Risale Reader Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Returns `true` if `c` belongs to one of the Arabic code point ranges the
/// reader recognizes.
///
/// The set covers the main Arabic block plus the supplement, Extended-A, and
/// both presentation-forms blocks, so text that arrives in presentation form
/// (common in typeset source material) classifies the same as decomposed text.
pub fn is_arabic_char(c: char) -> bool {
    matches!(
        c,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}'
    )
}

/// Returns `true` if any character of `text` is Arabic per [`is_arabic_char`].
///
/// This is the paragraph-level flag the ingestion pipeline stores alongside
/// each paragraph; the renderer uses the same predicate so the two never
/// disagree.
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic_char)
}

/// Returns `true` for characters that may join two Arabic runs into a single
/// phrase: whitespace and the punctuation set `. , ; ! ?`.
pub fn is_phrase_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | ',' | ';' | '!' | '?')
}
