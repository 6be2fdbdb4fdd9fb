// Copyright 2025 the Risale Reader Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::script::contains_arabic;

/// How an Arabic phrase should be placed within its paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayClass {
    /// Render as a standalone centered block.
    Block,
    /// Render inline with the surrounding text.
    Inline,
}

/// Classifies an Arabic phrase as block-level or inline.
///
/// A phrase becomes a standalone block when, after trimming, it contains an
/// inner space or runs longer than 12 characters; short single words stay
/// inline. An empty or all-whitespace phrase is inline.
pub fn display_class(phrase: &str) -> DisplayClass {
    let trimmed = phrase.trim();
    if trimmed.is_empty() {
        return DisplayClass::Inline;
    }
    if trimmed.contains(' ') || trimmed.chars().count() > 12 {
        DisplayClass::Block
    } else {
        DisplayClass::Inline
    }
}

/// The top-level class of a paragraph in reader content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParagraphClass {
    /// A section divider made of asterisks.
    Divider,
    /// A paragraph containing Arabic text.
    Arabic,
    /// Plain Turkish prose.
    Plain,
}

/// Classifies a whole paragraph.
///
/// A trimmed paragraph made only of `*` and spaces, with at least one `*`,
/// is a divider. Otherwise any Arabic character makes it
/// [`ParagraphClass::Arabic`], and everything else is plain prose.
pub fn classify_paragraph(paragraph: &str) -> ParagraphClass {
    let trimmed = paragraph.trim();
    if trimmed.contains('*') && trimmed.chars().all(|c| c == '*' || c == ' ') {
        return ParagraphClass::Divider;
    }
    if contains_arabic(trimmed) {
        ParagraphClass::Arabic
    } else {
        ParagraphClass::Plain
    }
}
