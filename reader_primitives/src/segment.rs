// Copyright 2025 the Risale Reader Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::script::{is_arabic_char, is_phrase_separator};

/// The script class of one [`Segment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    /// A maximal Arabic phrase.
    Arabic,
    /// Everything between Arabic phrases.
    Other,
}

/// One contiguous piece of a paragraph, by byte range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Byte range into the source text.
    pub range: Range<usize>,
    /// Whether the range is an Arabic phrase or surrounding text.
    pub kind: SegmentKind,
}

/// Splits `text` into Arabic phrases and the non-Arabic text around them.
///
/// An Arabic phrase is a maximal run of Arabic characters, extended across
/// separator runs (see [`is_phrase_separator`]) whenever more Arabic follows.
/// A phrase therefore never starts or ends on a separator; separators with no
/// Arabic after them belong to the following `Other` segment. The yielded
/// ranges tile the input exactly.
pub fn segments(text: &str) -> ArabicPhrases<'_> {
    ArabicPhrases { text, pos: 0 }
}

/// Iterator returned by [`segments`].
#[derive(Clone, Debug)]
pub struct ArabicPhrases<'a> {
    text: &'a str,
    pos: usize,
}

impl Iterator for ArabicPhrases<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.pos >= self.text.len() {
            return None;
        }
        let rest = &self.text[self.pos..];
        let start = self.pos;
        match rest.char_indices().find(|&(_, c)| is_arabic_char(c)) {
            None => {
                self.pos = self.text.len();
                Some(Segment {
                    range: start..self.text.len(),
                    kind: SegmentKind::Other,
                })
            }
            Some((offset, _)) if offset > 0 => {
                self.pos += offset;
                Some(Segment {
                    range: start..self.pos,
                    kind: SegmentKind::Other,
                })
            }
            Some(_) => {
                self.pos += phrase_len(rest);
                Some(Segment {
                    range: start..self.pos,
                    kind: SegmentKind::Arabic,
                })
            }
        }
    }
}

/// Length in bytes of the Arabic phrase at the start of `s`.
///
/// `s` must begin with an Arabic character.
fn phrase_len(s: &str) -> usize {
    let mut end = run_len(s, is_arabic_char);
    loop {
        let sep = run_len(&s[end..], is_phrase_separator);
        if sep == 0 {
            break;
        }
        let arabic = run_len(&s[end + sep..], is_arabic_char);
        if arabic == 0 {
            break;
        }
        end += sep + arabic;
    }
    end
}

fn run_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(s.len(), |(i, _)| i)
}
