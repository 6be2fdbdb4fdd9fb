// Copyright 2025 the Risale Reader Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Glyph flow direction passed through to the host text renderer.
///
/// The reader does not run the bidirectional algorithm itself; this flag only
/// tells the host which base direction to lay a block out in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum WritingDirection {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

/// Horizontal alignment of content within its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Alignment {
    /// Align to the writing-direction start edge.
    #[default]
    Start,
    /// Center within the available width.
    Center,
    /// Align to the writing-direction end edge.
    End,
}
