// Copyright 2025 the Risale Reader Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;

use reader_primitives::{Alignment, WritingDirection};

/// Word-spacing offset applied at the hero tier.
///
/// A design-time literal of roughly 0.06em at the reference hero size of 29
/// (29 × 0.06 ≈ 1.74). Unlike the block offset this is not read from the
/// theme, so retuning the theme's hero size does not retune it.
pub const HERO_WORD_SPACING: f32 = 1.74;

/// Horizontal padding of the outer container. A component constant, not a
/// theme value.
pub(crate) const CONTAINER_PADDING_HORIZONTAL: f32 = 8.0;

/// Vertical padding of the inner text node.
pub(crate) const TEXT_PADDING_VERTICAL: f32 = 6.0;

/// Vertical margin of the inner text node.
pub(crate) const TEXT_MARGIN_VERTICAL: f32 = 4.0;

/// Layout attributes of the outer container node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerStyle {
    /// Whether the container claims the full available width.
    pub full_width: bool,
    /// Horizontal alignment of the container's content.
    pub align: Alignment,
    /// Vertical margin above and below the container.
    pub margin_vertical: f32,
    /// Horizontal padding inside the container.
    pub padding_horizontal: f32,
}

/// Resolved typography of the inner text node.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Typeface family name.
    pub font_family: Cow<'static, str>,
    /// Font size for the resolved tier.
    pub font_size: f32,
    /// Line height for the resolved tier.
    pub line_height: f32,
    /// Text alignment within the node.
    pub align: Alignment,
    /// Base writing direction handed to the host renderer.
    pub direction: WritingDirection,
    /// Letter-spacing offset. Always zero for this component.
    pub letter_spacing: f32,
    /// Word-spacing offset for the resolved tier.
    pub word_spacing: f32,
    /// Vertical padding inside the text node.
    pub padding_vertical: f32,
    /// Vertical margin around the text node.
    pub margin_vertical: f32,
}
