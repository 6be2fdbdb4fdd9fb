// Copyright 2025 the Risale Reader Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use reader_primitives::{Alignment, BlockVariant, WritingDirection};
use tracing::trace;

use crate::style::{
    ContainerStyle, TextStyle, CONTAINER_PADDING_HORIZONTAL, HERO_WORD_SPACING,
    TEXT_MARGIN_VERTICAL, TEXT_PADDING_VERTICAL,
};
use crate::theme::ReaderTheme;

/// One request to display a block: the text plus its resolved tier.
///
/// Requests derive equality and hashing so they can key a cache (see
/// [`RenderCache`]). The text is reference-counted so a request and the block
/// rendered from it can share one allocation.
///
/// [`RenderCache`]: crate::RenderCache
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DisplayRequest {
    /// The text to display, verbatim. May be empty.
    pub text: Arc<str>,
    /// The resolved presentation tier.
    pub variant: BlockVariant,
}

impl DisplayRequest {
    /// Builds a request from raw external input, applying the total variant
    /// mapping at the boundary.
    pub fn new(text: impl Into<Arc<str>>, raw_variant: Option<&str>) -> Self {
        Self {
            text: text.into(),
            variant: BlockVariant::resolve(raw_variant),
        }
    }
}

/// The inner text node of a rendered block.
#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    /// The displayed text, exactly as passed in.
    pub content: Arc<str>,
    /// The resolved typography.
    pub style: TextStyle,
}

/// The two-level visual tree handed back to the host.
///
/// Ownership transfers to the host on return; the component keeps no
/// reference. All fields derive structural equality, so two renders with
/// identical inputs compare equal.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedBlock {
    /// The outer layout container.
    pub container: ContainerStyle,
    /// The inner text node.
    pub text: TextNode,
}

/// Renders standalone Arabic passages as centered right-to-left blocks.
///
/// The component is stateless apart from its injected theme: [`render`] is a
/// pure function of `(text, variant)` and the theme, performs no I/O, and
/// returns synchronously. The text is never inspected, normalized, or
/// escaped; deciding *whether* a piece of text belongs in an Arabic block is
/// the caller's job (see `reader_primitives`).
///
/// [`render`]: Self::render
#[derive(Clone, Debug)]
pub struct ArabicBlock {
    theme: ReaderTheme,
}

impl ArabicBlock {
    /// Creates a component reading from the given theme.
    pub fn new(theme: ReaderTheme) -> Self {
        Self { theme }
    }

    /// Returns the injected theme.
    pub fn theme(&self) -> &ReaderTheme {
        &self.theme
    }

    /// Renders `text` at the given tier.
    ///
    /// This cannot fail: every string, including the empty string, renders.
    /// A host that ignores one of the returned style attributes (word
    /// spacing is not universally supported) degrades quietly; that is
    /// accepted, not an error.
    pub fn render(&self, text: impl Into<Arc<str>>, variant: BlockVariant) -> RenderedBlock {
        let typography = &self.theme.typography;
        trace!(
            font = %typography.font_family,
            ?variant,
            "rendering arabic block"
        );

        let is_hero = variant.is_hero();
        let word_spacing = if is_hero {
            HERO_WORD_SPACING
        } else {
            typography.word_spacing_block
        };

        RenderedBlock {
            container: ContainerStyle {
                full_width: true,
                align: Alignment::Center,
                margin_vertical: self.theme.spacing.paragraph_margin,
                padding_horizontal: CONTAINER_PADDING_HORIZONTAL,
            },
            text: TextNode {
                content: text.into(),
                style: TextStyle {
                    font_family: typography.font_family.clone(),
                    font_size: typography.sizes.get(variant),
                    line_height: typography.line_heights.get(variant),
                    align: Alignment::Center,
                    direction: WritingDirection::Rtl,
                    letter_spacing: 0.0,
                    word_spacing,
                    padding_vertical: TEXT_PADDING_VERTICAL,
                    margin_vertical: TEXT_MARGIN_VERTICAL,
                },
            },
        }
    }

    /// Renders from raw external input, resolving the variant keyword first.
    ///
    /// Absent or unrecognized keywords render at the block tier.
    pub fn render_raw(&self, text: impl Into<Arc<str>>, variant: Option<&str>) -> RenderedBlock {
        self.render(text, BlockVariant::resolve(variant))
    }

    /// Renders a prepared [`DisplayRequest`].
    pub fn render_request(&self, request: &DisplayRequest) -> RenderedBlock {
        self.render(request.text.clone(), request.variant)
    }
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;

    use super::*;
    use crate::theme::{SpacingProfile, TypographyProfile, VariantScale};

    const BASMALA: &str = "بِسْمِ اللَّهِ";

    fn synthetic_theme() -> ReaderTheme {
        ReaderTheme {
            typography: TypographyProfile {
                font_family: Cow::Borrowed("Test Naskh"),
                sizes: VariantScale {
                    hero: 40.0,
                    block: 20.0,
                },
                line_heights: VariantScale {
                    hero: 70.0,
                    block: 34.0,
                },
                word_spacing_block: -0.8,
            },
            spacing: SpacingProfile {
                paragraph_margin: 9.0,
            },
        }
    }

    #[test]
    fn content_is_verbatim() {
        let component = ArabicBlock::new(ReaderTheme::default());
        for raw in [None, Some("hero"), Some("block"), Some("garbage")] {
            let block = component.render_raw("  a سَلَامٌ b\n", raw);
            assert_eq!(&*block.text.content, "  a سَلَامٌ b\n");
        }
        let empty = component.render_raw("", None);
        assert_eq!(&*empty.text.content, "");
    }

    #[test]
    fn default_variant_gets_block_column() {
        let component = ArabicBlock::new(synthetic_theme());
        let block = component.render_raw(BASMALA, None);

        assert!(block.container.full_width);
        assert_eq!(block.container.align, Alignment::Center);
        assert_eq!(block.container.margin_vertical, 9.0);
        assert_eq!(block.container.padding_horizontal, 8.0);

        let style = &block.text.style;
        assert_eq!(style.direction, WritingDirection::Rtl);
        assert_eq!(style.align, Alignment::Center);
        assert_eq!(style.font_family, "Test Naskh");
        assert_eq!(style.font_size, 20.0);
        assert_eq!(style.line_height, 34.0);
        assert_eq!(style.word_spacing, -0.8);
        assert_eq!(style.letter_spacing, 0.0);
    }

    #[test]
    fn hero_variant_gets_hero_column() {
        let component = ArabicBlock::new(synthetic_theme());
        let block = component.render_raw(BASMALA, Some("hero"));

        let style = &block.text.style;
        assert_eq!(style.font_size, 40.0);
        assert_eq!(style.line_height, 70.0);
        assert_eq!(style.word_spacing, HERO_WORD_SPACING);
    }

    #[test]
    fn unrecognized_keyword_falls_back_to_block() {
        let component = ArabicBlock::new(synthetic_theme());
        let garbage = component.render_raw(BASMALA, Some("garbage"));
        let block = component.render(BASMALA, BlockVariant::Block);
        assert_eq!(garbage, block);
    }

    #[test]
    fn hero_word_spacing_is_six_percent_of_reference_em() {
        // 29 × 0.06 ≈ 1.74.
        assert!((HERO_WORD_SPACING - 29.0 * 0.06).abs() < 1e-6);
    }

    #[test]
    fn repeated_renders_are_structurally_equal() {
        let component = ArabicBlock::new(ReaderTheme::default());
        for variant in [BlockVariant::Hero, BlockVariant::Block] {
            let first = component.render(BASMALA, variant);
            let second = component.render(BASMALA, variant);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn empty_text_still_styles_as_hero() {
        let component = ArabicBlock::new(ReaderTheme::default());
        let block = component.render("", BlockVariant::Hero);
        assert_eq!(&*block.text.content, "");
        assert_eq!(
            block.text.style.font_size,
            component.theme().typography.sizes.hero
        );
        assert_eq!(block.text.style.word_spacing, HERO_WORD_SPACING);
    }

    #[test]
    fn style_is_independent_of_content() {
        let component = ArabicBlock::new(ReaderTheme::default());
        let short = component.render("ا", BlockVariant::Block);
        let long = component.render(BASMALA, BlockVariant::Block);
        assert_eq!(short.text.style, long.text.style);
        assert_eq!(short.container, long.container);
    }

    #[test]
    fn request_boundary_resolution() {
        let hero = DisplayRequest::new(BASMALA, Some("hero"));
        assert_eq!(hero.variant, BlockVariant::Hero);
        let fallback = DisplayRequest::new(BASMALA, Some("HERO"));
        assert_eq!(fallback.variant, BlockVariant::Block);

        let component = ArabicBlock::new(ReaderTheme::default());
        assert_eq!(
            component.render_request(&hero),
            component.render(BASMALA, BlockVariant::Hero)
        );
    }
}
