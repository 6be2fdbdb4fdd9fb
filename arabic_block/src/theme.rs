// Copyright 2025 the Risale Reader Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;

use reader_primitives::BlockVariant;

/// A numeric value with one setting per presentation tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantScale {
    /// Value for the hero tier.
    pub hero: f32,
    /// Value for the standard block tier.
    pub block: f32,
}

impl VariantScale {
    /// Selects the value for `variant`.
    pub fn get(self, variant: BlockVariant) -> f32 {
        if variant.is_hero() {
            self.hero
        } else {
            self.block
        }
    }
}

/// Typographic constants for Arabic block rendering.
///
/// Every field is mandatory; a profile with a missing value does not exist as
/// a Rust value, so theme completeness is checked at compile time rather than
/// at render time.
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyProfile {
    /// The script typeface used for all Arabic blocks.
    pub font_family: Cow<'static, str>,
    /// Font size per tier.
    pub sizes: VariantScale,
    /// Line height per tier.
    pub line_heights: VariantScale,
    /// Word-spacing offset for the block tier. Negative values tighten the
    /// dense body size; the hero offset is a component constant instead
    /// (see [`HERO_WORD_SPACING`]).
    ///
    /// [`HERO_WORD_SPACING`]: crate::HERO_WORD_SPACING
    pub word_spacing_block: f32,
}

/// Spacing constants shared across reader blocks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacingProfile {
    /// Vertical margin around a standalone paragraph block.
    pub paragraph_margin: f32,
}

/// The full set of theme constants an [`ArabicBlock`] reads.
///
/// The theme is plain data passed to [`ArabicBlock::new`] rather than an
/// ambient singleton, so tests can render against synthetic profiles without
/// touching shared state. [`Default`] supplies the reader's reference profile.
///
/// [`ArabicBlock`]: crate::ArabicBlock
/// [`ArabicBlock::new`]: crate::ArabicBlock::new
#[derive(Clone, Debug, PartialEq)]
pub struct ReaderTheme {
    /// Typography constants.
    pub typography: TypographyProfile,
    /// Spacing constants.
    pub spacing: SpacingProfile,
}

impl Default for ReaderTheme {
    fn default() -> Self {
        Self {
            typography: TypographyProfile {
                font_family: Cow::Borrowed("ScheherazadeNew"),
                sizes: VariantScale {
                    hero: 29.0,
                    block: 26.0,
                },
                line_heights: VariantScale {
                    hero: 52.0,
                    block: 46.0,
                },
                // -0.05em at the block size of 26.
                word_spacing_block: -1.3,
            },
            spacing: SpacingProfile {
                paragraph_margin: 12.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_scale_selects_by_tier() {
        let scale = VariantScale {
            hero: 29.0,
            block: 26.0,
        };
        assert_eq!(scale.get(BlockVariant::Hero), 29.0);
        assert_eq!(scale.get(BlockVariant::Block), 26.0);
    }

    #[test]
    fn reference_profile() {
        let theme = ReaderTheme::default();
        assert_eq!(theme.typography.font_family, "ScheherazadeNew");
        assert_eq!(theme.typography.sizes.hero, 29.0);
        assert_eq!(theme.typography.sizes.block, 26.0);
        assert_eq!(theme.typography.word_spacing_block, -1.3);
    }
}
