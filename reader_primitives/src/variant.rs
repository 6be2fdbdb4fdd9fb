// Copyright 2025 the Risale Reader Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The presentation tier of a rendered scripture block.
///
/// The reader renders standalone Arabic text in one of two tiers: an enlarged
/// `Hero` tier for opening formulas and other prominent passages, and the
/// standard `Block` tier for everything else. The tier controls size and
/// spacing only, never content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BlockVariant {
    /// Enlarged display tier for prominent passages.
    Hero,
    /// Standard body tier.
    #[default]
    Block,
}

impl BlockVariant {
    /// Resolves a raw variant keyword from external input.
    ///
    /// Resolution is total: `"hero"` selects [`Self::Hero`]; anything else,
    /// including an absent value and unrecognized keywords, selects
    /// [`Self::Block`]. The keyword comparison is exact, so `"Hero"` falls
    /// through to the default.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some("hero") => Self::Hero,
            _ => Self::Block,
        }
    }

    /// Returns `true` for the [`Self::Hero`] tier.
    pub fn is_hero(self) -> bool {
        matches!(self, Self::Hero)
    }
}
