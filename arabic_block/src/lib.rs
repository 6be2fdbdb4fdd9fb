// Copyright 2025 the Risale Reader Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typographic styling for standalone right-to-left scripture blocks.
//!
//! The reader displays Arabic passages as centered blocks in one of two
//! presentation tiers ([`BlockVariant::Hero`] and [`BlockVariant::Block`]).
//! This crate computes the per-tier typography: given a text and a variant,
//! [`ArabicBlock`] produces a [`RenderedBlock`] (an outer container style plus
//! an inner text node) that a host UI toolkit lays out and paints. The
//! component itself does no shaping, no layout, and no bidi computation.
//!
//! All typographic constants come from a [`ReaderTheme`] injected at
//! construction, so tests and embedders can substitute their own profile.
//! Rendering is a pure function of `(text, variant, theme)`: identical inputs
//! always produce structurally equal blocks, which is what makes host-side
//! memoization (see [`RenderCache`]) sound.
//!
//! Each render emits a single `tracing` event at TRACE level. Embedders that
//! install no subscriber pay only the dispatch check; release builds can strip
//! the event entirely with `tracing`'s `release_max_level_*` features.
//!
//! [`BlockVariant::Hero`]: reader_primitives::BlockVariant::Hero
//! [`BlockVariant::Block`]: reader_primitives::BlockVariant::Block
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod block;
mod cache;
mod style;
mod theme;

pub use block::{ArabicBlock, DisplayRequest, RenderedBlock, TextNode};
pub use cache::RenderCache;
pub use style::{ContainerStyle, TextStyle, HERO_WORD_SPACING};
pub use theme::{ReaderTheme, SpacingProfile, TypographyProfile, VariantScale};
