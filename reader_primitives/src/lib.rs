// Copyright 2025 the Risale Reader Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leaf vocabulary and script classification for the reader's text pipeline.
//!
//! This crate is the `no_std` layer shared between the reader's renderer and its
//! content-ingestion tooling. It carries small typed representations of display
//! concepts (variants, alignment, writing direction) and the pure predicates that
//! decide how a paragraph or phrase of mixed Turkish/Arabic text is presented.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for
//!   forward compatibility.
//!
//! ## Example
//!
//! ```
//! use reader_primitives::{contains_arabic, segments, BlockVariant, SegmentKind};
//!
//! assert_eq!(BlockVariant::resolve(Some("hero")), BlockVariant::Hero);
//! assert_eq!(BlockVariant::resolve(None), BlockVariant::Block);
//!
//! let line = "dedi ki بِسْمِ اللَّهِ ve devam etti";
//! assert!(contains_arabic(line));
//! let arabic = segments(line)
//!     .filter(|s| s.kind == SegmentKind::Arabic)
//!     .count();
//! assert_eq!(arabic, 1);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

mod classify;
mod script;
mod segment;
mod text;
mod variant;

pub use classify::{classify_paragraph, display_class, DisplayClass, ParagraphClass};
pub use script::{contains_arabic, is_arabic_char, is_phrase_separator};
pub use segment::{segments, ArabicPhrases, Segment, SegmentKind};
pub use text::{Alignment, WritingDirection};
pub use variant::BlockVariant;
