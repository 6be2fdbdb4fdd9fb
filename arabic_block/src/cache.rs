// Copyright 2025 the Risale Reader Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use reader_primitives::BlockVariant;

use crate::block::{ArabicBlock, DisplayRequest, RenderedBlock};

/// A borrowed probe key, so cache lookups never allocate. The owning
/// [`DisplayRequest`] is only built when an entry is actually inserted.
struct RequestKey<'a> {
    text: &'a str,
    variant: BlockVariant,
}

impl RequestKey<'_> {
    fn matches(&self, request: &DisplayRequest) -> bool {
        self.variant == request.variant && self.text == &*request.text
    }
}

#[derive(Debug)]
struct Entry {
    epoch: u64,
    request: DisplayRequest,
    block: RenderedBlock,
}

/// A least-recently-used render cache for use at the host boundary.
///
/// Because [`ArabicBlock::render`] is pure, a host may skip re-rendering
/// whenever `(text, variant)` is unchanged; this cache makes that explicit.
/// Entries are found by a linear scan, which is the right trade-off for the
/// low double-digit entry counts of a visible page of blocks.
#[derive(Debug)]
pub struct RenderCache {
    entries: Vec<Entry>,
    epoch: u64,
    max_entries: usize,
}

impl RenderCache {
    /// Creates a cache holding at most `max_entries` rendered blocks.
    ///
    /// Capacities below one are clamped to one.
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            epoch: 0,
            max_entries: max_entries.max(1),
        }
    }

    /// Returns the block for `(text, variant)`, rendering it with `component`
    /// only on a cache miss.
    ///
    /// A miss beyond capacity evicts the least recently used entry.
    pub fn render(
        &mut self,
        component: &ArabicBlock,
        text: &str,
        variant: BlockVariant,
    ) -> &RenderedBlock {
        let key = RequestKey { text, variant };
        self.epoch += 1;
        if let Some(index) = self
            .entries
            .iter()
            .position(|entry| key.matches(&entry.request))
        {
            let entry = &mut self.entries[index];
            entry.epoch = self.epoch;
            return &entry.block;
        }

        let content: Arc<str> = Arc::from(text);
        let block = component.render(content.clone(), variant);
        let fresh = Entry {
            epoch: self.epoch,
            request: DisplayRequest {
                text: content,
                variant,
            },
            block,
        };
        let index = if self.entries.len() < self.max_entries {
            self.entries.push(fresh);
            self.entries.len() - 1
        } else {
            // Reuse the slot of the entry with the oldest epoch.
            let mut lowest_index = 0;
            let mut lowest_epoch = u64::MAX;
            for (i, entry) in self.entries.iter().enumerate() {
                if entry.epoch < lowest_epoch {
                    lowest_epoch = entry.epoch;
                    lowest_index = i;
                }
            }
            self.entries[lowest_index] = fresh;
            lowest_index
        };
        &self.entries[index].block
    }

    /// The number of cached blocks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all cached blocks. Call this when the theme changes, since
    /// cached blocks embed the theme values they were rendered with.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.epoch = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ReaderTheme;

    #[test]
    fn hit_returns_equal_block_without_growing() {
        let component = ArabicBlock::new(ReaderTheme::default());
        let mut cache = RenderCache::new(4);

        let first = cache.render(&component, "سَلَامٌ", BlockVariant::Hero).clone();
        assert_eq!(cache.len(), 1);

        let second = cache.render(&component, "سَلَامٌ", BlockVariant::Hero);
        assert_eq!(*second, first);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn variant_is_part_of_the_key() {
        let component = ArabicBlock::new(ReaderTheme::default());
        let mut cache = RenderCache::new(4);

        let hero = cache.render(&component, "سَلَامٌ", BlockVariant::Hero).clone();
        let block = cache.render(&component, "سَلَامٌ", BlockVariant::Block);
        assert_ne!(hero, *block);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn evicts_least_recently_used() {
        let component = ArabicBlock::new(ReaderTheme::default());
        let mut cache = RenderCache::new(2);

        cache.render(&component, "a", BlockVariant::Block);
        cache.render(&component, "b", BlockVariant::Block);
        // Touch "a" so "b" is the eviction candidate.
        cache.render(&component, "a", BlockVariant::Block);
        cache.render(&component, "c", BlockVariant::Block);

        assert_eq!(cache.len(), 2);
        // "a" and "c" survive; re-requesting them must not evict each other.
        cache.render(&component, "a", BlockVariant::Block);
        cache.render(&component, "c", BlockVariant::Block);
        assert_eq!(cache.len(), 2);
        // "b" was evicted; requesting it again evicts the oldest of the
        // survivors but still caps the size.
        cache.render(&component, "b", BlockVariant::Block);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let component = ArabicBlock::new(ReaderTheme::default());
        let mut cache = RenderCache::new(0);
        cache.render(&component, "a", BlockVariant::Block);
        cache.render(&component, "b", BlockVariant::Block);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_empties_the_cache() {
        let component = ArabicBlock::new(ReaderTheme::default());
        let mut cache = RenderCache::new(4);
        cache.render(&component, "a", BlockVariant::Block);
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn cached_block_matches_direct_render() {
        let component = ArabicBlock::new(ReaderTheme::default());
        let mut cache = RenderCache::new(4);
        let cached = cache.render(&component, "بِسْمِ اللَّهِ", BlockVariant::Hero);
        let direct = component.render("بِسْمِ اللَّهِ", BlockVariant::Hero);
        assert_eq!(*cached, direct);
    }
}
