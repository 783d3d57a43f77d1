// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered navigation group for composite widgets.
//!
//! Items register in document order. Navigation skips disabled items but keeps their
//! position, so re-enabling an item does not reorder the group.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::{CompositeConfig, Navigation, Orientation, WrapMode};

/// A registered member of a [`CompositeGroup`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupEntry<K> {
    /// Identifier for this item.
    pub id: K,
    /// Whether navigation may land on this item.
    pub enabled: bool,
}

/// Items of one composite widget, in document order.
///
/// ```rust
/// use bract_composite::{CompositeConfig, CompositeGroup, Layout, Navigation};
///
/// let mut group = CompositeGroup::new(CompositeConfig::for_layout(Layout::Stack, false));
/// group.register(10_u32, true);
/// group.register(20, false);
/// group.register(30, true);
///
/// // Disabled items are skipped.
/// assert_eq!(group.next(Some(10), Navigation::Down), Some(30));
/// // Standalone composites wrap at the boundaries.
/// assert_eq!(group.next(Some(30), Navigation::Down), Some(10));
/// assert_eq!(group.next(None, Navigation::End), Some(30));
/// ```
#[derive(Clone, Debug)]
pub struct CompositeGroup<K> {
    config: CompositeConfig,
    entries: Vec<GroupEntry<K>>,
    positions: HashMap<K, usize>,
}

impl<K: Copy + Eq + Hash + core::fmt::Debug> CompositeGroup<K> {
    /// Create an empty group.
    #[must_use]
    pub fn new(config: CompositeConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// The group's configuration.
    #[must_use]
    pub const fn config(&self) -> CompositeConfig {
        self.config
    }

    /// Replace the configuration, keeping registered items.
    pub fn set_config(&mut self, config: CompositeConfig) {
        self.config = config;
    }

    /// Append an item at the end of the document order.
    ///
    /// Registering an id twice updates its enabled flag in place.
    pub fn register(&mut self, id: K, enabled: bool) {
        if let Some(&pos) = self.positions.get(&id) {
            self.entries[pos].enabled = enabled;
            return;
        }
        self.positions.insert(id, self.entries.len());
        self.entries.push(GroupEntry { id, enabled });
    }

    /// Insert an item at `index` in document order.
    ///
    /// `index` is clamped to the group length. An id that is already registered is moved.
    pub fn register_at(&mut self, index: usize, id: K, enabled: bool) {
        if self.positions.contains_key(&id) {
            self.deregister(id);
        }
        let index = index.min(self.entries.len());
        self.entries.insert(index, GroupEntry { id, enabled });
        self.reindex_from(index);
    }

    /// Remove an item. Returns whether it was registered.
    pub fn deregister(&mut self, id: K) -> bool {
        let Some(pos) = self.positions.remove(&id) else {
            return false;
        };
        self.entries.remove(pos);
        self.reindex_from(pos);
        true
    }

    /// Change whether an item is enabled. Unknown ids are ignored.
    pub fn set_enabled(&mut self, id: K, enabled: bool) {
        if let Some(&pos) = self.positions.get(&id) {
            self.entries[pos].enabled = enabled;
        } else {
            tracing::debug!(?id, "set_enabled on an unregistered item");
        }
    }

    /// Position of `id` in document order.
    #[must_use]
    pub fn position(&self, id: K) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// The item at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GroupEntry<K>> {
        self.entries.get(index)
    }

    /// Whether `id` is registered and enabled.
    #[must_use]
    pub fn is_enabled(&self, id: K) -> bool {
        self.position(id).is_some_and(|pos| self.entries[pos].enabled)
    }

    /// Number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no items are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered items in document order.
    pub fn entries(&self) -> &[GroupEntry<K>] {
        &self.entries
    }

    /// First enabled item.
    #[must_use]
    pub fn first_enabled(&self) -> Option<K> {
        self.entries.iter().find(|e| e.enabled).map(|e| e.id)
    }

    /// Last enabled item.
    #[must_use]
    pub fn last_enabled(&self) -> Option<K> {
        self.entries.iter().rev().find(|e| e.enabled).map(|e| e.id)
    }

    /// Compute the item navigation lands on.
    ///
    /// `origin` is the currently active item, if any. Keys on the cross axis (for example
    /// Left/Right in a vertical group) yield `None`, as do groups without enabled items.
    #[must_use]
    pub fn next(&self, origin: Option<K>, direction: Navigation) -> Option<K> {
        let step = match (direction, self.config.orientation) {
            (Navigation::Home | Navigation::PageUp, _) => return self.first_enabled(),
            (Navigation::End | Navigation::PageDown, _) => return self.last_enabled(),
            (Navigation::Down, Orientation::Vertical)
            | (Navigation::Right, Orientation::Horizontal) => Step::Forward,
            (Navigation::Up, Orientation::Vertical)
            | (Navigation::Left, Orientation::Horizontal) => Step::Backward,
            _ => return None,
        };
        self.next_linear(origin, step)
    }

    fn next_linear(&self, origin: Option<K>, step: Step) -> Option<K> {
        let indices: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.enabled.then_some(i))
            .collect();
        if indices.is_empty() {
            return None;
        }

        // The origin may be disabled; locate the nearest enabled slot around it.
        let origin_pos = origin.and_then(|id| self.position(id));
        let wraps = matches!(self.config.wrap, WrapMode::Scope);
        let last = indices.len() - 1;

        let target = match (step, origin_pos) {
            (Step::Forward, None) => 0,
            (Step::Backward, None) => last,
            (Step::Forward, Some(pos)) => match indices.iter().position(|&i| i > pos) {
                Some(k) => k,
                None if wraps => 0,
                None => return None,
            },
            (Step::Backward, Some(pos)) => match indices.iter().rposition(|&i| i < pos) {
                Some(k) => k,
                None if wraps => last,
                None => return None,
            },
        };
        Some(self.entries[indices[target]].id)
    }

    fn reindex_from(&mut self, start: usize) {
        for (pos, entry) in self.entries.iter().enumerate().skip(start) {
            self.positions.insert(entry.id, pos);
        }
    }
}

#[derive(Copy, Clone)]
enum Step {
    Forward,
    Backward,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layout;

    fn group(layout: Layout, embedded: bool, ids: &[(u32, bool)]) -> CompositeGroup<u32> {
        let mut g = CompositeGroup::new(CompositeConfig::for_layout(layout, embedded));
        for &(id, enabled) in ids {
            g.register(id, enabled);
        }
        g
    }

    #[test]
    fn vertical_next_prev_with_wrap() {
        let g = group(Layout::Stack, false, &[(1, true), (2, true)]);
        assert_eq!(g.next(Some(1), Navigation::Down), Some(2));
        assert_eq!(g.next(Some(2), Navigation::Down), Some(1));
        assert_eq!(g.next(Some(1), Navigation::Up), Some(2));
    }

    #[test]
    fn embedded_group_stops_at_edges() {
        let g = group(Layout::Stack, true, &[(1, true), (2, true)]);
        assert_eq!(g.next(Some(2), Navigation::Down), None);
        assert_eq!(g.next(Some(1), Navigation::Up), None);
    }

    #[test]
    fn cross_axis_keys_are_ignored() {
        let g = group(Layout::Stack, false, &[(1, true), (2, true)]);
        assert_eq!(g.next(Some(1), Navigation::Right), None);

        let g = group(Layout::Inline, false, &[(1, true), (2, true)]);
        assert_eq!(g.next(Some(1), Navigation::Right), Some(2));
        assert_eq!(g.next(Some(1), Navigation::Down), None);
    }

    #[test]
    fn skips_disabled_items() {
        let g = group(Layout::Stack, false, &[(1, false), (2, true), (3, false), (4, true)]);
        assert_eq!(g.next(Some(2), Navigation::Down), Some(4));
        assert_eq!(g.next(Some(4), Navigation::Up), Some(2));
        assert_eq!(g.next(None, Navigation::Home), Some(2));
        assert_eq!(g.next(None, Navigation::PageDown), Some(4));
        // Starting from a disabled origin still moves relative to its position.
        assert_eq!(g.next(Some(3), Navigation::Down), Some(4));
        assert_eq!(g.next(Some(3), Navigation::Up), Some(2));
    }

    #[test]
    fn no_enabled_items_yields_none() {
        let g = group(Layout::Stack, false, &[(1, false)]);
        assert_eq!(g.next(None, Navigation::Down), None);
        assert_eq!(g.next(None, Navigation::Home), None);
    }

    #[test]
    fn registration_keeps_document_order() {
        let mut g = group(Layout::Stack, false, &[(1, true), (3, true)]);
        g.register_at(1, 2, true);
        assert_eq!(g.position(2), Some(1));
        assert_eq!(g.position(3), Some(2));

        assert!(g.deregister(1));
        assert!(!g.deregister(1));
        assert_eq!(g.position(2), Some(0));
        assert_eq!(g.position(3), Some(1));
        assert_eq!(g.len(), 2);

        // Re-registering updates the flag in place.
        g.register(2, false);
        assert_eq!(g.len(), 2);
        assert!(!g.is_enabled(2));
    }

    #[test]
    fn register_at_moves_existing_ids() {
        let mut g = group(Layout::Stack, false, &[(1, true), (2, true), (3, true)]);
        g.register_at(0, 3, true);
        let ids: Vec<u32> = g.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, [3, 1, 2]);
        assert_eq!(g.position(2), Some(2));
    }
}
