// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subtree containment for focus-out and outside-press decisions.

/// Parent lookup provided by the host's element tree.
pub trait ParentLookup<K> {
    /// Parent of `node`, or `None` for a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// A lookup for flat hosts: every node is a root.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<K> ParentLookup<K> for NoParent {
    fn parent_of(&self, _: &K) -> Option<K> {
        None
    }
}

impl<K, F> ParentLookup<K> for F
where
    F: Fn(&K) -> Option<K>,
{
    fn parent_of(&self, node: &K) -> Option<K> {
        self(node)
    }
}

// Guards against cyclic parent chains from a misbehaving host.
const MAX_DEPTH: usize = 1024;

/// Whether `node` is `ancestor` or one of its descendants.
pub fn is_within<K: Copy + Eq>(lookup: &impl ParentLookup<K>, ancestor: K, node: K) -> bool {
    let mut current = node;
    for _ in 0..MAX_DEPTH {
        if current == ancestor {
            return true;
        }
        match lookup.parent_of(&current) {
            Some(parent) => current = parent,
            None => return false,
        }
    }
    tracing::warn!("parent chain exceeded {MAX_DEPTH} levels; treating node as outside");
    false
}
