// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection values and the pure toggle transition.

use alloc::vec::Vec;

/// Current selection of a disclosure container.
///
/// Single-select containers hold at most one value; multi-select containers hold an
/// ordered list. The shape is part of the contract: a multi-select container never
/// holds a bare scalar.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SelectionValue<V> {
    /// Multi-select members in insertion order.
    Multiple(Vec<V>),
    /// Single-select value, or nothing selected.
    Single(Option<V>),
}

impl<V> SelectionValue<V> {
    /// An empty selection of the shape required by `multi_select`.
    #[must_use]
    pub fn empty(multi_select: bool) -> Self {
        if multi_select {
            Self::Multiple(Vec::new())
        } else {
            Self::Single(None)
        }
    }

    /// Whether this value is list-shaped.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(v) => v.is_none(),
            Self::Multiple(vs) => vs.is_empty(),
        }
    }

    /// Number of selected values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(v) => usize::from(v.is_some()),
            Self::Multiple(vs) => vs.len(),
        }
    }

    /// Iterate over the selected values in order.
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        let (single, multiple) = match self {
            Self::Single(v) => (v.as_ref(), &[][..]),
            Self::Multiple(vs) => (None, vs.as_slice()),
        };
        single.into_iter().chain(multiple.iter())
    }
}

impl<V: PartialEq> SelectionValue<V> {
    /// Whether `candidate` is selected.
    ///
    /// Value equality for single-select, set membership for multi-select.
    #[must_use]
    pub fn contains(&self, candidate: &V) -> bool {
        match self {
            Self::Single(v) => v.as_ref() == Some(candidate),
            Self::Multiple(vs) => vs.contains(candidate),
        }
    }
}

impl<V> Default for SelectionValue<V> {
    fn default() -> Self {
        Self::Single(None)
    }
}

impl<V> From<Vec<V>> for SelectionValue<V> {
    fn from(values: Vec<V>) -> Self {
        Self::Multiple(values)
    }
}

/// Compute the selection that results from toggling `value`.
///
/// With `force` set, membership of `value` becomes exactly `force`; otherwise it flips.
/// Returns `None` when the selection would not change.
///
/// - Single-select: selecting replaces the whole selection; deselecting clears it only
///   when `value` is the current selection.
/// - Multi-select: new members are appended, removals keep the order of the rest.
///
/// ```rust
/// use bract_selection::{SelectionValue, toggled};
///
/// let current = SelectionValue::Multiple(vec!["a"]);
/// let next = toggled(&current, &"b", None).unwrap();
/// assert_eq!(next, SelectionValue::Multiple(vec!["a", "b"]));
///
/// // Forcing an existing member on is a no-op.
/// assert_eq!(toggled(&next, &"a", Some(true)), None);
/// ```
#[must_use]
pub fn toggled<V: Clone + PartialEq>(
    current: &SelectionValue<V>,
    value: &V,
    force: Option<bool>,
) -> Option<SelectionValue<V>> {
    let selected = current.contains(value);
    let want = force.unwrap_or(!selected);
    if want == selected {
        return None;
    }

    match current {
        SelectionValue::Single(_) => {
            // `want != selected`, so deselecting only happens when `value` is current.
            Some(SelectionValue::Single(want.then(|| value.clone())))
        }
        SelectionValue::Multiple(members) => {
            let next = if want {
                let mut next = Vec::with_capacity(members.len() + 1);
                next.extend(members.iter().cloned());
                next.push(value.clone());
                next
            } else {
                members.iter().filter(|m| *m != value).cloned().collect()
            };
            Some(SelectionValue::Multiple(next))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn single_select_replaces() {
        let current = SelectionValue::Single(Some(1));
        assert_eq!(
            toggled(&current, &2, Some(true)),
            Some(SelectionValue::Single(Some(2)))
        );
    }

    #[test]
    fn single_deselect_of_other_value_is_noop() {
        let current = SelectionValue::Single(Some(1));
        assert_eq!(toggled(&current, &2, Some(false)), None);
        assert_eq!(
            toggled(&current, &1, Some(false)),
            Some(SelectionValue::Single(None))
        );
    }

    #[test]
    fn single_flip_from_empty_selects() {
        let current = SelectionValue::<u8>::Single(None);
        assert_eq!(toggled(&current, &3, None), Some(SelectionValue::Single(Some(3))));
    }

    #[test]
    fn multi_remove_preserves_order() {
        let current = SelectionValue::Multiple(vec!['a', 'b', 'c', 'd']);
        assert_eq!(
            toggled(&current, &'b', None),
            Some(SelectionValue::Multiple(vec!['a', 'c', 'd']))
        );
    }

    #[test]
    fn multi_force_off_absent_is_noop() {
        let current = SelectionValue::Multiple(vec!['a']);
        assert_eq!(toggled(&current, &'z', Some(false)), None);
    }

    #[test]
    fn iter_and_len() {
        let single = SelectionValue::Single(Some(7));
        assert_eq!(single.len(), 1);
        assert_eq!(single.iter().copied().collect::<Vec<_>>(), vec![7]);

        let multi = SelectionValue::Multiple(vec![1, 2]);
        assert_eq!(multi.len(), 2);
        assert!(!multi.is_empty());
        assert!(SelectionValue::<u8>::empty(true).is_empty());
        assert!(SelectionValue::<u8>::empty(true).is_multiple());
    }
}
