// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection ownership and the controller that owns the selection lifecycle.
//!
//! ## Ownership
//!
//! - **Controlled**: the host owns the value. [`SelectionController::toggle`] computes the
//!   next value and returns it for `on_change`; local state is untouched until the host
//!   feeds the value back through [`SelectionController::sync`].
//! - **Uncontrolled**: the controller owns the value. `toggle` updates it directly and still
//!   returns the new value so the host can observe changes.
//!
//! The mode is fixed at construction. A later `sync` with the other mode is reported and
//! ignored.

use core::fmt::Debug;

use crate::error::SelectionError;
use crate::value::{SelectionValue, toggled};

/// Who owns the selection value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OwnershipMode {
    /// The host owns the value.
    Controlled,
    /// The controller owns the value.
    Uncontrolled,
}

/// Ownership together with the value it provides.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Ownership<V> {
    /// The current value, supplied by the host on every update.
    Controlled(SelectionValue<V>),
    /// The initial value. Only read once, at construction.
    Uncontrolled(SelectionValue<V>),
}

impl<V> Ownership<V> {
    /// The ownership mode.
    #[must_use]
    pub const fn mode(&self) -> OwnershipMode {
        match self {
            Self::Controlled(_) => OwnershipMode::Controlled,
            Self::Uncontrolled(_) => OwnershipMode::Uncontrolled,
        }
    }

    /// The carried value.
    #[must_use]
    pub const fn value(&self) -> &SelectionValue<V> {
        match self {
            Self::Controlled(v) | Self::Uncontrolled(v) => v,
        }
    }

    fn into_value(self) -> SelectionValue<V> {
        match self {
            Self::Controlled(v) | Self::Uncontrolled(v) => v,
        }
    }
}

impl<V> Default for Ownership<V> {
    fn default() -> Self {
        Self::Uncontrolled(SelectionValue::default())
    }
}

/// Owns the selection of one disclosure container.
///
/// ```rust
/// use bract_selection::{Ownership, SelectionController, SelectionValue};
///
/// let mut sel = SelectionController::new(
///     Ownership::Uncontrolled(SelectionValue::Single(Some("a"))),
///     false,
/// );
/// assert!(sel.is_selected(&"a"));
///
/// let change = sel.toggle("b", Some(true));
/// assert_eq!(change, Some(SelectionValue::Single(Some("b"))));
/// assert!(sel.is_selected(&"b"));
/// assert!(!sel.is_selected(&"a"));
/// ```
#[derive(Clone, Debug)]
pub struct SelectionController<V> {
    mode: OwnershipMode,
    multi_select: bool,
    value: SelectionValue<V>,
}

impl<V: Clone + PartialEq + Debug> SelectionController<V> {
    /// Create a controller, rejecting a seed whose shape does not match `multi_select`.
    pub fn try_new(ownership: Ownership<V>, multi_select: bool) -> Result<Self, SelectionError> {
        check_shape(ownership.value(), multi_select)?;
        Ok(Self {
            mode: ownership.mode(),
            multi_select,
            value: ownership.into_value(),
        })
    }

    /// Create a controller.
    ///
    /// A seed of the wrong shape is reported and replaced with an empty selection of the
    /// right shape; a scalar is never wrapped into a list.
    pub fn new(ownership: Ownership<V>, multi_select: bool) -> Self {
        let mode = ownership.mode();
        match Self::try_new(ownership, multi_select) {
            Ok(controller) => controller,
            Err(err) => {
                tracing::warn!(%err, "ignoring initial selection");
                Self {
                    mode,
                    multi_select,
                    value: SelectionValue::empty(multi_select),
                }
            }
        }
    }

    /// Apply the ownership supplied by the latest update.
    ///
    /// Controlled values replace the current value. Uncontrolled seeds are ignored after
    /// construction.
    pub fn try_sync(&mut self, ownership: Ownership<V>) -> Result<(), SelectionError> {
        let to = ownership.mode();
        if to != self.mode {
            return Err(SelectionError::OwnershipSwitched {
                from: self.mode,
                to,
            });
        }
        if let Ownership::Controlled(value) = ownership {
            check_shape(&value, self.multi_select)?;
            self.value = value;
        }
        Ok(())
    }

    /// Like [`Self::try_sync`], reporting misuse as a diagnostic and keeping the current state.
    pub fn sync(&mut self, ownership: Ownership<V>) {
        if let Err(err) = self.try_sync(ownership) {
            tracing::warn!(%err, "ignoring selection update");
        }
    }

    /// Change the multi-select flag.
    ///
    /// The existing selection cannot be reshaped without guessing, so a change resets it to
    /// an empty selection of the new shape.
    pub fn set_multi_select(&mut self, multi_select: bool) {
        if self.multi_select != multi_select {
            tracing::debug!(multi_select, "multi_select changed; clearing selection");
            self.multi_select = multi_select;
            self.value = SelectionValue::empty(multi_select);
        }
    }

    /// Whether `candidate` is currently selected.
    #[must_use]
    pub fn is_selected(&self, candidate: &V) -> bool {
        self.value.contains(candidate)
    }

    /// Toggle `value`, or force its membership when `force` is set.
    ///
    /// Returns the value to hand to `on_change`, or `None` when nothing changed. In
    /// uncontrolled mode the controller also adopts the new value.
    pub fn toggle(&mut self, value: V, force: Option<bool>) -> Option<SelectionValue<V>> {
        let next = toggled(&self.value, &value, force)?;
        tracing::trace!(?value, ?force, ?next, mode = ?self.mode, "selection toggled");
        if self.mode == OwnershipMode::Uncontrolled {
            self.value = next.clone();
        }
        Some(next)
    }
}

impl<V> SelectionController<V> {
    /// The current selection.
    #[must_use]
    pub const fn value(&self) -> &SelectionValue<V> {
        &self.value
    }

    /// The ownership mode fixed at construction.
    #[must_use]
    pub const fn mode(&self) -> OwnershipMode {
        self.mode
    }

    /// Whether the controller is multi-select.
    #[must_use]
    pub const fn multi_select(&self) -> bool {
        self.multi_select
    }
}

fn check_shape<V>(value: &SelectionValue<V>, multi_select: bool) -> Result<(), SelectionError> {
    if value.is_multiple() == multi_select {
        Ok(())
    } else {
        Err(SelectionError::ShapeMismatch { multi_select })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn scalar_seed_for_multi_select_is_rejected() {
        let err = SelectionController::try_new(
            Ownership::Uncontrolled(SelectionValue::Single(Some(1))),
            true,
        )
        .unwrap_err();
        assert_eq!(err, SelectionError::ShapeMismatch { multi_select: true });

        // The lenient constructor starts empty rather than wrapping the scalar.
        let sel = SelectionController::new(
            Ownership::Uncontrolled(SelectionValue::Single(Some(1))),
            true,
        );
        assert_eq!(sel.value(), &SelectionValue::Multiple(Vec::new()));
        assert!(!sel.is_selected(&1));
    }

    #[test]
    fn controlled_toggle_does_not_mutate() {
        let seed = Ownership::Controlled(SelectionValue::Multiple(vec!['a']));
        let mut sel = SelectionController::new(seed, true);
        let change = sel.toggle('b', None);
        assert_eq!(change, Some(SelectionValue::Multiple(vec!['a', 'b'])));
        assert!(!sel.is_selected(&'b'));

        // The host feeds the value back.
        sel.sync(Ownership::Controlled(SelectionValue::Multiple(vec!['a', 'b'])));
        assert!(sel.is_selected(&'b'));
    }

    #[test]
    fn uncontrolled_seed_is_read_once() {
        let seed = Ownership::Uncontrolled(SelectionValue::Single(Some(1)));
        let mut sel = SelectionController::new(seed, false);
        sel.toggle(2, Some(true));
        sel.sync(Ownership::Uncontrolled(SelectionValue::Single(Some(1))));
        assert!(sel.is_selected(&2));
    }

    #[test]
    fn ownership_switch_is_reported_and_ignored() {
        let seed = Ownership::Uncontrolled(SelectionValue::Single(Some(1)));
        let mut sel = SelectionController::new(seed, false);
        let err = sel
            .try_sync(Ownership::Controlled(SelectionValue::Single(Some(5))))
            .unwrap_err();
        assert_eq!(
            err,
            SelectionError::OwnershipSwitched {
                from: OwnershipMode::Uncontrolled,
                to: OwnershipMode::Controlled,
            }
        );
        assert_eq!(sel.mode(), OwnershipMode::Uncontrolled);
        assert!(sel.is_selected(&1));
    }

    #[test]
    fn controlled_sync_rejects_wrong_shape() {
        let seed = Ownership::Controlled(SelectionValue::Multiple(vec![1]));
        let mut sel = SelectionController::new(seed, true);
        sel.sync(Ownership::Controlled(SelectionValue::Single(Some(2))));
        assert_eq!(sel.value(), &SelectionValue::Multiple(vec![1]));
    }

    #[test]
    fn changing_multi_select_resets_shape() {
        let seed = Ownership::Uncontrolled(SelectionValue::Single(Some(1)));
        let mut sel = SelectionController::new(seed, false);
        sel.set_multi_select(true);
        assert_eq!(sel.value(), &SelectionValue::Multiple(Vec::new()));
        assert_eq!(sel.toggle(3, None), Some(SelectionValue::Multiple(vec![3])));
    }
}
