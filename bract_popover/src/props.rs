// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative popover configuration.

use bract_role::PopoverType;
use bract_selection::OwnershipMode;

use crate::position::Placement;

/// Popover configuration provided by the host.
///
/// Visibility is controlled when [`PopoverProps::show`] is `Some` at construction, and
/// uncontrolled otherwise; the mode cannot change afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PopoverProps {
    /// Declared content type, exposed through `aria-haspopup`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub popover_type: PopoverType,
    /// Track an active item without moving real focus off the activator.
    pub virtual_focus: bool,
    /// Activator presses do not toggle visibility; the host handles them.
    pub disabled_auto_toggle: bool,
    /// Controlled visibility.
    pub show: Option<bool>,
    /// Initial visibility for uncontrolled popovers. Applied once.
    pub default_show: bool,
    /// Preferred placement of the content relative to the activator.
    pub placement: Placement,
}

impl PopoverProps {
    /// Set the declared content type.
    #[must_use]
    pub fn with_type(mut self, popover_type: PopoverType) -> Self {
        self.popover_type = popover_type;
        self
    }

    /// Enable or disable virtual focus.
    #[must_use]
    pub fn with_virtual_focus(mut self, virtual_focus: bool) -> Self {
        self.virtual_focus = virtual_focus;
        self
    }

    /// Leave activator presses to the host.
    #[must_use]
    pub fn with_disabled_auto_toggle(mut self, disabled: bool) -> Self {
        self.disabled_auto_toggle = disabled;
        self
    }

    /// Control visibility from the host.
    #[must_use]
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = Some(show);
        self
    }

    /// Initial visibility for an uncontrolled popover.
    #[must_use]
    pub fn with_default_show(mut self, default_show: bool) -> Self {
        self.default_show = default_show;
        self
    }

    /// Preferred placement.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Ownership implied by these props.
    #[must_use]
    pub const fn ownership(&self) -> OwnershipMode {
        if self.show.is_some() {
            OwnershipMode::Controlled
        } else {
            OwnershipMode::Uncontrolled
        }
    }

    /// Initial visibility.
    #[must_use]
    pub fn initially_open(&self) -> bool {
        self.show.unwrap_or(self.default_show)
    }
}
