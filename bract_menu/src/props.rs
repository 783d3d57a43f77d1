// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative menu and item configuration.

use bract_composite::{HostElement, Layout};
use bract_role::DisclosureRole;
use bract_selection::{Ownership, SelectionValue};

/// Menu configuration provided by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MenuProps<V> {
    /// Explicit container role.
    pub role: Option<DisclosureRole>,
    /// Deprecated alias of [`MenuProps::role`].
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_alias: Option<DisclosureRole>,
    /// Allow several items to be selected at once.
    pub multi_select: bool,
    /// Controlled selection.
    pub selected: Option<SelectionValue<V>>,
    /// Initial selection for uncontrolled menus.
    pub default_selected: Option<SelectionValue<V>>,
    /// Item layout.
    pub layout: Layout,
    /// Keep item labels on one line.
    pub no_wrap: bool,
    /// Commit the focused item when it loses focus.
    pub change_on_blur: bool,
}

impl<V> Default for MenuProps<V> {
    fn default() -> Self {
        Self {
            role: None,
            type_alias: None,
            multi_select: false,
            selected: None,
            default_selected: None,
            layout: Layout::default(),
            no_wrap: false,
            change_on_blur: false,
        }
    }
}

impl<V> MenuProps<V> {
    /// Set the container role.
    #[must_use]
    pub fn with_role(mut self, role: DisclosureRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the deprecated `type` alias.
    #[must_use]
    pub fn with_type_alias(mut self, role: DisclosureRole) -> Self {
        self.type_alias = Some(role);
        self
    }

    /// Enable or disable multi-select.
    #[must_use]
    pub fn with_multi_select(mut self, multi_select: bool) -> Self {
        self.multi_select = multi_select;
        self
    }

    /// Control the selection from the host.
    #[must_use]
    pub fn with_selected(mut self, selected: SelectionValue<V>) -> Self {
        self.selected = Some(selected);
        self
    }

    /// Seed an uncontrolled selection.
    #[must_use]
    pub fn with_default_selected(mut self, selected: SelectionValue<V>) -> Self {
        self.default_selected = Some(selected);
        self
    }

    /// Set the layout.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Keep labels on one line.
    #[must_use]
    pub fn with_no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = no_wrap;
        self
    }

    /// Commit the focused item on blur.
    #[must_use]
    pub fn with_change_on_blur(mut self, change_on_blur: bool) -> Self {
        self.change_on_blur = change_on_blur;
        self
    }
}

impl<V: Clone> MenuProps<V> {
    /// Selection ownership implied by these props, if any selection is configured.
    ///
    /// `selected` wins over `default_selected`.
    #[must_use]
    pub fn ownership(&self) -> Option<Ownership<V>> {
        match (&self.selected, &self.default_selected) {
            (Some(selected), _) => Some(Ownership::Controlled(selected.clone())),
            (None, Some(default)) => Some(Ownership::Uncontrolled(default.clone())),
            (None, None) => None,
        }
    }
}

/// Item configuration provided by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ItemProps<V> {
    /// Value this item selects.
    pub value: Option<V>,
    /// Item-local selected flag, used when the container has no selection.
    pub selected: Option<bool>,
    /// Whether the item is disabled.
    pub disabled: bool,
    /// Element the item renders as.
    pub element: HostElement,
    /// Activation flips the selection instead of only selecting.
    pub can_toggle: bool,
}

impl<V> Default for ItemProps<V> {
    fn default() -> Self {
        Self {
            value: None,
            selected: None,
            disabled: false,
            element: HostElement::default(),
            can_toggle: false,
        }
    }
}

impl<V> ItemProps<V> {
    /// An item selecting `value`.
    #[must_use]
    pub fn with_value(value: V) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// Set the item-local selected flag.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    /// Disable the item.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Render as `element`.
    #[must_use]
    pub fn element(mut self, element: HostElement) -> Self {
        self.element = element;
        self
    }

    /// Let activation deselect.
    #[must_use]
    pub fn can_toggle(mut self, can_toggle: bool) -> Self {
        self.can_toggle = can_toggle;
        self
    }
}
