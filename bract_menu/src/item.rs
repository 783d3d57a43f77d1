// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item activation, blur commits, and per-item ARIA attributes.
//!
//! These are pure functions of a [`DisclosureContext`] and the item's props. The owner
//! applies the returned requests in order: selection first, then closing, then focus.

use bract_role::ItemRole;

use crate::context::DisclosureContext;
use crate::props::ItemProps;

/// A selection change an item asks its container to apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionRequest<V> {
    /// Value to toggle.
    pub value: V,
    /// Forced membership, or `None` to flip.
    pub force: Option<bool>,
}

/// What one activation asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activation<V> {
    /// Selection change to apply first.
    pub selection: Option<SelectionRequest<V>>,
    /// Ask the enclosing popover to close.
    pub close: bool,
    /// Return focus to the enclosing popover's activator.
    pub refocus: bool,
}

impl<V> Activation<V> {
    const NONE: Self = Self {
        selection: None,
        close: false,
        refocus: false,
    };
}

/// Whether the item counts as selected.
///
/// A container with centralized selection decides; the item's own `selected` flag is
/// only consulted when the container has none.
#[must_use]
pub fn is_item_selected<V: PartialEq>(ctx: &DisclosureContext<'_, V>, item: &ItemProps<V>) -> bool {
    if ctx.supports_selection() {
        item.value.as_ref().is_some_and(|v| ctx.is_selected(v))
    } else {
        item.selected.unwrap_or(false)
    }
}

/// Decide what activating `item` does.
///
/// Single-select activation without `can_toggle` only ever selects; multi-select and
/// `can_toggle` flip. In an arrow-key driven, single-select container (or for a
/// `can_toggle` item) the enclosing popover is asked to close and refocus its activator.
///
/// ```rust
/// use bract_menu::{ItemProps, Menu, MenuProps, SelectionRequest, on_activate};
/// use bract_role::DisclosureRole;
/// use bract_selection::SelectionValue;
///
/// let menu: Menu<u32, &str> = Menu::new(
///     &MenuProps::default()
///         .with_role(DisclosureRole::Listbox)
///         .with_default_selected(SelectionValue::Single(Some("a"))),
///     None,
/// );
/// let a = ItemProps::with_value("a");
///
/// let activation = on_activate(&menu.context(), &a, true);
/// assert_eq!(activation.selection, Some(SelectionRequest { value: "a", force: Some(true) }));
/// assert!(activation.close);
/// ```
#[must_use]
pub fn on_activate<V: Clone>(
    ctx: &DisclosureContext<'_, V>,
    item: &ItemProps<V>,
    currently_selected: bool,
) -> Activation<V> {
    if item.disabled {
        return Activation::NONE;
    }
    let multi_select = ctx.multi_select();
    let selection = match (&item.value, ctx.supports_selection()) {
        (Some(value), true) => {
            let next = if item.can_toggle || multi_select {
                !currently_selected
            } else {
                true
            };
            Some(SelectionRequest {
                value: value.clone(),
                force: Some(next),
            })
        }
        (None, true) => {
            tracing::debug!("activated item has no value; selection unchanged");
            None
        }
        (_, false) => None,
    };
    let close = ctx.has_arrow_key_nav() && (!multi_select || item.can_toggle);
    Activation {
        selection,
        close,
        refocus: close,
    }
}

/// Commit `item` when it loses focus without being activated.
///
/// Only containers with `change_on_blur` commit; the item is force-selected.
#[must_use]
pub fn on_blur<V: Clone>(
    ctx: &DisclosureContext<'_, V>,
    item: &ItemProps<V>,
) -> Option<SelectionRequest<V>> {
    if item.disabled || !ctx.change_on_blur() || !ctx.supports_selection() {
        return None;
    }
    item.value.as_ref().map(|value| SelectionRequest {
        value: value.clone(),
        force: Some(true),
    })
}

/// ARIA attributes for an item element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ItemAttributes {
    /// `role`; `None` for list items, which rely on native semantics.
    pub role: Option<&'static str>,
    /// `aria-selected`.
    pub selected: Option<bool>,
    /// `aria-checked`.
    pub checked: Option<bool>,
    /// `aria-current`.
    pub current: Option<&'static str>,
    /// `aria-disabled`.
    pub disabled: bool,
}

/// Project an item's role and state onto ARIA attributes.
#[must_use]
pub fn item_attributes<V: PartialEq>(
    ctx: &DisclosureContext<'_, V>,
    role: Option<ItemRole>,
    item: &ItemProps<V>,
) -> ItemAttributes {
    let selected = is_item_selected(ctx, item);
    let mut attrs = ItemAttributes {
        role: role.and_then(ItemRole::aria_role),
        disabled: item.disabled,
        ..ItemAttributes::default()
    };
    match role {
        Some(ItemRole::Option) => attrs.selected = Some(selected),
        Some(ItemRole::MenuItem) if ctx.supports_selection() => {
            attrs.role = Some(if ctx.multi_select() {
                "menuitemcheckbox"
            } else {
                "menuitemradio"
            });
            attrs.checked = Some(selected);
        }
        Some(ItemRole::ListItem) if ctx.nav_semantics() && selected => {
            attrs.current = Some("page");
        }
        _ => {}
    }
    attrs
}
