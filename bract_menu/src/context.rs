// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-only view a container hands to its items.

use core::fmt;

use bract_composite::Layout;
use bract_role::{DisclosureRole, ItemRole, PopoverType, nearest_role_source, resolve_item_role};
use bract_selection::SelectionValue;

use crate::error::MenuError;

bitflags::bitflags! {
    /// Derived container flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MenuFlags: u8 {
        /// Several items may be selected.
        const MULTI_SELECT       = 0b0000_0001;
        /// Item labels stay on one line.
        const NO_WRAP            = 0b0000_0010;
        /// Blurring an item commits it.
        const CHANGE_ON_BLUR     = 0b0000_0100;
        /// Declared as navigation; the selected item is the current page.
        const NAV_SEMANTICS      = 0b0000_1000;
        /// The role is driven by arrow keys (menu or listbox).
        const ARROW_KEY_NAV      = 0b0001_0000;
        /// The container owns a centralized selection.
        const SUPPORTS_SELECTION = 0b0010_0000;
        /// The container installs its own composite navigation group.
        const COMPOSITE          = 0b0100_0000;
    }
}

/// Snapshot of a container's derived configuration and current selection.
///
/// Items only read this. Selection changes go back to the owning container as a
/// [`SelectionRequest`](crate::SelectionRequest).
pub struct DisclosureContext<'a, V> {
    pub(crate) role: DisclosureRole,
    pub(crate) layout: Layout,
    pub(crate) flags: MenuFlags,
    pub(crate) selection: &'a SelectionValue<V>,
}

impl<V> Clone for DisclosureContext<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for DisclosureContext<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for DisclosureContext<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisclosureContext")
            .field("role", &self.role)
            .field("layout", &self.layout)
            .field("flags", &self.flags)
            .field("selection", self.selection)
            .finish()
    }
}

impl<'a, V> DisclosureContext<'a, V> {
    /// Effective container role.
    #[must_use]
    pub const fn role(&self) -> DisclosureRole {
        self.role
    }

    /// Item layout.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// All derived flags.
    #[must_use]
    pub const fn flags(&self) -> MenuFlags {
        self.flags
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &'a SelectionValue<V> {
        self.selection
    }

    /// Whether several items may be selected.
    #[must_use]
    pub const fn multi_select(&self) -> bool {
        self.flags.contains(MenuFlags::MULTI_SELECT)
    }

    /// Whether labels stay on one line.
    #[must_use]
    pub const fn no_wrap(&self) -> bool {
        self.flags.contains(MenuFlags::NO_WRAP)
    }

    /// Whether blurring an item commits it.
    #[must_use]
    pub const fn change_on_blur(&self) -> bool {
        self.flags.contains(MenuFlags::CHANGE_ON_BLUR)
    }

    /// Whether the container was declared as navigation.
    #[must_use]
    pub const fn nav_semantics(&self) -> bool {
        self.flags.contains(MenuFlags::NAV_SEMANTICS)
    }

    /// Whether the role is arrow-key driven.
    #[must_use]
    pub const fn has_arrow_key_nav(&self) -> bool {
        self.flags.contains(MenuFlags::ARROW_KEY_NAV)
    }

    /// Whether the container owns a centralized selection.
    #[must_use]
    pub const fn supports_selection(&self) -> bool {
        self.flags.contains(MenuFlags::SUPPORTS_SELECTION)
    }

    /// Whether the container installs composite navigation.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        self.flags.contains(MenuFlags::COMPOSITE)
    }
}

impl<V: PartialEq> DisclosureContext<'_, V> {
    /// Whether `value` is part of the current selection.
    #[must_use]
    pub fn is_selected(&self, value: &V) -> bool {
        self.selection.contains(value)
    }
}

/// Everything an item can see above it: the nearest container and the nearest popover.
///
/// Built once per update by the owner and passed down.
pub struct ItemScope<'a, V> {
    /// Nearest disclosure container.
    pub context: Option<DisclosureContext<'a, V>>,
    /// Declared type of the nearest popover.
    pub popover: Option<PopoverType>,
}

impl<V> Clone for ItemScope<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for ItemScope<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for ItemScope<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemScope")
            .field("context", &self.context)
            .field("popover", &self.popover)
            .finish()
    }
}

impl<'a, V> ItemScope<'a, V> {
    /// Role for an item in this scope.
    ///
    /// A popover declaring `menu` or `listbox` wins over the container.
    #[must_use]
    pub fn item_role(&self) -> Option<ItemRole> {
        resolve_item_role(nearest_role_source(
            self.context.map(|ctx| ctx.role),
            self.popover,
        ))
    }

    /// The container that owns selection for this scope.
    ///
    /// Under a popover with no container there is nothing to select into; this is reported
    /// and yields `Ok(None)`. With no container and no popover it is an error.
    pub fn selection_context(&self) -> Result<Option<DisclosureContext<'a, V>>, MenuError> {
        match (self.context, self.popover) {
            (Some(ctx), _) => Ok(Some(ctx)),
            (None, Some(ty)) => {
                tracing::warn!(popover = ?ty, "selection used outside a menu; ignoring");
                Ok(None)
            }
            (None, None) => Err(MenuError::MissingContext),
        }
    }
}
