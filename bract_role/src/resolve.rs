// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container and item role resolution.
//!
//! ## Container precedence
//!
//! 1. An enclosing popover declaring `menu` or `listbox` forces that role.
//! 2. Otherwise `multi_select` forces `listbox`.
//! 3. Otherwise the explicit role, then the deprecated `type` alias. `nav` degrades to `list`
//!    with [`ResolvedRole::nav_semantics`] set.
//! 4. Otherwise `list`.
//!
//! ## Item roles
//!
//! An item reads the nearest container and the nearest popover. A popover that forces a
//! role wins over the container; with no context at all the item has no role.

use crate::types::{DisclosureRole, ItemRole, PopoverType};

/// Result of resolving a container role.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedRole {
    /// Effective container role. Never [`DisclosureRole::Nav`].
    pub role: DisclosureRole,
    /// The container was declared as navigation and should render navigation semantics
    /// (for example `aria-current` on the selected item).
    pub nav_semantics: bool,
    /// The role was forced by the enclosing popover.
    ///
    /// The popover uses this to skip its own role bookkeeping for the wrapped container.
    pub from_popover: bool,
}

impl ResolvedRole {
    /// Item role for children of this container.
    #[must_use]
    pub const fn item_role(self) -> ItemRole {
        self.role.item_role()
    }
}

/// Resolve the effective role of a disclosure container.
///
/// `deprecated_type` is the legacy `type` alias of `explicit`; when both are given the
/// explicit role wins.
///
/// ```rust
/// use bract_role::{DisclosureRole, PopoverType, resolve_container_role};
///
/// // A popover declaring `menu` wins over the container's own role.
/// let r = resolve_container_role(
///     Some(DisclosureRole::Listbox),
///     None,
///     false,
///     Some(PopoverType::Menu),
/// );
/// assert_eq!(r.role, DisclosureRole::Menu);
/// assert!(r.from_popover);
///
/// // Multi-select forces a listbox when no popover intervenes.
/// let r = resolve_container_role(Some(DisclosureRole::Menu), None, true, None);
/// assert_eq!(r.role, DisclosureRole::Listbox);
/// ```
pub fn resolve_container_role(
    explicit: Option<DisclosureRole>,
    deprecated_type: Option<DisclosureRole>,
    multi_select: bool,
    enclosing_popover: Option<PopoverType>,
) -> ResolvedRole {
    if let Some(forced) = enclosing_popover.and_then(PopoverType::forced_role) {
        return ResolvedRole {
            role: forced,
            nav_semantics: false,
            from_popover: true,
        };
    }

    if multi_select {
        return ResolvedRole {
            role: DisclosureRole::Listbox,
            nav_semantics: false,
            from_popover: false,
        };
    }

    let declared = match (explicit, deprecated_type) {
        (Some(role), Some(alias)) => {
            if role != alias {
                tracing::warn!(
                    role = %role,
                    alias = %alias,
                    "both `role` and deprecated `type` are set; using `role`"
                );
            }
            Some(role)
        }
        (Some(role), None) => Some(role),
        (None, Some(alias)) => {
            tracing::debug!(alias = %alias, "deprecated `type` alias used as role");
            Some(alias)
        }
        (None, None) => None,
    };

    match declared.unwrap_or_default() {
        DisclosureRole::Nav => ResolvedRole {
            role: DisclosureRole::List,
            nav_semantics: true,
            from_popover: false,
        },
        role => ResolvedRole {
            role,
            nav_semantics: false,
            from_popover: false,
        },
    }
}

/// The context an item resolves its role from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RoleSource {
    /// The nearest disclosure container.
    Container(DisclosureRole),
    /// The nearest popover, when no container applies.
    Popover(PopoverType),
}

/// Pure lookup from a role source to an item role.
///
/// `listbox` yields `option`, `menu` yields `menuitem`, and anything else yields
/// `listitem`. No source yields `None`: the item keeps whatever its host element implies.
#[must_use]
pub fn resolve_item_role(source: Option<RoleSource>) -> Option<ItemRole> {
    source.map(|source| match source {
        RoleSource::Container(role) => role.item_role(),
        RoleSource::Popover(ty) => ty.item_role(),
    })
}

/// Pick the role source for an item from its nearest container and nearest popover.
///
/// A popover declaring `menu` or `listbox` takes precedence over the container.
#[must_use]
pub fn nearest_role_source(
    container: Option<DisclosureRole>,
    popover: Option<PopoverType>,
) -> Option<RoleSource> {
    match (container, popover) {
        (_, Some(ty)) if ty.forced_role().is_some() => Some(RoleSource::Popover(ty)),
        (Some(role), _) => Some(RoleSource::Container(role)),
        (None, Some(ty)) => Some(RoleSource::Popover(ty)),
        (None, None) => None,
    }
}
