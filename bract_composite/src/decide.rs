// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whether composite navigation applies, and how items must be structured.

use bract_role::{DisclosureRole, ItemRole};

use crate::{CompositeConfig, Layout, Orientation, WrapMode};

/// Whether a container with `role` must install composite navigation.
///
/// Only `menu` and `listbox` containers navigate with arrow keys, and only when no
/// enclosing popover already supplies arrow-key navigation. `inside_popover` means such a
/// popover (one declaring `menu` or `listbox`); other popover types leave navigation to the
/// container.
///
/// ```rust
/// use bract_composite::needs_composite;
/// use bract_role::DisclosureRole;
///
/// assert!(needs_composite(DisclosureRole::Menu, false));
/// assert!(!needs_composite(DisclosureRole::Menu, true));
/// assert!(!needs_composite(DisclosureRole::List, false));
/// ```
#[must_use]
pub fn needs_composite(role: DisclosureRole, inside_popover: bool) -> bool {
    role.is_composite() && !inside_popover
}

impl CompositeConfig {
    /// Configuration for a container with the given layout.
    ///
    /// Inline layouts navigate horizontally. Navigation wraps at the boundaries unless the
    /// composite is embedded in a popover.
    #[must_use]
    pub const fn for_layout(layout: Layout, embedded: bool) -> Self {
        Self {
            orientation: layout.orientation(),
            wrap: if embedded {
                WrapMode::Never
            } else {
                WrapMode::Scope
            },
        }
    }
}

impl Layout {
    /// Navigation axis for this layout.
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Stack => Orientation::Vertical,
            Self::Inline | Self::InlineEqualWidth => Orientation::Horizontal,
        }
    }
}

/// Kind of host element an item renders as.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HostElement {
    /// A neutral element (for example a `div` or `li`).
    #[default]
    Generic,
    /// A native button.
    Button,
    /// A native link.
    Link,
}

/// Host elements that can describe their own legal roles.
///
/// Implement this for richer host node types so [`wrap_if_needed`] can inspect them.
pub trait Element {
    /// Whether this element may itself carry list-item semantics.
    fn can_be_list_item(&self) -> bool;
}

impl Element for HostElement {
    fn can_be_list_item(&self) -> bool {
        matches!(self, Self::Generic)
    }
}

/// An item node after structural wrapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Structure<N> {
    /// The node is used as-is.
    Bare(N),
    /// The node is enclosed by a neutral wrapper carrying list-item semantics.
    ListItemWrapper(N),
}

impl<N> Structure<N> {
    /// The wrapped node.
    #[must_use]
    pub fn into_inner(self) -> N {
        match self {
            Self::Bare(n) | Self::ListItemWrapper(n) => n,
        }
    }

    /// Whether a wrapper was added.
    #[must_use]
    pub const fn is_wrapped(&self) -> bool {
        matches!(self, Self::ListItemWrapper(_))
    }
}

/// Wrap `node` when its role is `listitem` and its element cannot carry that role.
///
/// Native buttons and links cannot be repurposed as list items, so they are enclosed by
/// a neutral wrapper. This decision uses the `listitem` role even though that role is
/// never written as an attribute.
///
/// ```rust
/// use bract_composite::{HostElement, Structure, wrap_if_needed};
/// use bract_role::ItemRole;
///
/// let s = wrap_if_needed(Some(ItemRole::ListItem), HostElement::Button);
/// assert_eq!(s, Structure::ListItemWrapper(HostElement::Button));
///
/// let s = wrap_if_needed(Some(ItemRole::MenuItem), HostElement::Button);
/// assert_eq!(s, Structure::Bare(HostElement::Button));
/// ```
pub fn wrap_if_needed<N: Element>(item_role: Option<ItemRole>, node: N) -> Structure<N> {
    match item_role {
        Some(ItemRole::ListItem) if !node.can_be_list_item() => Structure::ListItemWrapper(node),
        _ => Structure::Bare(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_only_for_menu_and_listbox() {
        for role in [DisclosureRole::List, DisclosureRole::Nav] {
            assert!(!needs_composite(role, false));
            assert!(!needs_composite(role, true));
        }
        assert!(needs_composite(DisclosureRole::Listbox, false));
        assert!(!needs_composite(DisclosureRole::Listbox, true));
    }

    #[test]
    fn layout_drives_orientation() {
        let stack = CompositeConfig::for_layout(Layout::Stack, false);
        assert_eq!(stack.orientation, Orientation::Vertical);
        assert_eq!(stack.wrap, WrapMode::Scope);

        let inline = CompositeConfig::for_layout(Layout::InlineEqualWidth, true);
        assert_eq!(inline.orientation, Orientation::Horizontal);
        assert_eq!(inline.wrap, WrapMode::Never);
    }

    #[test]
    fn generic_list_items_stay_bare() {
        assert!(!wrap_if_needed(Some(ItemRole::ListItem), HostElement::Generic).is_wrapped());
        assert!(wrap_if_needed(Some(ItemRole::ListItem), HostElement::Link).is_wrapped());
        assert!(!wrap_if_needed(None, HostElement::Link).is_wrapped());
        assert!(!wrap_if_needed(Some(ItemRole::Option), HostElement::Button).is_wrapped());
    }

    #[test]
    fn custom_elements_can_opt_in() {
        struct Anchor;
        impl Element for Anchor {
            fn can_be_list_item(&self) -> bool {
                false
            }
        }
        assert!(wrap_if_needed(Some(ItemRole::ListItem), Anchor).is_wrapped());
    }
}
