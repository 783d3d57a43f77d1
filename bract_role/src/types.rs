// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Role enumerations and their string-literal surface.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Semantic role of a disclosure container.
///
/// The container role drives both the container's own semantics and the
/// [`ItemRole`] of its children (see [`DisclosureRole::item_role`]).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DisclosureRole {
    /// A plain list of items. Items carry native list-item semantics.
    #[default]
    List,
    /// An action menu.
    Menu,
    /// A selectable list of options.
    Listbox,
    /// A navigation list.
    ///
    /// Resolution never produces this value: it degrades to [`DisclosureRole::List`]
    /// and records `nav_semantics` instead (see [`crate::ResolvedRole`]).
    Nav,
}

impl DisclosureRole {
    /// Item role implied by this container role.
    ///
    /// `List` and `Nav` map to [`ItemRole::ListItem`], `Menu` to
    /// [`ItemRole::MenuItem`], and `Listbox` to [`ItemRole::Option`].
    #[must_use]
    pub const fn item_role(self) -> ItemRole {
        match self {
            Self::List | Self::Nav => ItemRole::ListItem,
            Self::Menu => ItemRole::MenuItem,
            Self::Listbox => ItemRole::Option,
        }
    }

    /// Whether this role describes a composite (roving focus) widget.
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Menu | Self::Listbox)
    }

    /// ARIA `role` attribute value for the container element.
    ///
    /// `Nav` maps to `"list"`: navigation landmarks keep list semantics on the
    /// item container.
    #[must_use]
    pub const fn aria_role(self) -> &'static str {
        match self {
            Self::List | Self::Nav => "list",
            Self::Menu => "menu",
            Self::Listbox => "listbox",
        }
    }

    /// The string-literal form accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Menu => "menu",
            Self::Listbox => "listbox",
            Self::Nav => "nav",
        }
    }
}

impl fmt::Display for DisclosureRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisclosureRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "menu" => Ok(Self::Menu),
            "listbox" => Ok(Self::Listbox),
            "nav" => Ok(Self::Nav),
            _ => Err(ParseRoleError::Unknown {
                kind: "disclosure role",
            }),
        }
    }
}

/// Effective role of an item inside a disclosure container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ItemRole {
    /// A list item. Never emitted as an explicit attribute.
    ListItem,
    /// A menu item.
    MenuItem,
    /// A listbox option.
    Option,
}

impl ItemRole {
    /// ARIA `role` attribute for the item, if one should be written.
    ///
    /// `ListItem` returns `None`: native list semantics suffice and the host
    /// element must not carry an explicit `role="listitem"`. Structural
    /// decisions must still match on the variant itself.
    #[must_use]
    pub const fn aria_role(self) -> Option<&'static str> {
        match self {
            Self::ListItem => None,
            Self::MenuItem => Some("menuitem"),
            Self::Option => Some("option"),
        }
    }
}

/// Declared type of an enclosing popover, as exposed through `aria-haspopup`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PopoverType {
    /// Generic dialog content.
    #[default]
    Dialog,
    /// A menu.
    Menu,
    /// A listbox.
    Listbox,
    /// A tree.
    Tree,
    /// A grid.
    Grid,
}

impl PopoverType {
    /// Container role this popover type forces on a wrapped disclosure container.
    ///
    /// Only `Menu` and `Listbox` force a role; other types leave the container alone.
    #[must_use]
    pub const fn forced_role(self) -> Option<DisclosureRole> {
        match self {
            Self::Menu => Some(DisclosureRole::Menu),
            Self::Listbox => Some(DisclosureRole::Listbox),
            Self::Dialog | Self::Tree | Self::Grid => None,
        }
    }

    /// Item role implied by this popover type alone.
    #[must_use]
    pub const fn item_role(self) -> ItemRole {
        match self {
            Self::Menu => ItemRole::MenuItem,
            Self::Listbox => ItemRole::Option,
            Self::Dialog | Self::Tree | Self::Grid => ItemRole::ListItem,
        }
    }

    /// Value for the activator's `aria-haspopup` attribute.
    #[must_use]
    pub const fn aria_haspopup(self) -> &'static str {
        match self {
            Self::Dialog => "dialog",
            Self::Menu => "menu",
            Self::Listbox => "listbox",
            Self::Tree => "tree",
            Self::Grid => "grid",
        }
    }
}

impl FromStr for PopoverType {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dialog" => Ok(Self::Dialog),
            "menu" => Ok(Self::Menu),
            "listbox" => Ok(Self::Listbox),
            "tree" => Ok(Self::Tree),
            "grid" => Ok(Self::Grid),
            _ => Err(ParseRoleError::Unknown {
                kind: "popover type",
            }),
        }
    }
}

/// Error returned when parsing a role or type from its string-literal form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRoleError {
    /// The string is not one of the recognized literals.
    #[error("unrecognized {kind}")]
    Unknown {
        /// Which surface was being parsed.
        kind: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_to_item_roles() {
        assert_eq!(DisclosureRole::List.item_role(), ItemRole::ListItem);
        assert_eq!(DisclosureRole::Nav.item_role(), ItemRole::ListItem);
        assert_eq!(DisclosureRole::Menu.item_role(), ItemRole::MenuItem);
        assert_eq!(DisclosureRole::Listbox.item_role(), ItemRole::Option);
    }

    #[test]
    fn listitem_has_no_attribute() {
        assert_eq!(ItemRole::ListItem.aria_role(), None);
        assert_eq!(ItemRole::MenuItem.aria_role(), Some("menuitem"));
        assert_eq!(ItemRole::Option.aria_role(), Some("option"));
    }

    #[test]
    fn parses_literals() {
        assert_eq!("listbox".parse(), Ok(DisclosureRole::Listbox));
        assert_eq!("nav".parse(), Ok(DisclosureRole::Nav));
        assert_eq!("menu".parse(), Ok(PopoverType::Menu));
        assert!("toolbar".parse::<DisclosureRole>().is_err());
        assert!("".parse::<PopoverType>().is_err());
    }

    #[test]
    fn only_menu_and_listbox_force_a_role() {
        assert_eq!(PopoverType::Menu.forced_role(), Some(DisclosureRole::Menu));
        assert_eq!(
            PopoverType::Listbox.forced_role(),
            Some(DisclosureRole::Listbox)
        );
        assert_eq!(PopoverType::Dialog.forced_role(), None);
        assert_eq!(PopoverType::Grid.forced_role(), None);
    }
}
