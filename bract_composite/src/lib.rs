// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bract Composite: roving-focus navigation for menus and listboxes.
//!
//! This crate decides **whether** a disclosure container navigates as a composite and
//! provides the ordered **navigation group** it delegates to:
//! - [`needs_composite`]: composite navigation applies to `menu` and `listbox` roles,
//!   unless an enclosing popover already supplies arrow-key navigation.
//! - [`wrap_if_needed`]: list items rendered as native buttons or links are enclosed by a
//!   neutral wrapper that carries the list-item semantics.
//! - [`CompositeGroup`]: items registered in document order, navigated with
//!   [`Navigation`] intents according to a [`CompositeConfig`] (axis and wrap mode).
//!
//! ## Minimal example
//!
//! ```rust
//! use bract_composite::{CompositeConfig, CompositeGroup, Layout, Navigation, needs_composite};
//! use bract_role::DisclosureRole;
//!
//! // A plain list installs no composite: arrow keys do not move between items.
//! assert!(!needs_composite(DisclosureRole::List, false));
//!
//! // A standalone inline menu navigates horizontally and wraps.
//! assert!(needs_composite(DisclosureRole::Menu, false));
//! let mut group = CompositeGroup::new(CompositeConfig::for_layout(Layout::Inline, false));
//! group.register('a', true);
//! group.register('b', true);
//! assert_eq!(group.next(Some('b'), Navigation::Right), Some('a'));
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`Layout`] and [`HostElement`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod decide;
mod group;

pub use decide::{Element, HostElement, Structure, needs_composite, wrap_if_needed};
pub use group::{CompositeGroup, GroupEntry};

/// Navigation intent within a composite.
///
/// Concrete groups interpret these according to their [`Orientation`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Move up (vertical groups).
    Up,
    /// Move down (vertical groups).
    Down,
    /// Move left (horizontal groups).
    Left,
    /// Move right (horizontal groups).
    Right,
    /// Jump to the first enabled item.
    Home,
    /// Jump to the last enabled item.
    End,
    /// Jump to the first enabled item.
    PageUp,
    /// Jump to the last enabled item.
    PageDown,
}

/// Axis along which arrow keys move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Up/Down move between items.
    #[default]
    Vertical,
    /// Left/Right move between items.
    Horizontal,
}

impl Orientation {
    /// Value for `aria-orientation`.
    #[must_use]
    pub const fn aria_orientation(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

/// Wrap behavior at the boundaries of a group.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Reaching either end yields no next item.
    Never,
    /// Wrap around within the group.
    #[default]
    Scope,
}

/// Axis and wrap configuration handed to a [`CompositeGroup`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CompositeConfig {
    /// Navigation axis.
    pub orientation: Orientation,
    /// Boundary behavior.
    pub wrap: WrapMode,
}

/// Visual layout of a disclosure container's items.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Layout {
    /// Items stacked vertically.
    #[default]
    Stack,
    /// Items laid out in a row.
    Inline,
    /// Items laid out in a row with equal widths.
    InlineEqualWidth,
}

impl core::str::FromStr for Layout {
    type Err = bract_role::ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stack" => Ok(Self::Stack),
            "inline" => Ok(Self::Inline),
            "inline-equal-width" => Ok(Self::InlineEqualWidth),
            _ => Err(bract_role::ParseRoleError::Unknown { kind: "layout" }),
        }
    }
}
