// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bract Menu: menu, listbox, and list containers with centralized selection.
//!
//! ## Overview
//!
//! - [`Menu`] is the container. It resolves its role, owns the selection, tracks its items
//!   in document order, and installs composite navigation when the role calls for it.
//! - [`DisclosureContext`] is the read-only view the container hands to its items, and
//!   [`ItemScope`] pairs it with the nearest popover.
//! - [`on_activate`] and [`on_blur`] decide what an item interaction asks for; they never
//!   mutate anything.
//! - [`Disclosure`] drives a menu together with an optional [`Popover`](bract_popover::Popover)
//!   and returns each gesture's [`Effect`]s in application order: selection changes, then
//!   visibility, then focus.
//!
//! ## Minimal example
//!
//! ```rust
//! use bract_menu::{Disclosure, Effect, ItemProps, MenuProps};
//! use bract_role::DisclosureRole;
//! use bract_selection::SelectionValue;
//!
//! let props = MenuProps::default()
//!     .with_role(DisclosureRole::Listbox)
//!     .with_multi_select(true)
//!     .with_selected(SelectionValue::Multiple(vec!["a"]));
//! let mut listbox = Disclosure::new(&props);
//! listbox.register_item(1_u32, ItemProps::with_value("a"));
//! listbox.register_item(2, ItemProps::with_value("b"));
//!
//! let effects = listbox.activate_item(2).unwrap();
//! assert_eq!(
//!     effects.as_slice(),
//!     [Effect::Change(SelectionValue::Multiple(vec!["a", "b"]))]
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support in `bract_popover`.
//! - `libm`: `no_std` floating-point support for `bract_popover`.
//! - `serde`: derives `Serialize`/`Deserialize` for [`MenuProps`] and [`ItemProps`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod context;
mod disclosure;
mod error;
mod item;
mod menu;
mod props;

pub use context::{DisclosureContext, ItemScope, MenuFlags};
pub use disclosure::{Disclosure, Effect, Effects};
pub use error::MenuError;
pub use item::{
    Activation, ItemAttributes, SelectionRequest, is_item_selected, item_attributes, on_activate,
    on_blur,
};
pub use menu::{ContainerAttributes, Menu};
pub use props::{ItemProps, MenuProps};
