// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bract Role: effective roles for disclosure containers and their items.
//!
//! A disclosure container (a menu, listbox, or plain list) receives several, possibly
//! conflicting, signals about what it is:
//! - an explicit **role** ([`DisclosureRole`]),
//! - the deprecated `type` alias of that role,
//! - a **multi-select** flag,
//! - the declared type of an **enclosing popover** ([`PopoverType`]).
//!
//! [`resolve_container_role`] folds these into one [`ResolvedRole`], and
//! [`resolve_item_role`] derives the [`ItemRole`] of each child.
//!
//! ## Minimal example
//!
//! ```rust
//! use bract_role::{
//!     DisclosureRole, ItemRole, PopoverType, RoleSource, nearest_role_source,
//!     resolve_container_role, resolve_item_role,
//! };
//!
//! // String literals are normalized once at the edge.
//! let role: DisclosureRole = "nav".parse().unwrap();
//! let resolved = resolve_container_role(Some(role), None, false, None);
//! assert_eq!(resolved.role, DisclosureRole::List);
//! assert!(resolved.nav_semantics);
//!
//! // List items never carry an explicit role attribute.
//! let item = resolve_item_role(nearest_role_source(Some(resolved.role), None));
//! assert_eq!(item, Some(ItemRole::ListItem));
//! assert_eq!(item.and_then(ItemRole::aria_role), None);
//!
//! // An enclosing `listbox` popover decides the item role.
//! let item = resolve_item_role(nearest_role_source(
//!     Some(DisclosureRole::List),
//!     Some(PopoverType::Listbox),
//! ));
//! assert_eq!(item, Some(ItemRole::Option));
//! ```
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for the role enums using their lowercase
//!   string literals.
//!
//! This crate is `no_std`.

#![no_std]

mod resolve;
mod types;

pub use resolve::{
    ResolvedRole, RoleSource, nearest_role_source, resolve_container_role, resolve_item_role,
};
pub use types::{DisclosureRole, ItemRole, ParseRoleError, PopoverType};
