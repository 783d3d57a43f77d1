// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bract Selection: selection state for disclosure containers.
//!
//! This crate models the selection of a menu or listbox as:
//! - a [`SelectionValue`]: a single optional value or an ordered list, depending on
//!   whether the container is multi-select,
//! - an [`Ownership`]: whether the host (controlled) or the controller (uncontrolled) owns
//!   that value,
//! - a [`SelectionController`] exposing `is_selected` and `toggle`.
//!
//! The transition itself is the pure function [`toggled`], so hosts can compute the next
//! selection without a controller.
//!
//! ## Minimal example
//!
//! ```rust
//! use bract_selection::{Ownership, SelectionController, SelectionValue};
//!
//! let mut sel = SelectionController::new(
//!     Ownership::Controlled(SelectionValue::Multiple(vec!["a"])),
//!     true,
//! );
//!
//! // Controlled: the next value goes to `on_change`, local state waits for the host.
//! let next = sel.toggle("b", None).unwrap();
//! assert_eq!(next, SelectionValue::Multiple(vec!["a", "b"]));
//! assert!(!sel.is_selected(&"b"));
//!
//! sel.sync(Ownership::Controlled(next));
//! assert!(sel.is_selected(&"b"));
//! ```
//!
//! ## Misuse
//!
//! Seeding a multi-select controller with a scalar, or switching between controlled and
//! uncontrolled ownership, is a caller error. The `try_*` constructors return a
//! [`SelectionError`]; the lenient variants log a `tracing` warning and recover.
//!
//! ## Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` for [`SelectionValue`] and [`Ownership`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod error;
mod value;

pub use controller::{Ownership, OwnershipMode, SelectionController};
pub use error::SelectionError;
pub use value::{SelectionValue, toggled};
