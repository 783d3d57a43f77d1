// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bract Popover: the open/closed state machine behind popovers and dropdown menus.
//!
//! ## Overview
//!
//! A popover pairs an **activator** with floating **content**. This crate computes how the
//! pair reacts to input; it does not render, position collision-free, or own listeners.
//!
//! - [`PopoverState::transition`] is a pure function from a state snapshot and a
//!   [`PopoverEvent`] to the next snapshot plus ordered [`PopoverEffect`] intents.
//! - [`Popover`] wraps that function with the activator/content ids, the host's
//!   [`PopoverProps`], and the item group used for virtual focus.
//! - [`Positioner`] is the seam to a floating-position collaborator; [`AnchorPositioner`]
//!   is a minimal one.
//! - [`ParentLookup`] lets the host answer "is this node inside the activator or content"
//!   for outside-press and focus-out decisions.
//!
//! ## Virtual focus
//!
//! With `virtual_focus`, opening sets the active index to the first enabled item without
//! moving real focus. Arrow keys, Home/End, and PageUp/PageDown on the activator move the
//! index; the activator exposes it via `aria-activedescendant`. Enter on the activator
//! emits [`PopoverEffect::ActivateItem`] for the active item.
//!
//! ## Minimal example
//!
//! ```rust
//! use bract_popover::{CloseReason, Popover, PopoverEffect, PopoverEvent, PopoverProps};
//!
//! let mut popover = Popover::new("button", "panel", PopoverProps::default());
//! popover.handle(PopoverEvent::ActivatorPress);
//! assert!(popover.is_open());
//!
//! let effects = popover.handle(PopoverEvent::Escape);
//! assert!(!popover.is_open());
//! assert_eq!(
//!     effects.as_slice(),
//!     [
//!         PopoverEffect::Deactivated(CloseReason::Escape),
//!         PopoverEffect::Unlisten,
//!         PopoverEffect::FocusActivator,
//!     ]
//! );
//!
//! // Escape while closed is a no-op.
//! assert!(popover.handle(PopoverEvent::Escape).is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for `kurbo`'s floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`PopoverProps`] and [`Placement`].
//!
//! This crate is `no_std`.

#![no_std]

mod popover;
mod position;
mod props;
mod state;
mod tree;

pub use popover::{ActivatorAttributes, ContentAttributes, Popover};
pub use position::{Align, AnchorPositioner, Placement, Positioner, Side};
pub use props::PopoverProps;
pub use state::{
    Behavior, CloseReason, Effects, Key, PopoverEffect, PopoverEvent, PopoverState, Transition,
};
pub use tree::{NoParent, ParentLookup, is_within};
