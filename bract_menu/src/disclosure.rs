// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A menu and its optional popover, driven as one unit per gesture.

use core::fmt::Debug;
use core::hash::Hash;

use bract_composite::Navigation;
use bract_popover::{Popover, PopoverEffect, PopoverEvent, PopoverProps};
use bract_selection::SelectionValue;
use smallvec::SmallVec;

use crate::context::DisclosureContext;
use crate::error::MenuError;
use crate::item::{is_item_selected, on_activate, on_blur};
use crate::menu::Menu;
use crate::props::{ItemProps, MenuProps};

/// One intent for the host to carry out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect<K, V> {
    /// Invoke `on_change` with the new selection.
    Change(SelectionValue<V>),
    /// A popover intent.
    Popover(PopoverEffect<K>),
}

/// Effects of one gesture, in the order they must be applied.
///
/// Selection changes always precede visibility changes, which precede focus moves.
pub type Effects<K, V> = SmallVec<[Effect<K, V>; 4]>;

/// A menu, optionally hosted in a popover.
///
/// ```rust
/// use bract_menu::{Disclosure, Effect, ItemProps, MenuProps};
/// use bract_popover::{CloseReason, Popover, PopoverEffect, PopoverEvent, PopoverProps};
/// use bract_role::PopoverType;
/// use bract_selection::SelectionValue;
///
/// let popover = Popover::new(1_u32, 2, PopoverProps::default().with_type(PopoverType::Menu));
/// let props = MenuProps::default().with_default_selected(SelectionValue::Single(None));
/// let mut d = Disclosure::with_popover(&props, popover);
/// d.register_item(10, ItemProps::with_value("bold"));
///
/// d.handle(PopoverEvent::ActivatorPress);
/// let effects = d.activate_item(10).unwrap();
/// assert_eq!(
///     effects.as_slice(),
///     [
///         Effect::Change(SelectionValue::Single(Some("bold"))),
///         Effect::Popover(PopoverEffect::Deactivated(CloseReason::ItemActivation)),
///         Effect::Popover(PopoverEffect::Unlisten),
///         Effect::Popover(PopoverEffect::FocusActivator),
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Disclosure<K, V> {
    menu: Menu<K, V>,
    popover: Option<Popover<K>>,
}

impl<K, V> Disclosure<K, V>
where
    K: Copy + Eq + Hash + Debug,
    V: Clone + PartialEq + Debug,
{
    /// A menu with no popover.
    #[must_use]
    pub fn new(props: &MenuProps<V>) -> Self {
        Self {
            menu: Menu::new(props, None),
            popover: None,
        }
    }

    /// A menu hosted in `popover`.
    #[must_use]
    pub fn with_popover(props: &MenuProps<V>, popover: Popover<K>) -> Self {
        let mut d = Self {
            menu: Menu::new(props, Some(popover.popover_type())),
            popover: Some(popover),
        };
        d.refresh_wrapped_role();
        d
    }

    /// Apply the popover's initial visibility.
    pub fn mount(&mut self) -> Effects<K, V> {
        self.popover
            .as_mut()
            .map(|p| lift(p.mount()))
            .unwrap_or_default()
    }

    /// Apply menu props from a later update.
    pub fn update(&mut self, props: &MenuProps<V>) -> bool {
        let ty = self.popover.as_ref().map(Popover::popover_type);
        let changed = self.menu.update(props, ty);
        self.refresh_wrapped_role();
        changed
    }

    /// Apply popover props from a later update.
    ///
    /// A changed popover type re-resolves the container role.
    pub fn update_popover(&mut self, props: PopoverProps) -> Effects<K, V> {
        let Some(popover) = &mut self.popover else {
            return Effects::new();
        };
        let effects = lift(popover.sync(props));
        let ty = popover.popover_type();
        if self.menu.set_popover(Some(ty)) {
            tracing::debug!(?ty, "popover type changed the container role");
        }
        self.refresh_wrapped_role();
        effects
    }

    /// Register an item in document order.
    pub fn register_item(&mut self, id: K, props: ItemProps<V>) {
        if let Some(popover) = &mut self.popover {
            popover.register_item(id, !props.disabled);
        }
        self.menu.register_item(id, props);
    }

    /// Remove an item.
    pub fn deregister_item(&mut self, id: K) -> Option<ItemProps<V>> {
        if let Some(popover) = &mut self.popover {
            popover.deregister_item(id);
        }
        self.menu.deregister_item(id)
    }

    /// Activate item `id` by pointer, keyboard, or virtual focus.
    ///
    /// The selection change is applied before the close decision, and focus moves last.
    /// Activating an item of a closed popover is ignored.
    pub fn activate_item(&mut self, id: K) -> Result<Effects<K, V>, MenuError> {
        let props = self.menu.item(id).ok_or(MenuError::UnknownItem)?;
        let mut effects = Effects::new();
        if self.popover.as_ref().is_some_and(|p| !p.is_open()) {
            tracing::debug!(item = ?id, "activation after close ignored");
            return Ok(effects);
        }

        let ctx = self.menu.context();
        let can_toggle = props.can_toggle;
        let activation = on_activate(&ctx, props, is_item_selected(&ctx, props));
        let multi_select = ctx.multi_select();

        if let Some(request) = activation.selection {
            effects.extend(self.menu.toggle(request.value, request.force).map(Effect::Change));
        }
        if let (true, Some(popover)) = (activation.close, &mut self.popover) {
            let event = PopoverEvent::ItemActivated {
                multi_select,
                can_toggle,
            };
            effects.extend(lift(popover.handle(event)));
        }
        Ok(effects)
    }

    /// Item `id` lost focus without being activated.
    pub fn blur_item(&mut self, id: K) -> Result<Effects<K, V>, MenuError> {
        let props = self.menu.item(id).ok_or(MenuError::UnknownItem)?;
        let Some(request) = on_blur(&self.menu.context(), props) else {
            return Ok(Effects::new());
        };
        Ok(self
            .menu
            .toggle(request.value, request.force)
            .map(Effect::Change)
            .into_iter()
            .collect())
    }

    /// Deliver a popover event.
    ///
    /// A virtual-focus activation is carried out in place of the raw
    /// [`PopoverEffect::ActivateItem`] intent. Without a popover this does nothing.
    pub fn handle(&mut self, event: PopoverEvent) -> Effects<K, V> {
        let Some(popover) = &mut self.popover else {
            return Effects::new();
        };
        let mut effects = Effects::new();
        for effect in popover.handle(event) {
            match effect {
                PopoverEffect::ActivateItem { id, .. } => match self.activate_item(id) {
                    Ok(activated) => effects.extend(activated),
                    Err(err) => tracing::warn!(%err, item = ?id, "virtual activation dropped"),
                },
                other => effects.push(Effect::Popover(other)),
            }
        }
        effects
    }

    /// Move real focus among the items.
    ///
    /// The container's composite navigates when it has one; otherwise a `menu` or `listbox`
    /// popover without virtual focus does, stopping at the boundaries.
    #[must_use]
    pub fn navigate(&self, origin: Option<K>, nav: Navigation) -> Option<K> {
        if self.menu.context().is_composite() {
            return self.menu.navigate(origin, nav);
        }
        self.popover.as_ref().and_then(|p| p.navigate(origin, nav))
    }

    fn refresh_wrapped_role(&mut self) {
        if let Some(popover) = &mut self.popover {
            let resolved = self.menu.resolved();
            popover.set_wrapped_role(resolved.from_popover.then_some(resolved.role));
        }
    }
}

impl<K, V> Disclosure<K, V> {
    /// The container.
    #[must_use]
    pub const fn menu(&self) -> &Menu<K, V> {
        &self.menu
    }

    /// The hosting popover.
    #[must_use]
    pub const fn popover(&self) -> Option<&Popover<K>> {
        self.popover.as_ref()
    }

    /// Read-only view handed to items.
    #[must_use]
    pub fn context(&self) -> DisclosureContext<'_, V> {
        self.menu.context()
    }
}

fn lift<K, V>(effects: bract_popover::Effects<K>) -> Effects<K, V> {
    effects.into_iter().map(Effect::Popover).collect()
}
