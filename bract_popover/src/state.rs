// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The disclosure state machine.
//!
//! ## Transitions
//!
//! | From   | Event                   | To     | Notes                                        |
//! |--------|-------------------------|--------|----------------------------------------------|
//! | Closed | activator press         | Open   | no-op with `disabled_auto_toggle`            |
//! | Open   | activator press         | Closed | no-op with `disabled_auto_toggle`            |
//! | Open   | outside press           | Closed |                                              |
//! | Open   | Escape                  | Closed | focus returns to the activator               |
//! | Open   | focus out               | Closed |                                              |
//! | Open   | item activation         | Closed | single-select or `can_toggle` only; refocus  |
//!
//! Every event while `Closed` other than an activator press is a no-op with no effects.
//!
//! ## Ownership
//!
//! Uncontrolled popovers apply transitions themselves. Controlled popovers only emit the
//! [`PopoverEffect::Activated`] / [`PopoverEffect::Deactivated`] intents and wait for the host
//! to feed visibility back through [`PopoverState::synced`].
//!
//! ## Listener scoping
//!
//! Entering `Open` emits [`PopoverEffect::Listen`]; leaving it emits
//! [`PopoverEffect::Unlisten`] and clears the virtual-focus index, in the same transition.

use core::fmt::Debug;
use core::hash::Hash;

use bract_composite::{CompositeGroup, Navigation};
use bract_selection::OwnershipMode;
use smallvec::SmallVec;

/// Snapshot of a popover's disclosure state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PopoverState {
    /// Whether the content is shown.
    pub open: bool,
    /// Index of the virtually focused item, in registration order.
    pub active_virtual_index: Option<usize>,
    /// Who drives `open`.
    pub ownership: OwnershipMode,
    /// Whether outside-press and Escape listeners are registered.
    pub listening: bool,
}

impl PopoverState {
    /// A closed popover with the given ownership.
    #[must_use]
    pub const fn closed(ownership: OwnershipMode) -> Self {
        Self {
            open: false,
            active_virtual_index: None,
            ownership,
            listening: false,
        }
    }
}

/// Keys delivered to the activator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Enter.
    Enter,
    /// Space.
    Space,
    /// Escape.
    Escape,
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
}

impl Key {
    fn navigation(self) -> Option<Navigation> {
        match self {
            Self::ArrowUp => Some(Navigation::Up),
            Self::ArrowDown => Some(Navigation::Down),
            Self::Home => Some(Navigation::Home),
            Self::End => Some(Navigation::End),
            Self::PageUp => Some(Navigation::PageUp),
            Self::PageDown => Some(Navigation::PageDown),
            Self::Enter | Self::Space | Self::Escape => None,
        }
    }
}

/// Input delivered to the state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PopoverEvent {
    /// The activator was pressed (pointer or keyboard click).
    ActivatorPress,
    /// A press landed outside both the activator and the content.
    OutsidePress,
    /// Escape was pressed anywhere within the disclosure.
    Escape,
    /// Focus left both the activator and the content subtree.
    FocusOut,
    /// An item inside the content was activated.
    ItemActivated {
        /// The content is multi-select.
        multi_select: bool,
        /// The item forces closing even in multi-select content.
        can_toggle: bool,
    },
    /// A key was pressed on the activator.
    Key(Key),
}

/// What caused a close, for diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// Activator toggle.
    Activator,
    /// Outside press.
    OutsidePress,
    /// Escape.
    Escape,
    /// Focus out.
    FocusOut,
    /// Item activation.
    ItemActivation,
}

/// Side-effect intents produced by a transition, in the order they must be applied.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PopoverEffect<K> {
    /// Invoke `on_activated`.
    Activated,
    /// Invoke `on_deactivated`.
    Deactivated(CloseReason),
    /// Register outside-press and Escape listeners.
    Listen,
    /// Tear down outside-press and Escape listeners.
    Unlisten,
    /// Move real focus back to the activator.
    FocusActivator,
    /// Invoke `on_navigate` with the new virtual-focus index.
    Navigate(usize),
    /// Activate the virtually focused item.
    ActivateItem {
        /// The item's id.
        id: K,
        /// The item's index.
        index: usize,
    },
}

/// Effect list returned by a transition.
pub type Effects<K> = SmallVec<[PopoverEffect<K>; 4]>;

/// Result of a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition<K> {
    /// The next state.
    pub state: PopoverState,
    /// Effects to apply, in order.
    pub effects: Effects<K>,
}

impl<K> Transition<K> {
    fn unchanged(state: PopoverState) -> Self {
        Self {
            state,
            effects: SmallVec::new(),
        }
    }
}

/// Behavior flags the state machine consults.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Behavior {
    /// Virtual focus is enabled.
    pub virtual_focus: bool,
    /// Activator presses do not toggle visibility.
    pub disabled_auto_toggle: bool,
}

impl PopoverState {
    /// Apply `event`.
    ///
    /// `items` is the virtual-focus navigation group; it is only consulted when
    /// `behavior.virtual_focus` is set.
    #[must_use]
    pub fn transition<K>(
        self,
        event: PopoverEvent,
        behavior: Behavior,
        items: &CompositeGroup<K>,
    ) -> Transition<K>
    where
        K: Copy + Eq + Hash + Debug,
    {
        match event {
            PopoverEvent::ActivatorPress => self.press_activator(behavior, items),
            PopoverEvent::OutsidePress => self.close(CloseReason::OutsidePress, false),
            PopoverEvent::Escape => self.close(CloseReason::Escape, true),
            PopoverEvent::FocusOut => self.close(CloseReason::FocusOut, false),
            PopoverEvent::ItemActivated {
                multi_select,
                can_toggle,
            } => {
                if multi_select && !can_toggle {
                    Transition::unchanged(self)
                } else {
                    self.close(CloseReason::ItemActivation, true)
                }
            }
            PopoverEvent::Key(Key::Escape) => self.close(CloseReason::Escape, true),
            PopoverEvent::Key(Key::Enter) => {
                match self.active_item(behavior, items) {
                    Some((id, index)) => {
                        let mut t = Transition::unchanged(self);
                        t.effects.push(PopoverEffect::ActivateItem { id, index });
                        t
                    }
                    None => self.press_activator(behavior, items),
                }
            }
            PopoverEvent::Key(Key::Space) => self.press_activator(behavior, items),
            PopoverEvent::Key(key) => match key.navigation() {
                Some(nav) if self.open && behavior.virtual_focus => self.navigate(nav, items),
                _ => Transition::unchanged(self),
            },
        }
    }

    /// Reconcile with host-driven visibility.
    ///
    /// Only meaningful for controlled popovers: entering or leaving `Open` performs the
    /// same listener and virtual-focus bookkeeping as a self-transition, but emits no
    /// `Activated`/`Deactivated` intents since the host initiated the change.
    #[must_use]
    pub fn synced<K>(
        self,
        show: bool,
        behavior: Behavior,
        items: &CompositeGroup<K>,
    ) -> Transition<K>
    where
        K: Copy + Eq + Hash + Debug,
    {
        let mut t = Transition::unchanged(self);
        match (self.open, show) {
            (false, true) => t.state.enter_open(behavior, items, &mut t.effects),
            (true, false) => t.state.exit_open(&mut t.effects),
            _ => {}
        }
        t
    }

    fn press_activator<K>(self, behavior: Behavior, items: &CompositeGroup<K>) -> Transition<K>
    where
        K: Copy + Eq + Hash + Debug,
    {
        if behavior.disabled_auto_toggle {
            return Transition::unchanged(self);
        }
        if self.open {
            return self.close(CloseReason::Activator, false);
        }

        let mut t = Transition::unchanged(self);
        t.effects.push(PopoverEffect::Activated);
        if self.ownership == OwnershipMode::Uncontrolled {
            tracing::debug!("popover opened");
            t.state.enter_open(behavior, items, &mut t.effects);
        }
        t
    }

    fn close<K>(self, reason: CloseReason, refocus: bool) -> Transition<K> {
        if !self.open {
            return Transition::unchanged(self);
        }

        let mut t = Transition::unchanged(self);
        t.effects.push(PopoverEffect::Deactivated(reason));
        if self.ownership == OwnershipMode::Uncontrolled {
            tracing::debug!(?reason, "popover closed");
            t.state.exit_open(&mut t.effects);
        }
        if refocus {
            t.effects.push(PopoverEffect::FocusActivator);
        }
        t
    }

    fn navigate<K>(self, nav: Navigation, items: &CompositeGroup<K>) -> Transition<K>
    where
        K: Copy + Eq + Hash + Debug,
    {
        let origin = self
            .active_virtual_index
            .and_then(|i| items.get(i))
            .map(|entry| entry.id);
        let mut t = Transition::unchanged(self);
        let Some(index) = items.next(origin, nav).and_then(|id| items.position(id)) else {
            return t;
        };
        if self.active_virtual_index != Some(index) {
            t.state.active_virtual_index = Some(index);
            t.effects.push(PopoverEffect::Navigate(index));
        }
        t
    }

    fn active_item<K>(self, behavior: Behavior, items: &CompositeGroup<K>) -> Option<(K, usize)>
    where
        K: Copy + Eq + Hash + Debug,
    {
        if !self.open || !behavior.virtual_focus {
            return None;
        }
        let index = self.active_virtual_index?;
        items
            .get(index)
            .filter(|entry| entry.enabled)
            .map(|entry| (entry.id, index))
    }

    fn enter_open<K>(
        &mut self,
        behavior: Behavior,
        items: &CompositeGroup<K>,
        effects: &mut Effects<K>,
    ) where
        K: Copy + Eq + Hash + Debug,
    {
        self.open = true;
        if !self.listening {
            self.listening = true;
            effects.push(PopoverEffect::Listen);
        }
        if behavior.virtual_focus {
            self.active_virtual_index = items.first_enabled().and_then(|id| items.position(id));
            if let Some(index) = self.active_virtual_index {
                effects.push(PopoverEffect::Navigate(index));
            }
        }
    }

    fn exit_open<K>(&mut self, effects: &mut Effects<K>) {
        self.open = false;
        self.active_virtual_index = None;
        if self.listening {
            self.listening = false;
            effects.push(PopoverEffect::Unlisten);
        }
    }
}
