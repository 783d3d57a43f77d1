// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A popover instance: state, configuration, and the virtual-focus item group.

use core::fmt::Debug;
use core::hash::Hash;

use bract_composite::{CompositeConfig, CompositeGroup, Navigation, Orientation, WrapMode};
use bract_role::{DisclosureRole, PopoverType};
use bract_selection::OwnershipMode;
use kurbo::{Point, Rect, Size};

use crate::position::Positioner;
use crate::props::PopoverProps;
use crate::state::{Behavior, Effects, PopoverEvent, PopoverState};
use crate::tree::{ParentLookup, is_within};

/// ARIA attributes for the activator element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivatorAttributes<K> {
    /// `aria-haspopup`.
    pub haspopup: &'static str,
    /// `aria-expanded`.
    pub expanded: bool,
    /// `aria-controls`: the content element.
    pub controls: K,
    /// `aria-activedescendant`: the virtually focused item, if any.
    pub activedescendant: Option<K>,
}

/// ARIA attributes for the content element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentAttributes {
    /// `role`, unless a wrapped container carries it.
    pub role: Option<&'static str>,
    /// Whether the content is hidden.
    pub hidden: bool,
}

/// One popover: an activator, its content, and the disclosure state between them.
///
/// `K` identifies host nodes: the activator, the content root, and the items that take
/// part in virtual focus.
///
/// ```rust
/// use bract_popover::{Key, Popover, PopoverEffect, PopoverEvent, PopoverProps};
///
/// let mut popover = Popover::new(1_u32, 2, PopoverProps::default().with_virtual_focus(true));
/// popover.register_item(10, true);
/// popover.register_item(11, true);
///
/// let effects = popover.handle(PopoverEvent::Key(Key::Enter));
/// assert!(popover.is_open());
/// assert!(effects.contains(&PopoverEffect::Navigate(0)));
///
/// popover.handle(PopoverEvent::Key(Key::ArrowDown));
/// assert_eq!(popover.active_descendant(), Some(11));
/// ```
#[derive(Clone, Debug)]
pub struct Popover<K> {
    activator: K,
    content: K,
    props: PopoverProps,
    state: PopoverState,
    items: CompositeGroup<K>,
    wrapped_role: Option<DisclosureRole>,
}

impl<K: Copy + Eq + Hash + Debug> Popover<K> {
    /// Create a popover in its initial state.
    ///
    /// Call [`Popover::mount`] once to obtain the effects for an initially open popover.
    #[must_use]
    pub fn new(activator: K, content: K, props: PopoverProps) -> Self {
        let items = CompositeGroup::new(item_config(props.virtual_focus));
        Self {
            activator,
            content,
            state: PopoverState::closed(props.ownership()),
            props,
            items,
            wrapped_role: None,
        }
    }

    /// Apply the initial visibility.
    ///
    /// `default_show` (or the controlled `show`) is applied here exactly once.
    pub fn mount(&mut self) -> Effects<K> {
        if self.state.open || !self.props.initially_open() {
            return Effects::new();
        }
        let t = self.state.synced(true, self.behavior(), &self.items);
        self.state = t.state;
        t.effects
    }

    /// Deliver an event.
    pub fn handle(&mut self, event: PopoverEvent) -> Effects<K> {
        let t = self.state.transition(event, self.behavior(), &self.items);
        self.state = t.state;
        t.effects
    }

    /// Apply host-provided props from a later update.
    ///
    /// Controlled visibility is reconciled; `default_show` is never re-applied. Switching
    /// between controlled and uncontrolled is reported and ignored.
    pub fn sync(&mut self, props: PopoverProps) -> Effects<K> {
        let show = props.show;
        if props.ownership() != self.state.ownership {
            tracing::warn!(
                from = ?self.state.ownership,
                to = ?props.ownership(),
                "popover ownership cannot change after mount; ignoring `show`"
            );
        }
        let ownership = self.state.ownership;
        self.props = PopoverProps {
            show: if ownership == OwnershipMode::Controlled {
                show.or(self.props.show)
            } else {
                None
            },
            ..props
        };
        self.items.set_config(item_config(self.props.virtual_focus));

        match (ownership, show) {
            (OwnershipMode::Controlled, Some(show)) => {
                let t = self.state.synced(show, self.behavior(), &self.items);
                self.state = t.state;
                t.effects
            }
            _ => Effects::new(),
        }
    }

    /// Classify a press on `target` against the activator and content subtrees.
    ///
    /// Returns the event to deliver, or `None` for presses inside the content.
    pub fn classify_press(&self, lookup: &impl ParentLookup<K>, target: K) -> Option<PopoverEvent> {
        if is_within(lookup, self.activator, target) {
            Some(PopoverEvent::ActivatorPress)
        } else if is_within(lookup, self.content, target) {
            None
        } else {
            Some(PopoverEvent::OutsidePress)
        }
    }

    /// Classify a focus change to `focused` (`None` when focus left the document).
    ///
    /// Returns [`PopoverEvent::FocusOut`] when focus left both subtrees.
    pub fn classify_focus(
        &self,
        lookup: &impl ParentLookup<K>,
        focused: Option<K>,
    ) -> Option<PopoverEvent> {
        let inside = focused.is_some_and(|node| {
            is_within(lookup, self.activator, node) || is_within(lookup, self.content, node)
        });
        (!inside).then_some(PopoverEvent::FocusOut)
    }

    /// Move real focus among the content's items.
    ///
    /// Only `menu` and `listbox` popovers supply arrow-key navigation, and only while open
    /// without virtual focus. Navigation stops at the boundaries.
    ///
    /// ```rust
    /// use bract_composite::Navigation;
    /// use bract_popover::{Popover, PopoverEvent, PopoverProps};
    /// use bract_role::PopoverType;
    ///
    /// let props = PopoverProps::default().with_type(PopoverType::Menu);
    /// let mut popover = Popover::new(1_u32, 2, props);
    /// popover.register_item(10, true);
    /// popover.register_item(11, true);
    /// assert_eq!(popover.navigate(Some(10), Navigation::Down), None);
    ///
    /// popover.handle(PopoverEvent::ActivatorPress);
    /// assert_eq!(popover.navigate(Some(10), Navigation::Down), Some(11));
    /// assert_eq!(popover.navigate(Some(11), Navigation::Down), None);
    /// ```
    #[must_use]
    pub fn navigate(&self, origin: Option<K>, nav: Navigation) -> Option<K> {
        let supplies_navigation = self.props.popover_type.forced_role().is_some();
        if !self.state.open || self.props.virtual_focus || !supplies_navigation {
            return None;
        }
        self.items.next(origin, nav)
    }

    /// Register an item for navigation, in document order.
    pub fn register_item(&mut self, id: K, enabled: bool) {
        self.items.register(id, enabled);
    }

    /// Remove an item from virtual focus.
    ///
    /// The active index follows the item it pointed at, or is cleared if that item is removed.
    pub fn deregister_item(&mut self, id: K) {
        let Some(pos) = self.items.position(id) else {
            return;
        };
        self.items.deregister(id);
        self.state.active_virtual_index = match self.state.active_virtual_index {
            Some(active) if active == pos => None,
            Some(active) if active > pos => Some(active - 1),
            other => other,
        };
    }

    /// Enable or disable an item for virtual focus.
    pub fn set_item_enabled(&mut self, id: K, enabled: bool) {
        self.items.set_enabled(id, enabled);
    }

    /// Record that the content's role comes from a wrapped container.
    ///
    /// The popover then leaves the content `role` to that container.
    pub fn set_wrapped_role(&mut self, role: Option<DisclosureRole>) {
        self.wrapped_role = role;
    }

    /// The id of the virtually focused item.
    #[must_use]
    pub fn active_descendant(&self) -> Option<K> {
        if !self.props.virtual_focus {
            return None;
        }
        self.state
            .active_virtual_index
            .and_then(|i| self.items.get(i))
            .map(|entry| entry.id)
    }

    /// Attributes for the activator element.
    #[must_use]
    pub fn activator_attributes(&self) -> ActivatorAttributes<K> {
        ActivatorAttributes {
            haspopup: self.props.popover_type.aria_haspopup(),
            expanded: self.state.open,
            controls: self.content,
            activedescendant: self.active_descendant(),
        }
    }

    /// Attributes for the content element.
    #[must_use]
    pub fn content_attributes(&self) -> ContentAttributes {
        let role = match self.wrapped_role {
            Some(_) => None,
            None => Some(self.props.popover_type.aria_haspopup()),
        };
        ContentAttributes {
            role,
            hidden: !self.state.open,
        }
    }

    /// Origin of the content when it is visible.
    pub fn content_origin(
        &self,
        positioner: &impl Positioner,
        activator: Rect,
        content: Size,
    ) -> Option<Point> {
        self.state
            .open
            .then(|| positioner.position(activator, content, self.props.placement))
    }

    fn behavior(&self) -> Behavior {
        Behavior {
            virtual_focus: self.props.virtual_focus,
            disabled_auto_toggle: self.props.disabled_auto_toggle,
        }
    }
}

// Virtual focus cycles through the items; real focus stops at the ends.
fn item_config(virtual_focus: bool) -> CompositeConfig {
    CompositeConfig {
        orientation: Orientation::Vertical,
        wrap: if virtual_focus {
            WrapMode::Scope
        } else {
            WrapMode::Never
        },
    }
}

impl<K> Popover<K> {
    /// Whether the content is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.open
    }

    /// Current state snapshot.
    #[must_use]
    pub const fn state(&self) -> PopoverState {
        self.state
    }

    /// The declared content type.
    #[must_use]
    pub const fn popover_type(&self) -> PopoverType {
        self.props.popover_type
    }

    /// Whether virtual focus is enabled.
    #[must_use]
    pub const fn virtual_focus(&self) -> bool {
        self.props.virtual_focus
    }

    /// The activator node.
    pub const fn activator(&self) -> &K {
        &self.activator
    }

    /// The content node.
    pub const fn content(&self) -> &K {
        &self.content
    }
}
