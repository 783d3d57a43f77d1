// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The disclosure container: resolved role, selection, and items.

use core::fmt::Debug;
use core::hash::Hash;

use bract_composite::{
    CompositeConfig, CompositeGroup, HostElement, Layout, Navigation, Structure, needs_composite,
    wrap_if_needed,
};
use bract_role::{DisclosureRole, ItemRole, PopoverType, ResolvedRole, resolve_container_role};
use bract_selection::{Ownership, OwnershipMode, SelectionController, SelectionValue};
use hashbrown::HashMap;

use crate::context::{DisclosureContext, ItemScope, MenuFlags};
use crate::item::{ItemAttributes, is_item_selected, item_attributes};
use crate::props::{ItemProps, MenuProps};

/// ARIA attributes for the container element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContainerAttributes {
    /// `role`.
    pub role: &'static str,
    /// `aria-multiselectable`.
    pub multiselectable: Option<bool>,
    /// `aria-orientation`.
    pub orientation: Option<&'static str>,
}

// Inputs that feed the derived role and flags.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Inputs {
    role: Option<DisclosureRole>,
    type_alias: Option<DisclosureRole>,
    multi_select: bool,
    selection_configured: bool,
    layout: Layout,
    no_wrap: bool,
    change_on_blur: bool,
    popover: Option<PopoverType>,
}

impl Inputs {
    fn of<V>(
        props: &MenuProps<V>,
        selection_configured: bool,
        popover: Option<PopoverType>,
    ) -> Self {
        Self {
            role: props.role,
            type_alias: props.type_alias,
            multi_select: props.multi_select,
            selection_configured,
            layout: props.layout,
            no_wrap: props.no_wrap,
            change_on_blur: props.change_on_blur,
            popover,
        }
    }
}

/// A menu, listbox, or list container.
///
/// `K` identifies items; `V` is the value an item selects.
///
/// Derived state (role, flags, navigation configuration) is recomputed only when one of its
/// inputs changes. The selection itself is read live through [`Menu::context`].
///
/// ```rust
/// use bract_composite::Navigation;
/// use bract_menu::{ItemProps, Menu, MenuProps};
/// use bract_role::DisclosureRole;
///
/// let props = MenuProps::default().with_role(DisclosureRole::Menu);
/// let mut menu: Menu<u32, &str> = Menu::new(&props, None);
/// menu.register_item(1, ItemProps::with_value("cut"));
/// menu.register_item(2, ItemProps::with_value("copy").disabled(true));
/// menu.register_item(3, ItemProps::with_value("paste"));
///
/// assert!(menu.context().is_composite());
/// assert_eq!(menu.navigate(Some(1), Navigation::Down), Some(3));
/// assert_eq!(menu.container_attributes().role, "menu");
/// ```
#[derive(Clone, Debug)]
pub struct Menu<K, V> {
    inputs: Inputs,
    resolved: ResolvedRole,
    flags: MenuFlags,
    selection: SelectionController<V>,
    order: CompositeGroup<K>,
    items: HashMap<K, ItemProps<V>>,
}

impl<K, V> Menu<K, V>
where
    K: Copy + Eq + Hash + Debug,
    V: Clone + PartialEq + Debug,
{
    /// Create a container.
    ///
    /// `popover` is the declared type of the enclosing popover, if any.
    #[must_use]
    pub fn new(props: &MenuProps<V>, popover: Option<PopoverType>) -> Self {
        if props.selected.is_some() && props.default_selected.is_some() {
            tracing::warn!("both `selected` and `default_selected` are set; using `selected`");
        }
        let ownership = props.ownership();
        let inputs = Inputs::of(props, ownership.is_some(), popover);
        let ownership = ownership.unwrap_or_else(|| {
            Ownership::Uncontrolled(SelectionValue::empty(props.multi_select))
        });
        let config = CompositeConfig::for_layout(props.layout, popover.is_some());
        let mut menu = Self {
            inputs,
            resolved: resolve(&inputs),
            flags: MenuFlags::empty(),
            selection: SelectionController::new(ownership, props.multi_select),
            order: CompositeGroup::new(config),
            items: HashMap::new(),
        };
        menu.rederive();
        menu
    }

    /// Apply props from a later update.
    ///
    /// Returns whether the derived role or flags changed.
    pub fn update(&mut self, props: &MenuProps<V>, popover: Option<PopoverType>) -> bool {
        let ownership = props.ownership();
        let inputs = Inputs::of(props, ownership.is_some(), popover);

        if props.multi_select != self.inputs.multi_select {
            self.selection.set_multi_select(props.multi_select);
        }
        match ownership {
            Some(ownership) => self.selection.sync(ownership),
            None if self.selection.mode() == OwnershipMode::Controlled => {
                tracing::warn!("controlled selection removed after mount; keeping last value");
            }
            None => {}
        }

        // A selection source cannot come and go across updates.
        let inputs = Inputs {
            selection_configured: self.inputs.selection_configured || inputs.selection_configured,
            ..inputs
        };
        self.apply(inputs)
    }

    /// Re-resolve after the enclosing popover's declared type changed.
    ///
    /// Returns whether the derived role or flags changed.
    pub fn set_popover(&mut self, popover: Option<PopoverType>) -> bool {
        self.apply(Inputs {
            popover,
            ..self.inputs
        })
    }

    /// Register an item, in document order.
    ///
    /// Re-registering an id replaces its props in place.
    pub fn register_item(&mut self, id: K, props: ItemProps<V>) {
        if props.selected.is_some() && self.flags.contains(MenuFlags::SUPPORTS_SELECTION) {
            tracing::warn!(
                item = ?id,
                "item `selected` is ignored; the container owns the selection"
            );
        }
        self.order.register(id, !props.disabled);
        self.items.insert(id, props);
    }

    /// Remove an item.
    pub fn deregister_item(&mut self, id: K) -> Option<ItemProps<V>> {
        self.order.deregister(id);
        self.items.remove(&id)
    }

    /// Props of a registered item.
    #[must_use]
    pub fn item(&self, id: K) -> Option<&ItemProps<V>> {
        self.items.get(&id)
    }

    /// Registered item ids in document order.
    pub fn item_ids(&self) -> impl Iterator<Item = K> + '_ {
        self.order.entries().iter().map(|entry| entry.id)
    }

    /// Whether the item counts as selected.
    #[must_use]
    pub fn is_item_selected(&self, id: K) -> bool {
        self.items
            .get(&id)
            .is_some_and(|props| is_item_selected(&self.context(), props))
    }

    /// Toggle `value`, or force its membership.
    ///
    /// Returns the `on_change` payload, or `None` when the selection is unchanged.
    pub fn toggle(&mut self, value: V, force: Option<bool>) -> Option<SelectionValue<V>> {
        self.selection.toggle(value, force)
    }

    /// Move composite focus from `origin`.
    ///
    /// Without composite navigation arrow keys do not move focus and this returns `None`.
    #[must_use]
    pub fn navigate(&self, origin: Option<K>, nav: Navigation) -> Option<K> {
        if !self.flags.contains(MenuFlags::COMPOSITE) {
            return None;
        }
        self.order.next(origin, nav)
    }

    /// Attributes for an item element.
    #[must_use]
    pub fn item_attributes(&self, id: K) -> Option<ItemAttributes> {
        let props = self.items.get(&id)?;
        Some(item_attributes(&self.context(), self.item_role(), props))
    }

    /// Structural wrapping for an item.
    #[must_use]
    pub fn item_structure(&self, id: K) -> Option<Structure<HostElement>> {
        let props = self.items.get(&id)?;
        Some(wrap_if_needed(self.item_role(), props.element))
    }

    /// Attributes for the container element.
    #[must_use]
    pub fn container_attributes(&self) -> ContainerAttributes {
        let role = self.resolved.role;
        ContainerAttributes {
            role: role.aria_role(),
            multiselectable: (role == DisclosureRole::Listbox
                && self.flags.contains(MenuFlags::MULTI_SELECT))
            .then_some(true),
            orientation: self
                .flags
                .contains(MenuFlags::COMPOSITE)
                .then(|| self.order.config().orientation.aria_orientation()),
        }
    }

    fn apply(&mut self, inputs: Inputs) -> bool {
        if inputs == self.inputs {
            return false;
        }
        self.inputs = inputs;
        let before = (self.resolved, self.flags);
        self.resolved = resolve(&inputs);
        self.rederive();
        before != (self.resolved, self.flags)
    }

    fn rederive(&mut self) {
        let inputs = self.inputs;
        let role = self.resolved.role;
        let inside_popover = inputs.popover.is_some();
        let popover_navigates = inputs.popover.and_then(PopoverType::forced_role).is_some();
        let composite = needs_composite(role, popover_navigates);

        let mut flags = MenuFlags::empty();
        flags.set(MenuFlags::MULTI_SELECT, inputs.multi_select);
        flags.set(MenuFlags::NO_WRAP, inputs.no_wrap);
        flags.set(MenuFlags::CHANGE_ON_BLUR, inputs.change_on_blur);
        flags.set(MenuFlags::NAV_SEMANTICS, self.resolved.nav_semantics);
        flags.set(MenuFlags::ARROW_KEY_NAV, role.is_composite());
        flags.set(
            MenuFlags::SUPPORTS_SELECTION,
            inputs.selection_configured || role == DisclosureRole::Listbox,
        );
        flags.set(MenuFlags::COMPOSITE, composite);

        if flags != self.flags || self.order.config().orientation != inputs.layout.orientation() {
            tracing::debug!(?role, ?flags, "menu context recomputed");
        }
        self.flags = flags;
        self.order
            .set_config(CompositeConfig::for_layout(inputs.layout, inside_popover));
    }
}

impl<K, V> Menu<K, V> {
    /// Read-only view handed to items.
    #[must_use]
    pub fn context(&self) -> DisclosureContext<'_, V> {
        DisclosureContext {
            role: self.resolved.role,
            layout: self.inputs.layout,
            flags: self.flags,
            selection: self.selection.value(),
        }
    }

    /// The context together with the enclosing popover, as seen by items.
    #[must_use]
    pub fn scope(&self) -> ItemScope<'_, V> {
        ItemScope {
            context: Some(self.context()),
            popover: self.inputs.popover,
        }
    }

    /// Role for this container's items.
    #[must_use]
    pub fn item_role(&self) -> Option<ItemRole> {
        self.scope().item_role()
    }

    /// The resolved container role.
    #[must_use]
    pub const fn resolved(&self) -> ResolvedRole {
        self.resolved
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &SelectionValue<V> {
        self.selection.value()
    }

    /// Selection ownership fixed at construction.
    #[must_use]
    pub const fn ownership(&self) -> OwnershipMode {
        self.selection.mode()
    }
}

fn resolve(inputs: &Inputs) -> ResolvedRole {
    resolve_container_role(
        inputs.role,
        inputs.type_alias,
        inputs.multi_select,
        inputs.popover,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn listbox() -> MenuProps<char> {
        MenuProps::default().with_role(DisclosureRole::Listbox)
    }

    #[test]
    fn list_installs_no_composite() {
        let mut menu: Menu<u32, char> = Menu::new(&MenuProps::default(), None);
        menu.register_item(1, ItemProps::with_value('a'));
        menu.register_item(2, ItemProps::with_value('b'));
        assert!(!menu.context().is_composite());
        assert_eq!(menu.navigate(Some(1), Navigation::Down), None);
        assert_eq!(menu.container_attributes().role, "list");
        assert_eq!(menu.container_attributes().orientation, None);
    }

    #[test]
    fn inline_listbox_navigates_horizontally() {
        let props = listbox().with_layout(Layout::Inline);
        let mut menu: Menu<u32, char> = Menu::new(&props, None);
        menu.register_item(1, ItemProps::with_value('a'));
        menu.register_item(2, ItemProps::with_value('b'));
        assert_eq!(menu.navigate(Some(1), Navigation::Down), None);
        assert_eq!(menu.navigate(Some(1), Navigation::Right), Some(2));
        // Standalone composites wrap.
        assert_eq!(menu.navigate(Some(2), Navigation::Right), Some(1));
        assert_eq!(menu.container_attributes().orientation, Some("horizontal"));
    }

    #[test]
    fn popover_suppresses_container_composite() {
        let menu: Menu<u32, char> = Menu::new(&listbox(), Some(PopoverType::Menu));
        let ctx = menu.context();
        assert_eq!(ctx.role(), DisclosureRole::Menu);
        assert!(ctx.has_arrow_key_nav());
        assert!(!ctx.is_composite());
        assert!(menu.resolved().from_popover);
        assert_eq!(menu.container_attributes().role, "menu");
        assert_eq!(menu.item_role(), Some(ItemRole::MenuItem));
    }

    #[test]
    fn dialog_popover_keeps_container_composite() {
        let mut menu: Menu<u32, char> = Menu::new(&listbox(), Some(PopoverType::Dialog));
        menu.register_item(1, ItemProps::with_value('a'));
        menu.register_item(2, ItemProps::with_value('b'));
        assert!(menu.context().is_composite());
        assert_eq!(menu.container_attributes().orientation, Some("vertical"));
        assert_eq!(menu.navigate(Some(1), Navigation::Down), Some(2));
        // Embedded composites stop at the ends.
        assert_eq!(menu.navigate(Some(2), Navigation::Down), None);
        assert_eq!(menu.navigate(Some(1), Navigation::Up), None);
    }

    #[test]
    fn popover_type_change_rederives() {
        let mut menu: Menu<u32, char> = Menu::new(&listbox(), Some(PopoverType::Menu));
        assert!(!menu.set_popover(Some(PopoverType::Menu)));
        assert!(menu.set_popover(Some(PopoverType::Tree)));
        assert_eq!(menu.context().role(), DisclosureRole::Listbox);
        assert!(!menu.resolved().from_popover);
        assert!(menu.context().is_composite());
    }

    #[test]
    fn update_recomputes_only_on_change() {
        let props = MenuProps::<char>::default();
        let mut menu: Menu<u32, char> = Menu::new(&props, None);
        assert!(!menu.update(&props, None));

        let props = props.with_role(DisclosureRole::Menu);
        assert!(menu.update(&props, None));
        assert!(menu.context().is_composite());

        let props = props.with_multi_select(true);
        assert!(menu.update(&props, None));
        assert_eq!(menu.context().role(), DisclosureRole::Listbox);
        assert_eq!(menu.selection(), &SelectionValue::Multiple(Vec::new()));
        assert_eq!(menu.container_attributes().multiselectable, Some(true));
    }

    #[test]
    fn controlled_selection_follows_updates() {
        let props = listbox()
            .with_multi_select(true)
            .with_selected(SelectionValue::Multiple(vec!['a']));
        let mut menu: Menu<u32, char> = Menu::new(&props, None);
        menu.register_item(1, ItemProps::with_value('a'));
        menu.register_item(2, ItemProps::with_value('b'));

        let change = menu.toggle('b', Some(true));
        assert_eq!(change, Some(SelectionValue::Multiple(vec!['a', 'b'])));
        assert!(!menu.is_item_selected(2));

        menu.update(&props.with_selected(SelectionValue::Multiple(vec!['b'])), None);
        assert!(!menu.is_item_selected(1));
        assert!(menu.is_item_selected(2));
    }

    #[test]
    fn nav_items_mark_the_current_page() {
        let props = MenuProps::default()
            .with_type_alias(DisclosureRole::Nav)
            .with_default_selected(SelectionValue::Single(Some('h')));
        let mut menu: Menu<u32, char> = Menu::new(&props, None);
        menu.register_item(1, ItemProps::with_value('h').element(HostElement::Link));
        menu.register_item(2, ItemProps::with_value('x'));

        let attrs = menu.item_attributes(1).unwrap();
        assert_eq!(attrs.role, None);
        assert_eq!(attrs.current, Some("page"));
        assert_eq!(menu.item_attributes(2).unwrap().current, None);

        assert!(menu.item_structure(1).unwrap().is_wrapped());
        assert!(!menu.item_structure(2).unwrap().is_wrapped());
    }

    #[test]
    fn item_order_survives_deregistration() {
        let mut menu: Menu<u32, char> = Menu::new(&MenuProps::default(), None);
        for id in 1..=3 {
            menu.register_item(id, ItemProps::default());
        }
        assert!(menu.deregister_item(2).is_some());
        assert!(menu.deregister_item(2).is_none());
        assert_eq!(menu.item_ids().collect::<Vec<_>>(), vec![1, 3]);
    }
}
