// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for role resolution.

use bract_role::{
    DisclosureRole, ItemRole, PopoverType, RoleSource, nearest_role_source,
    resolve_container_role, resolve_item_role,
};
use proptest::prelude::*;

fn any_role() -> impl Strategy<Value = Option<DisclosureRole>> {
    prop::option::of(prop_oneof![
        Just(DisclosureRole::List),
        Just(DisclosureRole::Menu),
        Just(DisclosureRole::Listbox),
        Just(DisclosureRole::Nav),
    ])
}

fn any_popover() -> impl Strategy<Value = Option<PopoverType>> {
    prop::option::of(prop_oneof![
        Just(PopoverType::Dialog),
        Just(PopoverType::Menu),
        Just(PopoverType::Listbox),
        Just(PopoverType::Tree),
        Just(PopoverType::Grid),
    ])
}

proptest! {
    #[test]
    fn item_role_is_total(
        role in any_role(),
        alias in any_role(),
        multi in any::<bool>(),
        popover in any_popover(),
    ) {
        let resolved = resolve_container_role(role, alias, multi, popover);
        prop_assert_ne!(resolved.role, DisclosureRole::Nav);

        let item = resolve_item_role(Some(RoleSource::Container(resolved.role)));
        prop_assert!(matches!(
            item,
            Some(ItemRole::ListItem | ItemRole::MenuItem | ItemRole::Option)
        ));

        // Through the nearest-source lookup an item always agrees with its container.
        let via_nearest = resolve_item_role(nearest_role_source(Some(resolved.role), popover));
        prop_assert_eq!(via_nearest, item);
    }

    #[test]
    fn forcing_popover_always_wins(
        role in any_role(),
        alias in any_role(),
        multi in any::<bool>(),
    ) {
        for ty in [PopoverType::Menu, PopoverType::Listbox] {
            let resolved = resolve_container_role(role, alias, multi, Some(ty));
            prop_assert!(resolved.from_popover);
            prop_assert_eq!(Some(resolved.role), ty.forced_role());
        }
    }

    #[test]
    fn multi_select_without_popover_is_listbox(role in any_role(), alias in any_role()) {
        let resolved = resolve_container_role(role, alias, true, None);
        prop_assert_eq!(resolved.role, DisclosureRole::Listbox);
        prop_assert!(!resolved.from_popover);
    }
}
