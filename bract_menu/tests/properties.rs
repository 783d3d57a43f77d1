// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for gestures on a menu.

use bract_menu::{Disclosure, Effect, ItemProps, MenuProps};
use bract_popover::{Popover, PopoverEffect, PopoverEvent, PopoverProps};
use bract_role::{DisclosureRole, PopoverType};
use proptest::prelude::*;

const ITEMS: u32 = 6;

#[derive(Clone, Debug)]
enum Gesture {
    Activate(u32),
    Blur(u32),
    Press,
    Escape,
}

fn gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        (0..ITEMS).prop_map(Gesture::Activate),
        (0..ITEMS).prop_map(Gesture::Blur),
        Just(Gesture::Press),
        Just(Gesture::Escape),
    ]
}

fn listbox(multi_select: bool, can_toggle: bool) -> Disclosure<u32, u32> {
    let popover = Popover::new(100, 101, PopoverProps::default().with_type(PopoverType::Listbox));
    let props = MenuProps::default()
        .with_role(DisclosureRole::Listbox)
        .with_multi_select(multi_select)
        .with_change_on_blur(true);
    let mut d = Disclosure::with_popover(&props, popover);
    for id in 0..ITEMS {
        d.register_item(id, ItemProps::with_value(id * 10).can_toggle(can_toggle));
    }
    d
}

fn run(d: &mut Disclosure<u32, u32>, g: &Gesture) -> Vec<Effect<u32, u32>> {
    match *g {
        Gesture::Activate(id) => d.activate_item(id).unwrap().into_vec(),
        Gesture::Blur(id) => d.blur_item(id).unwrap().into_vec(),
        Gesture::Press => d.handle(PopoverEvent::ActivatorPress).into_vec(),
        Gesture::Escape => d.handle(PopoverEvent::Escape).into_vec(),
    }
}

proptest! {
    #[test]
    fn single_select_reports_at_most_one_item(
        can_toggle in any::<bool>(),
        gestures in prop::collection::vec(gesture(), 0..40),
    ) {
        let mut d = listbox(false, can_toggle);
        for g in &gestures {
            run(&mut d, g);
            let selected = (0..ITEMS).filter(|id| d.menu().is_item_selected(*id)).count();
            prop_assert!(selected <= 1);
        }
    }

    #[test]
    fn selection_precedes_close_and_focus(
        multi_select in any::<bool>(),
        can_toggle in any::<bool>(),
        gestures in prop::collection::vec(gesture(), 0..40),
    ) {
        let mut d = listbox(multi_select, can_toggle);
        for g in &gestures {
            let effects = run(&mut d, g);
            let change = effects.iter().position(|e| matches!(e, Effect::Change(_)));
            let close = effects
                .iter()
                .position(|e| matches!(e, Effect::Popover(PopoverEffect::Deactivated(_))));
            let focus = effects
                .iter()
                .position(|e| matches!(e, Effect::Popover(PopoverEffect::FocusActivator)));
            if let (Some(change), Some(close)) = (change, close) {
                prop_assert!(change < close);
            }
            if let (Some(close), Some(focus)) = (close, focus) {
                prop_assert!(close < focus);
            }
            let deactivations = effects
                .iter()
                .filter(|e| matches!(e, Effect::Popover(PopoverEffect::Deactivated(_))))
                .count();
            prop_assert!(deactivations <= 1);
        }
    }

    #[test]
    fn closed_popover_ignores_activation(id in 0..ITEMS, multi_select in any::<bool>()) {
        let mut d = listbox(multi_select, false);
        prop_assert!(d.activate_item(id).unwrap().is_empty());
        prop_assert!(d.menu().selection().is_empty());
    }
}
