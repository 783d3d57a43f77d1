// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for selection transitions.

use bract_selection::{Ownership, SelectionController, SelectionValue};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Toggle(u8),
    Force(u8, bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0_u8..8).prop_map(Op::Toggle),
        (0_u8..8, any::<bool>()).prop_map(|(v, f)| Op::Force(v, f)),
    ]
}

fn apply(sel: &mut SelectionController<u8>, op: &Op) -> Option<SelectionValue<u8>> {
    match *op {
        Op::Toggle(v) => sel.toggle(v, None),
        Op::Force(v, f) => sel.toggle(v, Some(f)),
    }
}

proptest! {
    #[test]
    fn single_select_has_at_most_one_member(ops in prop::collection::vec(op(), 0..32)) {
        let ownership = Ownership::Uncontrolled(SelectionValue::Single(None));
        let mut sel = SelectionController::new(ownership, false);
        for op in &ops {
            apply(&mut sel, op);
            let selected = (0_u8..8).filter(|v| sel.is_selected(v)).count();
            prop_assert!(selected <= 1);
        }
    }

    #[test]
    fn multi_force_on_is_idempotent(
        seed in prop::collection::vec(0_u8..8, 0..6),
        v in 0_u8..8,
    ) {
        let mut seed = seed;
        seed.sort_unstable();
        seed.dedup();
        let ownership = Ownership::Uncontrolled(SelectionValue::Multiple(seed));
        let mut sel = SelectionController::new(ownership, true);
        sel.toggle(v, Some(true));
        let after_first = sel.value().clone();
        prop_assert_eq!(sel.toggle(v, Some(true)), None);
        prop_assert_eq!(sel.value(), &after_first);
    }

    #[test]
    fn double_toggle_restores_membership(
        multi in any::<bool>(),
        ops in prop::collection::vec(op(), 0..16),
        v in 0_u8..8,
    ) {
        let mut sel = SelectionController::new(
            Ownership::Uncontrolled(SelectionValue::empty(multi)),
            multi,
        );
        for op in &ops {
            apply(&mut sel, op);
        }
        let before = sel.is_selected(&v);
        sel.toggle(v, None);
        prop_assert_ne!(sel.is_selected(&v), before);
        sel.toggle(v, None);
        prop_assert_eq!(sel.is_selected(&v), before);
    }

    #[test]
    fn multi_select_removal_keeps_relative_order(
        ops in prop::collection::vec(op(), 0..24),
        v in 0_u8..8,
    ) {
        let ownership = Ownership::Uncontrolled(SelectionValue::empty(true));
        let mut sel = SelectionController::new(ownership, true);
        for op in &ops {
            apply(&mut sel, op);
        }
        let before: Vec<u8> = sel.value().iter().copied().filter(|m| *m != v).collect();
        sel.toggle(v, Some(false));
        let after: Vec<u8> = sel.value().iter().copied().collect();
        prop_assert_eq!(after, before);
    }
}
