// Copyright 2025 the Bract Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Warnings reported for recoverable configuration mistakes.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bract_menu::{Menu, MenuProps};
use bract_role::DisclosureRole;
use bract_selection::SelectionValue;
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

/// Counts `WARN` events.
struct WarnCounter(Arc<AtomicUsize>);

impl Subscriber for WarnCounter {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

fn count_warnings(f: impl FnOnce()) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    tracing::subscriber::with_default(WarnCounter(Arc::clone(&count)), f);
    count.load(Ordering::SeqCst)
}

#[test]
fn conflicting_selection_sources_warn_once() {
    let props = MenuProps::default()
        .with_role(DisclosureRole::Listbox)
        .with_selected(SelectionValue::Single(Some('a')))
        .with_default_selected(SelectionValue::Single(Some('b')));

    let mut menu: Option<Menu<u32, char>> = None;
    assert_eq!(count_warnings(|| menu = Some(Menu::new(&props, None))), 1);
    let mut menu = menu.unwrap();
    assert_eq!(menu.selection(), &SelectionValue::Single(Some('a')));

    let warnings = count_warnings(|| {
        for _ in 0..3 {
            menu.update(&props, None);
        }
        let props = props.clone().with_selected(SelectionValue::Single(Some('c')));
        menu.update(&props, None);
    });
    assert_eq!(warnings, 0);
    assert_eq!(menu.selection(), &SelectionValue::Single(Some('c')));
}

#[test]
fn a_single_selection_source_is_silent() {
    let props = MenuProps::default()
        .with_role(DisclosureRole::Listbox)
        .with_default_selected(SelectionValue::Single(Some('b')));
    let warnings = count_warnings(|| {
        let mut menu: Menu<u32, char> = Menu::new(&props, None);
        menu.update(&props, None);
    });
    assert_eq!(warnings, 0);
}
