// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The focus cursor: at most one focused item, moved passively or actively.
//!
//! A **passive** change only updates bookkeeping (plus
//! [`ListHost::focus_changed`]). Registration and removal use it so that
//! mounting or unmounting items never steals input focus or scrolls the view.
//!
//! An **active** change additionally scrolls the item into view, moves real
//! input focus to its element and reports it through
//! [`ListHost::on_focus_item`]. Navigation, controlled focus and explicit
//! requests use it.

use core::fmt;
use core::hash::Hash;

use log::trace;

use crate::host::ListHost;
use crate::position::TreePosition;
use crate::registry::RovingFocus;

/// Whether a focus change carries host side effects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusMode {
    /// State and [`ListHost::focus_changed`] only.
    Passive,
    /// Also scroll into view, acquire input focus and report the change.
    Active,
}

impl<K, D, P> RovingFocus<K, D, P>
where
    K: Clone + Eq + Hash + fmt::Debug,
    P: TreePosition,
{
    /// Index of the focused item in render-tree order.
    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        self.focused.as_ref().and_then(|id| self.index.get(id)).copied()
    }

    /// Returns `true` if `id` holds focus.
    #[must_use]
    pub fn is_focused(&self, id: &K) -> bool {
        self.focused.as_ref() == Some(id)
    }

    /// Move focus to `id`.
    ///
    /// No-op (returns `false`) if `id` is unknown, disabled, or already focused.
    pub fn focus<H>(&mut self, id: &K, mode: FocusMode, host: &mut H) -> bool
    where
        H: ListHost<K, D> + ?Sized,
    {
        match self.index.get(id) {
            Some(&index) => self.focus_at(index, mode, host),
            None => false,
        }
    }

    /// Actively focus `id`, as an explicit request from the host.
    pub fn focus_item<H>(&mut self, id: &K, host: &mut H) -> bool
    where
        H: ListHost<K, D> + ?Sized,
    {
        self.focus(id, FocusMode::Active, host)
    }

    /// The host reports that the element for `id` received input focus on its
    /// own (a click, the Tab key).
    ///
    /// The cursor follows passively, since the element already has focus, and
    /// [`ListHost::on_focus_item`] fires. Unknown or disabled ids are ignored.
    pub fn item_focused<H>(&mut self, id: &K, host: &mut H) -> bool
    where
        H: ListHost<K, D> + ?Sized,
    {
        let Some(&index) = self.index.get(id) else {
            return false;
        };
        if self.items[index].disabled {
            return false;
        }
        self.focus_at(index, FocusMode::Passive, host);
        let item = &self.items[index];
        host.on_focus_item(&item.id, &item.data);
        true
    }

    /// Feed the externally controlled focus value.
    ///
    /// When the value changes and is `Some`, focus moves actively to it under
    /// the usual rules. Setting `None` only records the value; the cursor
    /// keeps its position.
    pub fn set_controlled_focus<H>(&mut self, controlled: Option<K>, host: &mut H) -> bool
    where
        H: ListHost<K, D> + ?Sized,
    {
        if self.controlled == controlled {
            return false;
        }
        self.controlled = controlled;
        match self.controlled.clone() {
            Some(id) => self.focus(&id, FocusMode::Active, host),
            None => false,
        }
    }

    /// The last controlled focus value fed in.
    #[must_use]
    pub fn controlled_focus(&self) -> Option<&K> {
        self.controlled.as_ref()
    }

    /// Activate `id`: [`ListHost::on_select_item`] first, then the item's own
    /// select handler.
    ///
    /// Returns `false` for unknown ids.
    pub fn select<H>(&mut self, id: &K, host: &mut H) -> bool
    where
        H: ListHost<K, D> + ?Sized,
    {
        let Some(&index) = self.index.get(id) else {
            return false;
        };
        let item = &mut self.items[index];
        trace!("select {:?}", item.id);
        host.on_select_item(&item.id, &item.data);
        if let Some(on_select) = item.on_select.as_mut() {
            on_select();
        }
        true
    }

    /// Activate the focused item, if any.
    pub fn select_focused<H>(&mut self, host: &mut H) -> bool
    where
        H: ListHost<K, D> + ?Sized,
    {
        match self.focused.clone() {
            Some(id) => self.select(&id, host),
            None => false,
        }
    }

    pub(crate) fn focus_at<H>(&mut self, index: usize, mode: FocusMode, host: &mut H) -> bool
    where
        H: ListHost<K, D> + ?Sized,
    {
        let Some(item) = self.items.get(index) else {
            return false;
        };
        if item.disabled || self.focused.as_ref() == Some(&item.id) {
            return false;
        }

        trace!("focus {:?} -> {:?} ({mode:?})", self.focused, item.id);
        self.focused = Some(item.id.clone());
        host.focus_changed(Some(&item.id));
        if mode == FocusMode::Active {
            host.scroll_to_item(&item.id, &item.data);
            host.acquire_focus(&item.id);
            host.on_focus_item(&item.id, &item.data);
        }
        true
    }

    /// Focus the first enabled item, if there is one.
    pub(crate) fn focus_first_enabled<H>(&mut self, mode: FocusMode, host: &mut H) -> bool
    where
        H: ListHost<K, D> + ?Sized,
    {
        match self.items.iter().position(|item| !item.disabled) {
            Some(index) => self.focus_at(index, mode, host),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::Cell;

    use super::*;
    use crate::item::{Item, ItemUpdate};

    #[derive(Debug, PartialEq, Eq)]
    enum Call {
        Changed(Option<u32>),
        Scroll(u32),
        Acquire(u32),
        Focused(u32),
        Selected(u32),
    }

    #[derive(Default)]
    struct Recorder(Vec<Call>);

    impl ListHost<u32, ()> for Recorder {
        fn focus_changed(&mut self, id: Option<&u32>) {
            self.0.push(Call::Changed(id.copied()));
        }
        fn scroll_to_item(&mut self, id: &u32, _: &()) {
            self.0.push(Call::Scroll(*id));
        }
        fn acquire_focus(&mut self, id: &u32) {
            self.0.push(Call::Acquire(*id));
        }
        fn on_focus_item(&mut self, id: &u32, _: &()) {
            self.0.push(Call::Focused(*id));
        }
        fn on_select_item(&mut self, id: &u32, _: &()) {
            self.0.push(Call::Selected(*id));
        }
    }

    fn three() -> RovingFocus<u32, (), u32> {
        let mut r = RovingFocus::new();
        for id in 0..3 {
            r.register(Item::new(id, (), id), &mut ()).unwrap();
        }
        r
    }

    // Active changes run side effects in a fixed order.
    #[test]
    fn active_focus_side_effect_order() {
        let mut r = three();
        let mut host = Recorder::default();
        assert!(r.focus(&2, FocusMode::Active, &mut host));
        assert_eq!(
            host.0,
            [
                Call::Changed(Some(2)),
                Call::Scroll(2),
                Call::Acquire(2),
                Call::Focused(2)
            ]
        );
    }

    // Passive changes only notify.
    #[test]
    fn passive_focus_only_notifies() {
        let mut r = three();
        let mut host = Recorder::default();
        assert!(r.focus(&1, FocusMode::Passive, &mut host));
        assert_eq!(host.0, [Call::Changed(Some(1))]);
        assert_eq!(r.focused_index(), Some(1));
    }

    // Same target, disabled target and unknown target are all no-ops.
    #[test]
    fn focus_noops() {
        let mut r = three();
        r.update(&1, ItemUpdate::new().disabled(true));
        let mut host = Recorder::default();
        assert!(!r.focus(&0, FocusMode::Active, &mut host));
        assert!(!r.focus(&1, FocusMode::Active, &mut host));
        assert!(!r.focus(&9, FocusMode::Active, &mut host));
        assert!(host.0.is_empty());
        assert!(r.is_focused(&0));
    }

    // Controlled focus applies on change only.
    #[test]
    fn controlled_focus_applies_on_change() {
        let mut r = three();
        let mut host = Recorder::default();
        assert!(r.set_controlled_focus(Some(2), &mut host));
        assert_eq!(r.focused(), Some(&2));
        assert_eq!(host.0.len(), 4);

        // User moves focus away; re-feeding the same value does nothing.
        r.focus(&0, FocusMode::Active, &mut ());
        assert!(!r.set_controlled_focus(Some(2), &mut host));
        assert_eq!(r.focused(), Some(&0));

        // Clearing records the value without moving the cursor.
        assert!(!r.set_controlled_focus(None, &mut host));
        assert_eq!(r.controlled_focus(), None);
        assert_eq!(r.focused(), Some(&0));

        // Feeding it again after a clear is a change.
        assert!(r.set_controlled_focus(Some(2), &mut host));
        assert_eq!(r.focused(), Some(&2));
    }

    // Host-reported focus moves the cursor without re-acquiring focus.
    #[test]
    fn item_focused_is_passive_and_reported() {
        let mut r = three();
        let mut host = Recorder::default();
        assert!(r.item_focused(&1, &mut host));
        assert_eq!(host.0, [Call::Changed(Some(1)), Call::Focused(1)]);
        assert!(!r.item_focused(&7, &mut host));
    }

    // Selection calls the host first, then the item's handler.
    #[test]
    fn select_runs_host_then_item_handler() {
        let hits = Rc::new(Cell::new(0));
        let mut r: RovingFocus<u32, (), u32> = RovingFocus::new();
        let counter = Rc::clone(&hits);
        r.register(
            Item::new(4, (), 0).with_on_select(move || counter.set(counter.get() + 1)),
            &mut (),
        )
        .unwrap();

        let mut host = Recorder::default();
        assert!(r.select(&4, &mut host));
        assert_eq!(host.0, [Call::Selected(4)]);
        assert_eq!(hits.get(), 1);

        assert!(r.select_focused(&mut host));
        assert_eq!(hits.get(), 2);
        assert!(!r.select(&5, &mut host));
    }

    #[test]
    fn select_focused_with_nothing_focused() {
        let mut r: RovingFocus<u32, (), u32> = RovingFocus::new();
        assert!(!r.select_focused(&mut ()));
    }
}
