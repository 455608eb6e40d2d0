// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-side capability set.
//!
//! [`ListHost`] is how the engine reaches back into the renderer. Every method
//! has an empty default body, so hosts only implement what they care about.
//! `()` implements the trait as a no-op host, which is convenient for
//! bookkeeping-only callers and tests.
//!
//! Order of calls on an active (non-passive) focus change:
//! 1. [`ListHost::focus_changed`]
//! 2. [`ListHost::scroll_to_item`]
//! 3. [`ListHost::acquire_focus`]
//! 4. [`ListHost::on_focus_item`]
//!
//! A passive change only calls [`ListHost::focus_changed`].

use crate::keyboard::KeyEvent;

/// Callbacks the engine invokes on the owning renderer.
///
/// `K` is the item id type and `D` the caller payload type.
pub trait ListHost<K, D> {
    /// The focus cursor moved. `None` means nothing is focused any more.
    ///
    /// Fired for passive and active changes alike; hosts typically re-render
    /// `tabindex` attributes here.
    fn focus_changed(&mut self, id: Option<&K>) {
        let _ = id;
    }

    /// Bring the item into view. Active changes only.
    fn scroll_to_item(&mut self, id: &K, data: &D) {
        let _ = (id, data);
    }

    /// Move real input focus to the element backing `id`. Active changes only.
    fn acquire_focus(&mut self, id: &K) {
        let _ = id;
    }

    /// An item received focus through user action or an explicit request.
    fn on_focus_item(&mut self, id: &K, data: &D) {
        let _ = (id, data);
    }

    /// An item was activated (Enter, Space, or a click routed through
    /// [`RovingFocus::select`](crate::RovingFocus::select)).
    fn on_select_item(&mut self, id: &K, data: &D) {
        let _ = (id, data);
    }

    /// Raw key hook, called for every in-scope key event before built-in handling.
    fn raw_key(&mut self, event: &KeyEvent) {
        let _ = event;
    }
}

impl<K, D> ListHost<K, D> for () {}
