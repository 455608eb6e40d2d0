// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard-style navigation over the ordered items.
//!
//! Every move is active (see [`FocusMode::Active`]), skips disabled items and
//! stops at the boundaries: there is no wraparound. All methods return `true`
//! when focus actually moved.

use alloc::string::String;
use core::fmt;
use core::hash::Hash;

use log::trace;

use crate::cursor::FocusMode;
use crate::host::ListHost;
use crate::position::TreePosition;
use crate::registry::RovingFocus;

/// Direction for [`RovingFocus::move_relative`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the start of the sequence.
    Previous,
    /// Towards the end of the sequence.
    Next,
}

impl<K, D, P> RovingFocus<K, D, P>
where
    K: Clone + Eq + Hash + fmt::Debug,
    P: TreePosition,
{
    /// Move to the nearest enabled item before or after the focused one.
    ///
    /// With nothing focused, `Next` starts from the first item and `Previous`
    /// does nothing.
    pub fn move_relative<H>(&mut self, direction: Direction, host: &mut H) -> bool
    where
        H: ListHost<K, D> + ?Sized,
    {
        let current = self.focused_index();
        let start = match direction {
            Direction::Previous => current.and_then(|index| index.checked_sub(1)),
            Direction::Next => Some(current.map_or(0, |index| index + 1)),
        };
        self.scan_and_focus(start, direction, host)
    }

    /// Move to the first enabled item.
    pub fn move_to_start<H>(&mut self, host: &mut H) -> bool
    where
        H: ListHost<K, D> + ?Sized,
    {
        self.scan_and_focus(Some(0), Direction::Next, host)
    }

    /// Move to the last enabled item.
    pub fn move_to_end<H>(&mut self, host: &mut H) -> bool
    where
        H: ListHost<K, D> + ?Sized,
    {
        let last = self.items.len().checked_sub(1);
        self.scan_and_focus(last, Direction::Previous, host)
    }

    /// Jump to the first enabled item whose search label starts with
    /// `character`, ignoring case.
    ///
    /// The scan always starts at the beginning of the sequence, not at the
    /// focused item.
    pub fn move_to_character<H>(&mut self, character: char, host: &mut H) -> bool
    where
        H: ListHost<K, D> + ?Sized,
    {
        let needle: String = character.to_lowercase().collect();
        let found = self.items.iter().position(|item| {
            !item.disabled
                && item
                    .search_label
                    .as_ref()
                    .is_some_and(|label| label.starts_with_lowercase(&needle))
        });
        trace!("type-ahead {character:?} -> {found:?}");
        match found {
            Some(index) => self.focus_at(index, FocusMode::Active, host),
            None => false,
        }
    }

    /// Actively focus the item at `index`.
    ///
    /// No-op if `index` is out of range or the item is disabled.
    pub fn focus_index<H>(&mut self, index: usize, host: &mut H) -> bool
    where
        H: ListHost<K, D> + ?Sized,
    {
        self.focus_at(index, FocusMode::Active, host)
    }

    fn scan_and_focus<H>(&mut self, start: Option<usize>, direction: Direction, host: &mut H) -> bool
    where
        H: ListHost<K, D> + ?Sized,
    {
        match self.first_enabled_from(start, direction) {
            Some(index) => self.focus_at(index, FocusMode::Active, host),
            None => false,
        }
    }

    /// Walk from `start` in `direction` until an enabled item or a boundary.
    fn first_enabled_from(&self, start: Option<usize>, direction: Direction) -> Option<usize> {
        let mut index = start?;
        loop {
            if !self.items.get(index)?.disabled {
                return Some(index);
            }
            index = match direction {
                Direction::Previous => index.checked_sub(1)?,
                Direction::Next => index + 1,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ItemUpdate};

    type Roving = RovingFocus<char, (), u32>;

    /// Items `a`, `b`, ... in render order; ids listed in `disabled` start disabled.
    fn roving(ids: &str, disabled: &str) -> Roving {
        let mut r = Roving::new();
        for (position, id) in (0_u32..).zip(ids.chars()) {
            r.register(
                Item::new(id, (), position).with_disabled(disabled.contains(id)),
                &mut (),
            )
            .unwrap();
        }
        r
    }

    // Next skips over a disabled neighbour.
    #[test]
    fn next_skips_disabled() {
        let mut r = roving("abc", "b");
        assert_eq!(r.focused(), Some(&'a'));
        assert!(r.move_relative(Direction::Next, &mut ()));
        assert_eq!(r.focused(), Some(&'c'));
    }

    // No wraparound at either end.
    #[test]
    fn boundaries_do_not_wrap() {
        let mut r = roving("abc", "");
        assert!(!r.move_relative(Direction::Previous, &mut ()));
        assert_eq!(r.focused(), Some(&'a'));
        r.move_to_end(&mut ());
        assert!(!r.move_relative(Direction::Next, &mut ()));
        assert_eq!(r.focused(), Some(&'c'));
    }

    // A trailing disabled item is a boundary too.
    #[test]
    fn last_enabled_is_a_boundary() {
        let mut r = roving("abc", "c");
        r.move_relative(Direction::Next, &mut ());
        assert_eq!(r.focused(), Some(&'b'));
        assert!(!r.move_relative(Direction::Next, &mut ()));
        assert_eq!(r.focused(), Some(&'b'));
    }

    #[test]
    fn home_and_end_skip_disabled_edges() {
        let mut r = roving("abcde", "ae");
        assert_eq!(r.focused(), Some(&'b'));
        assert!(r.move_to_end(&mut ()));
        assert_eq!(r.focused(), Some(&'d'));
        assert!(r.move_to_start(&mut ()));
        assert_eq!(r.focused(), Some(&'b'));
        // Already there.
        assert!(!r.move_to_start(&mut ()));
    }

    // Everything disabled: every move is a no-op and nothing gets focus.
    #[test]
    fn all_disabled_is_inert() {
        let mut r = roving("abc", "abc");
        assert_eq!(r.focused(), None);
        assert!(!r.move_relative(Direction::Next, &mut ()));
        assert!(!r.move_relative(Direction::Previous, &mut ()));
        assert!(!r.move_to_start(&mut ()));
        assert!(!r.move_to_end(&mut ()));
        assert!(!r.move_to_character('a', &mut ()));
        assert_eq!(r.focused(), None);
    }

    #[test]
    fn empty_registry_is_inert() {
        let mut r = Roving::new();
        assert!(!r.move_relative(Direction::Next, &mut ()));
        assert!(!r.move_to_end(&mut ()));
        assert!(!r.focus_index(0, &mut ()));
    }

    // With no focus, Next lands on the first enabled item and Previous does nothing.
    #[test]
    fn relative_moves_without_focus() {
        let mut r = roving("ab", "ab");
        r.update(&'b', ItemUpdate::new().disabled(false));
        assert_eq!(r.focused(), None);
        assert!(!r.move_relative(Direction::Previous, &mut ()));
        assert!(r.move_relative(Direction::Next, &mut ()));
        assert_eq!(r.focused(), Some(&'b'));
    }

    // Type-ahead scans from the start, ignores case and skips disabled matches.
    #[test]
    fn type_ahead_first_match_from_start() {
        let mut r = roving("abc", "");
        for (id, label) in [('a', "Apple"), ('b', "Banana"), ('c', "Blueberry")] {
            r.update(&id, ItemUpdate::new().search_label(label));
        }
        r.move_to_end(&mut ());
        assert!(r.move_to_character('B', &mut ()));
        assert_eq!(r.focused(), Some(&'b'));

        r.update(&'b', ItemUpdate::new().disabled(true));
        r.move_to_start(&mut ());
        assert!(r.move_to_character('b', &mut ()));
        assert_eq!(r.focused(), Some(&'c'));

        assert!(!r.move_to_character('z', &mut ()));
        assert_eq!(r.focused(), Some(&'c'));
    }

    // Items without labels never match.
    #[test]
    fn type_ahead_ignores_unlabelled_items() {
        let mut r = roving("ab", "");
        r.derive_search_label(&'b', "alpha");
        r.move_to_character('a', &mut ());
        assert_eq!(r.focused(), Some(&'b'));
    }

    #[test]
    fn focus_index_respects_bounds_and_disabled() {
        let mut r = roving("abc", "b");
        assert!(!r.focus_index(1, &mut ()));
        assert!(!r.focus_index(3, &mut ()));
        assert!(r.focus_index(2, &mut ()));
        assert_eq!(r.focused(), Some(&'c'));
    }
}
