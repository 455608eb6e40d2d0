// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key dispatch: abstract key presses in, navigation and selection out.
//!
//! The host translates its native keyboard events into [`KeyEvent`] values,
//! including two pieces of context only it can know:
//! - [`KeyEvent::target`]: what kind of element the event was aimed at.
//!   Events aimed at text entry controls are left alone entirely.
//! - [`KeyEvent::focus_within`]: whether the host's active element is inside
//!   this container. Events from elsewhere are left alone as well.
//!
//! [`RovingFocus::handle_key`] then returns a [`KeyOutcome`]. On
//! [`KeyOutcome::Consumed`] the host should suppress the default action and
//! stop propagation so ancestor widgets do not handle the key a second time.
//!
//! | Key | Action |
//! | --- | --- |
//! | `ArrowUp`, `ArrowLeft` | [`RovingFocus::move_relative`] with [`Direction::Previous`] |
//! | `ArrowDown`, `ArrowRight` | [`RovingFocus::move_relative`] with [`Direction::Next`] |
//! | `Home` / `End` | [`RovingFocus::move_to_start`] / [`RovingFocus::move_to_end`] |
//! | `Enter`, space | [`RovingFocus::select_focused`] |
//! | `a`–`z`, `A`–`Z`, `0`–`9` | [`RovingFocus::move_to_character`] |

use core::fmt;
use core::hash::Hash;

use log::trace;

use crate::host::ListHost;
use crate::navigation::Direction;
use crate::position::TreePosition;
use crate::registry::RovingFocus;

/// A logical key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Arrow left.
    ArrowLeft,
    /// Arrow right.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Enter / Return.
    Enter,
    /// A key producing a single character; space is `Character(' ')`.
    Character(char),
    /// Anything else.
    Other,
}

bitflags::bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 1 << 0;
        /// Control.
        const CONTROL = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Meta / Command / Super.
        const META = 1 << 3;
    }
}

impl Modifiers {
    /// Modifiers that turn a character key into a shortcut.
    pub const SHORTCUT: Self = Self::CONTROL.union(Self::ALT).union(Self::META);
}

/// The kind of element a key event was aimed at.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyTarget {
    /// An item, the container, or any other non-editable element.
    #[default]
    Element,
    /// A single-line text input.
    TextInput,
    /// A multi-line text area.
    TextArea,
}

impl KeyTarget {
    /// Returns `true` for text entry controls, whose keys the list never handles.
    #[must_use]
    pub const fn is_text_entry(self) -> bool {
        matches!(self, Self::TextInput | Self::TextArea)
    }
}

/// One key press, with the context needed to scope it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key.
    pub key: Key,
    /// Held modifiers.
    pub modifiers: Modifiers,
    /// What the event was aimed at.
    pub target: KeyTarget,
    /// Whether the host's active element is inside this container.
    pub focus_within: bool,
}

impl KeyEvent {
    /// A key press without modifiers, aimed at a plain element inside the container.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
            target: KeyTarget::Element,
            focus_within: true,
        }
    }

    /// Set held modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the target kind.
    #[must_use]
    pub const fn with_target(mut self, target: KeyTarget) -> Self {
        self.target = target;
        self
    }

    /// Set whether focus is inside the container.
    #[must_use]
    pub const fn with_focus_within(mut self, focus_within: bool) -> Self {
        self.focus_within = focus_within;
        self
    }

    /// Returns `true` if the list should look at this event at all.
    #[must_use]
    pub const fn in_scope(&self) -> bool {
        self.focus_within && !self.target.is_text_entry()
    }
}

/// What happened to a key event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    /// Handled: suppress the default action and stop propagation.
    Consumed,
    /// In scope, but not a key the list handles.
    Ignored,
    /// Out of scope: aimed at a text control, or focus is elsewhere.
    OutOfScope,
}

impl KeyOutcome {
    /// Returns `true` for [`KeyOutcome::Consumed`].
    #[must_use]
    pub const fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}

impl<K, D, P> RovingFocus<K, D, P>
where
    K: Clone + Eq + Hash + fmt::Debug,
    P: TreePosition,
{
    /// Dispatch one key press.
    ///
    /// Out-of-scope events are dropped before anything runs. In-scope events
    /// go to [`ListHost::raw_key`] first, then to the built-in handling.
    /// Navigation keys are consumed even when focus cannot move (for example
    /// at a boundary), and so are type-ahead keys without a match. Enter and
    /// space are only consumed when an item is focused.
    pub fn handle_key<H>(&mut self, event: &KeyEvent, host: &mut H) -> KeyOutcome
    where
        H: ListHost<K, D> + ?Sized,
    {
        if !event.in_scope() {
            trace!("key {:?} out of scope", event.key);
            return KeyOutcome::OutOfScope;
        }

        host.raw_key(event);

        let outcome = match event.key {
            Key::ArrowUp | Key::ArrowLeft => {
                self.move_relative(Direction::Previous, host);
                KeyOutcome::Consumed
            }
            Key::ArrowDown | Key::ArrowRight => {
                self.move_relative(Direction::Next, host);
                KeyOutcome::Consumed
            }
            Key::Home => {
                self.move_to_start(host);
                KeyOutcome::Consumed
            }
            Key::End => {
                self.move_to_end(host);
                KeyOutcome::Consumed
            }
            Key::Enter | Key::Character(' ') => {
                if self.select_focused(host) {
                    KeyOutcome::Consumed
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Character(c)
                if c.is_ascii_alphanumeric()
                    && self.config.type_ahead
                    && !event.modifiers.intersects(Modifiers::SHORTCUT) =>
            {
                self.move_to_character(c, host);
                KeyOutcome::Consumed
            }
            Key::Character(_) | Key::Other => KeyOutcome::Ignored,
        };
        trace!("key {:?} -> {outcome:?}", event.key);
        outcome
    }
}
