// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_roving --heading-base-level=0

//! Understory Roving: a roving-tabindex focus engine for lists and menus.
//!
//! In a roving-tabindex widget only one item is in the tab sequence at a time:
//! the focused one. Arrow keys, Home/End and type-ahead move that single focus
//! between items. This crate implements the bookkeeping behind that pattern
//! for a collection of items that mount and unmount at any time and whose
//! order is defined by their position in a rendered tree, not by the order
//! in which they were registered.
//!
//! The core type is [`RovingFocus`], one per list or menu instance. It owns:
//! - **The registry**: item records kept sorted by render-tree position. Every
//!   registration re-sorts; removals do not need to.
//! - **The focus cursor**: zero or one focused id, always referring to a
//!   registered item.
//! - **Navigation**: relative moves, Home/End and type-ahead, all skipping
//!   disabled items and never wrapping.
//! - **Key dispatch**: [`RovingFocus::handle_key`] maps abstract key events to
//!   the moves above, after filtering out events that belong to text controls
//!   or to other widgets.
//!
//! The crate does **not** render, hit test or move real input focus itself.
//! Side effects go to the host through [`ListHost`], passed in to each call
//! that may produce them. Hosts decide how to implement them.
//!
//! ## Positions
//!
//! Each item carries a position handle implementing
//! [`position::TreePosition`]. [`position::TreePath`] (root→node child indices)
//! and plain integer render indices are provided; hosts with their own tree
//! can implement the trait over their node references.
//!
//! ## Passive and active focus
//!
//! Focus changes caused by bookkeeping (the first registration, removing the
//! focused item) are [`FocusMode::Passive`]: the host is told the cursor moved,
//! nothing more. Changes caused by the user or an explicit request are
//! [`FocusMode::Active`]: the host is also asked to scroll the item into view
//! and move input focus to it.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_roving::position::TreePath;
//! use understory_roving::{Item, Key, KeyEvent, KeyOutcome, ListHost, RovingFocus};
//!
//! #[derive(Default)]
//! struct Host {
//!     scrolled: Vec<&'static str>,
//! }
//!
//! impl ListHost<&'static str, u32> for Host {
//!     fn scroll_to_item(&mut self, id: &&'static str, _data: &u32) {
//!         self.scrolled.push(*id);
//!     }
//! }
//!
//! let menu = TreePath::root(0);
//! let mut roving: RovingFocus<&'static str, u32, TreePath> = RovingFocus::new();
//! let mut host = Host::default();
//!
//! // Items may mount in any order; the registry keeps them in tree order.
//! roving.register(Item::new("paste", 3, menu.child(2)).with_search_label("Paste"), &mut host)?;
//! roving.register(Item::new("cut", 1, menu.child(0)).with_search_label("Cut"), &mut host)?;
//! roving.register(Item::new("copy", 2, menu.child(1)).with_search_label("Copy"), &mut host)?;
//! assert_eq!(roving.ids().copied().collect::<Vec<_>>(), ["cut", "copy", "paste"]);
//!
//! // The first registration took focus passively: nothing was scrolled.
//! assert_eq!(roving.focused(), Some(&"paste"));
//! assert!(host.scrolled.is_empty());
//!
//! // Keyboard navigation is active.
//! let outcome = roving.handle_key(&KeyEvent::new(Key::Home), &mut host);
//! assert_eq!(outcome, KeyOutcome::Consumed);
//! assert_eq!(roving.focused(), Some(&"cut"));
//!
//! roving.handle_key(&KeyEvent::new(Key::Character('p')), &mut host);
//! assert_eq!(roving.focused(), Some(&"paste"));
//! assert_eq!(host.scrolled, ["cut", "paste"]);
//! # Ok::<(), understory_roving::RovingError<&'static str>>(())
//! ```
//!
//! ## Errors
//!
//! Registering a duplicate id, or an item whose position cannot be ordered
//! against the others, is an integration error and returns [`RovingError`].
//! Everything else that can routinely happen during mount/unmount races
//! (unregistering an unknown id, navigating an empty list) is a silent no-op.
//!
//! This crate is `no_std` and uses `alloc`. Diagnostics go through the
//! [`log`] facade.

#![no_std]

extern crate alloc;

pub mod aria;
mod config;
mod cursor;
mod error;
mod host;
mod item;
pub mod keyboard;
mod navigation;
pub mod position;
mod registry;

pub use config::{ListConfig, ListKind, Orientation};
pub use cursor::FocusMode;
pub use error::RovingError;
pub use host::ListHost;
pub use item::{GeneratedId, Item, ItemUpdate, SearchLabel, SelectHandler};
pub use keyboard::{Key, KeyEvent, KeyOutcome, KeyTarget, Modifiers};
pub use navigation::Direction;
pub use registry::RovingFocus;
