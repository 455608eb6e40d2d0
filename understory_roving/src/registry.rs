// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The item registry: records kept in render-tree order.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::Hash;
use core::mem;

use hashbrown::HashMap;
use log::{debug, warn};

use crate::aria::ItemAttributes;
use crate::config::ListConfig;
use crate::cursor::FocusMode;
use crate::error::RovingError;
use crate::host::ListHost;
use crate::item::{GeneratedId, Item, ItemUpdate, SearchLabel};
use crate::position::{self, TreePosition};

/// Roving-focus state for one list or menu instance.
///
/// Owns the item sequence (always in render-tree order as of the last
/// re-sort), an id→index lookup, the focus cursor and the container
/// configuration.
///
/// - `K`: item id, unique within the registry.
/// - `D`: opaque payload handed back in host callbacks.
/// - `P`: position handle, see [`TreePosition`].
pub struct RovingFocus<K, D, P> {
    pub(crate) items: Vec<Item<K, D, P>>,
    pub(crate) index: HashMap<K, usize>,
    pub(crate) focused: Option<K>,
    pub(crate) controlled: Option<K>,
    pub(crate) config: ListConfig,
    next_generated: u64,
}

impl<K, D, P> RovingFocus<K, D, P> {
    /// Create an empty registry with the default (menu) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ListConfig::default())
    }

    /// Create an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: ListConfig) -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
            focused: None,
            controlled: None,
            config,
            next_generated: 0,
        }
    }

    /// The container configuration.
    #[must_use]
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Replace the container configuration.
    pub fn set_config(&mut self, config: ListConfig) {
        self.config = config;
    }

    /// Number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no items are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index` in render-tree order.
    #[must_use]
    pub fn get_at(&self, index: usize) -> Option<&Item<K, D, P>> {
        self.items.get(index)
    }

    /// Iterate items in render-tree order.
    pub fn iter(&self) -> core::slice::Iter<'_, Item<K, D, P>> {
        self.items.iter()
    }

    /// Iterate item ids in render-tree order.
    pub fn ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.items.iter().map(|item| &item.id)
    }

    /// The focused id, if any.
    #[must_use]
    pub fn focused(&self) -> Option<&K> {
        self.focused.as_ref()
    }

    /// Hand out a fresh id, unique for the lifetime of this registry.
    pub fn generate_id(&mut self) -> GeneratedId {
        let id = GeneratedId::new(self.next_generated);
        self.next_generated += 1;
        id
    }
}

impl<K, D, P> Default for RovingFocus<K, D, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, D, P> RovingFocus<K, D, P>
where
    K: Clone + Eq + Hash + fmt::Debug,
    P: TreePosition,
{
    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &K) -> Option<&Item<K, D, P>> {
        self.index.get(id).map(|&index| &self.items[index])
    }

    /// Position of `id` in render-tree order.
    #[must_use]
    pub fn index_of(&self, id: &K) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.index.contains_key(id)
    }

    /// Register a newly mounted item.
    ///
    /// The item is appended and the whole sequence re-sorted. If nothing held
    /// focus, the first enabled item of the sorted sequence is focused
    /// passively. An item registered with auto-focus is then focused actively.
    ///
    /// # Errors
    ///
    /// - [`RovingError::DuplicateId`] if the id is already registered.
    /// - [`RovingError::Unorderable`] if the sort meets two handles with no
    ///   relative order.
    ///
    /// On error the registry is left exactly as it was.
    pub fn register<H>(&mut self, item: Item<K, D, P>, host: &mut H) -> Result<(), RovingError<K>>
    where
        H: ListHost<K, D> + ?Sized,
    {
        if self.index.contains_key(&item.id) {
            warn!("rejecting duplicate registration of item {:?}", item.id);
            return Err(RovingError::DuplicateId(item.id));
        }

        let id = item.id.clone();
        let auto_focus = item.auto_focus;
        self.index.insert(id.clone(), self.items.len());
        self.items.push(item);

        if let Err(err) = self.reorder() {
            // A failed reorder leaves the sequence as it was, so the new item is still last.
            self.items.pop();
            self.index.remove(&id);
            return Err(err);
        }
        debug!("registered item {id:?} ({} items)", self.items.len());

        if self.focused.is_none() {
            self.focus_first_enabled(FocusMode::Passive, host);
        }
        if auto_focus {
            self.focus(&id, FocusMode::Active, host);
        }
        Ok(())
    }

    /// Unregister an item, returning its record.
    ///
    /// Unknown ids are ignored. If the removed item held focus, focus passes
    /// passively to the first enabled item, or to nothing.
    pub fn unregister<H>(&mut self, id: &K, host: &mut H) -> Option<Item<K, D, P>>
    where
        H: ListHost<K, D> + ?Sized,
    {
        let index = self.index.remove(id)?;
        let item = self.items.remove(index);
        self.reindex_from(index);
        debug!("unregistered item {id:?} ({} items)", self.items.len());

        if self.focused.as_ref() == Some(id) {
            self.focused = None;
            if !self.focus_first_enabled(FocusMode::Passive, host) {
                debug!("focus cleared: no enabled items remain");
                host.focus_changed(None);
            }
        }
        Some(item)
    }

    /// Merge `update` into an existing record.
    ///
    /// Returns `false` for unknown ids. Never changes ordering.
    pub fn update(&mut self, id: &K, update: ItemUpdate<D, P>) -> bool {
        match self.index.get(id) {
            Some(&index) => {
                self.items[index].apply(update);
                true
            }
            None => false,
        }
    }

    /// Offer a search label derived from the item's rendered text.
    ///
    /// Ignored if the item has an explicit label or is unknown.
    pub fn derive_search_label(&mut self, id: &K, text: impl Into<String>) -> bool {
        let Some(&index) = self.index.get(id) else {
            return false;
        };
        let item = &mut self.items[index];
        if item.search_label.as_ref().is_some_and(SearchLabel::is_explicit) {
            return false;
        }
        item.apply(ItemUpdate::new().derived_search_label(text));
        true
    }

    /// Recompute the order from the current position handles.
    ///
    /// Idempotent. The sort is stable: items whose handles compare equal keep
    /// their current relative order.
    ///
    /// # Errors
    ///
    /// [`RovingError::Unorderable`] if two handles cannot be ordered. The
    /// sequence is left unchanged in that case.
    pub fn reorder(&mut self) -> Result<(), RovingError<K>> {
        let ranks = self.sorted_ranks()?;
        if ranks.iter().enumerate().all(|(index, &rank)| index == rank) {
            return Ok(());
        }

        let items = mem::take(&mut self.items);
        let mut ranked: Vec<(usize, Item<K, D, P>)> = ranks.into_iter().zip(items).collect();
        ranked.sort_unstable_by_key(|(rank, _)| *rank);
        self.items = ranked.into_iter().map(|(_, item)| item).collect();
        self.reindex_from(0);
        debug!("reordered {} items", self.items.len());
        Ok(())
    }

    /// Alias for [`RovingFocus::reorder`], for hosts that know their tree moved.
    ///
    /// # Errors
    ///
    /// See [`RovingFocus::reorder`].
    pub fn trigger_order_recalculation(&mut self) -> Result<(), RovingError<K>> {
        self.reorder()
    }

    /// Accessibility attributes for `id`, using the container's default role
    /// unless the item overrides it.
    #[must_use]
    pub fn item_attributes(&self, id: &K) -> Option<ItemAttributes> {
        let item = self.get(id)?;
        Some(ItemAttributes {
            role: item.role.unwrap_or(self.config.item_role).role_name(),
            tab_index: if self.focused.as_ref() == Some(id) { 0 } else { -1 },
            disabled: item.disabled,
        })
    }

    /// For each current index, its rank in sorted order.
    ///
    /// Every handle is checked against the first one before sorting, so the
    /// sort only ever sees a total order.
    fn sorted_ranks(&self) -> Result<Vec<usize>, RovingError<K>> {
        if let Some((anchor, rest)) = self.items.split_first()
            && let Some(stray) = rest.iter().find(|item| {
                position::compare(&anchor.position, &item.position).is_none()
                    || position::compare(&item.position, &anchor.position).is_none()
            })
        {
            let err = RovingError::Unorderable {
                first: anchor.id.clone(),
                second: stray.id.clone(),
            };
            warn!("{err}");
            return Err(err);
        }

        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.sort_by(|&a, &b| {
            position::compare(&self.items[a].position, &self.items[b].position)
                .unwrap_or(Ordering::Equal)
        });

        let mut ranks = vec![0; order.len()];
        for (rank, &index) in order.iter().enumerate() {
            ranks[index] = rank;
        }
        Ok(ranks)
    }

    fn reindex_from(&mut self, start: usize) {
        for (index, item) in self.items.iter().enumerate().skip(start) {
            if let Some(slot) = self.index.get_mut(&item.id) {
                *slot = index;
            }
        }
    }
}

impl<K: fmt::Debug, D, P> fmt::Debug for RovingFocus<K, D, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RovingFocus")
            .field("items", &self.items.iter().map(|item| &item.id).collect::<Vec<_>>())
            .field("focused", &self.focused)
            .field("controlled", &self.controlled)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
