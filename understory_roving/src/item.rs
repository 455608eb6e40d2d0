// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item records and partial updates.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::aria::ItemRole;

/// Callback invoked when an item is activated.
pub type SelectHandler = Box<dyn FnMut()>;

/// An id handed out by [`RovingFocus::generate_id`](crate::RovingFocus::generate_id).
///
/// Generated ids are unique for the lifetime of the registry that produced
/// them. Hosts that mix generated and caller-supplied ids should make their id
/// type `From<GeneratedId>` in a way that cannot collide with their own ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GeneratedId(u64);

impl GeneratedId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<GeneratedId> for u64 {
    fn from(id: GeneratedId) -> Self {
        id.0
    }
}

/// A type-ahead label and where it came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SearchLabel {
    /// Supplied by the caller. Never replaced by a derived label.
    Explicit(String),
    /// Derived by the renderer from the item's rendered text.
    Derived(String),
}

impl SearchLabel {
    /// The label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Explicit(label) | Self::Derived(label) => label,
        }
    }

    /// Returns `true` for caller-supplied labels.
    #[must_use]
    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }

    /// Case-insensitive prefix match against a lower-cased needle.
    pub(crate) fn starts_with_lowercase(&self, needle: &str) -> bool {
        self.as_str().to_lowercase().starts_with(needle)
    }
}

/// One focusable entry.
///
/// `K` is the id, `D` the opaque payload and `P` the position handle.
pub struct Item<K, D, P> {
    pub(crate) id: K,
    pub(crate) data: D,
    pub(crate) position: P,
    pub(crate) disabled: bool,
    pub(crate) search_label: Option<SearchLabel>,
    pub(crate) on_select: Option<SelectHandler>,
    pub(crate) role: Option<ItemRole>,
    pub(crate) auto_focus: bool,
}

impl<K, D, P> Item<K, D, P> {
    /// Create an enabled item with no label, role override or select handler.
    pub fn new(id: K, data: D, position: P) -> Self {
        Self {
            id,
            data,
            position,
            disabled: false,
            search_label: None,
            on_select: None,
            role: None,
            auto_focus: false,
        }
    }

    /// Mark the item disabled (or enabled).
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Supply an explicit type-ahead label.
    #[must_use]
    pub fn with_search_label(mut self, label: impl Into<String>) -> Self {
        self.search_label = Some(SearchLabel::Explicit(label.into()));
        self
    }

    /// Attach an activation callback.
    #[must_use]
    pub fn with_on_select(mut self, on_select: impl FnMut() + 'static) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    /// Override the container's default item role.
    #[must_use]
    pub fn with_role(mut self, role: ItemRole) -> Self {
        self.role = Some(role);
        self
    }

    /// Actively focus this item as soon as it is registered.
    #[must_use]
    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    /// The item's id.
    #[must_use]
    pub fn id(&self) -> &K {
        &self.id
    }

    /// The caller payload.
    #[must_use]
    pub fn data(&self) -> &D {
        &self.data
    }

    /// The position handle used for ordering.
    #[must_use]
    pub fn position(&self) -> &P {
        &self.position
    }

    /// Whether the item is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The type-ahead label, if any.
    #[must_use]
    pub fn search_label(&self) -> Option<&SearchLabel> {
        self.search_label.as_ref()
    }

    /// The item's role override, if any.
    #[must_use]
    pub fn role(&self) -> Option<ItemRole> {
        self.role
    }

    /// Whether an activation callback is attached.
    #[must_use]
    pub fn has_on_select(&self) -> bool {
        self.on_select.is_some()
    }

    /// Merge the fields present in `update`.
    ///
    /// A derived label is only taken when no explicit label is present.
    pub(crate) fn apply(&mut self, update: ItemUpdate<D, P>) {
        let ItemUpdate {
            data,
            position,
            disabled,
            search_label,
            derived_search_label,
            on_select,
            role,
        } = update;

        if let Some(data) = data {
            self.data = data;
        }
        if let Some(position) = position {
            self.position = position;
        }
        if let Some(disabled) = disabled {
            self.disabled = disabled;
        }
        if let Some(label) = search_label {
            self.search_label = Some(SearchLabel::Explicit(label));
        } else if let Some(label) = derived_search_label
            && !self.search_label.as_ref().is_some_and(SearchLabel::is_explicit)
        {
            self.search_label = Some(SearchLabel::Derived(label));
        }
        if let Some(on_select) = on_select {
            self.on_select = on_select;
        }
        if let Some(role) = role {
            self.role = role;
        }
    }
}

impl<K: fmt::Debug, D: fmt::Debug, P: fmt::Debug> fmt::Debug for Item<K, D, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("id", &self.id)
            .field("data", &self.data)
            .field("position", &self.position)
            .field("disabled", &self.disabled)
            .field("search_label", &self.search_label)
            .field("on_select", &self.on_select.is_some())
            .field("role", &self.role)
            .field("auto_focus", &self.auto_focus)
            .finish()
    }
}

/// A partial update for an existing item.
///
/// Absent fields leave the record untouched. Supplying a position does not
/// re-sort; follow up with [`RovingFocus::reorder`](crate::RovingFocus::reorder).
pub struct ItemUpdate<D, P> {
    data: Option<D>,
    position: Option<P>,
    disabled: Option<bool>,
    search_label: Option<String>,
    derived_search_label: Option<String>,
    on_select: Option<Option<SelectHandler>>,
    role: Option<Option<ItemRole>>,
}

impl<D, P> Default for ItemUpdate<D, P> {
    fn default() -> Self {
        Self {
            data: None,
            position: None,
            disabled: None,
            search_label: None,
            derived_search_label: None,
            on_select: None,
            role: None,
        }
    }
}

impl<D, P> ItemUpdate<D, P> {
    /// An update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the payload.
    #[must_use]
    pub fn data(mut self, data: D) -> Self {
        self.data = Some(data);
        self
    }

    /// Replace the position handle.
    #[must_use]
    pub fn position(mut self, position: P) -> Self {
        self.position = Some(position);
        self
    }

    /// Enable or disable the item.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Set an explicit type-ahead label.
    #[must_use]
    pub fn search_label(mut self, label: impl Into<String>) -> Self {
        self.search_label = Some(label.into());
        self
    }

    /// Offer a label derived from rendered text; ignored if an explicit one exists.
    #[must_use]
    pub fn derived_search_label(mut self, label: impl Into<String>) -> Self {
        self.derived_search_label = Some(label.into());
        self
    }

    /// Replace the activation callback.
    #[must_use]
    pub fn on_select(mut self, on_select: impl FnMut() + 'static) -> Self {
        self.on_select = Some(Some(Box::new(on_select)));
        self
    }

    /// Remove the activation callback.
    #[must_use]
    pub fn clear_on_select(mut self) -> Self {
        self.on_select = Some(None);
        self
    }

    /// Replace (or with `None`, clear) the role override.
    #[must_use]
    pub fn role(mut self, role: Option<ItemRole>) -> Self {
        self.role = Some(role);
        self
    }
}

impl<D: fmt::Debug, P: fmt::Debug> fmt::Debug for ItemUpdate<D, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemUpdate")
            .field("data", &self.data)
            .field("position", &self.position)
            .field("disabled", &self.disabled)
            .field("search_label", &self.search_label)
            .field("derived_search_label", &self.derived_search_label)
            .field("on_select", &self.on_select.as_ref().map(Option::is_some))
            .field("role", &self.role)
            .finish()
    }
}
