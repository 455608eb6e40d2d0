// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container configuration for one list or menu instance.

use crate::aria::{ContainerAttributes, ItemRole};

/// Layout hint for the container.
///
/// This only feeds accessibility attributes: both arrow-key pairs navigate
/// regardless of orientation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Items stack top to bottom.
    #[default]
    Vertical,
    /// Items run left to right.
    Horizontal,
}

impl Orientation {
    /// The attribute value for this orientation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

/// The kind of composite widget the container represents.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// A plain list.
    List,
    /// A menu.
    #[default]
    Menu,
}

/// Per-instance configuration.
///
/// Callbacks (`on_select_item`, `on_focus_item`, `scroll_to_item`) are not part
/// of this struct; they are provided per call through [`crate::ListHost`].
/// Controlled focus is fed through
/// [`RovingFocus::set_controlled_focus`](crate::RovingFocus::set_controlled_focus).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListConfig {
    /// Layout hint; informational only.
    pub orientation: Orientation,
    /// Container kind, used for the container role.
    pub kind: ListKind,
    /// Default role family for items that do not override it.
    pub item_role: ItemRole,
    /// Whether single alphanumeric keys jump to a matching item.
    pub type_ahead: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::menu()
    }
}

impl ListConfig {
    /// A vertical menu of plain menu items with type-ahead enabled.
    #[must_use]
    pub const fn menu() -> Self {
        Self {
            orientation: Orientation::Vertical,
            kind: ListKind::Menu,
            item_role: ItemRole::MenuItem,
            type_ahead: true,
        }
    }

    /// A vertical list of list items with type-ahead enabled.
    #[must_use]
    pub const fn list() -> Self {
        Self {
            orientation: Orientation::Vertical,
            kind: ListKind::List,
            item_role: ItemRole::ListItem,
            type_ahead: true,
        }
    }

    /// Set the orientation hint.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the default item role.
    #[must_use]
    pub const fn with_item_role(mut self, item_role: ItemRole) -> Self {
        self.item_role = item_role;
        self
    }

    /// Enable or disable type-ahead search.
    #[must_use]
    pub const fn with_type_ahead(mut self, type_ahead: bool) -> Self {
        self.type_ahead = type_ahead;
        self
    }

    /// Accessibility attributes for the container element.
    #[must_use]
    pub const fn container_attributes(&self) -> ContainerAttributes {
        ContainerAttributes {
            role: match self.kind {
                ListKind::List => "list",
                ListKind::Menu => "menu",
            },
            tab_index: -1,
            orientation: self.orientation.as_str(),
        }
    }
}
