// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility attribute derivation.
//!
//! The engine does not render anything. These types carry the values a host
//! needs to stamp onto its elements: the semantic role and the roving
//! `tabindex` (0 for the focused item, -1 for all others).

/// Semantic role family for an item.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ItemRole {
    /// An entry in a plain list.
    ListItem,
    /// An action in a menu.
    #[default]
    MenuItem,
    /// A mutually exclusive option in a menu.
    MenuItemRadio,
    /// A toggleable option in a menu.
    MenuItemCheckbox,
}

impl ItemRole {
    /// The attribute value for this role.
    #[must_use]
    pub const fn role_name(self) -> &'static str {
        match self {
            Self::ListItem => "listitem",
            Self::MenuItem => "menuitem",
            Self::MenuItemRadio => "menuitemradio",
            Self::MenuItemCheckbox => "menuitemcheckbox",
        }
    }
}

/// Attributes for one item element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ItemAttributes {
    /// Role name, see [`ItemRole::role_name`].
    pub role: &'static str,
    /// `0` when the item holds focus, `-1` otherwise.
    pub tab_index: i32,
    /// Whether the item is disabled.
    pub disabled: bool,
}

/// Attributes for the container element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ContainerAttributes {
    /// Role name of the container.
    pub role: &'static str,
    /// The container itself is never in the tab sequence.
    pub tab_index: i32,
    /// Orientation hint, `"vertical"` or `"horizontal"`.
    pub orientation: &'static str,
}
