// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-tree ordering for registered items.
//!
//! Items carry an opaque position handle. The engine never inspects it
//! directly; it only asks one handle where another handle lies relative to
//! it, via [`TreePosition::relation_to`]. The answer is a set of
//! [`Relation`] flags shaped after the usual structural comparison found in
//! document trees, so hosts with a native "compare position" primitive can
//! forward its result with a direct mapping.
//!
//! [`compare`] collapses a relation into a [`core::cmp::Ordering`], or `None`
//! when the two handles cannot be ordered (for example, they live in
//! different trees).
//!
//! Two ready-made handles are provided:
//! - [`TreePath`]: a root→node path of child indices.
//! - Plain render indices (`usize`, `u32`, `u64`) for hosts that already
//!   flatten their tree into a pre-order counter.
//!
//! ```rust
//! use core::cmp::Ordering;
//! use understory_roving::position::{TreePath, compare};
//!
//! let list = TreePath::root(0);
//! let first = list.child(0);
//! let nested = first.child(3);
//! let second = list.child(1);
//!
//! assert_eq!(compare(&first, &second), Some(Ordering::Less));
//! // An ancestor precedes its descendants.
//! assert_eq!(compare(&first, &nested), Some(Ordering::Less));
//! assert_eq!(compare(&nested, &second), Some(Ordering::Less));
//! // Different roots cannot be ordered.
//! assert_eq!(compare(&first, &TreePath::root(1)), None);
//! ```

use core::cmp::Ordering;

use smallvec::SmallVec;

bitflags::bitflags! {
    /// Where `other` lies relative to `self` in [`TreePosition::relation_to`].
    ///
    /// An empty set means both handles refer to the same position.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Relation: u8 {
        /// `other` comes before `self`.
        const PRECEDING = 1 << 0;
        /// `other` comes after `self`.
        const FOLLOWING = 1 << 1;
        /// `other` is an ancestor of `self`.
        const CONTAINS = 1 << 2;
        /// `other` is a descendant of `self`.
        const CONTAINED_BY = 1 << 3;
        /// The handles belong to disconnected structures and have no order.
        const DISCONNECTED = 1 << 4;
    }
}

/// A position handle that can report its structural relation to another handle.
///
/// Implementations must be consistent: across a single registry, the relation
/// has to induce a strict weak ordering once collapsed by [`compare`].
/// Being connected (not [`Relation::DISCONNECTED`]) must be transitive: two
/// handles that are each connected to a third are connected to each other.
pub trait TreePosition {
    /// Report where `other` lies relative to `self`.
    fn relation_to(&self, other: &Self) -> Relation;
}

/// Order two handles by render-tree position.
///
/// Returns `None` when the pair is unorderable. An ancestor orders before its
/// descendants, matching pre-order traversal.
pub fn compare<P: TreePosition + ?Sized>(a: &P, b: &P) -> Option<Ordering> {
    let relation = a.relation_to(b);
    if relation.contains(Relation::DISCONNECTED) {
        return None;
    }
    if relation.intersects(Relation::FOLLOWING | Relation::CONTAINED_BY) {
        return Some(Ordering::Less);
    }
    if relation.intersects(Relation::PRECEDING | Relation::CONTAINS) {
        return Some(Ordering::Greater);
    }
    Some(Ordering::Equal)
}

/// A root→node path of child indices.
///
/// The first segment names the root of the tree; every further segment is the
/// index of a child within its parent. Two paths with different roots (or an
/// empty path) are disconnected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TreePath {
    segments: SmallVec<[u32; 8]>,
}

impl TreePath {
    /// Create a path pointing at the root with identifier `root`.
    #[must_use]
    pub fn root(root: u32) -> Self {
        let mut segments = SmallVec::new();
        segments.push(root);
        Self { segments }
    }

    /// Create a path from raw segments, root identifier first.
    #[must_use]
    pub fn from_segments(segments: &[u32]) -> Self {
        Self {
            segments: SmallVec::from_slice(segments),
        }
    }

    /// Return the path of the `index`-th child of this node.
    #[must_use]
    pub fn child(&self, index: u32) -> Self {
        let mut segments = self.segments.clone();
        segments.push(index);
        Self { segments }
    }

    /// Return the path of this node's parent, or `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() < 2 {
            return None;
        }
        let mut segments = self.segments.clone();
        segments.pop();
        Some(Self { segments })
    }

    /// Raw segments, root identifier first.
    #[must_use]
    pub fn segments(&self) -> &[u32] {
        &self.segments
    }

    /// Number of edges between the root and this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }
}

impl TreePosition for TreePath {
    fn relation_to(&self, other: &Self) -> Relation {
        match (self.segments.first(), other.segments.first()) {
            (Some(a), Some(b)) if a == b => {}
            _ => return Relation::DISCONNECTED,
        }

        let shared = self
            .segments
            .iter()
            .zip(other.segments.iter())
            .take_while(|(a, b)| a == b)
            .count();

        match (self.segments.get(shared), other.segments.get(shared)) {
            (None, None) => Relation::empty(),
            (None, Some(_)) => Relation::CONTAINED_BY | Relation::FOLLOWING,
            (Some(_), None) => Relation::CONTAINS | Relation::PRECEDING,
            (Some(a), Some(b)) if a < b => Relation::FOLLOWING,
            (Some(_), Some(_)) => Relation::PRECEDING,
        }
    }
}

macro_rules! impl_render_index {
    ($($ty:ty),*) => {
        $(
            impl TreePosition for $ty {
                fn relation_to(&self, other: &Self) -> Relation {
                    match other.cmp(self) {
                        Ordering::Less => Relation::PRECEDING,
                        Ordering::Greater => Relation::FOLLOWING,
                        Ordering::Equal => Relation::empty(),
                    }
                }
            }
        )*
    };
}

impl_render_index!(usize, u32, u64);
