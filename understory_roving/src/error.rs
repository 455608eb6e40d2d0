// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration errors raised by the registry.

use core::fmt::Debug;

/// An integration error: the caller fed the registry something it cannot order
/// or identify.
///
/// These indicate a bug in the host, not a runtime condition. Benign cases such
/// as unregistering an unknown id or navigating an empty list are silent no-ops
/// and never produce an error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RovingError<K: Debug> {
    /// An item with this id is already registered.
    #[error("item {0:?} is already registered")]
    DuplicateId(K),
    /// Two items report position handles that cannot be ordered relative to
    /// each other, for example because they live in disconnected trees.
    #[error("items {first:?} and {second:?} have unorderable positions")]
    Unorderable {
        /// One side of the unorderable pair.
        first: K,
        /// The other side of the unorderable pair.
        second: K,
    },
}
