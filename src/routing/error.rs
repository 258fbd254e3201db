//! Routing error types.

use thiserror::Error;

use crate::collections::IndexedSetError;

/// Errors reported by [`RouteAlgorithm`](super::RouteAlgorithm) implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Selection was requested from a pool with no entities.
    #[error("no routed entities available")]
    NothingToRoute,

    /// The backing collection rejected the operation.
    #[error(transparent)]
    Collection(#[from] IndexedSetError),
}

impl RouteError {
    /// Returns `true` if this is a [`NothingToRoute`](Self::NothingToRoute) error.
    #[must_use]
    pub const fn is_nothing_to_route(&self) -> bool {
        matches!(self, Self::NothingToRoute)
    }
}
