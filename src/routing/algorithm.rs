//! The routed entity pool interface.

use super::RouteError;

/// A pool of routed entities with a selection policy.
///
/// Membership operations mirror [`IndexedSet`](crate::collections::IndexedSet):
/// entities are unique, ordered, and addressable by position. Implementations
/// are shared between threads, so every method takes `&self`.
pub trait RouteAlgorithm<T>: Send + Sync {
    /// Adds `entity` to the pool and returns the entity stored under its identity.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Collection`] if the backing collection rejects it.
    fn add_routed_entity(&self, entity: T) -> Result<T, RouteError>;

    /// Inserts `entity` at `index`, moving later entities back by one.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Collection`] if `index` is past the end of the pool.
    fn insert_routed_entity(&self, entity: T, index: usize) -> Result<T, RouteError>;

    /// Removes `entity` from the pool. Absent entities are ignored.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn remove_routed_entity(&self, entity: &T) -> Result<(), RouteError>;

    /// Removes the entity at `index`. Indices past the end are ignored.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn remove_routed_entity_at(&self, index: usize) -> Result<(), RouteError>;

    /// Selects the entity the next request should be routed to.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NothingToRoute`] when the pool is empty.
    fn get_next(&self) -> Result<T, RouteError>;
}
