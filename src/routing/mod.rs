//! Routed entity pools.
//!
//! Load-balancing policies keep their candidates in an
//! [`IndexedSet`](crate::collections::IndexedSet) and expose them through
//! [`RouteAlgorithm`]. The trait fixes the membership operations every pool
//! supports and the selection entry point, [`RouteAlgorithm::get_next`]; how a
//! pool chooses the next entity is up to the implementation.
//!
//! # Examples
//!
//! A pool that always routes to its first entity:
//!
//! ```rust
//! use primeset::collections::IndexedSet;
//! use primeset::routing::{RouteAlgorithm, RouteError};
//!
//! struct Primary {
//!     entities: IndexedSet<String>,
//! }
//!
//! impl RouteAlgorithm<String> for Primary {
//!     fn add_routed_entity(&self, entity: String) -> Result<String, RouteError> {
//!         Ok(self.entities.add(entity)?)
//!     }
//!
//!     fn insert_routed_entity(&self, entity: String, index: usize) -> Result<String, RouteError> {
//!         self.entities.insert(index, entity.clone())?;
//!         Ok(entity)
//!     }
//!
//!     fn remove_routed_entity(&self, entity: &String) -> Result<(), RouteError> {
//!         self.entities.remove(entity);
//!         Ok(())
//!     }
//!
//!     fn remove_routed_entity_at(&self, index: usize) -> Result<(), RouteError> {
//!         self.entities.remove_at(index);
//!         Ok(())
//!     }
//!
//!     fn get_next(&self) -> Result<String, RouteError> {
//!         self.entities.iter().next().ok_or(RouteError::NothingToRoute)
//!     }
//! }
//!
//! let pool = Primary { entities: IndexedSet::new() };
//! assert!(pool.get_next().unwrap_err().is_nothing_to_route());
//!
//! pool.add_routed_entity("10.0.0.1".to_string()).unwrap();
//! assert_eq!(pool.get_next().unwrap(), "10.0.0.1");
//! ```

mod algorithm;
mod error;

pub use algorithm::RouteAlgorithm;
pub use error::RouteError;
