//! # primeset
//!
//! A thread-safe, order-preserving, uniqueness-enforcing indexed container
//! backed by parallel arrays sized to prime capacities.
//!
//! ## Overview
//!
//! - **Sizing**: [`PrimeSizer`](sizing::PrimeSizer) picks the next capacity
//!   from an ascending table of primes that avoid `(p - 1) % 101 == 0`
//! - **Collections**: [`IndexedSet`](collections::IndexedSet) keeps distinct
//!   elements in insertion order behind a reader/writer lock with an
//!   upgradeable tier
//! - **Routing**: the [`RouteAlgorithm`](routing::RouteAlgorithm) shape that
//!   load-balancing pools built on top of the set implement
//!
//! ## Feature Flags
//!
//! - `sizing`: Prime capacity table
//! - `collections`: `IndexedSet` and identity strategies
//! - `routing`: Routed entity pool interface
//! - `fxhash`: Use `rustc-hash` for identity keys
//! - `ahash`: Use `ahash` for identity keys
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "collections")]
//! # {
//! use primeset::prelude::*;
//!
//! let set: IndexedSet<&str> = ["a", "b", "c"].into_iter().collect();
//! assert!(set.remove(&"b"));
//! set.insert(1, "d").unwrap();
//!
//! assert_eq!(set.to_vec(), vec!["a", "d", "c"]);
//! assert_eq!(set.get(5), "");
//! assert!(set.index_of(&"z").is_err());
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use primeset::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "sizing")]
    pub use crate::sizing::*;

    #[cfg(feature = "collections")]
    pub use crate::collections::*;

    #[cfg(feature = "routing")]
    pub use crate::routing::*;
}

#[cfg(feature = "sizing")]
pub mod sizing;

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "routing")]
pub mod routing;

#[cfg(feature = "collections")]
mod sync;
