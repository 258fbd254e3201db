//! Thread-safe indexed collections.
//!
//! This module provides [`IndexedSet`], an order-preserving set whose
//! elements are also addressable by position, together with the pieces it is
//! configured with:
//!
//! - [`IdentityStrategy`]: how elements are keyed and compared
//!   ([`HashThenEq`], [`HashOnly`])
//! - [`IndexedSetBuilder`]: identity, initial capacity and dispose hook
//! - [`DisposeHook`]: notification when the storage is released
//! - [`IndexedSetError`]: the error type of fallible operations
//!
//! # Examples
//!
//! ```rust
//! use primeset::collections::IndexedSet;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let set = Arc::new(IndexedSet::new());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|worker| {
//!         let set = Arc::clone(&set);
//!         thread::spawn(move || {
//!             for value in 0..100 {
//!                 set.add(worker * 100 + value).unwrap();
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(set.len(), 400);
//! ```

mod dispose;
mod error;
mod identity;
mod indexed_set;

pub use dispose::DisposalPath;
pub use dispose::DisposeHook;
pub use error::IndexedSetError;
pub use identity::DefaultIdentityHasher;
pub use identity::HashOnly;
pub use identity::HashThenEq;
pub use identity::IdentityStrategy;
pub use indexed_set::IndexedSet;
pub use indexed_set::IndexedSetBuilder;
pub use indexed_set::Iter;
