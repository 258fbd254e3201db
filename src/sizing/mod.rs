//! Prime capacity sizing.
//!
//! This module provides [`PrimeSizer`], the growth policy used by
//! [`IndexedSet`](crate::collections::IndexedSet) and any other
//! container that wants backing storage sized to a prime.
//!
//! Capacities come from an ascending table of primes `p` with
//! `(p - 1) % 101 != 0`. Requests beyond the table compute the next qualifying
//! prime by trial division and append it, so later lookups of the same range
//! are served from the table.
//!
//! # Examples
//!
//! ```rust
//! use primeset::sizing::{PrimeSizer, MINIMUM_CAPACITY};
//!
//! assert_eq!(PrimeSizer::next_capacity(0), MINIMUM_CAPACITY);
//! assert_eq!(PrimeSizer::next_capacity(4), 7);
//! assert_eq!(PrimeSizer::next_capacity(7), 7);
//!
//! // Above the seed table the next qualifying prime is computed and cached.
//! let large = PrimeSizer::next_capacity(8_000_000);
//! assert!(large >= 8_000_000);
//! assert!(PrimeSizer::cached_primes().contains(&large));
//! ```

mod prime;

pub use prime::HASH_PRIME;
pub use prime::MINIMUM_CAPACITY;
pub use prime::PrimeSizer;
pub use prime::compute_next_prime;
pub use prime::is_prime;
