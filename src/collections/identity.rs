//! Pluggable element identity.
//!
//! An [`IdentityStrategy`] turns an element into a `u64` identity key and
//! decides whether two elements with the same key are duplicates.
//! [`IndexedSet`](super::IndexedSet) stores the key next to each element and
//! scans the keys first, so equality is only consulted on a key match.
//!
//! Two strategies are provided:
//!
//! - [`HashThenEq`]: equal keys **and** `Eq` equality. The default.
//! - [`HashOnly`]: equal keys alone. Distinct values whose hashes collide are
//!   treated as the same element.
//!
//! # Examples
//!
//! ```rust
//! use primeset::collections::{HashOnly, HashThenEq, IdentityStrategy};
//!
//! let strict = HashThenEq::new();
//! assert_eq!(strict.key(&"alpha"), strict.key(&"alpha"));
//! assert!(!strict.is_same(&"alpha", &"beta"));
//!
//! let loose = HashOnly::new();
//! assert!(loose.is_same(&"alpha", &"beta"));
//! ```

use std::fmt;
use std::hash::{BuildHasher, Hash};

/// The hasher used by the default identity strategies.
///
/// `rustc_hash::FxBuildHasher` with the `fxhash` feature.
#[cfg(feature = "fxhash")]
pub type DefaultIdentityHasher = rustc_hash::FxBuildHasher;

/// The hasher used by the default identity strategies.
///
/// `ahash::RandomState` with the `ahash` feature.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultIdentityHasher = ahash::RandomState;

/// The hasher used by the default identity strategies.
///
/// `DefaultHasher` with fixed keys unless a fast-hash feature is enabled.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultIdentityHasher =
    std::hash::BuildHasherDefault<std::collections::hash_map::DefaultHasher>;

/// Derives identity keys and resolves key matches.
///
/// Implementations must be consistent: `is_same(a, b)` may only return `true`
/// when `key(a) == key(b)`.
///
/// # Examples
///
/// Identity by a field instead of the whole value:
///
/// ```rust
/// use primeset::collections::{IdentityStrategy, IndexedSet};
///
/// #[derive(Clone, Default, Debug, PartialEq)]
/// struct Backend {
///     id: u64,
///     weight: u32,
/// }
///
/// struct ById;
///
/// impl IdentityStrategy<Backend> for ById {
///     fn key(&self, item: &Backend) -> u64 {
///         item.id
///     }
///
///     fn is_same(&self, stored: &Backend, candidate: &Backend) -> bool {
///         stored.id == candidate.id
///     }
/// }
///
/// let set = IndexedSet::with_identity(ById);
/// set.add(Backend { id: 1, weight: 10 }).unwrap();
/// let kept = set.add(Backend { id: 1, weight: 99 }).unwrap();
///
/// assert_eq!(set.len(), 1);
/// assert_eq!(kept.weight, 10);
/// ```
pub trait IdentityStrategy<T: ?Sized>: Send + Sync {
    /// Returns the identity key of `item`.
    fn key(&self, item: &T) -> u64;

    /// Returns `true` if `candidate` duplicates `stored`.
    ///
    /// Only called when both share the same key.
    fn is_same(&self, stored: &T, candidate: &T) -> bool;
}

/// Identity by hash, confirmed with `Eq`.
#[derive(Clone, Default)]
pub struct HashThenEq<H = DefaultIdentityHasher> {
    hasher: H,
}

impl HashThenEq {
    /// Creates a strategy using [`DefaultIdentityHasher`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H> HashThenEq<H> {
    /// Creates a strategy hashing with `hasher`.
    pub const fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }
}

// Hashers such as `FxBuildHasher` are not `Debug`.
impl<H> fmt::Debug for HashThenEq<H> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("HashThenEq").finish_non_exhaustive()
    }
}

impl<T, H> IdentityStrategy<T> for HashThenEq<H>
where
    T: Hash + Eq + ?Sized,
    H: BuildHasher + Send + Sync,
{
    #[inline]
    fn key(&self, item: &T) -> u64 {
        self.hasher.hash_one(item)
    }

    #[inline]
    fn is_same(&self, stored: &T, candidate: &T) -> bool {
        stored == candidate
    }
}

/// Identity by hash alone.
///
/// Two values are duplicates whenever their keys match, even if they differ.
/// Use this when the hash is known to be injective for the element type, or
/// when collapsing collisions is acceptable.
#[derive(Clone, Default)]
pub struct HashOnly<H = DefaultIdentityHasher> {
    hasher: H,
}

impl HashOnly {
    /// Creates a strategy using [`DefaultIdentityHasher`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H> HashOnly<H> {
    /// Creates a strategy hashing with `hasher`.
    pub const fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }
}

impl<H> fmt::Debug for HashOnly<H> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("HashOnly").finish_non_exhaustive()
    }
}

impl<T, H> IdentityStrategy<T> for HashOnly<H>
where
    T: Hash + ?Sized,
    H: BuildHasher + Send + Sync,
{
    #[inline]
    fn key(&self, item: &T) -> u64 {
        self.hasher.hash_one(item)
    }

    #[inline]
    fn is_same(&self, _stored: &T, _candidate: &T) -> bool {
        true
    }
}
