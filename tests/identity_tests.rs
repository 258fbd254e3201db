//! Tests for identity strategies.
//!
//! Checks that the set detects duplicates through its [`IdentityStrategy`]:
//! hash-then-equality keeps colliding values apart, hash-only collapses them,
//! and custom strategies can key elements by a field.

#![cfg(feature = "collections")]

use std::hash::{BuildHasher, Hasher};

use primeset::collections::{HashOnly, HashThenEq, IdentityStrategy, IndexedSet};
use rstest::rstest;

/// Maps every value to the same hash.
#[derive(Debug, Clone, Default)]
struct CollidingState;

struct CollidingHasher;

impl Hasher for CollidingHasher {
    fn finish(&self) -> u64 {
        42
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

impl BuildHasher for CollidingState {
    type Hasher = CollidingHasher;

    fn build_hasher(&self) -> Self::Hasher {
        CollidingHasher
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Endpoint {
    host: String,
    weight: u32,
}

impl Endpoint {
    fn new(host: &str, weight: u32) -> Self {
        Self {
            host: host.to_string(),
            weight,
        }
    }
}

/// Identity by host name; weight is payload.
#[derive(Debug, Default)]
struct ByHost {
    hosts: HashThenEq,
}

impl IdentityStrategy<Endpoint> for ByHost {
    fn key(&self, item: &Endpoint) -> u64 {
        self.hosts.key(&item.host)
    }

    fn is_same(&self, stored: &Endpoint, candidate: &Endpoint) -> bool {
        stored.host == candidate.host
    }
}

// =============================================================================
// Hash Collisions
// =============================================================================

#[rstest]
fn test_hash_then_eq_keeps_colliding_values_apart() {
    let set = IndexedSet::with_identity(HashThenEq::with_hasher(CollidingState));
    set.add(1).unwrap();
    set.add(2).unwrap();
    set.add(1).unwrap();

    assert_eq!(set.to_vec(), vec![1, 2]);
    assert!(set.contains(&2));
    assert_eq!(set.index_of(&2).unwrap(), 1);
}

#[rstest]
fn test_hash_only_collapses_colliding_values() {
    let set = IndexedSet::with_identity(HashOnly::with_hasher(CollidingState));
    assert_eq!(set.add(1).unwrap(), 1);
    assert_eq!(set.add(2).unwrap(), 1);

    assert_eq!(set.to_vec(), vec![1]);
    assert!(set.contains(&2));
    assert_eq!(set.index_of(&99).unwrap(), 0);
}

#[rstest]
fn test_hash_only_remove_matches_by_key() {
    let set = IndexedSet::with_identity(HashOnly::with_hasher(CollidingState));
    set.add("stored").unwrap();

    assert!(set.remove(&"other"));
    assert!(set.is_empty());
}

#[rstest]
fn test_builder_construction_dedups_through_identity() {
    let set = IndexedSet::builder()
        .identity(HashOnly::with_hasher(CollidingState))
        .build_from(["a", "b", "c"]);

    assert_eq!(set.to_vec(), vec!["a"]);
}

#[rstest]
fn test_hash_only_without_collisions_behaves_like_default() {
    let loose = IndexedSet::builder()
        .identity(HashOnly::new())
        .build_from(0..50);
    let strict: IndexedSet<i32> = (0..50).collect();

    assert_eq!(loose, strict);
}

// =============================================================================
// Custom Strategies
// =============================================================================

#[rstest]
fn test_custom_identity_keeps_first_payload() {
    let set = IndexedSet::with_identity(ByHost::default());
    set.add(Endpoint::new("alpha", 1)).unwrap();
    let kept = set.add(Endpoint::new("alpha", 5)).unwrap();

    assert_eq!(kept.weight, 1);
    assert_eq!(set.len(), 1);
}

#[rstest]
fn test_custom_identity_lookup_ignores_payload() {
    let set = IndexedSet::with_identity(ByHost::default());
    set.add(Endpoint::new("alpha", 1)).unwrap();
    set.add(Endpoint::new("beta", 2)).unwrap();

    assert!(set.contains(&Endpoint::new("beta", 0)));
    assert_eq!(set.index_of(&Endpoint::new("beta", 0)).unwrap(), 1);
    assert!(set.remove(&Endpoint::new("alpha", 0)));
    assert_eq!(set.to_vec(), vec![Endpoint::new("beta", 2)]);
}

#[rstest]
fn test_custom_identity_insert_duplicate_is_noop() {
    let set = IndexedSet::with_identity(ByHost::default());
    set.add(Endpoint::new("alpha", 1)).unwrap();
    set.add(Endpoint::new("beta", 2)).unwrap();

    set.insert(0, Endpoint::new("beta", 9)).unwrap();
    assert_eq!(
        set.to_vec(),
        vec![Endpoint::new("alpha", 1), Endpoint::new("beta", 2)]
    );
}

// =============================================================================
// Hashers
// =============================================================================

#[rstest]
fn test_keys_are_stable_within_a_strategy() {
    let identity = HashThenEq::new();

    assert_eq!(identity.key("key"), identity.key("key"));
    assert_eq!(identity.key(&42_u64), identity.key(&42_u64));
}

/// `ahash` seeds every strategy randomly; the other hashers use fixed keys.
#[cfg(any(feature = "fxhash", not(feature = "ahash")))]
#[rstest]
fn test_default_keys_agree_across_strategies() {
    let first = HashThenEq::new();
    let second = HashThenEq::new();

    assert_eq!(first.key("key"), second.key("key"));
    assert_eq!(first.key(&42_u64), second.key(&42_u64));
}

#[rstest]
fn test_string_and_str_share_keys() {
    let identity = HashThenEq::new();
    let owned = String::from("shared");

    assert_eq!(identity.key(owned.as_str()), identity.key("shared"));
}

#[rstest]
fn test_many_strings_stay_distinct() {
    let set: IndexedSet<String> = (0..500).map(|index| format!("key-{index}")).collect();

    assert_eq!(set.len(), 500);
    for index in 0..500 {
        assert_eq!(set.index_of(&format!("key-{index}")).unwrap(), index);
    }
}
