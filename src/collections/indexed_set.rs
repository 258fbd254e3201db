//! Thread-safe indexed set over prime-sized parallel arrays.
//!
//! [`IndexedSet`] keeps distinct elements in insertion order. Each element is
//! stored next to its identity key in two parallel arrays whose length is
//! always a capacity handed out by [`PrimeSizer`]. Uniqueness is checked by a
//! linear scan of the live keys; there are no hash buckets.
//!
//! # Locking
//!
//! One `parking_lot::RwLock` guards both arrays and the element count as a
//! single unit.
//!
//! | Mode            | Operations                                               |
//! |-----------------|----------------------------------------------------------|
//! | shared          | `contains`, `index_of`, `get`, `copy_to`, `len`, `iter`  |
//! | upgradeable     | check phase of `add`, `insert`, `remove_at`, `remove`    |
//! | exclusive       | mutation phase of the above, `clear`, `dispose`          |
//!
//! Check-then-mutate operations hold an upgradeable read guard while they look
//! for duplicates or validate bounds, so plain readers keep running, and
//! upgrade it atomically only when they actually mutate.
//!
//! The lock is not reentrant. While an [`Iter`] is alive on a thread, calling
//! any other method of the same set from that thread may deadlock.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity        |
//! |-------------|-------------------|
//! | `add`       | O(n) amortized    |
//! | `insert`    | O(n)              |
//! | `remove_at` | O(n - index)      |
//! | `remove`    | O(n)              |
//! | `contains`  | O(n)              |
//! | `index_of`  | O(n)              |
//! | `get`       | O(1)              |
//! | `len`       | O(1)              |
//! | `clear`     | O(capacity)       |

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockUpgradableReadGuard};

use super::{DisposalPath, DisposeHook, HashThenEq, IdentityStrategy, IndexedSetError};
use crate::sizing::PrimeSizer;
use crate::sync::{AtomicBool, Ordering};

// =============================================================================
// Storage
// =============================================================================

/// Parallel key/slot arrays plus the live count.
///
/// Invariants:
/// - `keys.len() == slots.len()` (the capacity)
/// - `count <= capacity`
/// - for `i >= count`: `keys[i] == 0` and `slots[i]` is `T::default()`
struct Storage<T> {
    keys: Box<[u64]>,
    slots: Box<[T]>,
    count: usize,
}

impl<T> Storage<T> {
    /// Zero-capacity storage left behind by disposal.
    fn released() -> Self {
        Self {
            keys: Box::default(),
            slots: Box::default(),
            count: 0,
        }
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    fn live(&self) -> &[T] {
        &self.slots[..self.count]
    }

    fn position<S>(&self, identity: &S, key: u64, item: &T) -> Option<usize>
    where
        S: IdentityStrategy<T>,
    {
        self.keys[..self.count]
            .iter()
            .zip(self.live())
            .position(|(&stored_key, stored)| stored_key == key && identity.is_same(stored, item))
    }
}

impl<T: Default> Storage<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: vec![0; capacity].into_boxed_slice(),
            slots: std::iter::repeat_with(T::default).take(capacity).collect(),
            count: 0,
        }
    }

    fn minimal() -> Self {
        Self::with_capacity(PrimeSizer::next_capacity(0))
    }

    /// Builds storage sized exactly for already-deduplicated entries.
    fn from_entries(entries: Vec<(u64, T)>) -> Self {
        let mut storage = Self::with_capacity(PrimeSizer::next_capacity(entries.len()));
        storage.count = entries.len();
        for (index, (key, item)) in entries.into_iter().enumerate() {
            storage.keys[index] = key;
            storage.slots[index] = item;
        }
        storage
    }

    /// Makes room for one more element, growing to the next table prime.
    fn reserve_one(&mut self) -> Result<(), IndexedSetError> {
        let count = self.count;
        if count < self.capacity() {
            return Ok(());
        }
        let next = count
            .checked_add(1)
            .map(PrimeSizer::next_capacity)
            .filter(|&next| next > count)
            .ok_or(IndexedSetError::CapacityExhausted { count })?;
        self.grow_to(next);
        Ok(())
    }

    fn grow_to(&mut self, capacity: usize) {
        let previous = self.capacity();

        let mut keys = mem::take(&mut self.keys).into_vec();
        keys.resize(capacity, 0);
        let mut slots = mem::take(&mut self.slots).into_vec();
        slots.resize_with(capacity, T::default);

        self.keys = keys.into_boxed_slice();
        self.slots = slots.into_boxed_slice();
        tracing::debug!(
            from = previous,
            to = capacity,
            count = self.count,
            "grew indexed set capacity"
        );
    }

    /// Shifts `[index, count)` one slot right and writes the element at `index`.
    fn insert_at(&mut self, index: usize, key: u64, item: T) {
        let count = self.count;
        debug_assert!(index <= count && count < self.capacity());

        self.keys.copy_within(index..count, index + 1);
        // The default in the first free slot rotates down to `index`.
        self.slots[index..=count].rotate_right(1);
        self.keys[index] = key;
        self.slots[index] = item;
        self.count += 1;
    }

    /// Shifts `(index, count)` one slot left and clears the vacated tail slot.
    fn remove_at(&mut self, index: usize) -> T {
        let count = self.count;
        debug_assert!(index < count);

        let removed = mem::take(&mut self.slots[index]);
        self.slots[index..count].rotate_left(1);
        self.keys.copy_within(index + 1..count, index);
        self.count -= 1;
        self.keys[self.count] = 0;
        removed
    }
}

// =============================================================================
// IndexedSet
// =============================================================================

/// A thread-safe, order-preserving set addressable by position.
///
/// Elements are unique under the set's [`IdentityStrategy`] (by default
/// [`HashThenEq`]: equal hash and `Eq` equality) and keep their insertion
/// order unless index operations move them. All methods take `&self`; share
/// the set between threads with `Arc`.
///
/// # Type Parameters
///
/// * `T` - The element type. `Clone` because reads hand out copies taken under
///   the lock; `Default` because unused capacity and out-of-range reads hold
///   the default value.
/// * `S` - The identity strategy.
///
/// # Examples
///
/// ```rust
/// use primeset::collections::IndexedSet;
///
/// let set: IndexedSet<&str> = ["x", "x", "y"].into_iter().collect();
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.to_vec(), vec!["x", "y"]);
///
/// set.add("z").unwrap();
/// set.insert(0, "w").unwrap();
/// assert_eq!(set.to_vec(), vec!["w", "x", "y", "z"]);
///
/// assert_eq!(set.remove_at(1), Some("x"));
/// assert_eq!(set.remove_at(10), None);
/// ```
pub struct IndexedSet<T, S = HashThenEq> {
    storage: RwLock<Storage<T>>,
    identity: S,
    disposed: AtomicBool,
    dispose_hook: Option<Arc<dyn DisposeHook>>,
}

static_assertions::assert_impl_all!(IndexedSet<String>: Send, Sync);

impl<T> IndexedSet<T>
where
    T: Clone + Default + Hash + Eq,
{
    /// Creates an empty set with the minimal prime capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::collections::IndexedSet;
    /// use primeset::sizing::MINIMUM_CAPACITY;
    ///
    /// let set: IndexedSet<u32> = IndexedSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), MINIMUM_CAPACITY);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_identity(HashThenEq::new())
    }

    /// Creates an empty set whose capacity is the first table prime `>= hint`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::collections::IndexedSet;
    ///
    /// let set: IndexedSet<u32> = IndexedSet::with_capacity(100);
    /// assert_eq!(set.capacity(), 107);
    /// ```
    #[must_use]
    pub fn with_capacity(hint: usize) -> Self {
        IndexedSetBuilder::new().capacity(hint).build()
    }

    /// Creates a set from `items`, keeping the first occurrence of duplicates.
    ///
    /// The backing arrays are sized to the smallest table prime that fits the
    /// distinct elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::collections::IndexedSet;
    ///
    /// let set = IndexedSet::from_items(vec![3, 1, 3, 2, 1]);
    /// assert_eq!(set.to_vec(), vec![3, 1, 2]);
    /// assert_eq!(set.capacity(), 3);
    /// ```
    #[must_use]
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        IndexedSetBuilder::new().build_from(items)
    }

    /// Returns a builder for configuring identity, capacity and disposal hook.
    #[must_use]
    pub fn builder() -> IndexedSetBuilder<T> {
        IndexedSetBuilder::new()
    }
}

impl<T, S> IndexedSet<T, S> {
    /// Returns the number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.read().count
    }

    /// Returns `true` if the set holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the length of the backing arrays.
    ///
    /// Always a prime from the [`PrimeSizer`] table, or 0 once disposed.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.read().capacity()
    }

    /// Returns `true` once the storage has been released.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Releases the backing storage.
    ///
    /// Safe to call any number of times; only the first call releases the
    /// storage and notifies the dispose hook. Afterwards, mutating operations
    /// fail with [`IndexedSetError::Disposed`] and reads see an empty set.
    pub fn dispose(&self) {
        self.release(DisposalPath::Explicit);
    }

    fn release(&self, path: DisposalPath) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        let released = mem::replace(&mut *self.storage.write(), Storage::released());
        tracing::debug!(%path, count = released.count, "disposed indexed set");
        drop(released);

        if let Some(hook) = &self.dispose_hook {
            hook.on_dispose(path);
        }
    }

    fn ensure_live(&self) -> Result<(), IndexedSetError> {
        if self.is_disposed() {
            Err(IndexedSetError::Disposed)
        } else {
            Ok(())
        }
    }
}

impl<T, S> IndexedSet<T, S>
where
    T: Clone + Default,
    S: IdentityStrategy<T>,
{
    /// Creates an empty set using `identity` to detect duplicates.
    #[must_use]
    pub fn with_identity(identity: S) -> Self {
        Self::assemble(identity, Storage::minimal(), None)
    }

    fn assemble(
        identity: S,
        storage: Storage<T>,
        dispose_hook: Option<Arc<dyn DisposeHook>>,
    ) -> Self {
        Self {
            storage: RwLock::new(storage),
            identity,
            disposed: AtomicBool::new(false),
            dispose_hook,
        }
    }

    /// Deduplicates `items` by identity, preserving first occurrences.
    fn distinct_entries<I>(identity: &S, items: I) -> Vec<(u64, T)>
    where
        I: IntoIterator<Item = T>,
    {
        let mut entries: Vec<(u64, T)> = Vec::new();
        let mut positions_by_key: HashMap<u64, Vec<usize>> = HashMap::new();

        for item in items {
            let key = identity.key(&item);
            let positions = positions_by_key.entry(key).or_default();
            let duplicate = positions
                .iter()
                .any(|&position| identity.is_same(&entries[position].1, &item));
            if !duplicate {
                positions.push(entries.len());
                entries.push((key, item));
            }
        }
        entries
    }

    /// Appends `item` unless an element with the same identity is stored.
    ///
    /// Returns a copy of the element now stored under that identity: `item`
    /// itself, or the earlier duplicate when the call was a no-op. Grows the
    /// backing arrays to the next table prime when they are full.
    ///
    /// # Errors
    ///
    /// - [`IndexedSetError::Disposed`] after [`dispose`](Self::dispose)
    /// - [`IndexedSetError::CapacityExhausted`] if no larger capacity exists
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::collections::IndexedSet;
    ///
    /// let set = IndexedSet::new();
    /// assert_eq!(set.add(String::from("a")).unwrap(), "a");
    /// set.add(String::from("a")).unwrap();
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&self, item: T) -> Result<T, IndexedSetError> {
        let key = self.identity.key(&item);
        let storage = self.storage.upgradable_read();
        self.ensure_live()?;

        if let Some(position) = storage.position(&self.identity, key, &item) {
            tracing::trace!(position, "duplicate add ignored");
            return Ok(storage.slots[position].clone());
        }

        let mut storage = RwLockUpgradableReadGuard::upgrade(storage);
        storage.reserve_one()?;
        let index = storage.count;
        storage.insert_at(index, key, item);
        Ok(storage.slots[index].clone())
    }

    /// Inserts `item` at `index`, shifting later elements one position right.
    ///
    /// `index == len()` appends. A duplicate is a silent no-op.
    ///
    /// # Errors
    ///
    /// - [`IndexedSetError::IndexOutOfRange`] if `index > len()`
    /// - [`IndexedSetError::Disposed`] after [`dispose`](Self::dispose)
    /// - [`IndexedSetError::CapacityExhausted`] if no larger capacity exists
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::collections::IndexedSet;
    ///
    /// let set = IndexedSet::from_items(["a", "c"]);
    /// set.insert(1, "b").unwrap();
    /// assert_eq!(set.to_vec(), vec!["a", "b", "c"]);
    ///
    /// assert!(set.insert(5, "z").unwrap_err().is_out_of_range());
    /// ```
    pub fn insert(&self, index: usize, item: T) -> Result<(), IndexedSetError> {
        let key = self.identity.key(&item);
        let storage = self.storage.upgradable_read();
        self.ensure_live()?;

        let count = storage.count;
        if index > count {
            return Err(IndexedSetError::IndexOutOfRange { index, count });
        }
        if let Some(position) = storage.position(&self.identity, key, &item) {
            tracing::trace!(position, index, "duplicate insert ignored");
            return Ok(());
        }

        let mut storage = RwLockUpgradableReadGuard::upgrade(storage);
        storage.reserve_one()?;
        storage.insert_at(index, key, item);
        Ok(())
    }

    /// Positional assignment. Behaves exactly like [`insert`](Self::insert):
    /// the element currently at `index` moves right instead of being replaced.
    ///
    /// # Errors
    ///
    /// Same as [`insert`](Self::insert).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::collections::IndexedSet;
    ///
    /// let set = IndexedSet::from_items([1, 2]);
    /// set.set(0, 9).unwrap();
    /// assert_eq!(set.to_vec(), vec![9, 1, 2]);
    /// ```
    pub fn set(&self, index: usize, item: T) -> Result<(), IndexedSetError> {
        self.insert(index, item)
    }

    /// Removes and returns the element at `index`.
    ///
    /// Indices at or past `len()` are a no-op returning `None`. The bounds
    /// check runs under an upgradeable read guard; the exclusive lock is only
    /// taken when an element is actually removed.
    pub fn remove_at(&self, index: usize) -> Option<T> {
        let storage = self.storage.upgradable_read();
        if index >= storage.count {
            tracing::trace!(index, count = storage.count, "remove_at past live region ignored");
            return None;
        }
        let mut storage = RwLockUpgradableReadGuard::upgrade(storage);
        Some(storage.remove_at(index))
    }

    /// Removes the element with the same identity as `item`.
    ///
    /// Returns `false` without mutating when no such element exists.
    pub fn remove(&self, item: &T) -> bool {
        let key = self.identity.key(item);
        let storage = self.storage.upgradable_read();
        let Some(index) = storage.position(&self.identity, key, item) else {
            return false;
        };
        let mut storage = RwLockUpgradableReadGuard::upgrade(storage);
        storage.remove_at(index);
        true
    }

    /// Returns `true` if an element with the same identity as `item` is stored.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        let key = self.identity.key(item);
        self.storage
            .read()
            .position(&self.identity, key, item)
            .is_some()
    }

    /// Returns the position of the element with the same identity as `item`.
    ///
    /// # Errors
    ///
    /// [`IndexedSetError::NotFound`] if no such element is stored. Use
    /// [`contains`](Self::contains) for a plain membership test.
    pub fn index_of(&self, item: &T) -> Result<usize, IndexedSetError> {
        let key = self.identity.key(item);
        self.storage
            .read()
            .position(&self.identity, key, item)
            .ok_or(IndexedSetError::NotFound)
    }

    /// Returns a copy of the element at `index`.
    ///
    /// Reading at or past `len()` yields `T::default()` instead of failing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::collections::IndexedSet;
    ///
    /// let set = IndexedSet::from_items([10, 20]);
    /// assert_eq!(set.get(1), 20);
    /// assert_eq!(set.get(2), 0);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> T {
        self.storage
            .read()
            .live()
            .get(index)
            .cloned()
            .unwrap_or_default()
    }

    /// Copies every backing slot, including the default-valued padding past
    /// `len()`, into `destination[offset..offset + capacity()]`.
    ///
    /// # Errors
    ///
    /// - [`IndexedSetError::DestinationTooSmall`] if the range does not fit
    /// - [`IndexedSetError::Disposed`] after [`dispose`](Self::dispose)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::collections::IndexedSet;
    ///
    /// let set = IndexedSet::from_items([4, 5]);
    /// let mut destination = [9; 4];
    /// set.copy_to(&mut destination, 1).unwrap();
    /// assert_eq!(destination, [9, 4, 5, 0]);
    /// ```
    pub fn copy_to(&self, destination: &mut [T], offset: usize) -> Result<(), IndexedSetError> {
        let storage = self.storage.read();
        self.ensure_live()?;

        let available = destination.len();
        let required = offset
            .checked_add(storage.capacity())
            .filter(|&required| required <= available)
            .ok_or(IndexedSetError::DestinationTooSmall {
                required: offset.saturating_add(storage.capacity()),
                available,
            })?;
        destination[offset..required].clone_from_slice(&storage.slots);
        Ok(())
    }

    /// Returns a snapshot of the live elements in index order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.storage.read().live().to_vec()
    }

    /// Drops every element and shrinks back to the minimal capacity.
    ///
    /// The arrays and the count are replaced in one exclusive section.
    ///
    /// # Errors
    ///
    /// [`IndexedSetError::Disposed`] after [`dispose`](Self::dispose).
    pub fn clear(&self) -> Result<(), IndexedSetError> {
        let mut storage = self.storage.write();
        self.ensure_live()?;
        let cleared = mem::replace(&mut *storage, Storage::minimal());
        drop(storage);

        tracing::debug!(count = cleared.count, "cleared indexed set");
        Ok(())
    }

    /// Returns an iterator over copies of the live elements in index order.
    ///
    /// The iterator holds the shared lock until it is exhausted or dropped, so
    /// writers on other threads block for its whole lifetime.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use primeset::collections::IndexedSet;
    ///
    /// let set = IndexedSet::from_items([1, 2, 3]);
    /// let doubled: Vec<i32> = set.iter().map(|value| value * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            storage: self.storage.read(),
            position: 0,
        }
    }
}

impl<T, S> Drop for IndexedSet<T, S> {
    fn drop(&mut self) {
        self.release(DisposalPath::Reclaimed);
    }
}

impl<T> Default for IndexedSet<T>
where
    T: Clone + Default + Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for IndexedSet<T>
where
    T: Clone + Default + Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<'a, T, S> IntoIterator for &'a IndexedSet<T, S>
where
    T: Clone + Default,
    S: IdentityStrategy<T>,
{
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, S> fmt::Debug for IndexedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.storage.read_recursive().live())
            .finish()
    }
}

impl<T: PartialEq, S, S2> PartialEq<IndexedSet<T, S2>> for IndexedSet<T, S> {
    fn eq(&self, other: &IndexedSet<T, S2>) -> bool {
        let left = self.storage.read_recursive();
        let right = other.storage.read_recursive();
        left.live() == right.live()
    }
}

impl<T: Eq, S> Eq for IndexedSet<T, S> {}

// =============================================================================
// Iter
// =============================================================================

/// Lock-holding iterator returned by [`IndexedSet::iter`].
///
/// Yields copies of the live elements. The shared lock is released when the
/// iterator is dropped.
pub struct Iter<'a, T> {
    storage: RwLockReadGuard<'a, Storage<T>>,
    position: usize,
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.storage.live().get(self.position)?.clone();
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.storage.count.saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Iter<'_, T> {}

impl<T: Clone> FusedIterator for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Iter")
            .field("position", &self.position)
            .field("count", &self.storage.count)
            .finish()
    }
}

// =============================================================================
// IndexedSetBuilder
// =============================================================================

/// Configures an [`IndexedSet`] before construction.
///
/// # Examples
///
/// ```rust
/// use primeset::collections::{HashOnly, IndexedSet};
///
/// let set = IndexedSet::builder()
///     .identity(HashOnly::new())
///     .capacity(20)
///     .build_from(["a", "b"]);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.capacity(), 23);
/// ```
pub struct IndexedSetBuilder<T, S = HashThenEq> {
    identity: S,
    capacity: Option<usize>,
    dispose_hook: Option<Arc<dyn DisposeHook>>,
    element: PhantomData<fn() -> T>,
}

impl<T> IndexedSetBuilder<T> {
    /// Creates a builder with the default identity strategy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            identity: HashThenEq::new(),
            capacity: None,
            dispose_hook: None,
            element: PhantomData,
        }
    }
}

impl<T> Default for IndexedSetBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> IndexedSetBuilder<T, S> {
    /// Replaces the identity strategy.
    #[must_use]
    pub fn identity<S2>(self, identity: S2) -> IndexedSetBuilder<T, S2> {
        IndexedSetBuilder {
            identity,
            capacity: self.capacity,
            dispose_hook: self.dispose_hook,
            element: PhantomData,
        }
    }

    /// Requests a minimum initial capacity.
    ///
    /// The set starts with the first table prime at least this large, or
    /// large enough for the initial items, whichever is bigger.
    #[must_use]
    pub fn capacity(mut self, hint: usize) -> Self {
        self.capacity = Some(hint);
        self
    }

    /// Registers a hook notified when the set releases its storage.
    #[must_use]
    pub fn dispose_hook<H>(mut self, hook: H) -> Self
    where
        H: DisposeHook + 'static,
    {
        self.dispose_hook = Some(Arc::new(hook));
        self
    }
}

impl<T, S> IndexedSetBuilder<T, S>
where
    T: Clone + Default,
    S: IdentityStrategy<T>,
{
    /// Builds an empty set.
    #[must_use]
    pub fn build(self) -> IndexedSet<T, S> {
        self.build_from(std::iter::empty())
    }

    /// Builds a set holding the distinct elements of `items` in first-occurrence order.
    #[must_use]
    pub fn build_from<I>(self, items: I) -> IndexedSet<T, S>
    where
        I: IntoIterator<Item = T>,
    {
        let entries = IndexedSet::<T, S>::distinct_entries(&self.identity, items);
        let mut storage = Storage::from_entries(entries);
        if let Some(hint) = self.capacity {
            let capacity = PrimeSizer::next_capacity(hint);
            if capacity > storage.capacity() {
                storage.grow_to(capacity);
            }
        }
        IndexedSet::assemble(self.identity, storage, self.dispose_hook)
    }
}

impl<T, S: fmt::Debug> fmt::Debug for IndexedSetBuilder<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IndexedSetBuilder")
            .field("identity", &self.identity)
            .field("capacity", &self.capacity)
            .field("dispose_hook", &self.dispose_hook.is_some())
            .finish()
    }
}


#[cfg(loom)]
mod loom_tests {
    use super::*;
    use loom::sync::atomic::AtomicUsize;
    use loom::thread;

    struct CountingHook(Arc<AtomicUsize>);

    impl DisposeHook for CountingHook {
        fn on_dispose(&self, _path: DisposalPath) {
            self.0.fetch_add(1, loom::sync::atomic::Ordering::SeqCst);
        }
    }

    /// Two threads race to dispose; the storage is released and the hook fires once.
    #[test]
    fn test_concurrent_dispose_releases_once() {
        loom::model(|| {
            let calls = Arc::new(AtomicUsize::new(0));
            let set: Arc<IndexedSet<u32>> = Arc::new(
                IndexedSet::builder()
                    .dispose_hook(CountingHook(Arc::clone(&calls)))
                    .build_from([1, 2, 3]),
            );
            let other = Arc::clone(&set);

            let handle = thread::spawn(move || other.dispose());
            set.dispose();
            handle.join().unwrap();

            assert!(set.is_disposed());
            assert_eq!(set.capacity(), 0);
            drop(set);
            assert_eq!(calls.load(loom::sync::atomic::Ordering::SeqCst), 1);
        });
    }

    /// Dispose racing drop of the last other handle still fires exactly once.
    #[test]
    fn test_dispose_and_reclaim_fire_once() {
        loom::model(|| {
            let calls = Arc::new(AtomicUsize::new(0));
            let set: Arc<IndexedSet<u32>> = Arc::new(
                IndexedSet::builder()
                    .dispose_hook(CountingHook(Arc::clone(&calls)))
                    .build(),
            );
            let other = Arc::clone(&set);

            let handle = thread::spawn(move || drop(other));
            set.dispose();
            handle.join().unwrap();
            drop(set);

            assert_eq!(calls.load(loom::sync::atomic::Ordering::SeqCst), 1);
        });
    }
}
