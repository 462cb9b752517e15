//! Resizable separately-chained hash set.
//!
//! This module provides [`ChainedHashSet`], a mutable, insertion-only hash set
//! whose hash function is supplied by the caller.
//!
//! # Overview
//!
//! The table is a fixed-length array of buckets ("capacity"), each holding a
//! singly-linked chain of the elements that hashed to it. Before an insertion
//! would push the load factor (size / capacity) above 0.8, the array doubles
//! and every element is moved to bucket `hash(element) % new_capacity`.
//!
//! - O(1 + chain length) contains
//! - O(1) amortized insert, O(N) on the insert that triggers a resize
//! - O(1) len and capacity
//!
//! # Examples
//!
//! ```rust
//! use setwise::set::ChainedHashSet;
//!
//! let mut set = ChainedHashSet::new();
//! set.insert("apple");
//! set.insert("pear");
//! set.insert("apple");
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(&"pear"));
//! ```

mod chain;
mod hashing;

use std::fmt;
use std::num::NonZeroUsize;

use super::{Set, SetError};
use chain::{Chain, ChainIterator};

pub use hashing::{BuildHasherFunction, DefaultHashFunction, HashFunction};

#[cfg(feature = "ahash")]
pub use hashing::AHashFunction;
#[cfg(feature = "fxhash")]
pub use hashing::FxHashFunction;

// =============================================================================
// Constants
// =============================================================================

/// Number of buckets in a table created without an explicit capacity.
pub const DEFAULT_CAPACITY: usize = 10;

/// Factor by which the bucket array grows.
const GROWTH_FACTOR: usize = 2;

/// Maximum load factor, as the fraction `4 / 5`.
const MAX_LOAD_NUMERATOR: usize = 4;
const MAX_LOAD_DENOMINATOR: usize = 5;

static_assertions::const_assert!(DEFAULT_CAPACITY > 0);
static_assertions::const_assert!(GROWTH_FACTOR > 1);
static_assertions::const_assert!(MAX_LOAD_NUMERATOR < MAX_LOAD_DENOMINATOR);

/// Returns `true` if `size` elements in `capacity` buckets would exceed the
/// maximum load factor.
#[inline]
const fn exceeds_max_load(size: usize, capacity: usize) -> bool {
    size.saturating_mul(MAX_LOAD_DENOMINATOR) > capacity.saturating_mul(MAX_LOAD_NUMERATOR)
}

/// Reduces a hash to a bucket index.
#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn reduce(hash: u64, capacity: usize) -> usize {
    // The remainder is below `capacity`, so it always fits back into usize.
    (hash % capacity as u64) as usize
}

fn allocate_buckets<T>(capacity: usize) -> Box<[Chain<T>]> {
    (0..capacity).map(|_| Chain::new()).collect()
}

// =============================================================================
// ChainedHashSet Definition
// =============================================================================

/// A mutable, insertion-only hash set using separate chaining.
///
/// `H` is the hash strategy; see [`HashFunction`]. Elements only need
/// `PartialEq` for chain scans, which lets callers hash types that do not
/// implement [`Hash`](std::hash::Hash) by passing a closure.
///
/// # Time Complexity
///
/// | Operation            | Complexity           |
/// |----------------------|----------------------|
/// | `new`                | O(capacity)          |
/// | `contains`           | O(1 + chain length)  |
/// | `insert`             | O(1) amortized       |
/// | `len`                | O(1)                 |
/// | `elements_at_index`  | O(1)                 |
/// | `is_element_at_index`| O(chain length)      |
///
/// # Examples
///
/// ```rust
/// use setwise::set::ChainedHashSet;
///
/// // Identity hashing makes bucket placement easy to predict.
/// let mut set: ChainedHashSet<u64, _> = ChainedHashSet::with_hash_function(|value: &u64| *value);
/// set.insert(3);
/// set.insert(13);
///
/// assert_eq!(set.elements_at_index(3), 2);
/// assert!(set.is_element_at_index(&13, 3));
/// assert_eq!(set.elements_at_index(99), 0);
/// ```
#[derive(Clone)]
pub struct ChainedHashSet<T, H = DefaultHashFunction> {
    buckets: Box<[Chain<T>]>,
    /// Number of elements across all chains
    length: usize,
    hash_function: H,
}

static_assertions::assert_impl_all!(ChainedHashSet<i32>: Clone, Default, Send, Sync);
static_assertions::assert_impl_all!(ChainedHashSet<String>: Clone, Default, Send, Sync);

impl<T> ChainedHashSet<T> {
    /// Creates an empty set using [`DefaultHashFunction`] and
    /// [`DEFAULT_CAPACITY`] buckets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::{ChainedHashSet, DEFAULT_CAPACITY};
    ///
    /// let set: ChainedHashSet<i32> = ChainedHashSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), DEFAULT_CAPACITY);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hash_function(DefaultHashFunction::default())
    }
}

impl<T, H> ChainedHashSet<T, H> {
    /// Creates an empty set that hashes with `hash_function`, starting with
    /// [`DEFAULT_CAPACITY`] buckets.
    #[must_use]
    pub fn with_hash_function(hash_function: H) -> Self {
        Self {
            buckets: allocate_buckets(DEFAULT_CAPACITY),
            length: 0,
            hash_function,
        }
    }

    /// Creates an empty set with `capacity` buckets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::ChainedHashSet;
    /// use std::num::NonZeroUsize;
    ///
    /// let capacity = NonZeroUsize::new(64).unwrap();
    /// let set: ChainedHashSet<u64, _> =
    ///     ChainedHashSet::with_capacity_and_hash_function(capacity, |value: &u64| *value);
    /// assert_eq!(set.capacity(), 64);
    /// ```
    #[must_use]
    pub fn with_capacity_and_hash_function(capacity: NonZeroUsize, hash_function: H) -> Self {
        Self {
            buckets: allocate_buckets(capacity.get()),
            length: 0,
            hash_function,
        }
    }

    /// Creates an empty set with `capacity` buckets.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::ZeroCapacity`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::{ChainedHashSet, DefaultHashFunction, SetError};
    ///
    /// let result: Result<ChainedHashSet<i32>, SetError> =
    ///     ChainedHashSet::try_with_capacity_and_hash_function(0, DefaultHashFunction::default());
    /// assert_eq!(result.err(), Some(SetError::ZeroCapacity));
    /// ```
    pub fn try_with_capacity_and_hash_function(
        capacity: usize,
        hash_function: H,
    ) -> Result<Self, SetError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(SetError::ZeroCapacity)?;
        Ok(Self::with_capacity_and_hash_function(capacity, hash_function))
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of buckets.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the ratio of elements to buckets.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.length as f64 / self.buckets.len() as f64
    }

    /// Returns the hash strategy this set was built with.
    #[inline]
    #[must_use]
    pub const fn hash_function(&self) -> &H {
        &self.hash_function
    }

    /// Returns the number of elements stored in the bucket at `index`.
    ///
    /// An index outside `0..capacity()` has no elements, so the answer is 0.
    #[must_use]
    pub fn elements_at_index(&self, index: usize) -> usize {
        self.buckets.get(index).map_or(0, Chain::len)
    }

    /// Returns an iterator over the elements, bucket by bucket.
    ///
    /// The order depends on the hash function and the current capacity.
    #[must_use]
    pub fn iter(&self) -> ChainedHashSetIterator<'_, T> {
        ChainedHashSetIterator {
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.length,
        }
    }
}

impl<T: PartialEq, H> ChainedHashSet<T, H> {
    /// Returns `true` if `element` is stored in the bucket at `index`.
    ///
    /// An index outside `0..capacity()` answers `false`.
    #[must_use]
    pub fn is_element_at_index(&self, element: &T, index: usize) -> bool {
        self.buckets
            .get(index)
            .is_some_and(|chain| chain.contains(element))
    }
}

impl<T: PartialEq, H: HashFunction<T>> ChainedHashSet<T, H> {
    /// Returns `true` if the set contains `element`.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        let index = reduce(self.hash_function.hash(element), self.buckets.len());
        self.buckets[index].contains(element)
    }

    /// Inserts an element into the set.
    ///
    /// Returns `true` if the element was added, `false` if it was already
    /// present. When the new element would push the load factor above 0.8,
    /// the bucket array doubles before the element is placed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::ChainedHashSet;
    ///
    /// let mut set: ChainedHashSet<u64, _> = ChainedHashSet::with_hash_function(|value: &u64| *value);
    /// for value in 0..8 {
    ///     set.insert(value);
    /// }
    /// assert_eq!(set.capacity(), 10);
    ///
    /// assert!(set.insert(8));
    /// assert_eq!(set.capacity(), 20);
    /// assert!(!set.insert(8));
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        let hash = self.hash_function.hash(&element);
        if self.buckets[reduce(hash, self.buckets.len())].contains(&element) {
            return false;
        }

        if exceeds_max_load(self.length + 1, self.buckets.len()) {
            self.grow();
        }

        let index = reduce(hash, self.buckets.len());
        self.buckets[index].push_front(element);
        self.length += 1;
        true
    }

    /// Doubles the bucket array and rehashes every element into it.
    fn grow(&mut self) {
        let previous_capacity = self.buckets.len();
        let new_capacity = previous_capacity.saturating_mul(GROWTH_FACTOR);
        let mut buckets = allocate_buckets(new_capacity);

        let hash_function = &self.hash_function;
        for chain in self.buckets.iter_mut() {
            chain.drain_into(&mut buckets, |element| {
                reduce(hash_function.hash(element), new_capacity)
            });
        }
        self.buckets = buckets;

        tracing::debug!(
            previous_capacity,
            new_capacity,
            size = self.length,
            "resized chained hash set"
        );
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`ChainedHashSet`].
pub struct ChainedHashSetIterator<'a, T> {
    buckets: std::slice::Iter<'a, Chain<T>>,
    chain: Option<ChainIterator<'a, T>>,
    remaining: usize,
}

impl<'a, T> Iterator for ChainedHashSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(element) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(element);
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ChainedHashSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

// =============================================================================
// Set Implementation
// =============================================================================

impl<T: PartialEq, H: HashFunction<T>> Set<T> for ChainedHashSet<T, H> {
    #[inline]
    fn add(&mut self, element: T) {
        self.insert(element);
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    #[inline]
    fn size(&self) -> usize {
        self.length
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, H: Default> Default for ChainedHashSet<T, H> {
    #[inline]
    fn default() -> Self {
        Self::with_hash_function(H::default())
    }
}

impl<T: PartialEq, H: HashFunction<T> + Default> FromIterator<T> for ChainedHashSet<T, H> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq, H: HashFunction<T>> Extend<T> for ChainedHashSet<T, H> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T, H> IntoIterator for &'a ChainedHashSet<T, H> {
    type Item = &'a T;
    type IntoIter = ChainedHashSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq, H: HashFunction<T>> PartialEq for ChainedHashSet<T, H> {
    /// Two sets are equal when they hold the same elements, whatever their
    /// capacities.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Eq, H: HashFunction<T>> Eq for ChainedHashSet<T, H> {}

impl<T: fmt::Debug, H> fmt::Debug for ChainedHashSet<T, H> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
