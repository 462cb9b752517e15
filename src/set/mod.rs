//! Mutable, insertion-only sets.
//!
//! This module provides the [`Set`] capability trait and two interchangeable
//! implementations of it:
//!
//! - [`AvlSet`]: ordered set backed by an AVL tree (balancing can be turned off)
//! - [`ChainedHashSet`]: separately-chained hash table with an injected hash
//!   function and automatic growth
//!
//! Clients that only need `add`, `contains` and `size` should depend on
//! [`Set`] rather than on a concrete type.
//!
//! # Examples
//!
//! ## `AvlSet`
//!
//! ```rust
//! use setwise::set::{AvlSet, Set};
//!
//! let mut set = AvlSet::new();
//! for value in [5, 3, 8, 1, 4, 7, 9] {
//!     set.add(value);
//! }
//!
//! let mut sorted = Vec::new();
//! set.inorder(|value| sorted.push(*value));
//! assert_eq!(sorted, vec![1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(set.height(), 2);
//! ```
//!
//! ## `ChainedHashSet`
//!
//! ```rust
//! use setwise::set::{ChainedHashSet, Set};
//!
//! let mut set: ChainedHashSet<u64, _> = ChainedHashSet::with_hash_function(|value: &u64| *value);
//! for value in 0..9 {
//!     set.add(value);
//! }
//!
//! // 9 / 10 would exceed the 0.8 load factor, so the table doubled first
//! assert_eq!(set.capacity(), 20);
//! assert!(set.is_element_at_index(&3, 3));
//! ```
//!
//! ## Programming against the trait
//!
//! ```rust
//! use setwise::set::{AvlSet, ChainedHashSet, Set};
//!
//! fn fill(set: &mut dyn Set<String>) {
//!     set.add("alpha".to_string());
//!     set.add("beta".to_string());
//!     set.add("alpha".to_string());
//! }
//!
//! let mut tree: AvlSet<String> = AvlSet::new();
//! let mut table: ChainedHashSet<String> = ChainedHashSet::new();
//! fill(&mut tree);
//! fill(&mut table);
//! assert_eq!(tree.size(), 2);
//! assert_eq!(table.size(), 2);
//! ```

mod error;

#[cfg(feature = "avl")]
mod avl;

#[cfg(feature = "hash")]
mod hash;

pub use error::SetError;

#[cfg(feature = "avl")]
pub use avl::AvlSet;
#[cfg(feature = "avl")]
pub use avl::Balancing;
#[cfg(feature = "avl")]
pub use avl::{Inorder, Postorder, Preorder};

#[cfg(feature = "hash")]
pub use hash::BuildHasherFunction;
#[cfg(feature = "hash")]
pub use hash::ChainedHashSet;
#[cfg(feature = "hash")]
pub use hash::ChainedHashSetIterator;
#[cfg(feature = "hash")]
pub use hash::DEFAULT_CAPACITY;
#[cfg(feature = "hash")]
pub use hash::DefaultHashFunction;
#[cfg(feature = "hash")]
pub use hash::HashFunction;

#[cfg(feature = "ahash")]
pub use hash::AHashFunction;
#[cfg(feature = "fxhash")]
pub use hash::FxHashFunction;

// =============================================================================
// Set Capability Trait
// =============================================================================

/// The capability every set implementation in this crate provides.
///
/// Sets are insertion-only: there is no way to remove an element once it has
/// been added.
///
/// The trait is object safe, so callers that do not care about the backing
/// representation can hold a `&dyn Set<T>`.
///
/// # Examples
///
/// ```rust
/// use setwise::set::{AvlSet, Set};
///
/// fn count_known(set: &dyn Set<i32>, candidates: &[i32]) -> usize {
///     candidates.iter().filter(|candidate| set.contains(candidate)).count()
/// }
///
/// let set: AvlSet<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(count_known(&set, &[0, 1, 2, 5]), 2);
/// ```
pub trait Set<T> {
    /// Adds `element` to the set.
    ///
    /// Adding an element that is already present has no effect.
    fn add(&mut self, element: T);

    /// Returns `true` if `element` is in the set.
    fn contains(&self, element: &T) -> bool;

    /// Returns the number of distinct elements in the set.
    fn size(&self) -> usize;

    /// Returns `true` if this is a working implementation.
    ///
    /// Every implementation shipped by this crate is complete, so the
    /// provided method always answers `true`. A placeholder backend may
    /// override it to advertise that it cannot be used yet.
    fn is_implemented(&self) -> bool {
        true
    }

    /// Returns `true` if the set holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T, S: Set<T> + ?Sized> Set<T> for &mut S {
    #[inline]
    fn add(&mut self, element: T) {
        (**self).add(element);
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        (**self).contains(element)
    }

    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }

    #[inline]
    fn is_implemented(&self) -> bool {
        (**self).is_implemented()
    }
}

impl<T, S: Set<T> + ?Sized> Set<T> for Box<S> {
    #[inline]
    fn add(&mut self, element: T) {
        (**self).add(element);
    }

    #[inline]
    fn contains(&self, element: &T) -> bool {
        (**self).contains(element)
    }

    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }

    #[inline]
    fn is_implemented(&self) -> bool {
        (**self).is_implemented()
    }
}

// =============================================================================
// Tests
// =============================================================================
