//! Hash strategies for [`ChainedHashSet`](super::ChainedHashSet).
//!
//! The hash function is a value injected at construction, so two tables of
//! the same element type can hash differently. Any `Fn(&T) -> u64` closure
//! qualifies, as does any [`BuildHasher`] wrapped in [`BuildHasherFunction`].
//!
//! # Feature Flags
//!
//! - `fxhash`: [`FxHashFunction`] backed by `rustc-hash`
//! - `ahash`: [`AHashFunction`] backed by `ahash`

use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

/// A strategy that maps an element to a 64-bit hash.
///
/// The table reduces the hash modulo its capacity to pick a bucket, so the
/// strategy must return the same value for equal elements for as long as
/// they are stored.
///
/// # Examples
///
/// ```rust
/// use setwise::set::HashFunction;
///
/// let length = |word: &String| word.len() as u64;
/// assert_eq!(length.hash(&"four".to_string()), 4);
/// ```
pub trait HashFunction<T: ?Sized> {
    /// Computes the hash of `element`.
    fn hash(&self, element: &T) -> u64;
}

impl<T: ?Sized, F> HashFunction<T> for F
where
    F: Fn(&T) -> u64,
{
    #[inline]
    fn hash(&self, element: &T) -> u64 {
        self(element)
    }
}

/// Hashes elements implementing [`Hash`] with a [`BuildHasher`].
///
/// # Examples
///
/// ```rust
/// use setwise::set::{BuildHasherFunction, HashFunction};
/// use std::collections::hash_map::RandomState;
///
/// let strategy = BuildHasherFunction::new(RandomState::new());
/// assert_eq!(strategy.hash(&42), strategy.hash(&42));
/// ```
#[derive(Clone, Debug, Default)]
pub struct BuildHasherFunction<S> {
    build_hasher: S,
}

impl<S> BuildHasherFunction<S> {
    /// Wraps `build_hasher`.
    #[inline]
    #[must_use]
    pub const fn new(build_hasher: S) -> Self {
        Self { build_hasher }
    }
}

impl<T: Hash + ?Sized, S: BuildHasher> HashFunction<T> for BuildHasherFunction<S> {
    #[inline]
    fn hash(&self, element: &T) -> u64 {
        self.build_hasher.hash_one(element)
    }
}

/// The strategy used when none is given: std's `DefaultHasher` with fixed
/// keys, so bucket placement is reproducible between runs.
pub type DefaultHashFunction = BuildHasherFunction<BuildHasherDefault<DefaultHasher>>;

/// Fast, non-cryptographic hashing from `rustc-hash`.
#[cfg(feature = "fxhash")]
pub type FxHashFunction = BuildHasherFunction<rustc_hash::FxBuildHasher>;

/// DoS-resistant hashing from `ahash`, seeded per table.
#[cfg(feature = "ahash")]
pub type AHashFunction = BuildHasherFunction<ahash::RandomState>;
