//! # setwise
//!
//! Mutable, insertion-only sets with interchangeable backing structures.
//!
//! ## Overview
//!
//! - **Set capability**: the [`set::Set`] trait (`add`, `contains`, `size`)
//!   that clients program against
//! - **AVL tree**: [`set::AvlSet`], an ordered set with optional AVL
//!   rebalancing and preorder/inorder/postorder traversal
//! - **Chained hash table**: [`set::ChainedHashSet`], separate chaining with
//!   an injected hash function and load-factor-driven growth
//! - **Word checking**: [`word_checker::WordChecker`], spelling suggestions
//!   built only on `contains`
//!
//! ## Feature Flags
//!
//! - `avl`: [`set::AvlSet`]
//! - `hash`: [`set::ChainedHashSet`]
//! - `word-checker`: [`word_checker`] (enables `hash`)
//! - `fxhash`: `rustc-hash` backed hash strategy
//! - `ahash`: `ahash` backed hash strategy
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let mut tree = AvlSet::new();
//! let mut table = ChainedHashSet::new();
//! for word in ["delta", "alpha", "charlie", "alpha"] {
//!     tree.add(word);
//!     table.add(word);
//! }
//!
//! assert_eq!(tree.size(), 3);
//! assert_eq!(table.size(), 3);
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec!["alpha", "charlie", "delta"]);
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
/// use setwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;

    #[cfg(feature = "word-checker")]
    pub use crate::word_checker::*;
}

pub mod set;

#[cfg(feature = "word-checker")]
pub mod word_checker;
