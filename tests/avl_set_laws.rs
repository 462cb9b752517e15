#![cfg(feature = "avl")]
//! Property-based tests for AvlSet.
//!
//! These tests verify that AvlSet keeps its ordering and balance invariants
//! for arbitrary insertion sequences using proptest.

use proptest::prelude::*;
use setwise::set::{AvlSet, Set};
use std::collections::BTreeSet;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

/// Strategy for generating insertion sequences with frequent duplicates.
fn insertion_sequence(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-200..200_i32, 0..max_size)
}

/// The smallest height any binary tree with `count` nodes can have.
fn minimum_height(count: usize) -> i32 {
    if count == 0 {
        -1
    } else {
        i32::try_from((count + 1).next_power_of_two().trailing_zeros()).unwrap_or(i32::MAX) - 1
    }
}

/// The largest height an AVL tree with `count` nodes can have.
fn maximum_avl_height(count: usize) -> i32 {
    // Sparsest AVL tree of height h has N(h) = N(h-1) + N(h-2) + 1 nodes.
    let (mut sparsest, mut next) = (1_usize, 2_usize);
    let mut height = 0;
    while next <= count {
        (sparsest, next) = (next, next + sparsest + 1);
        height += 1;
    }
    if count == 0 { -1 } else { height }
}

// =============================================================================
// Balance Laws
// =============================================================================

proptest! {
    /// Law: every prefix of an insertion sequence leaves the tree balanced.
    #[test]
    fn prop_balanced_after_every_add(values in insertion_sequence(200)) {
        let mut set = AvlSet::new();
        for value in values {
            set.add(value);
            prop_assert!(set.is_balanced());
        }
    }

    /// Law: the height stays within the AVL bounds for its size.
    #[test]
    fn prop_height_within_avl_bounds(values in insertion_sequence(300)) {
        let set: AvlSet<i32> = values.into_iter().collect();
        prop_assert!(set.height() >= minimum_height(set.size()));
        prop_assert!(set.height() <= maximum_avl_height(set.size()));
    }

    /// Law: without balancing the tree height is never below the minimum and
    /// never above size - 1.
    #[test]
    fn prop_unbalanced_height_bounds(values in insertion_sequence(200)) {
        let mut set = AvlSet::unbalanced();
        set.extend(values);
        let size = i32::try_from(set.size()).unwrap_or(i32::MAX);
        prop_assert!(set.height() >= minimum_height(set.size()));
        prop_assert!(set.height() <= size - 1);
    }
}

// =============================================================================
// Membership Laws
// =============================================================================

proptest! {
    /// Law: inorder traversal yields the distinct inputs in ascending order.
    #[test]
    fn prop_inorder_is_sorted_distinct(values in insertion_sequence(200)) {
        let expected: Vec<i32> = values.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        let set: AvlSet<i32> = values.into_iter().collect();
        prop_assert_eq!(set.iter().copied().collect::<Vec<_>>(), expected);
    }

    /// Law: size counts distinct elements.
    #[test]
    fn prop_size_is_distinct_count(values in insertion_sequence(200)) {
        let distinct = values.iter().collect::<BTreeSet<_>>().len();
        let set: AvlSet<i32> = values.into_iter().collect();
        prop_assert_eq!(set.size(), distinct);
    }

    /// Law: contains(x) holds exactly for added elements.
    #[test]
    fn prop_contains_iff_added(values in insertion_sequence(100), probe in -250..250_i32) {
        let set: AvlSet<i32> = values.iter().copied().collect();
        prop_assert_eq!(set.contains(&probe), values.contains(&probe));
    }

    /// Law: adding an element twice is the same as adding it once.
    #[test]
    fn prop_add_is_idempotent(values in insertion_sequence(100), value: i32) {
        let mut once: AvlSet<i32> = values.iter().copied().collect();
        once.add(value);
        let mut twice = once.clone();
        twice.add(value);
        prop_assert_eq!(twice.size(), once.size());
        prop_assert_eq!(
            twice.preorder_iter().collect::<Vec<_>>(),
            once.preorder_iter().collect::<Vec<_>>()
        );
    }

    /// Law: balancing changes the shape, never the contents.
    #[test]
    fn prop_balancing_preserves_contents(values in insertion_sequence(150)) {
        let balanced: AvlSet<i32> = values.iter().copied().collect();
        let mut unbalanced = AvlSet::unbalanced();
        unbalanced.extend(values);
        prop_assert_eq!(balanced, unbalanced);
    }
}

// =============================================================================
// Traversal Laws
// =============================================================================

proptest! {
    /// Law: preorder starts at the root and postorder ends there, and both
    /// visit every element once.
    #[test]
    fn prop_traversals_are_permutations(values in insertion_sequence(150)) {
        let set: AvlSet<i32> = values.into_iter().collect();
        let inorder: Vec<i32> = set.iter().copied().collect();

        let mut preorder: Vec<i32> = set.preorder_iter().copied().collect();
        let mut postorder: Vec<i32> = set.postorder_iter().copied().collect();
        prop_assert_eq!(preorder.first(), postorder.last());

        preorder.sort_unstable();
        postorder.sort_unstable();
        prop_assert_eq!(&preorder, &inorder);
        prop_assert_eq!(&postorder, &inorder);
    }
}
