//! Ordered set backed by an AVL tree.
//!
//! This module provides [`AvlSet`], a mutable, insertion-only ordered set.
//!
//! # Overview
//!
//! `AvlSet` is a binary search tree that, by default, keeps itself height
//! balanced with AVL rotations after every insertion. Balancing can be turned
//! off at construction time, in which case the structure is a plain binary
//! search tree and may degenerate into a list (for example when elements
//! arrive in ascending order).
//!
//! - O(log N) insert and contains when balanced, O(N) worst case when not
//! - O(1) size and height
//! - O(N) preorder, inorder and postorder traversal
//!
//! # Internal Structure
//!
//! Nodes live in an arena owned by the set and refer to their children by
//! index. Insertion records the search path and retraces it bottom-up,
//! refreshing cached heights and rotating where a balance factor leaves
//! `{-1, 0, 1}`. Lookups and traversals are loops over explicit stacks, so the
//! depth of the tree never translates into call-stack depth.

mod node;
mod traversal;

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use super::Set;
use node::{Direction, EMPTY_HEIGHT, Node, NodeIndex, balance_factor, update_height};

pub use traversal::{Inorder, Postorder, Preorder};

/// Search-path entries kept inline before spilling to the heap.
const PATH_INLINE_CAPACITY: usize = 48;

// =============================================================================
// Balancing
// =============================================================================

/// Whether an [`AvlSet`] rebalances itself after insertion.
///
/// The choice is fixed when the set is created.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Balancing {
    /// Apply AVL rotations so that every balance factor stays in `{-1, 0, 1}`.
    #[default]
    Enabled,
    /// Behave as a plain binary search tree.
    Disabled,
}

/// The restructuring applied to an unbalanced subtree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Rotation {
    /// Left-heavy, new value went into the left child's left subtree.
    Right,
    /// Right-heavy, new value went into the right child's right subtree.
    Left,
    /// Left-heavy, new value went into the left child's right subtree.
    LeftRight,
    /// Right-heavy, new value went into the right child's left subtree.
    RightLeft,
}

impl Rotation {
    /// Picks the rotation from the side the subtree is heavy on and the side
    /// of the heavy child that received the new value.
    const fn classify(heavy: Direction, inner: Direction) -> Self {
        match (heavy, inner) {
            (Direction::Left, Direction::Left) => Self::Right,
            (Direction::Right, Direction::Right) => Self::Left,
            (Direction::Left, Direction::Right) => Self::LeftRight,
            (Direction::Right, Direction::Left) => Self::RightLeft,
        }
    }
}

// =============================================================================
// AvlSet Definition
// =============================================================================

/// A mutable, insertion-only ordered set based on an AVL tree.
///
/// Elements must implement `Ord`. Inorder traversal always yields the
/// elements in ascending order, whether or not balancing is enabled.
///
/// # Time Complexity
///
/// | Operation    | Balanced  | Unbalanced (worst) |
/// |--------------|-----------|--------------------|
/// | `insert`     | O(log N)  | O(N)               |
/// | `contains`   | O(log N)  | O(N)               |
/// | `len`        | O(1)      | O(1)               |
/// | `height`     | O(1)      | O(1)               |
/// | traversals   | O(N)      | O(N)               |
///
/// # Examples
///
/// ```rust
/// use setwise::set::AvlSet;
///
/// let mut set = AvlSet::new();
/// for value in 1..=7 {
///     set.insert(value);
/// }
/// assert_eq!(set.height(), 2);
///
/// let mut degenerate = AvlSet::unbalanced();
/// for value in 1..=7 {
///     degenerate.insert(value);
/// }
/// assert_eq!(degenerate.height(), 6);
/// ```
#[derive(Clone)]
pub struct AvlSet<T> {
    /// Node arena. Since nothing is ever removed, its length is the set size.
    nodes: Vec<Node<T>>,
    /// Root node, `None` while the set is empty
    root: Option<NodeIndex>,
    balancing: Balancing,
}

static_assertions::assert_impl_all!(AvlSet<i32>: Clone, Default, Send, Sync);
static_assertions::assert_impl_all!(AvlSet<String>: Clone, Default, Send, Sync);

impl<T> AvlSet<T> {
    /// Creates a new empty set with balancing enabled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::{AvlSet, Balancing};
    ///
    /// let set: AvlSet<i32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.balancing(), Balancing::Enabled);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_balancing(Balancing::Enabled)
    }

    /// Creates a new empty set with the given balancing mode.
    #[inline]
    #[must_use]
    pub const fn with_balancing(balancing: Balancing) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            balancing,
        }
    }

    /// Creates a new empty set that never rebalances.
    ///
    /// Useful for comparing against the balanced tree; inserting sorted data
    /// produces a tree whose height equals its size minus one.
    #[inline]
    #[must_use]
    pub const fn unbalanced() -> Self {
        Self::with_balancing(Balancing::Disabled)
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the balancing mode chosen at construction.
    #[inline]
    #[must_use]
    pub const fn balancing(&self) -> Balancing {
        self.balancing
    }

    /// Returns the height of the tree.
    ///
    /// A single node has height 0; an empty tree has height -1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), -1);
    /// set.insert("only");
    /// assert_eq!(set.height(), 0);
    /// ```
    #[must_use]
    pub fn height(&self) -> i32 {
        self.root
            .map_or(EMPTY_HEIGHT, |index| self.nodes[index].height)
    }

    /// Returns `true` if every node's balance factor is -1, 0 or 1.
    ///
    /// Always true for a set with balancing enabled; an unbalanced set may
    /// or may not satisfy it depending on insertion order.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        (0..self.nodes.len()).all(|index| balance_factor(&self.nodes, index).abs() <= 1)
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::AvlSet;
    ///
    /// let set: AvlSet<i32> = [3, 1, 2].into_iter().collect();
    /// let values: Vec<&i32> = set.iter().collect();
    /// assert_eq!(values, vec![&1, &2, &3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Inorder<'_, T> {
        Inorder::new(&self.nodes, self.root)
    }

    /// Returns an iterator that yields each node before its subtrees.
    #[must_use]
    pub fn preorder_iter(&self) -> Preorder<'_, T> {
        Preorder::new(&self.nodes, self.root)
    }

    /// Returns an iterator that yields each node after its subtrees.
    #[must_use]
    pub fn postorder_iter(&self) -> Postorder<'_, T> {
        Postorder::new(&self.nodes, self.root)
    }

    /// Calls `visit` for every element in preorder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::AvlSet;
    ///
    /// let set: AvlSet<i32> = [2, 1, 3].into_iter().collect();
    /// let mut visited = Vec::new();
    /// set.preorder(|value| visited.push(*value));
    /// assert_eq!(visited, vec![2, 1, 3]);
    /// ```
    pub fn preorder<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.preorder_iter().for_each(visit);
    }

    /// Calls `visit` for every element in ascending order.
    pub fn inorder<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visit);
    }

    /// Calls `visit` for every element in postorder.
    pub fn postorder<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.postorder_iter().for_each(visit);
    }
}

impl<T: Ord> AvlSet<T> {
    /// Returns `true` if the set contains the element.
    ///
    /// The element may be any borrowed form of the set's element type, but
    /// the ordering on the borrowed form must match the ordering on the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::AvlSet;
    ///
    /// let set: AvlSet<String> = ["apple".to_string()].into_iter().collect();
    /// assert!(set.contains("apple"));
    /// assert!(!set.contains("pear"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root;
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            cursor = match element.cmp(node.value.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Inserts an element into the set.
    ///
    /// Returns `true` if the element was added, `false` if it was already
    /// present (in which case the set is left untouched).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::set::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        let mut path: SmallVec<[(NodeIndex, Direction); PATH_INLINE_CAPACITY]> = SmallVec::new();
        let mut cursor = self.root;
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            let direction = match element.cmp(&node.value) {
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
                Ordering::Equal => return false,
            };
            path.push((index, direction));
            cursor = node.child(direction);
        }

        let inserted = self.nodes.len();
        self.nodes.push(Node::leaf(element));
        self.link(path.last().copied(), inserted);
        self.retrace(&path);
        true
    }

    /// Walks the insertion path bottom-up, refreshing heights and rotating
    /// the lowest unbalanced subtree.
    ///
    /// `path` holds every ancestor of the new leaf together with the
    /// direction taken from it, ordered from the root down.
    fn retrace(&mut self, path: &[(NodeIndex, Direction)]) {
        for depth in (0..path.len()).rev() {
            let (index, heavy) = path[depth];
            let previous_height = self.nodes[index].height;
            update_height(&mut self.nodes, index);

            if self.balancing == Balancing::Enabled
                && balance_factor(&self.nodes, index).abs() > 1
            {
                // The new leaf is at least two levels below an unbalanced
                // node, so the heavy child is on the path as well.
                let Some(&(_, inner)) = path.get(depth + 1) else {
                    return;
                };
                let rotation = Rotation::classify(heavy, inner);
                let subtree_root = self.rotate(index, rotation);
                let parent = depth.checked_sub(1).map(|above| path[above]);
                self.link(parent, subtree_root);
                tracing::trace!(
                    ?rotation,
                    subtree_height = self.nodes[subtree_root].height,
                    "rebalanced subtree"
                );
                // A rotation after insertion restores the subtree's previous
                // height, so nothing above it changes.
                return;
            }

            if self.nodes[index].height == previous_height {
                return;
            }
        }
    }
}

impl<T> AvlSet<T> {
    /// Attaches `child` below `parent`, or makes it the root.
    fn link(&mut self, parent: Option<(NodeIndex, Direction)>, child: NodeIndex) {
        match parent {
            Some((index, direction)) => self.nodes[index].set_child(direction, Some(child)),
            None => self.root = Some(child),
        }
    }

    /// Applies `rotation` at `index` and returns the new subtree root.
    fn rotate(&mut self, index: NodeIndex, rotation: Rotation) -> NodeIndex {
        match rotation {
            Rotation::Right => self.rotate_right(index),
            Rotation::Left => self.rotate_left(index),
            Rotation::LeftRight => {
                if let Some(left) = self.nodes[index].left {
                    let promoted = self.rotate_left(left);
                    self.nodes[index].left = Some(promoted);
                }
                self.rotate_right(index)
            }
            Rotation::RightLeft => {
                if let Some(right) = self.nodes[index].right {
                    let promoted = self.rotate_right(right);
                    self.nodes[index].right = Some(promoted);
                }
                self.rotate_left(index)
            }
        }
    }

    /// ```text
    ///         index            pivot
    ///         /   \            /   \
    ///      pivot   C   =>     A   index
    ///      /   \                  /   \
    ///     A     B                B     C
    /// ```
    fn rotate_right(&mut self, index: NodeIndex) -> NodeIndex {
        let Some(pivot) = self.nodes[index].left else {
            return index;
        };
        self.nodes[index].left = self.nodes[pivot].right;
        self.nodes[pivot].right = Some(index);
        update_height(&mut self.nodes, index);
        update_height(&mut self.nodes, pivot);
        pivot
    }

    /// Mirror image of [`Self::rotate_right`].
    fn rotate_left(&mut self, index: NodeIndex) -> NodeIndex {
        let Some(pivot) = self.nodes[index].right else {
            return index;
        };
        self.nodes[index].right = self.nodes[pivot].left;
        self.nodes[pivot].left = Some(index);
        update_height(&mut self.nodes, index);
        update_height(&mut self.nodes, pivot);
        pivot
    }
}

// =============================================================================
// Set Implementation
// =============================================================================

impl<T: Ord> Set<T> for AvlSet<T> {
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
        self.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for AvlSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for AvlSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for AvlSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T> {
    type Item = &'a T;
    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for AvlSet<T> {
    /// Two sets are equal when they hold the same elements, regardless of
    /// shape or balancing mode.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for AvlSet<T> {}

impl<T: fmt::Debug> fmt::Debug for AvlSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for AvlSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================
