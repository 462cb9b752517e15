//! Depth-first iterators over an [`AvlSet`](super::AvlSet).
//!
//! Every iterator keeps its own work stack, so walking a degenerate tree
//! never grows the call stack.

use smallvec::SmallVec;

use super::node::{Node, NodeIndex};

/// Work-stack entries kept inline before spilling to the heap.
///
/// A balanced tree of a few billion elements is shallower than this.
const STACK_INLINE_CAPACITY: usize = 48;

// =============================================================================
// Inorder
// =============================================================================

/// An iterator yielding elements in ascending order.
///
/// Created by [`AvlSet::iter`](super::AvlSet::iter).
pub struct Inorder<'a, T> {
    nodes: &'a [Node<T>],
    stack: SmallVec<[NodeIndex; STACK_INLINE_CAPACITY]>,
    remaining: usize,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(nodes: &'a [Node<T>], root: Option<NodeIndex>) -> Self {
        let mut iterator = Self {
            nodes,
            stack: SmallVec::new(),
            remaining: nodes.len(),
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut cursor: Option<NodeIndex>) {
        while let Some(index) = cursor {
            self.stack.push(index);
            cursor = self.nodes[index].left;
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.nodes[index];
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Inorder<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

// =============================================================================
// Preorder
// =============================================================================

/// An iterator yielding each node before its left and right subtrees.
///
/// Created by [`AvlSet::preorder_iter`](super::AvlSet::preorder_iter).
pub struct Preorder<'a, T> {
    nodes: &'a [Node<T>],
    stack: SmallVec<[NodeIndex; STACK_INLINE_CAPACITY]>,
    remaining: usize,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(nodes: &'a [Node<T>], root: Option<NodeIndex>) -> Self {
        Self {
            nodes,
            stack: root.into_iter().collect(),
            remaining: nodes.len(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.nodes[index];
        // Right first so that the left subtree is popped next.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Preorder<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

// =============================================================================
// Postorder
// =============================================================================

/// An iterator yielding each node after both of its subtrees.
///
/// Created by [`AvlSet::postorder_iter`](super::AvlSet::postorder_iter).
pub struct Postorder<'a, T> {
    nodes: &'a [Node<T>],
    /// `(node, children_pushed)` pairs.
    stack: SmallVec<[(NodeIndex, bool); STACK_INLINE_CAPACITY]>,
    remaining: usize,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(nodes: &'a [Node<T>], root: Option<NodeIndex>) -> Self {
        Self {
            nodes,
            stack: root.map(|index| (index, false)).into_iter().collect(),
            remaining: nodes.len(),
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_pushed)) = self.stack.pop() {
            let node = &self.nodes[index];
            if children_pushed {
                self.remaining -= 1;
                return Some(&node.value);
            }
            self.stack.push((index, true));
            self.stack.extend(node.right.map(|right| (right, false)));
            self.stack.extend(node.left.map(|left| (left, false)));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Postorder<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}
