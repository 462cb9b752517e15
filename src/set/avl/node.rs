//! Arena nodes for [`AvlSet`](super::AvlSet).

/// Position of a node inside the arena.
pub(crate) type NodeIndex = usize;

/// Height of a missing subtree.
pub(crate) const EMPTY_HEIGHT: i32 = -1;

/// Which child link a search step followed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Direction {
    Left,
    Right,
}

/// A tree node stored in the arena.
///
/// Children are referenced by index; `None` marks an absent subtree.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Option<NodeIndex>,
    pub(crate) right: Option<NodeIndex>,
    /// Cached height of the subtree rooted here. A leaf has height 0.
    pub(crate) height: i32,
}

impl<T> Node<T> {
    /// Creates a new leaf.
    pub(crate) const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    pub(crate) const fn child(&self, direction: Direction) -> Option<NodeIndex> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub(crate) const fn set_child(&mut self, direction: Direction, child: Option<NodeIndex>) {
        match direction {
            Direction::Left => self.left = child,
            Direction::Right => self.right = child,
        }
    }
}

/// Returns the cached height of an optional subtree.
#[inline]
pub(crate) fn height_of<T>(nodes: &[Node<T>], link: Option<NodeIndex>) -> i32 {
    link.map_or(EMPTY_HEIGHT, |index| nodes[index].height)
}

/// Height difference `height(left) - height(right)` at `index`.
#[inline]
pub(crate) fn balance_factor<T>(nodes: &[Node<T>], index: NodeIndex) -> i32 {
    let node = &nodes[index];
    height_of(nodes, node.left) - height_of(nodes, node.right)
}

/// Recomputes the cached height at `index` from its children.
#[inline]
pub(crate) fn update_height<T>(nodes: &mut [Node<T>], index: NodeIndex) {
    let left = height_of(nodes, nodes[index].left);
    let right = height_of(nodes, nodes[index].right);
    nodes[index].height = 1 + left.max(right);
}
