//! Utilities to traverse the KDTree structure.

use std::fmt;

use crate::kdtree::index::{NodeData, NodeKind};
use crate::kdtree::KDTree;
use crate::r#type::IndexablePoint;

/// A node in the KDTree.
///
/// Either a parent, which splits its points over one dimension into two children, or a leaf
/// holding a bucket of points.
pub struct Node<'a, P: IndexablePoint> {
    /// The tree that this node is a reference onto
    tree: &'a KDTree<P>,

    /// Position of this node in the tree's node arena
    id: usize,
}

impl<'a, P: IndexablePoint> Node<'a, P> {
    pub(crate) fn new(tree: &'a KDTree<P>, id: usize) -> Self {
        Self { tree, id }
    }

    pub(crate) fn from_root(tree: &'a KDTree<P>) -> Self {
        Self::new(tree, 0)
    }

    #[inline]
    pub(crate) fn data(&self) -> &'a NodeData<P::Num> {
        &self.tree.nodes[self.id]
    }

    #[inline]
    pub(crate) fn tree(&self) -> &'a KDTree<P> {
        self.tree
    }

    /// The dimension that the children of this node are split over, or `None` for a leaf.
    pub fn split_dim(&self) -> Option<usize> {
        match self.data().kind {
            NodeKind::Split { dim, .. } => Some(dim),
            NodeKind::Leaf => None,
        }
    }

    /// The split value of this node, or `None` for a leaf.
    ///
    /// Every point under the left child has a coordinate `<=` this value along
    /// [`split_dim`][Self::split_dim]; every point under the right child is strictly greater.
    pub fn split_value(&self) -> Option<P::Num> {
        match self.data().kind {
            NodeKind::Split { value, .. } => Some(value),
            NodeKind::Leaf => None,
        }
    }

    /// The child node holding points at or below the split value.
    pub fn left_child(&self) -> Option<Node<'a, P>> {
        match self.data().kind {
            NodeKind::Split { left, .. } => Some(Node::new(self.tree, left)),
            NodeKind::Leaf => None,
        }
    }

    /// The child node holding points above the split value.
    pub fn right_child(&self) -> Option<Node<'a, P>> {
        match self.data().kind {
            NodeKind::Split { right, .. } => Some(Node::new(self.tree, right)),
            NodeKind::Leaf => None,
        }
    }

    /// All points under this node. For a leaf these are exactly the points of its bucket.
    pub fn points(&self) -> &'a [P] {
        let data = self.data();
        &self.tree.points[data.start..data.end]
    }

    /// The number of points under this node.
    pub fn num_items(&self) -> usize {
        let data = self.data();
        data.end - data.start
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.data().kind, NodeKind::Leaf)
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }
}

impl<P: IndexablePoint> Clone for Node<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: IndexablePoint> Copy for Node<'_, P> {}

impl<P: IndexablePoint> fmt::Debug for Node<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("split_dim", &self.split_dim())
            .field("split_value", &self.split_value())
            .field("num_items", &self.num_items())
            .finish()
    }
}
