use crate::error::Result;
use crate::kdtree::{KDTreeBuilder, KDTreeIndex, Node};
use crate::r#type::IndexablePoint;

/// How a node divides the points it covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum NodeKind<N> {
    /// Points with `coord(dim) <= value` live under `left`, all others under `right`.
    Split {
        dim: usize,
        value: N,
        left: usize,
        right: usize,
    },
    Leaf,
}

/// A node in the tree arena.
///
/// Every node covers the contiguous range `start..end` of the kd-sorted points buffer, so the
/// points of a subtree can be read without walking it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NodeData<N> {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) kind: NodeKind<N>,
}

impl<N> NodeData<N> {
    pub(crate) fn leaf(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            kind: NodeKind::Leaf,
        }
    }
}

/// An owned, immutable KDTree.
///
/// Usually this will be created via [`KDTree::try_new`] or a [`KDTreeBuilder`]. Queries are
/// provided by the [`KDTreeIndex`] trait.
#[derive(Debug, Clone)]
pub struct KDTree<P: IndexablePoint> {
    /// All indexed points, reordered so that each node covers a contiguous range.
    pub(crate) points: Vec<P>,
    /// The node arena. The root is always at index 0.
    pub(crate) nodes: Vec<NodeData<P::Num>>,
    pub(crate) bucket_capacity: usize,
}

impl<P: IndexablePoint> KDTree<P> {
    /// Build a tree over `points` with the default bucket capacity.
    ///
    /// The points are moved into the tree and reordered; an empty input is rejected.
    pub fn try_new(points: Vec<P>) -> Result<Self> {
        let mut builder = KDTreeBuilder::new();
        builder.extend(points);
        builder.finish()
    }

    /// The number of nodes, both internal and leaves, in this tree.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The number of edges on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(0, 0)];
        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id].kind {
                NodeKind::Split { left, right, .. } => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
                NodeKind::Leaf => max_depth = max_depth.max(depth),
            }
        }
        max_depth
    }

    /// Consume the tree, returning its points in kd-sorted order.
    pub fn into_points(self) -> Vec<P> {
        self.points
    }
}

impl<P: IndexablePoint> TryFrom<Vec<P>> for KDTree<P> {
    type Error = crate::KdSearchError;

    fn try_from(points: Vec<P>) -> Result<Self> {
        Self::try_new(points)
    }
}

impl<P: IndexablePoint> KDTreeIndex<P> for KDTree<P> {
    fn points(&self) -> &[P] {
        &self.points
    }

    fn bucket_capacity(&self) -> usize {
        self.bucket_capacity
    }

    fn root(&self) -> Node<'_, P> {
        Node::from_root(self)
    }
}
