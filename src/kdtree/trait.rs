use geo_traits::CoordTrait;
use log::trace;
use num_traits::{Float, ToPrimitive, Zero};
use tinyvec::TinyVec;

use crate::error::{KdSearchError, Result};
use crate::kdtree::index::NodeKind;
use crate::kdtree::Node;
use crate::r#type::IndexablePoint;

/// A trait for searching and accessing data out of a KDTree.
pub trait KDTreeIndex<P: IndexablePoint>: Sized {
    /// The indexed points, in kd-sorted order
    fn points(&self) -> &[P];

    /// The maximum number of points in a leaf, except for buckets of coincident points
    fn bucket_capacity(&self) -> usize;

    /// Access the root node of the KDTree for manual traversal.
    fn root(&self) -> Node<'_, P>;

    /// The number of items in this KDTree
    fn num_items(&self) -> usize {
        self.points().len()
    }

    /// Search the index for points within a given radius.
    ///
    /// - center: query point
    /// - radius: maximum Euclidean distance, inclusive
    ///
    /// Returns copies of the found points, in no particular order. Points indexed more than once
    /// are returned as many times as they were indexed.
    ///
    /// Fails with [`KdSearchError::InvalidRadius`] if `radius` is negative or NaN.
    fn search(&self, center: &P, radius: P::Num) -> Result<Vec<P>> {
        let center: TinyVec<[P::Num; 4]> = (0..P::DIMS).map(|dim| center.coord(dim)).collect();
        within(self.root(), &center, radius)
    }

    /// Search the index for points within a given radius of a [`CoordTrait`] center.
    ///
    /// The coordinate must have as many dimensions as the indexed points.
    fn search_coord(
        &self,
        coord: &impl CoordTrait<T = P::Num>,
        radius: P::Num,
    ) -> Result<Vec<P>> {
        let found = coord.dim().size();
        if found != P::DIMS {
            return Err(KdSearchError::DimensionMismatch {
                expected: P::DIMS,
                found,
            });
        }

        let center: TinyVec<[P::Num; 4]> =
            (0..P::DIMS).map(|dim| coord.nth_or_panic(dim)).collect();
        within(self.root(), &center, radius)
    }
}

fn within<P: IndexablePoint>(
    root: Node<'_, P>,
    center: &[P::Num],
    radius: P::Num,
) -> Result<Vec<P>> {
    if radius.is_nan() || radius < P::Num::zero() {
        return Err(KdSearchError::InvalidRadius(
            radius.to_f64().unwrap_or(f64::NAN),
        ));
    }

    let tree = root.tree();
    let mut stack = vec![root];
    let mut result = vec![];
    let mut visited = 0;

    while let Some(node) = stack.pop() {
        visited += 1;

        match node.data().kind {
            NodeKind::Leaf => {
                for point in node.points() {
                    if distance(point, center) <= radius {
                        result.push(point.clone());
                    }
                }
            }
            NodeKind::Split {
                dim,
                value,
                left,
                right,
            } => {
                let c = center[dim];
                // points on the right are > value, points on the left are <= value. Offsets are
                // compared unrounded against the radius, like the leaf distance check.
                if value - c > radius {
                    stack.push(Node::new(tree, left));
                } else if c - value > radius {
                    stack.push(Node::new(tree, right));
                } else {
                    stack.push(Node::new(tree, right));
                    stack.push(Node::new(tree, left));
                }
            }
        }
    }

    trace!(
        "Radius search visited {} of {} nodes and found {} points",
        visited,
        tree.num_nodes(),
        result.len()
    );

    Ok(result)
}

/// Euclidean distance between an indexed point and a query center.
#[inline]
pub(crate) fn distance<P: IndexablePoint>(point: &P, center: &[P::Num]) -> P::Num {
    center
        .iter()
        .enumerate()
        .fold(P::Num::zero(), |acc, (dim, &c)| {
            let d = point.coord(dim) - c;
            acc + d * d
        })
        .sqrt()
}
