use log::{debug, log_enabled, Level};
use num_traits::{Float, Zero};

use crate::error::{KdSearchError, Result};
use crate::kdtree::constants::DEFAULT_BUCKET_CAPACITY;
use crate::kdtree::index::{NodeData, NodeKind};
use crate::kdtree::KDTree;
use crate::r#type::IndexablePoint;

/// A builder to create a [`KDTree`].
#[derive(Debug, Clone)]
pub struct KDTreeBuilder<P: IndexablePoint> {
    points: Vec<P>,
    bucket_capacity: usize,
}

impl<P: IndexablePoint> KDTreeBuilder<P> {
    /// Create a new builder with the default bucket capacity.
    pub fn new() -> Self {
        Self::new_with_bucket_capacity(DEFAULT_BUCKET_CAPACITY)
    }

    /// Create a new builder with room for `num_items` points and the default bucket capacity.
    pub fn with_capacity(num_items: usize) -> Self {
        let mut builder = Self::new();
        builder.points.reserve_exact(num_items);
        builder
    }

    /// Create a new builder with the provided bucket capacity.
    ///
    /// # Panics
    ///
    /// If `bucket_capacity` is zero.
    pub fn new_with_bucket_capacity(bucket_capacity: usize) -> Self {
        assert!(bucket_capacity >= 1, "Bucket capacity must be at least 1.");

        Self {
            points: vec![],
            bucket_capacity,
        }
    }

    /// Add a point to the index, returning its insertion index.
    pub fn add(&mut self, point: P) -> usize {
        let index = self.points.len();
        self.points.push(point);
        index
    }

    /// Consume this builder, performing the k-d sort and generating a KDTree ready for queries.
    pub fn finish(self) -> Result<KDTree<P>> {
        let Self {
            mut points,
            bucket_capacity,
        } = self;

        if points.is_empty() {
            return Err(KdSearchError::EmptyInput);
        }

        for (index, point) in points.iter().enumerate() {
            for dim in 0..P::DIMS {
                if point.coord(dim).is_nan() {
                    return Err(KdSearchError::NaNCoordinate { index, dim });
                }
            }
        }

        let nodes = sort(&mut points, bucket_capacity);
        let tree = KDTree {
            points,
            nodes,
            bucket_capacity,
        };

        if log_enabled!(Level::Debug) {
            let overfull = tree
                .nodes
                .iter()
                .filter(|node| {
                    node.kind == NodeKind::Leaf && node.end - node.start > bucket_capacity
                })
                .count();
            debug!(
                "Built KDTree over {} points: {} nodes, depth {}, {} overfull buckets of coincident points",
                tree.points.len(),
                tree.nodes.len(),
                tree.depth(),
                overfull
            );
        }

        Ok(tree)
    }
}

impl<P: IndexablePoint> Default for KDTreeBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: IndexablePoint> Extend<P> for KDTreeBuilder<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

/// kd-sort `points` in place and return the node arena describing the partition.
///
/// Nodes are split from an explicit work stack, so the depth of the tree never touches the
/// call stack.
fn sort<P: IndexablePoint>(points: &mut [P], bucket_capacity: usize) -> Vec<NodeData<P::Num>> {
    let mut nodes = vec![NodeData::leaf(0, points.len())];
    let mut stack = vec![(0, 0, points.len())];

    while let Some((id, start, end)) = stack.pop() {
        if end - start <= bucket_capacity {
            continue;
        }

        // every coordinate identical: no plane can separate these
        let Some(dim) = widest_dimension(&points[start..end]) else {
            continue;
        };

        let (left_len, value) = split_at_median(&mut points[start..end], dim);
        let mid = start + left_len;

        let left = nodes.len();
        nodes.push(NodeData::leaf(start, mid));
        let right = nodes.len();
        nodes.push(NodeData::leaf(mid, end));
        nodes[id].kind = NodeKind::Split {
            dim,
            value,
            left,
            right,
        };

        stack.push((right, mid, end));
        stack.push((left, start, mid));
    }

    nodes
}

/// The dimension with the largest `max - min` spread, or `None` if no dimension has a positive
/// spread. Ties keep the lowest dimension.
fn widest_dimension<P: IndexablePoint>(points: &[P]) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut best_spread = P::Num::zero();

    for dim in 0..P::DIMS {
        let (min, max) = extent(points, dim);
        let spread = max - min;
        if spread > best_spread {
            best = Some(dim);
            best_spread = spread;
        }
    }

    best
}

#[inline]
fn extent<P: IndexablePoint>(points: &[P], dim: usize) -> (P::Num, P::Num) {
    let first = points[0].coord(dim);
    points[1..].iter().fold((first, first), |(min, max), point| {
        let v = point.coord(dim);
        (min.min(v), max.max(v))
    })
}

/// Reorder `points` into a left part with `coord(dim) <= value` and a non-empty right part with
/// `coord(dim) > value`. Returns the length of the left part and `value`.
///
/// The left part is the median element of rank `len / 2` and everything before it, plus any
/// ties of the median, so it can hold more than `len / 2 + 1` points. When the median is also
/// the maximum, the left part is instead every point strictly below it. Requires a positive
/// spread along `dim`.
fn split_at_median<P: IndexablePoint>(points: &mut [P], dim: usize) -> (usize, P::Num) {
    let n = points.len();
    let m = n / 2;

    select(points, m, dim);
    let value = points[m].coord(dim);

    // select leaves everything after `m` >= value; move the ties next to the median
    let mut split = m + 1;
    for i in m + 1..n {
        if points[i].coord(dim) == value {
            points.swap(i, split);
            split += 1;
        }
    }
    if split < n {
        return (split, value);
    }

    let mut split = 0;
    for i in 0..n {
        if points[i].coord(dim) < value {
            points.swap(i, split);
            split += 1;
        }
    }
    debug_assert!(split > 0 && split < n);
    let value = points[..split]
        .iter()
        .map(|point| point.coord(dim))
        .fold(P::Num::neg_infinity(), Float::max);

    (split, value)
}

/// Quickselect: reorder `points` so that the `k`-th element is the one that would be there if
/// `points` were sorted along `dim`, with no greater element before it and no smaller element
/// after it.
fn select<P: IndexablePoint>(points: &mut [P], k: usize, dim: usize) {
    let mut left = 0;
    let mut right = points.len();

    while right - left > 1 {
        let pivot = median_of_three(&points[left..right], dim);
        let (lt, gt) = partition(&mut points[left..right], pivot, dim);
        let (lt, gt) = (left + lt, left + gt);

        if k < lt {
            right = lt;
        } else if k >= gt {
            left = gt;
        } else {
            return;
        }
    }
}

/// The median of the first, middle and last values along `dim`. Slices shorter than three
/// elements pivot on their first value.
#[inline]
fn median_of_three<P: IndexablePoint>(points: &[P], dim: usize) -> P::Num {
    let first = points[0].coord(dim);
    if points.len() < 3 {
        return first;
    }
    let middle = points[points.len() / 2].coord(dim);
    let last = points[points.len() - 1].coord(dim);

    let (lo, hi) = if first <= middle {
        (first, middle)
    } else {
        (middle, first)
    };
    if last <= lo {
        lo
    } else if last >= hi {
        hi
    } else {
        last
    }
}

/// Three-way partition around `pivot`: afterwards `..lt` is below the pivot, `lt..gt` equal to
/// it and `gt..` above it. Returns `(lt, gt)`.
fn partition<P: IndexablePoint>(points: &mut [P], pivot: P::Num, dim: usize) -> (usize, usize) {
    let mut lt = 0;
    let mut i = 0;
    let mut gt = points.len();

    while i < gt {
        let v = points[i].coord(dim);
        if v < pivot {
            points.swap(lt, i);
            lt += 1;
            i += 1;
        } else if v > pivot {
            gt -= 1;
            points.swap(i, gt);
        } else {
            i += 1;
        }
    }

    (lt, gt)
}
