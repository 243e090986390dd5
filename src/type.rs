use std::fmt::{Debug, Display};

use num_traits::Float;

/// A trait for types that can be used for indexed coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Radius queries need a
/// square root and a total order on every value that reaches the tree, so only `f32` and `f64`
/// are supported.
pub trait IndexableNum:
    private::Sealed + Float + Default + Debug + Display + Send + Sync + 'static
{
}

impl IndexableNum for f32 {}

impl IndexableNum for f64 {}

/// A point with a fixed number of real-valued coordinates.
///
/// Points are copied out of the tree by [`search`][crate::kdtree::KDTreeIndex::search], so they
/// must be [`Clone`]. The tree never inspects a point beyond `coord(0)..coord(DIMS - 1)`.
pub trait IndexablePoint: Clone {
    /// The coordinate type.
    type Num: IndexableNum;

    /// The number of coordinates of every point of this type.
    const DIMS: usize;

    /// The coordinate along dimension `dim`, for `dim` in `0..Self::DIMS`.
    fn coord(&self, dim: usize) -> Self::Num;
}

impl<N: IndexableNum, const D: usize> IndexablePoint for [N; D] {
    type Num = N;
    const DIMS: usize = D;

    #[inline]
    fn coord(&self, dim: usize) -> N {
        self[dim]
    }
}

impl<N: IndexableNum> IndexablePoint for (N, N) {
    type Num = N;
    const DIMS: usize = 2;

    #[inline]
    fn coord(&self, dim: usize) -> N {
        match dim {
            0 => self.0,
            1 => self.1,
            _ => panic!("Invalid dimension {} for a 2D point", dim),
        }
    }
}

impl<N: IndexableNum> IndexablePoint for (N, N, N) {
    type Num = N;
    const DIMS: usize = 3;

    #[inline]
    fn coord(&self, dim: usize) -> N {
        match dim {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            _ => panic!("Invalid dimension {} for a 3D point", dim),
        }
    }
}

#[cfg(feature = "use-geo_0_31")]
impl<N: IndexableNum + geo_0_31::CoordNum> IndexablePoint for geo_0_31::Coord<N> {
    type Num = N;
    const DIMS: usize = 2;

    #[inline]
    fn coord(&self, dim: usize) -> N {
        match dim {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid dimension {} for a geo::Coord", dim),
        }
    }
}

#[cfg(feature = "use-geo_0_31")]
impl<N: IndexableNum + geo_0_31::CoordNum> IndexablePoint for geo_0_31::Point<N> {
    type Num = N;
    const DIMS: usize = 2;

    #[inline]
    fn coord(&self, dim: usize) -> N {
        self.0.coord(dim)
    }
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
