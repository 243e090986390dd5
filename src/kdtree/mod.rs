//! An implementation of an immutable, bucketed K-D Tree for radius queries.

#![warn(missing_docs)]

mod builder;
pub(crate) mod constants;
mod display;
mod index;
pub(crate) mod r#trait;
mod traversal;

pub use builder::KDTreeBuilder;
pub use constants::DEFAULT_BUCKET_CAPACITY;
pub use index::KDTree;
pub use r#trait::KDTreeIndex;
pub use traversal::Node;
