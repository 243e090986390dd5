#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
mod r#type;

pub use error::{KdSearchError, Result};
pub use r#type::{IndexableNum, IndexablePoint};

#[cfg(test)]
pub(crate) mod test;
