use std::fmt;

use crate::kdtree::{KDTree, KDTreeIndex, Node};
use crate::r#type::IndexablePoint;

impl<P: IndexablePoint> KDTree<P> {
    /// Render the shape of the tree for debugging.
    ///
    /// A leaf is written as its points in parentheses, each point as `<c0 c1 ... >`. A parent is
    /// written as its two children in parentheses, left first.
    pub fn pretty_print(&self) -> String {
        self.to_string()
    }
}

impl<P: IndexablePoint> fmt::Display for KDTree<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.root())
    }
}

fn write_node<P: IndexablePoint>(f: &mut fmt::Formatter<'_>, node: Node<'_, P>) -> fmt::Result {
    f.write_str("(")?;
    match (node.left_child(), node.right_child()) {
        (Some(left), Some(right)) => {
            write_node(f, left)?;
            write_node(f, right)?;
        }
        _ => {
            for point in node.points() {
                f.write_str("<")?;
                for dim in 0..P::DIMS {
                    write!(f, "{} ", point.coord(dim))?;
                }
                f.write_str(">")?;
            }
        }
    }
    f.write_str(")")
}
