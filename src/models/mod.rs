//! Input data model shared by the tree builder, the format adapters and the CLI.
//!
//! The renderer never resolves dependencies itself. It consumes a stream of
//! [`DependencyNode`]s delivered through the [`DependencyNodeVisitor`]
//! protocol: `visit` before a node's children are walked and `end_visit`
//! after all of them have been processed.

mod coordinate;
mod tree;

pub use coordinate::{Coordinate, DEFAULT_PACKAGING};
pub use tree::{DependencyTree, TreeNode};

/// A node delivered by an external dependency-graph walker.
pub trait DependencyNode {
    /// Identity of the dependency.
    fn coordinate(&self) -> &Coordinate;

    /// Coordinate of the declaring parent, `None` at the roots.
    fn parent(&self) -> Option<&Coordinate>;
}

/// Depth-first visitor over dependency nodes.
pub trait DependencyNodeVisitor {
    /// Called before the node's children. Returning false skips the children.
    fn visit(&mut self, node: &dyn DependencyNode) -> bool;

    /// Called after the node's children. Returning false skips the node's
    /// remaining siblings.
    fn end_visit(&mut self, node: &dyn DependencyNode) -> bool;
}
