//! Id-addressed trees for the feedlab interactive demos.
//!
//! Nodes get a fresh [`NodeId`] when they are created and are found again by
//! preorder search. A lookup that finds nothing leaves the tree unchanged;
//! callers get an outcome value describing what happened.
//!
//! Both trees refuse to grow past [`MAX_DEPTH`] levels so that recursive
//! serialization of a snapshot stays bounded.

mod binary;
mod general;

pub use binary::{Attach, BinaryNode, BinaryTree, Side};
pub use feedlab_ids::NodeId;
pub use general::{AddChild, GeneralNode, GeneralTree};

/// Deepest level (root = 1) a demo tree may reach.
pub const MAX_DEPTH: usize = 256;
