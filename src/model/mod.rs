//! Core data model types for monoidahedron

mod edge;
mod hash;
mod tree;

pub use edge::{EdgeKind, TreeEdge};
pub use hash::Hash;
pub use tree::{Child, Tree};
