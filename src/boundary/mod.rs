//! Boundary derivation on trees
//!
//! The boundary of a face is every face reachable by one step of the
//! derivation:
//! - the ordinary rule groups a contiguous run of children into a new
//!   node (the associahedron part)
//! - the unit rules expand unitors into explicit units, or eliminate them
//!
//! Faces are collected in derivation order and never deduplicated; a face
//! reachable in two ways appears twice.
//!
//! The functions here recompute everything on each call. Use a
//! [`Session`](crate::Session) to share work across calls.

mod normal;
mod unit;

pub(crate) use normal::contract_runs;
pub use normal::normal_boundary;
pub use unit::{unit_boundary, unit_elim, unit_expand, unit_reduce};

use crate::model::{Child, Tree};

/// Ordinary faces followed by unit-law faces
pub fn boundary(tree: &Tree) -> Vec<Tree> {
    let mut faces = normal_boundary(tree);
    faces.extend(unit_boundary(tree));
    faces
}

impl Tree {
    /// See [`boundary`]
    pub fn boundary(&self) -> Vec<Tree> {
        boundary(self)
    }

    pub fn normal_boundary(&self) -> Vec<Tree> {
        normal_boundary(self)
    }

    pub fn unit_boundary(&self) -> Vec<Tree> {
        unit_boundary(self)
    }

    pub fn unit_expand(&self) -> Tree {
        unit_expand(self)
    }

    pub fn unit_elim(&self) -> Option<Child> {
        unit_elim(self)
    }

    pub fn unit_reduce(&self) -> Option<Child> {
        unit_reduce(self)
    }
}
