//! # monoidahedron
//!
//! Boundary faces of monoidahedra: associahedra that also encode the unit
//! laws of a monoidal category.
//!
//! A face is a [`Tree`]: an ordered tree whose child slots hold nested
//! trees, the unit object, or the trace of an eliminated unit. The
//! boundary of a face lists every face reachable by one derivation step,
//! and the [`Hierarchy`] of a face unfolds that relation level by level,
//! one level per codimension.
//!
//! ## Core Concepts
//!
//! - **Trees**: immutable, structurally hashed faces
//! - **Boundary**: re-bracketing of contiguous children plus unit-law
//!   expansion and elimination
//! - **Hierarchy**: depth-indexed faces below a tree
//! - **Sessions**: owners of the boundary and hierarchy caches
//!
//! ## Example
//!
//! ```
//! use monoidahedron::{sprout, Session};
//!
//! let session = Session::default();
//! let pentagon = session.hierarchy(&sprout(4, &[])?)?;
//! assert_eq!(pentagon.level(0)[0].len(), 5);
//! assert_eq!(pentagon.level(1).len(), 5);
//! # Ok::<(), monoidahedron::Error>(())
//! ```

pub mod boundary;
pub mod build;
pub mod config;
pub mod hierarchy;
pub mod model;
pub mod viz;

mod error;
mod session;

pub use boundary::{boundary, normal_boundary, unit_boundary, unit_elim, unit_expand, unit_reduce};
pub use build::{assoc, comp, lambda, leaf, rho, sprout, tree, unit};
pub use config::SessionConfig;
pub use error::{Error, Result};
pub use hierarchy::{Hierarchy, RawHierarchy};
pub use model::{Child, EdgeKind, Hash, Tree, TreeEdge};
pub use session::{CacheStats, Session};
pub use viz::{FaceGraph, TreeGraph};
