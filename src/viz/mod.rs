//! Graph exports for rendering trees and face hierarchies
//!
//! Layout and drawing happen elsewhere; this module only turns trees and
//! hierarchy levels into plain, serializable node/edge lists.

mod graph;

pub use graph::sprout_level;

use crate::model::EdgeKind;
use serde::{Deserialize, Serialize};

/// A node of a drawn tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Depth-first number, 0 for the root
    pub id: usize,
    /// What the edge into this node ends at (absent for the root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<EdgeKind>,
}

/// A labeled edge of a drawn tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeLink {
    pub source: usize,
    pub target: usize,
    /// `1` for structural edges, `-1` for terminal ones
    pub label: i8,
    pub kind: EdgeKind,
}

/// Drawable form of a single tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeGraph {
    /// Canonical expression, e.g. `((ab)c)`
    pub title: String,
    pub nodes: Vec<TreeNode>,
    pub edges: Vec<TreeLink>,
}

/// A face in a level graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceNode {
    /// Hex fingerprint of the face
    pub id: String,
    /// Canonical expression of the face
    pub label: String,
    pub arity: usize,
}

/// Directed edge between two faces listed together at a level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceLink {
    pub source: String,
    pub target: String,
}

/// Drawable form of one hierarchy level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceGraph {
    pub nodes: Vec<FaceNode>,
    pub edges: Vec<FaceLink>,
    pub meta: FaceGraphMeta,
}

/// Metadata about a level export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceGraphMeta {
    /// Canonical expression of the hierarchy root
    pub root: String,
    /// Level the graph was taken from
    pub depth: usize,
    /// Number of face lists found at that level
    pub face_lists: usize,
}
