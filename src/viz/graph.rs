//! Builders for the graph exports

use super::{FaceGraph, FaceGraphMeta, FaceLink, FaceNode, TreeGraph, TreeLink, TreeNode};
use crate::hierarchy::Hierarchy;
use crate::model::{Hash, Tree};
use crate::Result;
use std::collections::HashSet;

/// Level of an `(n, units)`-sprout hierarchy holding the edges of its
/// polytope (the face lists of exactly two vertices)
pub fn sprout_level(n: usize, units: &[usize]) -> usize {
    (n + units.len()).saturating_sub(3)
}

impl TreeGraph {
    pub fn from_tree(tree: &Tree) -> Self {
        let edges = tree.edges();

        let mut nodes = Vec::with_capacity(edges.len() + 1);
        nodes.push(TreeNode { id: 0, kind: None });
        nodes.extend(edges.iter().map(|edge| TreeNode {
            id: edge.child,
            kind: Some(edge.kind),
        }));

        TreeGraph {
            title: tree.to_string(),
            nodes,
            edges: edges
                .iter()
                .map(|edge| TreeLink {
                    source: edge.parent,
                    target: edge.child,
                    label: edge.label(),
                    kind: edge.kind,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FaceGraph {
    /// Collect the faces found at `depth` and link the faces of each list
    /// in order. Repeated faces and links are kept once.
    pub fn from_level(hierarchy: &Hierarchy, depth: usize) -> Self {
        let lists = hierarchy.level(depth);

        let mut seen_nodes: HashSet<Hash> = HashSet::new();
        let mut seen_links: HashSet<(Hash, Hash)> = HashSet::new();
        let mut nodes = Vec::new();
        let mut edges = Vec::new();

        for faces in &lists {
            let ids: Vec<Hash> = faces.iter().map(Tree::fingerprint).collect();

            for (face, id) in faces.iter().zip(&ids) {
                if seen_nodes.insert(*id) {
                    nodes.push(FaceNode {
                        id: id.to_hex(),
                        label: face.to_string(),
                        arity: face.arity(),
                    });
                }
            }

            for pair in ids.windows(2) {
                if seen_links.insert((pair[0], pair[1])) {
                    edges.push(FaceLink {
                        source: pair[0].to_hex(),
                        target: pair[1].to_hex(),
                    });
                }
            }
        }

        FaceGraph {
            nodes,
            edges,
            meta: FaceGraphMeta {
                root: hierarchy.root().to_string(),
                depth,
                face_lists: lists.len(),
            },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
