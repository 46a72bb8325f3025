//! Directed edges of a tree, as consumed by renderers

use super::{Child, Tree};
use serde::{Deserialize, Serialize};

/// What sits at the child end of an edge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// A tree with children of its own
    Internal,
    /// An arity-0 tree
    Leaf,
    /// The unit marker
    Unit,
    /// An eliminated marker
    Eliminated,
}

impl EdgeKind {
    fn of(child: &Child) -> Self {
        if child.is_unit() {
            return EdgeKind::Unit;
        }
        if child.is_eliminated() {
            return EdgeKind::Eliminated;
        }
        match child.as_tree() {
            Some(tree) if !tree.is_leaf() => EdgeKind::Internal,
            _ => EdgeKind::Leaf,
        }
    }

    /// `1` for structural edges, `-1` for edges ending without further structure
    pub fn label(&self) -> i8 {
        match self {
            EdgeKind::Internal => 1,
            EdgeKind::Leaf | EdgeKind::Unit | EdgeKind::Eliminated => -1,
        }
    }
}

/// An edge `parent -> child` over the depth-first numbering of a tree
///
/// The root is node 0; every child visited in traversal order takes the
/// next number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeEdge {
    pub parent: usize,
    pub child: usize,
    pub kind: EdgeKind,
}

impl TreeEdge {
    pub fn label(&self) -> i8 {
        self.kind.label()
    }

    /// The `(parent, child, label)` triple
    pub fn as_triple(&self) -> (usize, usize, i8) {
        (self.parent, self.child, self.label())
    }
}

impl Tree {
    /// All edges of this tree, numbered depth-first from the root
    pub fn edges(&self) -> Vec<TreeEdge> {
        let mut edges = Vec::new();
        let mut count = 0;
        collect_edges(self, &mut count, &mut edges);
        edges
    }
}

fn collect_edges(tree: &Tree, count: &mut usize, edges: &mut Vec<TreeEdge>) {
    let parent = *count;
    for child in tree.children() {
        *count += 1;
        edges.push(TreeEdge {
            parent,
            child: *count,
            kind: EdgeKind::of(child),
        });
        if let Child::SubTree(sub) = child {
            collect_edges(sub, count, edges);
        }
    }
}
