//! Face hierarchies
//!
//! A hierarchy unfolds the boundary relation below a tree: its top level
//! lists the boundary faces of the tree, and each face with a non-empty
//! boundary contributes a nested hierarchy of its own. Reading the
//! structure at depth `d` gives the faces of codimension `d + 1`, grouped
//! by the face they bound.

use crate::model::Tree;
use std::sync::Arc;

/// The assembled hierarchy below one tree
///
/// `faces` is the boundary of the tree in derivation order; `lower` holds
/// the hierarchies of those faces that have a boundary themselves, in the
/// same order. Faces with an empty boundary appear only in `faces`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawHierarchy {
    pub(crate) faces: Vec<Tree>,
    pub(crate) lower: Vec<Arc<RawHierarchy>>,
}

impl RawHierarchy {
    pub fn faces(&self) -> &[Tree] {
        &self.faces
    }

    pub fn lower(&self) -> &[Arc<RawHierarchy>] {
        &self.lower
    }

    /// True for boundary-minimal trees
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    fn depth(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        1 + self.lower.iter().map(|sub| sub.depth()).max().unwrap_or(0)
    }

    fn collect_level<'a>(&'a self, depth: usize, out: &mut Vec<&'a [Tree]>) {
        if depth == 0 {
            if !self.is_empty() {
                out.push(&self.faces);
            }
            return;
        }
        for sub in &self.lower {
            sub.collect_level(depth - 1, out);
        }
    }
}

/// Depth-indexed view of the faces below a tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hierarchy {
    root: Tree,
    raw: Arc<RawHierarchy>,
}

impl Hierarchy {
    pub(crate) fn new(root: Tree, raw: Arc<RawHierarchy>) -> Self {
        Hierarchy { root, raw }
    }

    /// The tree this hierarchy was built for
    pub fn root(&self) -> &Tree {
        &self.root
    }

    pub fn raw(&self) -> &RawHierarchy {
        &self.raw
    }

    /// Face lists found exactly `depth` levels below the root
    ///
    /// Level 0 is the boundary of the root itself. Each face list is the
    /// boundary of one face from the level above, in boundary order.
    /// Past the deepest level the result is empty.
    pub fn level(&self, depth: usize) -> Vec<&[Tree]> {
        let mut out = Vec::new();
        self.raw.collect_level(depth, &mut out);
        out
    }

    /// Number of non-empty levels
    pub fn depth(&self) -> usize {
        self.raw.depth()
    }

    pub fn levels(&self) -> Vec<Vec<&[Tree]>> {
        (0..self.depth()).map(|depth| self.level(depth)).collect()
    }
}
