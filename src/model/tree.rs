//! Tree values: faces of a monoidahedron

use super::Hash;
use serde::{Deserialize, Serialize};
use std::fmt;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// A child slot of a tree
///
/// Besides nested trees, a slot may hold one of two atomic markers:
/// the unit object, or the trace left behind when a unit-law reduction
/// collapsed a subtree to nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Child {
    /// A nested tree (a leaf is a tree with no children)
    SubTree(Tree),
    /// The unit object
    Unit,
    /// A subtree eliminated by a unit law
    Eliminated,
}

impl Child {
    /// The nested tree, if this slot holds one
    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Child::SubTree(tree) => Some(tree),
            Child::Unit | Child::Eliminated => None,
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Child::Unit)
    }

    pub fn is_eliminated(&self) -> bool {
        matches!(self, Child::Eliminated)
    }
}

impl From<Tree> for Child {
    fn from(tree: Tree) -> Self {
        Child::SubTree(tree)
    }
}

/// An immutable, ordered tree
///
/// Equality and hashing are purely structural, which is what lets trees
/// serve as cache keys and as graph node identities.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tree {
    children: Vec<Child>,
}

impl Tree {
    /// Create a tree from its children
    pub fn new(children: Vec<Child>) -> Self {
        Tree { children }
    }

    /// The arity-0 tree
    pub fn leaf() -> Self {
        Tree::default()
    }

    /// Number of direct children
    pub fn arity(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterate over the direct children in order
    pub fn children(&self) -> std::slice::Iter<'_, Child> {
        self.children.iter()
    }

    /// The direct children as a slice
    pub fn as_slice(&self) -> &[Child] {
        &self.children
    }

    /// Number of leaves plus unit markers below this tree
    ///
    /// This is the size of the underlying object; re-bracketing never
    /// changes it.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            return 1;
        }
        self.children
            .iter()
            .map(|child| match child {
                Child::SubTree(tree) => tree.leaf_count(),
                Child::Unit => 1,
                Child::Eliminated => 0,
            })
            .sum()
    }

    /// Copy of this tree with the child at `index` replaced
    pub(crate) fn with_child(&self, index: usize, child: Child) -> Tree {
        let mut children = self.children.clone();
        children[index] = child;
        Tree { children }
    }

    /// Content fingerprint of this tree
    pub fn fingerprint(&self) -> Hash {
        let data = bincode::serialize(self).expect("serialization should not fail");
        Hash::digest(&data)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, count: &mut usize) -> fmt::Result {
        if self.is_leaf() {
            let letter = ALPHABET[*count % ALPHABET.len()] as char;
            let cycle = *count / ALPHABET.len();
            *count += 1;
            return if cycle == 0 {
                write!(f, "{}", letter)
            } else {
                write!(f, "{}_{{{}}}", letter, cycle)
            };
        }
        f.write_str("(")?;
        for child in &self.children {
            match child {
                Child::SubTree(tree) => tree.render(f, count)?,
                Child::Unit => f.write_str("1")?,
                Child::Eliminated => f.write_str("-1")?,
            }
        }
        f.write_str(")")
    }
}

impl FromIterator<Child> for Tree {
    fn from_iter<I: IntoIterator<Item = Child>>(iter: I) -> Self {
        Tree::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Child;
    type IntoIter = std::slice::Iter<'a, Child>;

    fn into_iter(self) -> Self::IntoIter {
        self.children()
    }
}

/// Canonical expression: leaves are lettered left to right, e.g. `((ab)c)`
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, &mut 0)
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tree({})", self)
    }
}
