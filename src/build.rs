//! Constructors for the canonical tree shapes

use crate::model::{Child, Tree};
use crate::{Error, Result};

/// Build a tree from any mix of trees and markers
///
/// ```
/// use monoidahedron::{leaf, tree, unit};
///
/// let t = tree![leaf(), unit(), tree![leaf(), leaf()]];
/// assert_eq!(t.to_string(), "(a1(bc))");
/// ```
#[macro_export]
macro_rules! tree {
    ($($child:expr),* $(,)?) => {
        $crate::Tree::new(vec![$($crate::Child::from($child)),*])
    };
}

/// A leaf
pub fn leaf() -> Tree {
    Tree::leaf()
}

/// The unit marker
pub fn unit() -> Child {
    Child::Unit
}

/// Binary composition `x ⊗ y`
pub fn comp(x: impl Into<Child>, y: impl Into<Child>) -> Tree {
    Tree::new(vec![x.into(), y.into()])
}

/// Ternary associator shape
pub fn assoc(x: impl Into<Child>, y: impl Into<Child>, z: impl Into<Child>) -> Tree {
    Tree::new(vec![x.into(), y.into(), z.into()])
}

/// A tree with an arbitrary number of children
pub fn tree<I, C>(children: I) -> Tree
where
    I: IntoIterator<Item = C>,
    C: Into<Child>,
{
    Tree::new(children.into_iter().map(Into::into).collect())
}

/// An `n`-sprout: `n` leaves with unit markers substituted at `units`
pub fn sprout(n: usize, units: &[usize]) -> Result<Tree> {
    if let Some(bad) = units.iter().find(|&&pos| pos >= n) {
        return Err(Error::InvalidTreeShape(format!(
            "unit position {} out of range for a {}-sprout",
            bad, n
        )));
    }
    Ok((0..n)
        .map(|idx| {
            if units.contains(&idx) {
                Child::Unit
            } else {
                Child::SubTree(Tree::leaf())
            }
        })
        .collect())
}

/// Right unitor shape `x ⊗ 1`
pub fn rho() -> Tree {
    comp(leaf(), unit())
}

/// Left unitor shape `1 ⊗ x`
pub fn lambda() -> Tree {
    comp(unit(), leaf())
}
