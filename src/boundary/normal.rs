//! Ordinary boundary: edge contraction / re-bracketing

use crate::model::{Child, Tree};

/// Faces obtained by grouping a contiguous run of top-level children
/// into one new node, followed by faces propagated up from each nested
/// child
///
/// `inner` supplies the ordinary boundary of nested children, which lets
/// callers choose between plain recursion and a memoized lookup.
pub(crate) fn contract_runs<F>(tree: &Tree, mut inner: F) -> Vec<Tree>
where
    F: FnMut(&Tree) -> Vec<Tree>,
{
    let children = tree.as_slice();
    let arity = children.len();
    let mut faces = Vec::new();

    for start in 0..arity {
        for end in start + 1..arity {
            // The run must be a proper part of the node
            if end + 1 - start >= arity {
                continue;
            }
            let mut grouped = Vec::with_capacity(arity - (end - start));
            grouped.extend_from_slice(&children[..start]);
            grouped.push(Child::SubTree(Tree::new(children[start..=end].to_vec())));
            grouped.extend_from_slice(&children[end + 1..]);
            faces.push(Tree::new(grouped));
        }
    }

    for (idx, child) in children.iter().enumerate() {
        if let Child::SubTree(sub) = child {
            faces.extend(
                inner(sub)
                    .into_iter()
                    .map(|face| tree.with_child(idx, Child::SubTree(face))),
            );
        }
    }

    faces
}

/// Ordinary boundary without memoization
pub fn normal_boundary(tree: &Tree) -> Vec<Tree> {
    contract_runs(tree, normal_boundary)
}
