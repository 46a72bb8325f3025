//! Unit-law boundary: expanding unitors and eliminating units

use crate::model::{Child, Tree};

/// Insert explicit unit nodes: every bare marker child is wrapped into a
/// singleton node, nested children are expanded unless they are
/// singletons already. Singleton trees are returned unchanged.
pub fn unit_expand(tree: &Tree) -> Tree {
    if tree.arity() == 1 {
        return tree.clone();
    }
    tree.children()
        .map(|child| match child {
            Child::SubTree(sub) if sub.arity() == 1 => child.clone(),
            Child::SubTree(sub) => Child::SubTree(unit_expand(sub)),
            marker => Child::SubTree(Tree::new(vec![marker.clone()])),
        })
        .collect()
}

/// Eliminate left and right unitors, then reduce
///
/// A binary node keeps only the eliminations of its nested children, so
/// unit markers beside them vanish; if nothing is left the node is marked
/// eliminated. Nodes of any other arity are eliminated child by child.
/// A single pass can expose a new unitor one level up, which the next
/// application eliminates. Returns `None` when the whole tree reduces to
/// nothing.
pub fn unit_elim(tree: &Tree) -> Option<Child> {
    let children: Vec<Child> = if tree.arity() == 2 {
        let kept: Vec<Child> = tree
            .children()
            .filter_map(|child| child.as_tree().map(eliminated_child))
            .collect();
        if kept.is_empty() {
            vec![Child::Eliminated]
        } else {
            kept
        }
    } else {
        tree.children()
            .map(|child| match child {
                Child::SubTree(sub) => eliminated_child(sub),
                marker => marker.clone(),
            })
            .collect()
    };
    unit_reduce(&Tree::new(children))
}

fn eliminated_child(tree: &Tree) -> Child {
    unit_elim(tree).unwrap_or(Child::Eliminated)
}

/// Drop eliminated markers and collapse the singleton wrappers they leave
///
/// - leaves and singletons around the unit marker are kept as they are
/// - a singleton around the eliminated marker reduces to nothing
/// - any other singleton is replaced by its child
/// - otherwise children are reduced recursively and absent ones dropped;
///   a lone survivor replaces the node, no survivors leave a leaf
pub fn unit_reduce(tree: &Tree) -> Option<Child> {
    match tree.as_slice() {
        [] | [Child::Unit] => Some(Child::SubTree(tree.clone())),
        [Child::Eliminated] => None,
        [only] => Some(only.clone()),
        children => {
            let mut survivors: Vec<Child> = children
                .iter()
                .filter_map(|child| match child {
                    Child::SubTree(sub) => unit_reduce(sub),
                    Child::Unit => Some(Child::Unit),
                    Child::Eliminated => None,
                })
                .collect();
            match survivors.len() {
                0 => Some(Child::SubTree(Tree::leaf())),
                1 => survivors.pop(),
                _ => Some(Child::SubTree(Tree::new(survivors))),
            }
        }
    }
}

/// Unit-law faces: the expansion and the elimination of `tree`, each
/// kept only when it is a tree different from `tree` itself
pub fn unit_boundary(tree: &Tree) -> Vec<Tree> {
    let mut faces = Vec::with_capacity(2);

    let expansion = unit_expand(tree);
    if &expansion != tree {
        faces.push(expansion);
    }

    if let Some(Child::SubTree(reduction)) = unit_elim(tree) {
        if &reduction != tree {
            faces.push(reduction);
        }
    }

    faces
}
