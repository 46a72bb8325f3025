//! Hierarchy Integration Tests
//!
//! These tests exercise the public API end to end: building trees,
//! deriving boundaries, assembling hierarchies and exporting levels.
//!
//! Run with:
//! ```bash
//! cargo test --test hierarchy_integration
//! ```

mod common;

use monoidahedron::viz::sprout_level;
use monoidahedron::{
    assoc, comp, lambda, leaf, rho, sprout, tree, unit, Child, FaceGraph, Session,
    SessionConfig, Tree, TreeGraph,
};

fn samples() -> Vec<Tree> {
    vec![
        leaf(),
        comp(leaf(), leaf()),
        sprout(3, &[]).unwrap(),
        sprout(4, &[]).unwrap(),
        sprout(3, &[1]).unwrap(),
        sprout(4, &[0, 3]).unwrap(),
        rho(),
        lambda(),
        assoc(rho(), leaf(), lambda()),
        tree![leaf(), unit(), comp(leaf(), leaf())],
    ]
}

fn uncached() -> Session {
    Session::new(SessionConfig::default().with_memoize(false))
}

// ============================================================================
// Boundary Properties
// ============================================================================

#[test]
fn test_leaf_is_boundary_minimal() {
    common::init_test_setup();
    let session = Session::default();

    assert!(session.boundary(&leaf()).is_empty());
    assert!(session.hierarchy(&leaf()).unwrap().level(0).is_empty());
}

#[test]
fn test_boundary_is_deterministic() {
    common::init_test_setup();
    for t in samples() {
        let first = uncached().boundary(&t);
        let second = uncached().boundary(&t);
        assert_eq!(first, second, "{}", t);
    }
}

#[test]
fn test_cache_does_not_change_results() {
    common::init_test_setup();
    let session = Session::default();
    for t in samples() {
        assert_eq!(session.boundary(&t), uncached().boundary(&t), "{}", t);
        assert_eq!(
            session.hierarchy_raw(&t).unwrap(),
            uncached().hierarchy_raw(&t).unwrap(),
            "{}",
            t
        );
    }
}

#[test]
fn test_ordinary_faces_keep_the_underlying_object() {
    let session = Session::default();
    for t in samples() {
        for face in session.normal_boundary(&t) {
            assert_eq!(face.leaf_count(), t.leaf_count(), "{} -> {}", t, face);
        }
    }
}

#[test]
fn test_unit_elimination_settles_after_two_passes() {
    let mut trees = samples();
    trees.push(tree![comp(unit(), unit()), leaf(), unit()]);
    trees.push(comp(comp(unit(), unit()), comp(unit(), unit())));

    for t in trees {
        let Some(Child::SubTree(once)) = t.unit_elim() else {
            continue;
        };
        if let Some(Child::SubTree(twice)) = once.unit_elim() {
            assert_eq!(
                twice.unit_elim(),
                Some(Child::SubTree(twice.clone())),
                "{}",
                t
            );
        }
    }
}

#[test]
fn test_unit_faces_follow_single_elimination() {
    let session = Session::default();

    let exposed = tree![comp(unit(), unit()), leaf(), unit()];
    assert_eq!(session.unit_boundary(&exposed)[1], rho());

    // The exposed unitor then contributes its own faces one level down
    let hierarchy = session.hierarchy(&exposed).unwrap();
    assert!(hierarchy.level(1).iter().any(|faces| faces.contains(&leaf())));

    let pairs = comp(comp(unit(), unit()), comp(unit(), unit()));
    assert_eq!(session.unit_boundary(&pairs).last(), Some(&leaf()));
}

#[test]
fn test_levels_past_the_deepest_are_empty() {
    let session = Session::default();
    for t in samples() {
        let hierarchy = session.hierarchy(&t).unwrap();
        let depth = hierarchy.depth();
        for d in depth..depth + 3 {
            assert!(hierarchy.level(d).is_empty(), "{} at {}", t, d);
        }
        for d in 0..depth {
            assert!(!hierarchy.level(d).is_empty(), "{} at {}", t, d);
        }
    }
}

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn test_ternary_tree_has_two_facets() {
    let t = tree![leaf(), leaf(), leaf()];
    let faces = Session::default().normal_boundary(&t);
    assert_eq!(
        faces,
        vec![
            tree![comp(leaf(), leaf()), leaf()],
            tree![leaf(), comp(leaf(), leaf())],
        ]
    );
}

#[test]
fn test_right_unitor_activates_unit_laws() {
    let faces = Session::default().unit_boundary(&comp(leaf(), unit()));
    assert!(!faces.is_empty());
    assert_eq!(faces, vec![tree![leaf(), tree![unit()]], leaf()]);
}

#[test]
fn test_binary_edges() {
    let triples: Vec<_> = comp(leaf(), leaf())
        .edges()
        .iter()
        .map(|edge| edge.as_triple())
        .collect();
    assert_eq!(triples, vec![(0, 1, -1), (0, 2, -1)]);
}

#[test]
fn test_five_sprout_is_three_dimensional() {
    common::init_test_setup();
    let hierarchy = Session::default()
        .hierarchy(&sprout(5, &[]).unwrap())
        .unwrap();

    // K5: 9 facets, edges at the level below the squares and pentagons
    assert_eq!(hierarchy.level(0)[0].len(), 9);
    assert_eq!(hierarchy.depth(), 3);

    let edge_level = sprout_level(5, &[]);
    assert_eq!(edge_level, 2);
    assert!(hierarchy
        .level(edge_level)
        .iter()
        .all(|faces| faces.len() == 2));

    // 14 vertices, 21 edges
    let graph = FaceGraph::from_level(&hierarchy, edge_level);
    assert_eq!(graph.nodes.len(), 14);
    assert_eq!(graph.edges.len(), 21);
}

#[test]
fn test_unit_sprout_is_a_triangle() {
    common::init_test_setup();
    let t = sprout(3, &[1]).unwrap();
    let hierarchy = Session::default().hierarchy(&t).unwrap();

    let labels: Vec<String> = hierarchy.level(0)[0]
        .iter()
        .map(|face| face.to_string())
        .collect();
    assert_eq!(labels, vec!["((a1)b)", "(a(1b))", "(a(1)b)"]);

    let graph = FaceGraph::from_level(&hierarchy, sprout_level(3, &[1]));
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.edges.len(), 3);

    let mut vertices: Vec<_> = graph.nodes.iter().map(|n| n.label.as_str()).collect();
    vertices.sort();
    assert_eq!(vertices, vec!["((a(1))b)", "(a((1)b))", "(ab)"]);
}

#[test]
fn test_tree_export_round_trips_through_json() {
    let graph = TreeGraph::from_tree(&assoc(leaf(), rho(), leaf()));
    let json = graph.to_json().unwrap();
    let back: TreeGraph = serde_json::from_str(&json).unwrap();
    assert_eq!(back, graph);
    assert_eq!(back.title, "(a(b1)c)");
}
