//! Property-based tests for path handling.
//!
//! The canonical and relationship modules carry light property tests of
//! their own. This module runs the heavier, high case-count checks and is
//! only compiled with the `property-tests` feature.

use super::canonical::to_canonical_path;
use super::relationship::{is_child, PathRelationship};
use proptest::prelude::*;
use std::path::{Component, PathBuf};

fn path_component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z0-9_-]{1,20}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // canonical(canonical(p)) == canonical(p)
    #[test]
    fn canonical_idempotent(path in absolute_path_strategy()) {
        let once = to_canonical_path(&path).unwrap();
        let twice = to_canonical_path(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    // Canonical paths never contain "." or ".."
    #[test]
    fn canonical_no_dot_segments(path in absolute_path_strategy()) {
        let canonical = to_canonical_path(&path).unwrap();
        for component in canonical.components() {
            prop_assert!(!matches!(component, Component::CurDir | Component::ParentDir));
        }
    }

    // Relationship is the same for a path and its canonical form
    #[test]
    fn relationship_invariant_under_canonicalisation(
        path1 in absolute_path_strategy(),
        path2 in absolute_path_strategy(),
    ) {
        let canonical1 = to_canonical_path(&path1).unwrap();
        prop_assert_eq!(
            PathRelationship::between(&path1, &path2),
            PathRelationship::between(&canonical1, &path2)
        );
    }

    // is_child(R, E) implies !is_child(E, R)
    #[test]
    fn child_relation_antisymmetric(path1 in absolute_path_strategy(), path2 in absolute_path_strategy()) {
        if is_child(&path1, &path2) {
            prop_assert!(!is_child(&path2, &path1));
        }
        prop_assert!(!is_child(&path1, &path1));
    }

    // Relationship types are mutually exclusive and symmetric
    #[test]
    fn relationship_symmetric(path1 in absolute_path_strategy(), path2 in absolute_path_strategy()) {
        let rel_12 = PathRelationship::between(&path1, &path2);
        let rel_21 = PathRelationship::between(&path2, &path1);

        let is_symmetric = matches!(
            (rel_12, rel_21),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );

        prop_assert!(is_symmetric, "Invalid symmetry: {:?} <-> {:?}", rel_12, rel_21);
    }

    // Containment is transitive
    #[test]
    fn child_relation_transitive(base in absolute_path_strategy(), parts1 in 1..5usize, parts2 in 1..5usize) {
        let mut path_b = to_canonical_path(&base).unwrap();
        for i in 0..parts1 {
            path_b.push(format!("sub{i}"));
        }

        let mut path_c = path_b.clone();
        for i in 0..parts2 {
            path_c.push(format!("deep{i}"));
        }

        prop_assert!(is_child(&base, &path_b));
        prop_assert!(is_child(&path_b, &path_c));
        prop_assert!(is_child(&base, &path_c));
    }
}
