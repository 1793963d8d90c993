//! Property-based tests for the manifest merge-join comparator.

use pkgsum::hash::Algorithm;
use pkgsum::manifest::compare::{compare, Outcome};
use pkgsum::manifest::{FileEntry, Manifest};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn manifest_from_map(map: &BTreeMap<String, String>) -> Manifest {
    let entries = map
        .iter()
        .map(|(path, hash)| FileEntry {
            relative_path: path.clone(),
            content_hash: hash.clone(),
            length: 0,
        })
        .collect();
    Manifest::from_entries(entries, Algorithm::Md5)
}

fn entry_map_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-z/]{1,8}", "[0-9A-F]{8}", 0..16)
}

proptest! {
    /// Every filename appearing in either manifest appears exactly once in
    /// the comparison, with the outcome dictated by membership and hash
    /// equality.
    #[test]
    fn merge_join_complete(
        actual in entry_map_strategy(),
        expected in entry_map_strategy(),
    ) {
        let actual_manifest = manifest_from_map(&actual);
        let expected_manifest = manifest_from_map(&expected);

        let result = compare(Some(&actual_manifest), Some(&expected_manifest));

        let mut union: Vec<&String> = actual.keys().chain(expected.keys()).collect();
        union.sort();
        union.dedup();
        prop_assert_eq!(result.entries.len(), union.len());

        for entry in &result.entries {
            let in_actual = actual.get(&entry.relative_path);
            let in_expected = expected.get(&entry.relative_path);
            let expected_outcome = match (in_actual, in_expected) {
                (Some(a), Some(e)) if a == e => Outcome::Same,
                (Some(_), Some(_)) => Outcome::Different,
                (None, Some(_)) => Outcome::Missing,
                (Some(_), None) => Outcome::Unexpected,
                (None, None) => unreachable!("entry not present in either input"),
            };
            prop_assert_eq!(entry.outcome, expected_outcome, "path {}", entry.relative_path);
        }
    }

    /// Comparison output is strictly ascending by relative path.
    #[test]
    fn merge_join_output_sorted(
        actual in entry_map_strategy(),
        expected in entry_map_strategy(),
    ) {
        let actual_manifest = manifest_from_map(&actual);
        let expected_manifest = manifest_from_map(&expected);

        let result = compare(Some(&actual_manifest), Some(&expected_manifest));

        for pair in result.entries.windows(2) {
            prop_assert!(pair[0].relative_path.as_bytes() < pair[1].relative_path.as_bytes());
        }
    }

    /// The global flag matches exactly when both manifests serialize to the
    /// same text.
    #[test]
    fn global_match_tracks_hash_equality(
        actual in entry_map_strategy(),
        expected in entry_map_strategy(),
    ) {
        let actual_manifest = manifest_from_map(&actual);
        let expected_manifest = manifest_from_map(&expected);

        let result = compare(Some(&actual_manifest), Some(&expected_manifest));

        prop_assert_eq!(
            result.global_match,
            actual_manifest.global_hash == expected_manifest.global_hash
        );
    }

    /// Manifest assembly is order-insensitive: shuffled entry input
    /// produces identical serialization.
    #[test]
    fn manifest_assembly_order_insensitive(map in entry_map_strategy()) {
        let forward: Vec<FileEntry> = map
            .iter()
            .map(|(path, hash)| FileEntry {
                relative_path: path.clone(),
                content_hash: hash.clone(),
                length: 0,
            })
            .collect();
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = Manifest::from_entries(forward, Algorithm::Md5);
        let b = Manifest::from_entries(reversed, Algorithm::Md5);

        prop_assert_eq!(a.detailed_text, b.detailed_text);
        prop_assert_eq!(a.global_hash, b.global_hash);
    }
}
