use kyso_fs::checksum::compute_content_checksum;
use kyso_fs::{NormalizedPath, collect_files};
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

fn tree_strategy() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    let segment = "[a-z][a-z0-9]{0,6}";
    let rel_path = prop::collection::vec(segment, 1..4).prop_map(|parts| parts.join("/"));
    prop::collection::btree_map(rel_path, prop::collection::vec(any::<u8>(), 0..64), 1..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn collector_returns_every_file_once_with_matching_hash(tree in tree_strategy()) {
        let temp = TempDir::new().unwrap();
        let mut expected = BTreeMap::new();
        for (rel, content) in &tree {
            let path = temp.path().join(rel);
            // A generated file path may collide with a directory created for
            // an earlier entry (or the reverse); keep only what was written.
            if let Some(parent) = path.parent() {
                if fs::create_dir_all(parent).is_err() {
                    continue;
                }
            }
            if path.is_dir() || fs::write(&path, content).is_err() {
                continue;
            }
            expected.insert(rel.clone(), compute_content_checksum(content));
        }
        expected.retain(|rel, _| temp.path().join(rel).is_file());

        let files = collect_files(temp.path()).unwrap();
        let collected: BTreeMap<String, String> = files
            .iter()
            .map(|f| (f.path.clone(), f.content_hash.clone()))
            .collect();

        prop_assert_eq!(files.len(), collected.len());
        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn normalized_path_has_no_backslashes(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));
    }
}
