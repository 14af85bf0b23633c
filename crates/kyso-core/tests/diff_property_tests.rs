use kyso_core::{ManifestEntry, diff};
use kyso_fs::FileEntry;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};

fn files_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-e]{1,2}\\.txt", "h[0-3]", 0..8)
}

fn to_local(files: &BTreeMap<String, String>) -> Vec<FileEntry> {
    files
        .iter()
        .map(|(name, hash)| FileEntry {
            path: name.clone(),
            absolute: name.into(),
            content_hash: hash.clone(),
        })
        .collect()
}

fn to_manifest(files: &BTreeMap<String, String>) -> Vec<ManifestEntry> {
    files
        .iter()
        .map(|(name, hash)| ManifestEntry::new(name.clone(), hash.clone()))
        .collect()
}

proptest! {
    #[test]
    fn diff_is_idempotent(local in files_strategy(), remote in files_strategy()) {
        let local = to_local(&local);
        let manifest = to_manifest(&remote);
        prop_assert_eq!(diff(&local, &manifest), diff(&local, &manifest));
    }

    #[test]
    fn identical_sides_are_all_unmodified(files in files_strategy()) {
        let result = diff(&to_local(&files), &to_manifest(&files));
        prop_assert!(result.added.is_empty());
        prop_assert!(result.modified.is_empty());
        prop_assert!(result.deleted.is_empty());
        prop_assert_eq!(result.unmodified.len(), files.len());
    }

    #[test]
    fn buckets_are_disjoint_and_complete(local in files_strategy(), remote in files_strategy()) {
        let result = diff(&to_local(&local), &to_manifest(&remote));

        let mut seen = HashSet::new();
        for name in result
            .added
            .iter()
            .chain(&result.modified)
            .chain(&result.unmodified)
            .chain(&result.deleted)
        {
            prop_assert!(seen.insert(name.clone()), "{} classified twice", name);
        }

        let local_count = result.added.len() + result.modified.len() + result.unmodified.len();
        prop_assert_eq!(local_count, local.len());

        let expected_deleted: Vec<_> = remote.keys().filter(|k| !local.contains_key(*k)).cloned().collect();
        prop_assert_eq!(&result.deleted, &expected_deleted);
    }
}
