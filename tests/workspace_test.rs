//! Folder enumeration and labelling on real directory trees.

mod common;

use std::collections::HashSet;

use common::TestWorkspace;
use relocate::workspace::{build_pick_items, enumerate_folders, ScanOptions, DEFAULT_EXCLUDED};

#[tokio::test]
async fn test_every_non_excluded_descendant_listed_once_and_sorted() {
    let ws = TestWorkspace::new();
    for dir in ["src/lib", "src/bin", "docs", "out/build", "a/dist/x", "a/b"] {
        ws.dir(dir);
    }
    ws.file("src/lib/mod.rs", "");

    // Nested root overlaps the first one
    let roots = vec![ws.root(), ws.path("src")];
    let folders = enumerate_folders(&roots, &ScanOptions::default()).await;

    let unique: HashSet<_> = folders.iter().collect();
    assert_eq!(unique.len(), folders.len());

    let mut sorted = folders.clone();
    sorted.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    assert_eq!(folders, sorted);

    for expected in ["", "src", "src/lib", "src/bin", "docs", "a", "a/b"] {
        let path = if expected.is_empty() { ws.root() } else { ws.path(expected) };
        assert!(folders.contains(&path), "missing {}", path.display());
    }

    for folder in &folders {
        let relative = folder.strip_prefix(ws.root()).unwrap();
        for component in relative.components() {
            let name = component.as_os_str().to_string_lossy();
            assert!(
                !DEFAULT_EXCLUDED.contains(&name.as_ref()),
                "excluded folder listed: {}",
                folder.display()
            );
        }
    }
}

#[tokio::test]
async fn test_pick_items_follow_enumeration_order() {
    let ws = TestWorkspace::new();
    ws.dir("src/lib");

    let roots = vec![ws.root()];
    let folders = enumerate_folders(&roots, &ScanOptions::default()).await;
    let items = build_pick_items(&folders, &roots);

    let sep = std::path::MAIN_SEPARATOR;
    let labels: Vec<String> = items.iter().map(|item| item.label.clone()).collect();
    assert_eq!(
        labels,
        vec![
            "./".to_string(),
            "./src".to_string(),
            format!("./src{}lib", sep),
        ]
    );
    assert_eq!(items[2].full_path, ws.path("src/lib"));
}
