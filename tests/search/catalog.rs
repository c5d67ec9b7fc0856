//! The swappable catalog, driven through files on disk.

use super::common::{sample_tsv, write_catalog};
use partscout::{Catalog, LoadError, SearchConfig, Strategy};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_open_and_search() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path(), "parts.tsv", &sample_tsv());

    let catalog = Catalog::open(&path).unwrap();
    assert_eq!(catalog.generation(), 1);
    assert_eq!(catalog.snapshot().len(), 7);

    let outcome = catalog.search("5vx-2586a", &SearchConfig::default());
    assert_eq!(outcome.strategy, Strategy::Exact);
    assert_eq!(outcome.total_count, 1);
}

#[test]
fn test_reload_swaps_whole_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path(), "parts.tsv", &sample_tsv());
    let catalog = Catalog::open(&path).unwrap();
    let before = catalog.snapshot();

    fs::write(
        &path,
        "header\nKORU\tXMAX\t2022\tB74-F5805\tBrake\tBrake Pad\tผ้าเบรก\thttps://u\n",
    )
    .unwrap();
    assert_eq!(catalog.reload(&path).unwrap(), 2);

    let after = catalog.snapshot();
    assert_eq!(after.len(), 1);
    assert_eq!(before.len(), 7);
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(
        catalog.search("b74", &SearchConfig::default()).total_count,
        1
    );
}

#[test]
fn test_bad_reload_keeps_old_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path(), "parts.tsv", &sample_tsv());
    let catalog = Catalog::open(&path).unwrap();

    fs::write(&path, "header\nKORU\tXMAX\n").unwrap();
    let err = catalog.reload(&path).unwrap_err();
    assert!(matches!(err, LoadError::FieldCount { row: 1, found: 2 }));

    fs::write(&path, "header only\n").unwrap();
    assert!(matches!(catalog.reload(&path), Err(LoadError::EmptyCatalog)));

    assert_eq!(catalog.generation(), 1);
    assert_eq!(catalog.snapshot().len(), 7);
    assert_eq!(
        catalog.search("brake", &SearchConfig::default()).total_count,
        4
    );
}

#[test]
fn test_missing_file_is_unavailable_not_empty() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::open(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
