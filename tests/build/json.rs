//! JSON catalog files.

use super::common::write_catalog;
use partscout::{build_index, load_catalog, search, LoadError, SearchConfig, Strategy};
use tempfile::TempDir;

#[test]
fn test_positional_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        dir.path(),
        "parts.json",
        r#"[
            ["ZETA", "TMAX", 2020, "5VX-2586A", "Brake", "Brake Pad", "ผ้าเบรก", 450, "https://shop/5vx-2586a"],
            ["ACME", "PCX", "2021", "KWN-H1201", "Engine", "Spark Plug", "หัวเทียน", "https://shop/kwn-h1201"],
            ["ACME", "NMAX", "2019", "2DP-E4450", "Engine", "Oil Filter", "ไส้กรองน้ำมันเครื่อง"]
        ]"#,
    );

    let rows = load_catalog(&path).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].year, "2020");
    assert_eq!(rows[0].price.as_deref(), Some("450"));
    assert_eq!(rows[0].url, "https://shop/5vx-2586a");
    assert_eq!(rows[1].price, None);
    assert_eq!(rows[1].url, "https://shop/kwn-h1201");
    assert_eq!(rows[2].url, "");

    let index = build_index(rows).unwrap();
    let outcome = search(&index, "5vx 2586a 2020", &SearchConfig::default());
    assert_eq!(outcome.strategy, Strategy::Exact);
    assert_eq!(outcome.total_count, 1);
}

#[test]
fn test_keyed_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        dir.path(),
        "parts.json",
        r#"[{
            "Brand": "ZETA", "Model": "TMAX", "Year": 2020.0,
            "Part Number": "5VX-2586A", "Category": "Brake",
            "EN-Name": "Brake Pad", "TH_Name": "ผ้าเบรก",
            "Price": null, "URL": "https://shop/5vx-2586a"
        }]"#,
    );

    let rows = load_catalog(&path).unwrap();
    assert_eq!(rows[0].year, "2020");
    assert_eq!(rows[0].part_number, "5VX-2586A");
    assert_eq!(rows[0].en_name, "Brake Pad");
    assert_eq!(rows[0].price, None);
    assert_eq!(rows[0].url, "https://shop/5vx-2586a");
}

#[test]
fn test_wrong_arity_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        dir.path(),
        "parts.json",
        r#"[
            ["ZETA", "TMAX", "2020", "5VX-2586A", "Brake", "Brake Pad", "ผ้าเบรก"],
            ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]
        ]"#,
    );
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, LoadError::FieldCount { row: 2, found: 10 }));
    assert_eq!(err.to_string(), "Row 2: expected 7 to 9 fields, found 10");
}

#[test]
fn test_nested_value_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        dir.path(),
        "parts.json",
        r#"[["ZETA", "TMAX", "2020", "5VX", "Brake", {"en": "Pad"}, "ผ้าเบรก"]]"#,
    );
    match load_catalog(&path).unwrap_err() {
        LoadError::InvalidField { row, field, reason } => {
            assert_eq!(row, 1);
            assert_eq!(field, "en_name");
            assert!(reason.contains("object"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path(), "parts.json", "[[\"ZETA\", ");
    assert!(matches!(load_catalog(&path), Err(LoadError::Json { .. })));
}

#[test]
fn test_empty_array_is_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path(), "parts.json", "[]");
    let rows = load_catalog(&path).unwrap();
    assert!(matches!(build_index(rows), Err(LoadError::EmptyCatalog)));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path(), "parts.xlsx", "PK");
    assert!(matches!(
        load_catalog(&path),
        Err(LoadError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_same_column_under_two_keys_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        dir.path(),
        "parts.json",
        r#"[{
            "brand": "ZETA", "model": "TMAX", "year": "2020",
            "PartNumber": "5VX-2586A", "part_number": "WRONG-1",
            "category": "Brake", "en_name": "Brake Pad", "th_name": "ผ้าเบรก"
        }]"#,
    );
    match load_catalog(&path).unwrap_err() {
        LoadError::InvalidField { row, field, reason } => {
            assert_eq!(row, 1);
            assert_eq!(field, "part_number");
            assert!(reason.contains("more than once"), "{reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}
