//! Tab-separated catalog files.

use super::common::{sample_records, sample_tsv, write_catalog};
use partscout::{load_catalog, LoadError};
use tempfile::TempDir;

#[test]
fn test_sample_round_trips_through_tsv() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(dir.path(), "parts.tsv", &sample_tsv());
    assert_eq!(load_catalog(&path).unwrap(), sample_records());
}

#[test]
fn test_tab_and_txt_extensions() {
    let dir = TempDir::new().unwrap();
    for name in ["parts.tab", "parts.txt", "PARTS.TSV"] {
        let path = write_catalog(dir.path(), name, &sample_tsv());
        assert_eq!(load_catalog(&path).unwrap().len(), 7, "{name}");
    }
}

#[test]
fn test_nine_columns_carry_price() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        dir.path(),
        "parts.tsv",
        "brand\tmodel\tyear\tpn\tcat\ten\tth\tprice\turl\r\n\
         ZETA\tTMAX\t2020\t5VX-2586A\tBrake\tBrake Pad\tผ้าเบรก\t450\thttps://u\r\n",
    );
    let rows = load_catalog(&path).unwrap();
    assert_eq!(rows[0].price.as_deref(), Some("450"));
    assert_eq!(rows[0].url, "https://u");
}

#[test]
fn test_blank_lines_do_not_count_as_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        dir.path(),
        "parts.tsv",
        "header\n\nZETA\tTMAX\t2020\t5VX\tBrake\tPad\tผ้าเบรก\n\n\nshort\trow\n",
    );
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, LoadError::FieldCount { row: 2, found: 2 }));
}

#[test]
fn test_eight_columns_headed_price_are_price() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        dir.path(),
        "parts.tsv",
        "brand\tmodel\tyear\tpart_number\tcategory\ten_name\tth_name\tprice\n\
         ZETA\tTMAX\t2020\t5VX-2586A\tBrake\tBrake Pad\tผ้าเบรก\t450\n",
    );
    let rows = load_catalog(&path).unwrap();
    assert_eq!(rows[0].price.as_deref(), Some("450"));
    assert_eq!(rows[0].url, "");
}

#[test]
fn test_eight_columns_with_label_header_stay_url() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        dir.path(),
        "parts.tsv",
        "ยี่ห้อ\tรุ่น\tปี\tรหัส\tหมวด\tname\tชื่อ\tlink\n\
         ZETA\tTMAX\t2020\t5VX-2586A\tBrake\tBrake Pad\tผ้าเบรก\thttps://u\n",
    );
    let rows = load_catalog(&path).unwrap();
    assert_eq!(rows[0].url, "https://u");
    assert_eq!(rows[0].price, None);
}

#[test]
fn test_nine_columns_follow_header_order() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        dir.path(),
        "parts.tsv",
        "brand\tmodel\tyear\tpn\tcat\ten\tth\tURL\tPrice\n\
         ZETA\tTMAX\t2020\t5VX-2586A\tBrake\tBrake Pad\tผ้าเบรก\thttps://u\t450\n",
    );
    let rows = load_catalog(&path).unwrap();
    assert_eq!(rows[0].url, "https://u");
    assert_eq!(rows[0].price.as_deref(), Some("450"));
}

#[test]
fn test_header_contradicting_layout_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        dir.path(),
        "parts.tsv",
        "model\tbrand\tyear\tpart_number\tcategory\ten_name\tth_name\n\
         TMAX\tZETA\t2020\t5VX-2586A\tBrake\tBrake Pad\tผ้าเบรก\n",
    );
    match load_catalog(&path).unwrap_err() {
        LoadError::Header { column, reason } => {
            assert_eq!(column, 1);
            assert!(reason.contains("brand"), "{reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_header_repeating_a_field_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        dir.path(),
        "parts.tsv",
        "brand\tmodel\tyear\tpart_number\tcategory\ten_name\tth_name\tprice\tPRICE\n\
         ZETA\tTMAX\t2020\t5VX-2586A\tBrake\tBrake Pad\tผ้าเบรก\t450\t460\n",
    );
    assert!(matches!(
        load_catalog(&path),
        Err(LoadError::Header { column: 9, .. })
    ));
}
