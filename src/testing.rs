//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::index::{build_index, RecordIndex};
use crate::types::RawRecord;

/// Create a raw record from the seven searchable fields, with a derived URL.
pub fn make_raw(
    brand: &str,
    model: &str,
    year: &str,
    part_number: &str,
    category: &str,
    en_name: &str,
    th_name: &str,
) -> RawRecord {
    RawRecord {
        brand: brand.to_string(),
        model: model.to_string(),
        year: year.to_string(),
        part_number: part_number.to_string(),
        category: category.to_string(),
        en_name: en_name.to_string(),
        th_name: th_name.to_string(),
        price: None,
        url: format!("https://parts.example/{}", part_number.to_lowercase()),
    }
}

/// A small mixed catalog: three brands' worth of TMAX/NMAX/PCX parts.
///
/// Positions matter to tests that check tie-breaking:
/// - 0 and 1 are TMAX brake parts differing only in part suffix and name
/// - 6 is the only non-ZETA brake part
pub fn sample_records() -> Vec<RawRecord> {
    vec![
        make_raw("ZETA", "TMAX", "2020", "5VX-2586A", "Brake", "Brake Pad", "ผ้าเบรก"),
        make_raw("ZETA", "TMAX", "2020", "5VX-2586B", "Brake", "Brake Disc", "จานเบรก"),
        make_raw("ZETA", "NMAX", "2019", "2DP-F5805", "Brake", "Brake Lever", "มือเบรก"),
        make_raw("ACME", "NMAX", "2019", "2DP-E4450", "Engine", "Oil Filter", "ไส้กรองน้ำมันเครื่อง"),
        make_raw("ACME", "PCX", "2021", "KWN-H1201", "Engine", "Spark Plug", "หัวเทียน"),
        make_raw("ZETA", "TMAX", "2020", "5VX-1234C", "Body", "Mirror Left", "กระจกซ้าย"),
        make_raw("ACME", "PCX", "2021", "KWN-B4100", "Brake", "Brake Shoe", "ผ้าเบรกหลัง"),
    ]
}

/// [`sample_records`] built into an index.
pub fn sample_index() -> RecordIndex {
    match build_index(sample_records()) {
        Ok(index) => index,
        Err(e) => panic!("sample catalog must build: {}", e),
    }
}

/// A synthetic catalog of `n` records cycling through a fixed vocabulary.
///
/// Used by benchmarks and tests that need more rows than the sample.
pub fn synthetic_records(n: usize) -> Vec<RawRecord> {
    const BRANDS: [&str; 3] = ["ZETA", "ACME", "KORU"];
    const MODELS: [&str; 5] = ["TMAX", "NMAX", "PCX", "XMAX", "AEROX"];
    const PARTS: [(&str, &str, &str); 6] = [
        ("Brake", "Brake Pad", "ผ้าเบรก"),
        ("Brake", "Brake Disc", "จานเบรก"),
        ("Engine", "Oil Filter", "ไส้กรองน้ำมันเครื่อง"),
        ("Engine", "Spark Plug", "หัวเทียน"),
        ("Body", "Mirror Left", "กระจกซ้าย"),
        ("Drive", "Drive Belt", "สายพาน"),
    ];

    (0..n)
        .map(|i| {
            let (category, en, th) = PARTS[i % PARTS.len()];
            make_raw(
                BRANDS[i % BRANDS.len()],
                MODELS[(i / 3) % MODELS.len()],
                &(2015 + (i % 9)).to_string(),
                &format!("{:03X}-{:05}", (i * 7) % 4096, i),
                category,
                en,
                th,
            )
        })
        .collect()
}
