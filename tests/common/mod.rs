//! Shared test utilities and fixtures.

#![allow(dead_code)]

use partscout::{build_index, RawRecord, RecordIndex, SearchOutcome};
use std::fs;
use std::path::{Path, PathBuf};

// Re-export canonical test utilities from partscout::testing
pub use partscout::testing::{make_raw, sample_index, sample_records, synthetic_records};

// ============================================================================
// INDEX BUILDERS
// ============================================================================

/// Build an index from bare searchable rows.
pub fn index_of(rows: &[[&str; 7]]) -> RecordIndex {
    let raw: Vec<RawRecord> = rows
        .iter()
        .map(|[brand, model, year, pn, category, en, th]| {
            make_raw(brand, model, year, pn, category, en, th)
        })
        .collect();
    build_index(raw).expect("fixture rows must build")
}

/// The one-record catalog used by the typo examples.
pub fn single_brake_pad() -> RecordIndex {
    index_of(&[[
        "ZETA", "TMAX", "2020", "5VX-2586A", "Brake", "Brake Pad", "ผ้าเบรก",
    ]])
}

// ============================================================================
// OUTCOME HELPERS
// ============================================================================

/// Part numbers of an outcome's results, in rank order.
pub fn part_numbers(index: &RecordIndex, outcome: &SearchOutcome) -> Vec<String> {
    outcome
        .records(index)
        .map(|(record, _)| record.part_number.clone())
        .collect()
}

/// Result positions, in rank order.
pub fn positions(outcome: &SearchOutcome) -> Vec<usize> {
    outcome.results.iter().map(|r| r.index).collect()
}

// ============================================================================
// FILE FIXTURES
// ============================================================================

/// Write `contents` to `dir/name` and return the path.
pub fn write_catalog(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write fixture");
    path
}

/// The sample catalog as a TSV document with a header row.
pub fn sample_tsv() -> String {
    let mut out = String::from("brand\tmodel\tyear\tpart_number\tcategory\ten_name\tth_name\turl\n");
    for r in sample_records() {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            r.brand, r.model, r.year, r.part_number, r.category, r.en_name, r.th_name, r.url
        ));
    }
    out
}
