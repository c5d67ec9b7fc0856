// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The summary table: how many hits per (brand, model, year, category).
//!
//! Grouping uses verbatim field values, so "TMAX" and "Tmax" are different
//! rows. The summary reports the catalog as written.

use std::collections::BTreeMap;

use crate::index::RecordIndex;
use crate::types::{AggregationRow, QueryResult};

/// Group a result set and count each group.
///
/// Sorted by count descending, ties by (brand, model, year, category)
/// ascending. Results whose index is not in `index` are skipped. Counts sum
/// to the number of results that resolved.
pub fn aggregate(index: &RecordIndex, results: &[QueryResult]) -> Vec<AggregationRow> {
    let mut groups: BTreeMap<(&str, &str, &str, &str), usize> = BTreeMap::new();
    for result in results {
        if let Some(record) = index.get(result.index) {
            *groups.entry(record.group_key()).or_insert(0) += 1;
        }
    }

    let mut rows: Vec<AggregationRow> = groups
        .into_iter()
        .map(|((brand, model, year, category), count)| AggregationRow {
            brand: brand.to_string(),
            model: model.to_string(),
            year: year.to_string(),
            category: category.to_string(),
            count,
        })
        .collect();

    // Stable sort keeps the BTreeMap's lexicographic order within equal counts
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}
