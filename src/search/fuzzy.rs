// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: rank the whole catalog by similarity, keep the best few.
//!
//! Every record is scored against the query on every call. There is no
//! n-gram or automaton index behind this: one linear pass, split across cores
//! with the `parallel` feature.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::index::RecordIndex;
use crate::scoring::fuzzy_score;
use crate::scoring::ranking::rank;
use crate::types::{PartRecord, QueryResult, Strategy};
use crate::util::normalize;

/// Score every record against `query` and return the top `limit`.
///
/// Results scoring `<= min_score` are dropped. Survivors are sorted by score
/// descending, ties going to the lower index, then truncated to `limit`.
#[tracing::instrument(level = "debug", skip(index), fields(records = index.len()))]
pub fn match_fuzzy(
    index: &RecordIndex,
    query: &str,
    limit: usize,
    min_score: f64,
) -> Vec<QueryResult> {
    let query = normalize(query);
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let scored = |(position, record): (usize, &PartRecord)| {
        let score = fuzzy_score(&query, record.composite());
        (score > min_score).then_some(QueryResult {
            index: position,
            score,
            strategy: Strategy::Fuzzy,
        })
    };

    #[cfg(feature = "parallel")]
    let mut results: Vec<QueryResult> = index
        .records()
        .par_iter()
        .enumerate()
        .filter_map(scored)
        .collect();

    #[cfg(not(feature = "parallel"))]
    let mut results: Vec<QueryResult> = index.iter().filter_map(scored).collect();

    rank(&mut results);
    results.truncate(limit);
    results
}
