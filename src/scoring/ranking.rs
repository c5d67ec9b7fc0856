// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Higher score first. Equal scores keep catalog order, so the ranking is a
//! total order and the same query over the same catalog always returns the
//! same list.

use crate::types::QueryResult;
use std::cmp::Ordering;

/// Compare two search results for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher wins)
/// 2. **Index** - ascending, the first-seen record wins a tie
///
/// Non-finite scores compare equal on the first key and fall through to index.
pub fn compare_results(a: &QueryResult, b: &QueryResult) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.index.cmp(&b.index),
    }
}

/// Sort results into final ranked order.
pub fn rank(results: &mut [QueryResult]) {
    results.sort_by(compare_results);
}
