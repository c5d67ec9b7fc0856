// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The numbers each strategy attaches to a match.
//!
//! Exact matches score by keyword count. Under AND semantics every exact match
//! of one query has the same count, so the score says "how specific was the
//! query" rather than "how good is this row"; index order breaks the tie.
//!
//! Fuzzy matches score on a 0-100 similarity scale. The two never mix in one
//! result set: the orchestrator picks a strategy, then ranks.

use crate::fuzzy::weighted_ratio;

/// Upper bound of the fuzzy scale.
pub const MAX_FUZZY_SCORE: f64 = 100.0;

/// Score of an exact match: the number of distinct keywords it satisfied.
#[inline]
pub fn exact_score(matched_keywords: usize) -> f64 {
    matched_keywords as f64
}

/// Similarity of a normalized query to a record's composite field.
///
/// Degenerate input (an empty side, or a non-finite ratio) scores 0 so the
/// minimum-score filter drops it; it is never reported as a failure.
pub fn fuzzy_score(query: &str, composite: &str) -> f64 {
    let score = weighted_ratio(query, composite);
    if score.is_finite() {
        score.clamp(0.0, MAX_FUZZY_SCORE)
    } else {
        0.0
    }
}
