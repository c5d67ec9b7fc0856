// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact matching: every keyword, somewhere in the line.
//!
//! A record matches when each keyword is a substring of its composite field.
//! Substring, not whole word: "2586" finds "5vx 2586a". Keywords are ANDed,
//! so adding one can only shrink the result set.
//!
//! No typo tolerance at all. That is the fuzzy matcher's job; this path is
//! the fast, precise one for people who typed the part number right.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::index::RecordIndex;
use crate::scoring::exact_score;
use crate::types::{PartRecord, QueryResult, Strategy};
use crate::util::{normalize, tokenize};

/// Match a free-text query: normalize, split into keywords, AND them.
///
/// Results come back in index order; ranking is the orchestrator's job.
pub fn match_exact(index: &RecordIndex, query: &str) -> Vec<QueryResult> {
    let keywords = tokenize(&normalize(query));
    match_keywords(index, &keywords)
}

/// Match pre-tokenized keywords against every record.
///
/// An empty keyword list matches nothing. Keywords must already be
/// normalized; duplicates are the caller's problem (they only inflate the
/// score, never the result set).
pub fn match_keywords(index: &RecordIndex, keywords: &[String]) -> Vec<QueryResult> {
    if keywords.is_empty() {
        return Vec::new();
    }

    let score = exact_score(keywords.len());
    let hit = |(position, record): (usize, &PartRecord)| {
        contains_all(record.composite(), keywords).then_some(QueryResult {
            index: position,
            score,
            strategy: Strategy::Exact,
        })
    };

    #[cfg(feature = "parallel")]
    let results = index.records().par_iter().enumerate().filter_map(hit).collect();

    #[cfg(not(feature = "parallel"))]
    let results = index.iter().filter_map(hit).collect();

    results
}

/// True when every keyword is a substring of `composite`.
#[inline]
pub fn contains_all(composite: &str, keywords: &[String]) -> bool {
    keywords.iter().all(|k| composite.contains(k.as_str()))
}
