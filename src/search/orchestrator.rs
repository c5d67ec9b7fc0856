// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two-tier search: exact first, fuzzy when exact isn't useful.
//!
//! ```text
//! AwaitingQuery ──empty──▶ NoQuery
//!       │
//!       ▼
//! ExactAttempt ──0 hits or > max_exact_results──▶ FallbackFuzzy ──▶ Ranked
//!       │
//!       └──────────────1..=max hits──────────────▶ Accepted ──────▶ Ranked
//! ```
//!
//! Exact AND-matching is precise when the user typed a real part number. It
//! fails two ways: a typo finds nothing, and a bare brand name finds
//! thousands of rows that all score the same. Both hand over to the fuzzy
//! pass, which always returns a short, ranked list.

use crate::config::{MatchMode, SearchConfig};
use crate::index::RecordIndex;
use crate::scoring::ranking::rank;
use crate::search::aggregate::aggregate;
use crate::search::exact::match_keywords;
use crate::search::fuzzy::match_fuzzy;
use crate::types::{SearchOutcome, Strategy};
use crate::util::{normalize, tokenize};

/// Why the exact result set was thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No record contained every keyword.
    NoExactMatch,
    /// More hits than `max_exact_results`; the keywords didn't discriminate.
    TooManyExactMatches,
}

/// What the orchestrator does with an exact result count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Fallback(FallbackReason),
}

/// The fallback rule, isolated so it can be tested without a catalog.
///
/// Falls back iff the count is 0 or exceeds `max_exact_results`, unless
/// fallback is disabled in which case exact results always stand.
pub fn decide(exact_count: usize, config: &SearchConfig) -> Decision {
    if !config.fuzzy_fallback {
        return Decision::Accept;
    }
    if exact_count == 0 {
        Decision::Fallback(FallbackReason::NoExactMatch)
    } else if exact_count > config.max_exact_results {
        Decision::Fallback(FallbackReason::TooManyExactMatches)
    } else {
        Decision::Accept
    }
}

/// Split a normalized query into exact-match keywords according to the mode.
pub fn keywords_for(normalized: &str, mode: MatchMode) -> Vec<String> {
    match mode {
        MatchMode::Keywords => tokenize(normalized),
        MatchMode::Phrase if normalized.is_empty() => Vec::new(),
        MatchMode::Phrase => vec![normalized.to_string()],
    }
}

/// Run one search against one index snapshot.
///
/// Never fails. An empty query (or one made only of separators) yields the
/// `NoQuery` outcome with strategy [`Strategy::None`], which callers render as
/// "start typing" rather than "no results".
#[tracing::instrument(level = "debug", skip(index, config), fields(records = index.len()))]
pub fn search(index: &RecordIndex, query: &str, config: &SearchConfig) -> SearchOutcome {
    let normalized = normalize(query);
    let keywords = keywords_for(&normalized, config.match_mode);
    if keywords.is_empty() {
        tracing::debug!("empty query, no search performed");
        return SearchOutcome::no_query();
    }

    let exact = match_keywords(index, &keywords);
    let decision = decide(exact.len(), config);
    tracing::debug!(
        keywords = keywords.len(),
        exact_hits = exact.len(),
        ?decision,
        "exact attempt finished"
    );

    let (strategy, mut results) = match decision {
        Decision::Accept => (Strategy::Exact, exact),
        Decision::Fallback(_) => (
            Strategy::Fuzzy,
            match_fuzzy(index, &normalized, config.fuzzy_limit, config.fuzzy_min_score),
        ),
    };

    rank(&mut results);
    let aggregation = aggregate(index, &results);

    SearchOutcome {
        strategy,
        keywords,
        total_count: results.len(),
        results,
        aggregation,
    }
}
