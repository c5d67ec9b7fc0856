// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the orchestrator and checks the outcome
//! is internally consistent. Thai, emoji, lone combining marks and separators
//! all have to come back as either a ranked list or an empty one.

#![no_main]

use libfuzzer_sys::fuzz_target;
use partscout::scoring::ranking::compare_results;
use partscout::{search, testing, RecordIndex, SearchConfig, Strategy};
use std::cmp::Ordering;
use std::collections::HashSet;

fuzz_target!(|query: &[u8]| {
    static INDEX: std::sync::OnceLock<RecordIndex> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(testing::sample_index);
    let config = SearchConfig::default();

    let query = String::from_utf8_lossy(query);
    // Cap query length to avoid timeout
    let query: String = query.chars().take(200).collect();

    let outcome = search(index, &query, &config);

    // Blank input never searches
    if partscout::normalize(&query).is_empty() {
        assert!(outcome.is_no_query(), "blank query {:?} searched", query);
        return;
    }
    assert_ne!(outcome.strategy, Strategy::None);

    assert_eq!(outcome.total_count, outcome.results.len());
    if outcome.strategy == Strategy::Fuzzy {
        assert!(outcome.results.len() <= config.fuzzy_limit);
    }

    let mut seen = HashSet::new();
    for result in &outcome.results {
        assert!(result.index < index.len(), "index {} out of bounds", result.index);
        assert!(seen.insert(result.index), "duplicate record {}", result.index);
        assert_eq!(result.strategy, outcome.strategy);
        if result.strategy == Strategy::Fuzzy {
            assert!(result.score > config.fuzzy_min_score && result.score <= 100.0);
        }
    }

    for pair in outcome.results.windows(2) {
        assert_ne!(
            compare_results(&pair[0], &pair[1]),
            Ordering::Greater,
            "results out of order: {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }

    let grouped: usize = outcome.aggregation.iter().map(|row| row.count).sum();
    assert_eq!(grouped, outcome.total_count);
});
