// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The composite scorer stays in 0..=100 and scores identical strings 100.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use partscout::fuzzy::weighted_ratio;

#[derive(Arbitrary, Debug)]
struct Pair<'a> {
    query: &'a str,
    composite: &'a str,
}

fuzz_target!(|pair: Pair<'_>| {
    let query: String = pair.query.chars().take(64).collect();
    let composite: String = pair.composite.chars().take(256).collect();

    let score = weighted_ratio(&query, &composite);
    assert!(score.is_finite());
    assert!((0.0..=100.0).contains(&score), "score {} out of range", score);

    if !query.is_empty() {
        assert_eq!(weighted_ratio(&query, &query), 100.0);
    }
});
