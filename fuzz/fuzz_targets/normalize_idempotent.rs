// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalizing twice must equal normalizing once, for any input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use partscout::{normalize, tokenize};

fuzz_target!(|value: &str| {
    let once = normalize(value);
    assert_eq!(normalize(&once), once, "not idempotent for {:?}", value);

    assert!(!once.starts_with(' ') && !once.ends_with(' '));
    assert!(!once.contains("  "));
    assert!(!once.contains(['-', '_', '/']));

    for token in tokenize(&once) {
        assert!(!token.is_empty());
        assert!(!token.contains(' '));
    }
});
