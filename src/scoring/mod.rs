// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Exact matches count keywords, fuzzy matches measure similarity, and one
//! comparator orders both: score descending, catalog position ascending.

mod core;
pub mod ranking;

pub use core::*;
