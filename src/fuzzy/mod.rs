// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy scoring: typo tolerance via string similarity.
//!
//! Two layers here: an indel (LCS) distance for raw comparisons, and the
//! ratio family built on top of it that turns distances into 0-100 scores.

mod indel;
pub mod ratio;

pub use indel::lcs_len;
pub use ratio::{
    partial_ratio, partial_token_ratio, ratio, token_ratio, token_set_ratio, token_sort_ratio,
    weighted_ratio,
};
