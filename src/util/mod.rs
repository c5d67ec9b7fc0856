// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by indexing and querying.

pub mod normalize;

pub use normalize::{normalize, tokenize};
