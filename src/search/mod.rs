// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search algorithms: where the rubber meets the road.
//!
//! Everything culminates here. The two-tier strategy (exact → fuzzy) gives
//! precise answers to well-typed part numbers and a short ranked list to
//! everything else, and the aggregator summarizes whichever one won.

pub mod aggregate;
pub mod exact;
pub mod fuzzy;
pub mod orchestrator;

pub use aggregate::aggregate;
pub use exact::{match_exact, match_keywords};
pub use fuzzy::match_fuzzy;
pub use orchestrator::{decide, search, Decision, FallbackReason};
