// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search tuning knobs.
//!
//! The defaults suit a catalog of a few tens of thousands of parts. Thresholds
//! are catalog-dependent, so they live here rather than in the matchers.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Maximum exact hits before the query counts as under-discriminating.
pub const DEFAULT_MAX_EXACT_RESULTS: usize = 500;

/// Number of records the fuzzy pass keeps.
pub const DEFAULT_FUZZY_LIMIT: usize = 50;

/// Fuzzy results must score strictly above this (0-100 scale).
pub const DEFAULT_FUZZY_MIN_SCORE: f64 = 60.0;

/// Rows of product links the CLI prints.
pub const DEFAULT_DISPLAY_LIMIT: usize = 20;

/// How a query is turned into keywords for exact matching.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every whitespace-separated keyword must appear (AND).
    #[default]
    Keywords,
    /// The whole normalized query is a single keyword (plain substring search).
    Phrase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub match_mode: MatchMode,
    pub max_exact_results: usize,
    pub fuzzy_limit: usize,
    pub fuzzy_min_score: f64,
    /// Fall back to fuzzy ranking on a miss or an over-broad exact hit.
    pub fuzzy_fallback: bool,
    /// Presentation only; never limits what a search returns.
    pub display_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::default(),
            max_exact_results: DEFAULT_MAX_EXACT_RESULTS,
            fuzzy_limit: DEFAULT_FUZZY_LIMIT,
            fuzzy_min_score: DEFAULT_FUZZY_MIN_SCORE,
            fuzzy_fallback: true,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

impl SearchConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Reject thresholds that would make the fallback rule meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.fuzzy_min_score) {
            return Err(ConfigError::Invalid(format!(
                "fuzzy_min_score must be within 0..=100, got {}",
                self.fuzzy_min_score
            )));
        }
        if self.fuzzy_limit == 0 {
            return Err(ConfigError::Invalid("fuzzy_limit must be at least 1".into()));
        }
        if self.max_exact_results == 0 {
            return Err(ConfigError::Invalid(
                "max_exact_results must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
