// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the partscout command-line interface.
//!
//! Three subcommands: `search` to run one query and print the summary and
//! detail tables, `inspect` to sanity-check a catalog file, and `repl` for
//! search-as-you-type against one loaded catalog, with `:reload` to pick up
//! edits without restarting.

pub mod display;
pub mod report;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use partscout::{ConfigError, MatchMode, SearchConfig};

#[derive(Parser)]
#[command(
    name = "partscout",
    about = "Typo-tolerant search over parts catalogs",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog and display results
    Search {
        /// Catalog file (.json, .tsv)
        catalog: PathBuf,

        /// Search query
        query: String,

        #[command(flatten)]
        tuning: TuningArgs,

        /// Print the outcome as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Load a catalog and print record counts per brand
    Inspect {
        /// Catalog file (.json, .tsv)
        catalog: PathBuf,
    },

    /// Read queries from stdin, one per line
    ///
    /// `:reload` re-reads the catalog file and swaps it in if it loads
    /// cleanly. `:quit` or end of input exits.
    Repl {
        /// Catalog file (.json, .tsv)
        catalog: PathBuf,

        #[command(flatten)]
        tuning: TuningArgs,
    },
}

/// Search settings. Flags override the config file, which overrides defaults.
#[derive(Args, Debug, Default)]
pub struct TuningArgs {
    /// TOML file with search settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How the query becomes exact-match keywords
    #[arg(long, value_enum)]
    pub mode: Option<MatchMode>,

    /// Number of fuzzy results to keep
    #[arg(long)]
    pub fuzzy_limit: Option<usize>,

    /// Fuzzy results must score above this (0-100)
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Exact hit count above which the query falls back to fuzzy
    #[arg(long)]
    pub max_exact: Option<usize>,

    /// Never fall back to fuzzy matching
    #[arg(long)]
    pub no_fallback: bool,

    /// Number of product links to print
    #[arg(short, long)]
    pub show: Option<usize>,
}

impl TuningArgs {
    /// Layer flags over the config file (or defaults) and validate the result.
    pub fn resolve(&self) -> Result<SearchConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_toml_file(path)?,
            None => SearchConfig::default(),
        };

        if let Some(mode) = self.mode {
            config.match_mode = mode;
        }
        if let Some(limit) = self.fuzzy_limit {
            config.fuzzy_limit = limit;
        }
        if let Some(score) = self.min_score {
            config.fuzzy_min_score = score;
        }
        if let Some(max) = self.max_exact {
            config.max_exact_results = max;
        }
        if self.no_fallback {
            config.fuzzy_fallback = false;
        }
        if let Some(show) = self.show {
            config.display_limit = show;
        }

        config.validate()?;
        Ok(config)
    }
}
