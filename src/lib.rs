//! Typo-tolerant search and ranking over parts catalogs.
//!
//! A catalog is a few thousand to a few hundred thousand rows of brand, model,
//! year, part number, category and English/Thai names. Users type part numbers
//! with the wrong dashes, misspell "brake", and paste half a model name. This
//! crate turns those queries into a short ranked list plus a grouped summary.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │build::loader │────▶│    index     │────▶│   catalog    │
//! │ (JSON / TSV) │     │(build_index, │     │ (Arc swap,   │
//! │              │     │  composites) │     │  generation) │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!                                                  ▼
//!                      ┌─────────────────────────────────────┐
//!                      │        search::orchestrator         │
//!                      │  normalize → exact ──(0 or >max)──▶ │
//!                      │               │        fuzzy        │
//!                      │               ▼          │          │
//!                      │             rank ◀───────┘          │
//!                      │               │                     │
//!                      │           aggregate                 │
//!                      └─────────────────────────────────────┘
//! ```
//!
//! # Two tiers
//!
//! | Tier  | Matches when                                   | Score                  |
//! |-------|------------------------------------------------|------------------------|
//! | Exact | every keyword is a substring of the composite  | number of keywords     |
//! | Fuzzy | weighted similarity to the composite > minimum | 0..=100, higher better |
//!
//! Scores from the two tiers are never mixed in one result set.
//!
//! # Usage
//!
//! ```ignore
//! use partscout::{build_index, search, RawRecord, SearchConfig};
//!
//! let rows: Vec<RawRecord> = partscout::load_catalog("parts.json")?;
//! let index = build_index(rows)?;
//!
//! let outcome = search(&index, "5vx-2586a", &SearchConfig::default());
//! for (record, score) in outcome.records(&index) {
//!     println!("{score:>6.1}  {}  {}", record.part_number, record.en_name);
//! }
//! ```

// Module declarations
pub mod build;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fuzzy;
mod index;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
pub mod util;

// Re-exports for public API
pub use build::{load_catalog, CatalogFormat};
pub use catalog::Catalog;
pub use config::{MatchMode, SearchConfig};
pub use error::{ConfigError, LoadError, LoadResult};
pub use index::{build_index, RecordIndex};
pub use search::{aggregate, match_exact, match_fuzzy, match_keywords, search};
pub use types::{
    AggregationRow, PartRecord, QueryResult, RawRecord, ResolvedOutcome, ResolvedResult,
    SearchOutcome, Strategy, FIELD_NAMES, SEARCHABLE_FIELDS,
};
pub use util::{normalize, tokenize};
