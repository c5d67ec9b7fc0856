// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a parts catalog search.
//!
//! A catalog is an ordered list of [`PartRecord`]s. Position in that list is
//! the record's identity and the final tie-breaker for every ranking, so it
//! never changes after the index is built.
//!
//! # Invariants
//!
//! - **PartRecord**: every field is present as text. Missing source values were
//!   turned into empty strings by the loader; the matchers never see `None`.
//! - **PartRecord**: `composite` is `normalize(brand model year part_number
//!   category en_name th_name)` and is computed once. Price and URL are
//!   display-only and never searched.
//! - **QueryResult**: `index < RecordIndex::len()` of the snapshot that produced it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::util::normalize;

/// Number of searchable text fields, in catalog column order.
pub const SEARCHABLE_FIELDS: usize = 7;

/// Column names in positional order, used for error messages and object keys.
pub const FIELD_NAMES: [&str; 9] = [
    "brand",
    "model",
    "year",
    "part_number",
    "category",
    "en_name",
    "th_name",
    "price",
    "url",
];

/// One catalog entry, immutable once built.
///
/// Display fields keep their original case and punctuation. Only the
/// `composite` field is normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartRecord {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub part_number: String,
    pub category: String,
    pub en_name: String,
    pub th_name: String,
    /// Present only in catalogs that carry a price column.
    pub price: Option<String>,
    pub url: String,
    #[serde(skip)]
    composite: String,
}

impl PartRecord {
    /// Build a record from verbatim field values, computing the composite.
    pub fn from_raw(raw: RawRecord) -> Self {
        let composite = normalize(&raw.searchable_fields().join(" "));
        PartRecord {
            brand: raw.brand,
            model: raw.model,
            year: raw.year,
            part_number: raw.part_number,
            category: raw.category,
            en_name: raw.en_name,
            th_name: raw.th_name,
            price: raw.price,
            url: raw.url,
            composite,
        }
    }

    /// Normalized concatenation of the searchable fields.
    #[inline]
    pub fn composite(&self) -> &str {
        &self.composite
    }

    /// The grouping key used by the aggregator, verbatim values.
    pub fn group_key(&self) -> (&str, &str, &str, &str) {
        (&self.brand, &self.model, &self.year, &self.category)
    }
}

/// A catalog row as produced by the data loader, before indexing.
///
/// Every field is already text. The loader owns coercion from spreadsheet or
/// JSON cells; this type only fixes the shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub part_number: String,
    pub category: String,
    pub en_name: String,
    pub th_name: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub url: String,
}

impl RawRecord {
    /// Build a record from positional fields.
    ///
    /// Accepted arities:
    /// - 7: searchable fields only, no URL
    /// - 8: searchable fields, then URL
    /// - 9: searchable fields, price, URL
    ///
    /// Returns `None` for any other length; the caller decides how to report it.
    pub fn from_fields<S: Into<String>>(fields: Vec<S>) -> Option<Self> {
        let arity = fields.len();
        if !(SEARCHABLE_FIELDS..=SEARCHABLE_FIELDS + 2).contains(&arity) {
            return None;
        }
        let mut it = fields.into_iter().map(Into::into);
        let mut next = || it.next().unwrap_or_default();
        let mut raw = RawRecord {
            brand: next(),
            model: next(),
            year: next(),
            part_number: next(),
            category: next(),
            en_name: next(),
            th_name: next(),
            price: None,
            url: String::new(),
        };
        match arity {
            8 => raw.url = next(),
            9 => {
                raw.price = Some(next());
                raw.url = next();
            }
            _ => {}
        }
        Some(raw)
    }

    /// The seven searchable fields in catalog order.
    pub fn searchable_fields(&self) -> [&str; SEARCHABLE_FIELDS] {
        [
            &self.brand,
            &self.model,
            &self.year,
            &self.part_number,
            &self.category,
            &self.en_name,
            &self.th_name,
        ]
    }

    /// True when no searchable field carries any non-whitespace text.
    pub fn is_blank(&self) -> bool {
        self.searchable_fields().iter().all(|f| f.trim().is_empty())
    }
}

/// Which matcher produced a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Every keyword found as a substring of the composite field.
    Exact,
    /// Ranked by approximate string similarity.
    Fuzzy,
    /// No search was performed (empty query).
    None,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::Exact => "exact",
            Strategy::Fuzzy => "fuzzy",
            Strategy::None => "none",
        };
        f.write_str(label)
    }
}

/// One match: a position in the record index plus its score.
///
/// Exact scores are keyword counts (small integers); fuzzy scores live on a
/// 0-100 scale. Both are carried as `f64` so one ordering covers them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub index: usize,
    pub score: f64,
    pub strategy: Strategy,
}

/// Grouped count of result records sharing (brand, model, year, category).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AggregationRow {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub category: String,
    pub count: usize,
}

/// Everything the presentation layer needs to render one search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub strategy: Strategy,
    /// Distinct normalized keywords the query was split into.
    pub keywords: Vec<String>,
    pub results: Vec<QueryResult>,
    pub aggregation: Vec<AggregationRow>,
    pub total_count: usize,
}

impl SearchOutcome {
    /// The "start typing" state: nothing searched, nothing found.
    pub fn no_query() -> Self {
        SearchOutcome {
            strategy: Strategy::None,
            keywords: Vec::new(),
            results: Vec::new(),
            aggregation: Vec::new(),
            total_count: 0,
        }
    }

    /// True when no search was performed, as opposed to a search with zero hits.
    pub fn is_no_query(&self) -> bool {
        self.strategy == Strategy::None
    }

    /// Resolve results against the index snapshot they were produced from.
    pub fn records<'a>(
        &'a self,
        index: &'a crate::RecordIndex,
    ) -> impl Iterator<Item = (&'a PartRecord, f64)> + 'a {
        self.results
            .iter()
            .filter_map(move |r| index.get(r.index).map(|rec| (rec, r.score)))
    }

    /// Pair every result with its record, ready to serialize.
    pub fn resolve<'a>(&'a self, index: &'a crate::RecordIndex) -> ResolvedOutcome<'a> {
        let results = self
            .results
            .iter()
            .filter_map(|r| {
                index.get(r.index).map(|record| ResolvedResult {
                    index: r.index,
                    score: r.score,
                    strategy: r.strategy,
                    record,
                })
            })
            .collect();
        ResolvedOutcome {
            strategy: self.strategy,
            keywords: &self.keywords,
            total_count: self.total_count,
            results,
            aggregation: &self.aggregation,
        }
    }
}

/// A [`SearchOutcome`] whose results carry their records, for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedOutcome<'a> {
    pub strategy: Strategy,
    pub keywords: &'a [String],
    pub total_count: usize,
    pub results: Vec<ResolvedResult<'a>>,
    pub aggregation: &'a [AggregationRow],
}

/// One ranked result with the record's display fields inlined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedResult<'a> {
    pub index: usize,
    pub score: f64,
    pub strategy: Strategy,
    #[serde(flatten)]
    pub record: &'a PartRecord,
}
