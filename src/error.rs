// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for catalog loading and configuration.
//!
//! Only construction can fail. Once a [`RecordIndex`](crate::RecordIndex) exists,
//! every search is a total function, so there is no search error type.

use std::path::PathBuf;

/// Result type for catalog loading.
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Errors raised while reading a catalog or building an index from it.
///
/// Any of these means "catalog unavailable". The index refuses to guess at
/// partial rows rather than serve a half-mapped catalog.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON
    #[error("Invalid catalog JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Row has the wrong number of fields
    #[error("Row {row}: expected 7 to 9 fields, found {found}")]
    FieldCount { row: usize, found: usize },

    /// Cell value cannot be read as text
    #[error("Row {row}: field '{field}' {reason}")]
    InvalidField {
        row: usize,
        field: String,
        reason: String,
    },

    /// Header line names a column the positional layout puts elsewhere
    #[error("Header column {column}: {reason}")]
    Header { column: usize, reason: String },

    /// Every searchable field of a row is empty
    #[error("Row {row}: no searchable fields")]
    EmptyRecord { row: usize },

    /// Source produced zero records
    #[error("Catalog contains no records")]
    EmptyCatalog,

    /// File extension not recognized
    #[error("Unsupported catalog format: {path} (expected .json or .tsv)")]
    UnsupportedFormat { path: PathBuf },
}

/// Errors raised while loading or validating a [`SearchConfig`](crate::SearchConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML
    #[error("Invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Threshold out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
