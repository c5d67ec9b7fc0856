// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog files → raw rows.
//!
//! Two formats, picked by extension:
//!
//! - **JSON** (`.json`): an array of rows. A row is either an array of cells in
//!   catalog order, or an object keyed by column name. Keys are matched loosely
//!   (`PartNumber`, `part-number` and `part_number` are the same column).
//! - **TSV** (`.tsv`, `.tab`, `.txt`): one row per line, first line is a header.
//!   Header cells that name a field must agree with the column they head.
//!
//! Positional rows carry 7 to 9 cells: 7 is searchable fields only, 8 adds the
//! URL, 9 puts a price before the URL. Spreadsheets export numbers as numbers,
//! so scalar cells are coerced to text (`2020.0` becomes `"2020"`). Anything
//! nested is rejected; we don't guess what a list in the "year" column means.
//! Neither do we pick between two keys naming the same column: that is an
//! error too.
//!
//! Row numbers in errors are 1-based and count data rows only.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::types::{RawRecord, FIELD_NAMES, SEARCHABLE_FIELDS};

/// Catalog file format, by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Tsv,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "tsv" | "tab" | "txt" => Some(Self::Tsv),
            _ => None,
        }
    }
}

/// Read a catalog file into raw rows.
///
/// Only shape is checked here. Empty records and empty catalogs are rejected
/// by [`build_index`](crate::build_index), which every source goes through.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_catalog(path: impl AsRef<Path>) -> LoadResult<Vec<RawRecord>> {
    let path = path.as_ref();
    let format = CatalogFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = match format {
        CatalogFormat::Json => parse_json_str(&text, path)?,
        CatalogFormat::Tsv => parse_tsv_str(&text)?,
    };
    tracing::debug!(rows = rows.len(), ?format, "catalog file parsed");
    Ok(rows)
}

// ============================================================================
// JSON
// ============================================================================

/// Parse a JSON catalog. `path` is only used in error messages.
pub fn parse_json_str(text: &str, path: &Path) -> LoadResult<Vec<RawRecord>> {
    let rows: Vec<Value> = serde_json::from_str(text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(feature = "parallel")]
    let iter = rows.par_iter().enumerate();
    #[cfg(not(feature = "parallel"))]
    let iter = rows.iter().enumerate();

    let converted: Vec<(RawRecord, usize)> = iter
        .map(|(pos, value)| json_row(pos + 1, value))
        .collect::<LoadResult<_>>()?;

    Ok(report_coercions(converted))
}

fn json_row(row: usize, value: &Value) -> LoadResult<(RawRecord, usize)> {
    match value {
        Value::Array(cells) => {
            let mut coerced = 0;
            let mut fields = Vec::with_capacity(cells.len());
            for (i, cell) in cells.iter().enumerate() {
                let name = positional_name(i, cells.len());
                let (text, was_coerced) = cell_text(cell, row, name)?;
                coerced += usize::from(was_coerced);
                fields.push(text);
            }
            let found = fields.len();
            let record =
                RawRecord::from_fields(fields).ok_or(LoadError::FieldCount { row, found })?;
            Ok((record, coerced))
        }
        Value::Object(map) => keyed_row(row, map),
        other => Err(LoadError::InvalidField {
            row,
            field: "row".to_string(),
            reason: format!("must be an array or object, found {}", kind(other)),
        }),
    }
}

fn keyed_row(row: usize, map: &Map<String, Value>) -> LoadResult<(RawRecord, usize)> {
    let mut cells: [Option<&Value>; 9] = [None; 9];
    for (key, value) in map {
        match field_slot(key) {
            Some(slot) if cells[slot].is_some() => {
                return Err(LoadError::InvalidField {
                    row,
                    field: FIELD_NAMES[slot].to_string(),
                    reason: format!("is given more than once (again as '{}')", key),
                });
            }
            Some(slot) => cells[slot] = Some(value),
            None => tracing::debug!(row, key = %key, "ignoring unknown column"),
        }
    }

    let mut coerced = 0;
    let mut text = |slot: usize| -> LoadResult<Option<String>> {
        match cells[slot] {
            Some(value) => {
                let (text, was_coerced) = cell_text(value, row, FIELD_NAMES[slot])?;
                coerced += usize::from(was_coerced);
                Ok(Some(text))
            }
            None => Ok(None),
        }
    };

    let mut searchable: Vec<String> = Vec::with_capacity(SEARCHABLE_FIELDS);
    for slot in 0..SEARCHABLE_FIELDS {
        searchable.push(text(slot)?.ok_or_else(|| LoadError::InvalidField {
            row,
            field: FIELD_NAMES[slot].to_string(),
            reason: "is missing".to_string(),
        })?);
    }
    let price = text(7)?.filter(|p| !p.is_empty());
    let url = text(8)?.unwrap_or_default();

    let mut it = searchable.into_iter();
    let mut next = || it.next().unwrap_or_default();
    let record = RawRecord {
        brand: next(),
        model: next(),
        year: next(),
        part_number: next(),
        category: next(),
        en_name: next(),
        th_name: next(),
        price,
        url,
    };
    Ok((record, coerced))
}

/// Lowercase with `-`, `_` and spaces removed.
fn canonical_key(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Position in [`FIELD_NAMES`] of the column a key or header names, if any.
fn field_slot(key: &str) -> Option<usize> {
    let canon = canonical_key(key);
    FIELD_NAMES.iter().position(|name| canonical_key(name) == canon)
}

/// Column name for a positional cell, given the row's arity.
fn positional_name(i: usize, arity: usize) -> &'static str {
    match (i, arity) {
        (i, _) if i < SEARCHABLE_FIELDS => FIELD_NAMES[i],
        (7, 8) => "url",
        (7, _) => "price",
        (8, _) => "url",
        _ => "extra",
    }
}

/// Coerce a scalar cell to text. Returns whether the cell wasn't already text.
fn cell_text(value: &Value, row: usize, field: &str) -> LoadResult<(String, bool)> {
    match value {
        Value::String(s) => Ok((s.clone(), false)),
        Value::Null => Ok((String::new(), false)),
        Value::Bool(b) => Ok((b.to_string(), true)),
        Value::Number(n) => Ok((number_text(n), true)),
        other => Err(LoadError::InvalidField {
            row,
            field: field.to_string(),
            reason: format!("must be a scalar, found {}", kind(other)),
        }),
    }
}

/// Integral numbers print without a fractional part.
fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// TSV
// ============================================================================

/// Parse a tab-separated catalog.
///
/// The first line is a header. Cells that name a catalog field (matched like
/// JSON keys) are checked against the positional layout: the seven searchable
/// columns must sit where the layout puts them, and a header with as many
/// cells as a row decides which trailing column is `price` and which is `url`.
/// Cells naming nothing (`pn`, `ชื่อ`) are labels only.
pub fn parse_tsv_str(text: &str) -> LoadResult<Vec<RawRecord>> {
    let mut lines = text.lines().map(|line| line.trim_end_matches('\r'));
    let header = TsvHeader::parse(lines.next().unwrap_or_default())?;
    let lines: Vec<&str> = lines.filter(|line| !line.trim().is_empty()).collect();

    #[cfg(feature = "parallel")]
    let iter = lines.par_iter().enumerate();
    #[cfg(not(feature = "parallel"))]
    let iter = lines.iter().enumerate();

    iter.map(|(pos, line)| header.record(pos + 1, line.split('\t').collect()))
        .collect()
}

/// Which catalog field, if any, each header cell names.
#[derive(Debug)]
struct TsvHeader {
    slots: Vec<Option<usize>>,
}

impl TsvHeader {
    fn parse(line: &str) -> LoadResult<Self> {
        let mut slots: Vec<Option<usize>> = Vec::new();
        for (col, cell) in line.split('\t').enumerate() {
            let slot = field_slot(cell.trim());
            if let Some(slot) = slot {
                let header_error = |reason: String| LoadError::Header {
                    column: col + 1,
                    reason,
                };
                if slots.contains(&Some(slot)) {
                    return Err(header_error(format!(
                        "'{}' names {} more than once",
                        cell, FIELD_NAMES[slot]
                    )));
                }
                if col < SEARCHABLE_FIELDS && slot != col {
                    return Err(header_error(format!(
                        "'{}' names {}, but this column holds {}",
                        cell, FIELD_NAMES[slot], FIELD_NAMES[col]
                    )));
                }
                if col >= SEARCHABLE_FIELDS && slot < SEARCHABLE_FIELDS {
                    return Err(header_error(format!(
                        "'{}' names {}, but only price and url may follow th_name",
                        cell, FIELD_NAMES[slot]
                    )));
                }
            }
            slots.push(slot);
        }
        Ok(Self { slots })
    }

    /// Map one data row onto the positional layout, honoring trailing header names.
    fn record(&self, row: usize, mut fields: Vec<&str>) -> LoadResult<RawRecord> {
        let found = fields.len();
        if self.slots.len() == found && found > SEARCHABLE_FIELDS {
            const PRICE: usize = SEARCHABLE_FIELDS;
            const URL: usize = SEARCHABLE_FIELDS + 1;
            match (found, &self.slots[SEARCHABLE_FIELDS..]) {
                // price alone: pad an empty url so the 9-field layout applies
                (8, [Some(PRICE)]) => fields.push(""),
                (9, [Some(URL), _] | [_, Some(PRICE)]) => fields.swap(PRICE, URL),
                _ => {}
            }
        }
        RawRecord::from_fields(fields).ok_or(LoadError::FieldCount { row, found })
    }
}

fn report_coercions(converted: Vec<(RawRecord, usize)>) -> Vec<RawRecord> {
    let mut rows = 0;
    let mut cells = 0;
    let mut first = None;
    let records = converted
        .into_iter()
        .enumerate()
        .map(|(pos, (record, coerced))| {
            if coerced > 0 {
                rows += 1;
                cells += coerced;
                first.get_or_insert(pos + 1);
            }
            record
        })
        .collect();

    if let Some(first_row) = first {
        tracing::warn!(rows, cells, first_row, "coerced non-text cells to text");
    }
    records
}
