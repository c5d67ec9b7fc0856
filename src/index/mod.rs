// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the one structure every search reads.
//!
//! There is no inverted index or suffix array here, only precomputed composite
//! strings scanned linearly. Every record is validated and its composite
//! computed before `build_index` returns; nothing is mutated afterwards.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{LoadError, LoadResult};
use crate::types::{PartRecord, RawRecord};

/// Immutable, ordered collection of part records.
///
/// Position is identity: `QueryResult::index` points here, and lower
/// positions win every ranking tie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIndex {
    records: Vec<PartRecord>,
}

impl RecordIndex {
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&PartRecord> {
        self.records.get(index)
    }

    #[inline]
    pub fn records(&self) -> &[PartRecord] {
        &self.records
    }

    /// Records paired with their positions, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PartRecord)> {
        self.records.iter().enumerate()
    }
}

/// Build a record index from loader output.
///
/// Validates every row before computing anything: a row whose searchable
/// fields are all empty fails the whole build with [`LoadError::EmptyRecord`],
/// and an empty source fails with [`LoadError::EmptyCatalog`]. Row numbers in
/// errors are 1-based.
pub fn build_index(records: Vec<RawRecord>) -> LoadResult<RecordIndex> {
    if records.is_empty() {
        return Err(LoadError::EmptyCatalog);
    }

    if let Some(pos) = records.iter().position(RawRecord::is_blank) {
        return Err(LoadError::EmptyRecord { row: pos + 1 });
    }

    #[cfg(feature = "parallel")]
    let records: Vec<PartRecord> = records.into_par_iter().map(PartRecord::from_raw).collect();

    #[cfg(not(feature = "parallel"))]
    let records: Vec<PartRecord> = records.into_iter().map(PartRecord::from_raw).collect();

    tracing::debug!(records = records.len(), "built record index");

    Ok(RecordIndex { records })
}
