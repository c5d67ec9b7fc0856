// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The process-wide catalog: one index snapshot, swapped whole on reload.
//!
//! Readers take an `Arc` to the current [`RecordIndex`] and search it without
//! holding any lock, so a reload never blocks a search in flight and a search
//! never sees half of an old catalog and half of a new one. The lock guards
//! the pointer swap and nothing else.

use parking_lot::RwLock;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::build::loader::load_catalog;
use crate::config::SearchConfig;
use crate::error::LoadResult;
use crate::index::{build_index, RecordIndex};
use crate::search::search;
use crate::types::SearchOutcome;

/// Owned, atomically replaceable record index.
#[derive(Debug)]
pub struct Catalog {
    current: RwLock<Arc<RecordIndex>>,
    generation: AtomicU64,
}

impl Catalog {
    /// Wrap a built index. The first generation is 1.
    pub fn new(index: RecordIndex) -> Self {
        tracing::info!(records = index.len(), generation = 1, "catalog ready");
        Self {
            current: RwLock::new(Arc::new(index)),
            generation: AtomicU64::new(1),
        }
    }

    /// Load a catalog file and build the first snapshot.
    pub fn open(path: impl AsRef<Path>) -> LoadResult<Self> {
        let rows = load_catalog(path)?;
        Ok(Self::new(build_index(rows)?))
    }

    /// The index every search should run against right now.
    ///
    /// Cheap: clones an `Arc`. Hold on to it for the duration of one query so
    /// results and records come from the same snapshot.
    pub fn snapshot(&self) -> Arc<RecordIndex> {
        Arc::clone(&self.current.read())
    }

    /// Monotonic counter, bumped on every successful swap.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Swap in a fully built index. Returns the new generation.
    pub fn replace(&self, index: RecordIndex) -> u64 {
        let records = index.len();
        let mut guard = self.current.write();
        *guard = Arc::new(index);
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        drop(guard);
        tracing::info!(records, generation, "catalog swapped");
        generation
    }

    /// Reload from disk. The old snapshot keeps serving if anything fails.
    pub fn reload(&self, path: impl AsRef<Path>) -> LoadResult<u64> {
        let path = path.as_ref();
        let rows = load_catalog(path).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "reload failed, keeping current catalog");
        })?;
        let index = build_index(rows).inspect_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "reload failed, keeping current catalog");
        })?;
        Ok(self.replace(index))
    }

    /// Search the current snapshot.
    pub fn search(&self, query: &str, config: &SearchConfig) -> SearchOutcome {
        search(&self.snapshot(), query, config)
    }

    /// Search, and hand back the snapshot the results point into.
    ///
    /// Result indices are only meaningful against the index that produced
    /// them, so anything rendering records should use this.
    pub fn search_snapshot(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> (Arc<RecordIndex>, SearchOutcome) {
        let index = self.snapshot();
        let outcome = search(&index, query, config);
        (index, outcome)
    }
}
