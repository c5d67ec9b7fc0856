// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Getting a catalog off disk. Parsing lives here; validation and composite
//! construction live in [`index`](crate::index).

pub mod loader;

pub use loader::{load_catalog, parse_json_str, parse_tsv_str, CatalogFormat};
