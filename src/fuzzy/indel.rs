// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Insertion/deletion distance, the metric under every similarity ratio.
//!
//! Indel distance is Levenshtein without substitutions: a substitution costs
//! two (delete + insert). That makes it `len(a) + len(b) - 2 * lcs(a, b)`, and
//! the ratios only ever need the longest common subsequence.
//!
//! Lengths are in characters, not bytes. Thai part names are three bytes per
//! character and a byte-based ratio would punish them for it.

/// Length of the longest common subsequence of two character slices.
///
/// Single-row DP, O(len(a) * len(b)) time and O(len(b)) space. The shorter
/// slice drives the row so the allocation stays small.
pub fn lcs_len(a: &[char], b: &[char]) -> usize {
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if inner.is_empty() {
        return 0;
    }

    let mut row = vec![0usize; inner.len() + 1];
    for &oc in outer {
        let mut diag = 0;
        for (j, &ic) in inner.iter().enumerate() {
            let up = row[j + 1];
            row[j + 1] = if oc == ic {
                diag + 1
            } else {
                up.max(row[j])
            };
            diag = up;
        }
    }
    row[inner.len()]
}
