// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: the one contract both sides of a match must share.
//!
//! Catalog text is normalized once at load time, queries once per search. If
//! the two ever drift apart, "5VX-2586A" silently stops finding "5vx 2586a" and
//! nobody notices until a customer calls. So there is exactly one function.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Characters treated as word separators in addition to whitespace.
pub const SEPARATORS: [char; 3] = ['-', '_', '/'];

/// Normalize text for matching: lowercase, separators to spaces, collapse whitespace.
///
/// - `"5VX-2586A"` → `"5vx 2586a"`
/// - `"5vx_2586a"` → `"5vx 2586a"`
/// - `"  Brake   Pad "` → `"brake pad"`
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out Latin combining marks ("café" → "cafe"); Thai vowel and tone
///    marks are left alone, they carry meaning
/// 3. Lowercase
/// 4. Replace `-`, `_`, `/` with a space
/// 5. Collapse whitespace runs and trim
///
/// Total and idempotent: `normalize(normalize(x)) == normalize(x)`.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    // Dropping a mark can unblock canonical reordering, hence the second nfd()
    let folded: String = value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfd()
        .collect::<String>()
        .to_lowercase();
    collapse(&folded)
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Lowercases, maps separators and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    collapse(&value.to_lowercase())
}

/// Split normalized text into distinct, non-empty keywords.
///
/// First occurrence wins, so keyword order follows the query. Duplicates
/// collapse: `"brake pad brake"` has two keywords, not three.
pub fn tokenize(normalized: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for word in normalized.split_whitespace() {
        if !keywords.iter().any(|k| k == word) {
            keywords.push(word.to_string());
        }
    }
    keywords
}

fn collapse(value: &str) -> String {
    value
        .split(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a Latin combining mark (diacritic).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
