// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Similarity ratios on a 0-100 scale.
//!
//! The building blocks are the familiar fuzzy-matching family: a plain ratio,
//! a best-window partial ratio, and token-based variants that ignore word
//! order. [`weighted_ratio`] picks among them based on how different the two
//! lengths are, which is what makes a 9-character query comparable to a
//! 60-character catalog line.
//!
//! All functions expect normalized input (lowercase, single spaces). Empty
//! input on either side scores 0, never an error.

use std::collections::{BTreeSet, HashMap};

use super::indel::lcs_len;

/// Length ratio below which both strings are treated as full-length peers.
pub const PEER_LENGTH_RATIO: f64 = 1.5;

/// Discount applied to partial (best-window) matches.
pub const PARTIAL_SCALE: f64 = 0.9;

/// Discount applied to token-based matches.
pub const TOKEN_SCALE: f64 = 0.95;

/// Ratio between two character slices: `200 * lcs / (len_a + len_b)`.
fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let total = a.len() + b.len();
    200.0 * lcs_len(a, b) as f64 / total as f64
}

/// Normalized indel similarity. 100 means identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

/// Best ratio of the shorter string against any window of the longer one.
///
/// Full-length windows are only scored when they start or end on a character
/// the shorter string contains; a window that starts on a foreign character
/// can always be beaten by one that doesn't. Windows hanging off either end
/// are scored too, so a query overlapping the end of a line still counts.
///
/// A verbatim substring scores exactly 100.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    partial_ratio_chars(&a, &b)
}

fn partial_ratio_chars(a: &[char], b: &[char]) -> f64 {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let m = short.len();
    let n = long.len();
    if m == 0 {
        return 0.0;
    }
    if m == n {
        return ratio_chars(short, long);
    }

    let mut best = 0.0f64;

    // Windows hanging off the start and end of the longer string
    let mut head = Overlap::new(short);
    let mut tail = Overlap::new(short);
    for k in 1..m {
        let first = long[k - 1];
        head.push(first);
        if head.contains(first) && head.bound(k) > best {
            best = best.max(ratio_chars(short, &long[..k]));
        }
        let last = long[n - k];
        tail.push(last);
        if tail.contains(last) && tail.bound(k) > best {
            best = best.max(ratio_chars(short, &long[n - k..]));
        }
    }

    let mut window = Overlap::new(short);
    for &c in &long[..m] {
        window.push(c);
    }
    for start in 0..=n - m {
        if start > 0 {
            window.pop(long[start - 1]);
            window.push(long[start + m - 1]);
        }
        let slice = &long[start..start + m];
        if !window.contains(slice[0]) && !window.contains(slice[m - 1]) {
            continue;
        }
        if window.bound(m) <= best {
            continue;
        }
        best = best.max(ratio_chars(short, slice));
        if best >= 100.0 {
            break;
        }
    }

    best
}

/// Character-count overlap between the short string and a sliding window.
///
/// `lcs(short, window) <= overlap`, so `bound` caps the ratio any window
/// with this overlap can reach. Windows that can't beat the best so far are
/// skipped without running the DP.
struct Overlap {
    want: HashMap<char, usize>,
    have: HashMap<char, usize>,
    short_len: usize,
    shared: usize,
}

impl Overlap {
    fn new(short: &[char]) -> Self {
        let mut want = HashMap::new();
        for &c in short {
            *want.entry(c).or_insert(0) += 1;
        }
        Self {
            want,
            have: HashMap::new(),
            short_len: short.len(),
            shared: 0,
        }
    }

    fn contains(&self, c: char) -> bool {
        self.want.contains_key(&c)
    }

    fn push(&mut self, c: char) {
        let Some(&want) = self.want.get(&c) else {
            return;
        };
        let have = self.have.entry(c).or_insert(0);
        *have += 1;
        if *have <= want {
            self.shared += 1;
        }
    }

    fn pop(&mut self, c: char) {
        let Some(&want) = self.want.get(&c) else {
            return;
        };
        if let Some(have) = self.have.get_mut(&c) {
            if *have <= want {
                self.shared -= 1;
            }
            *have -= 1;
        }
    }

    /// Highest ratio a window of `window_len` characters could score.
    fn bound(&self, window_len: usize) -> f64 {
        200.0 * self.shared as f64 / (self.short_len + window_len) as f64
    }
}

fn token_set(s: &str) -> BTreeSet<&str> {
    s.split_whitespace().collect()
}

fn join(tokens: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    tokens
        .into_iter()
        .map(|t| t.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ratio after sorting each side's tokens, so word order stops mattering.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    let mut ta: Vec<&str> = a.split_whitespace().collect();
    let mut tb: Vec<&str> = b.split_whitespace().collect();
    ta.sort_unstable();
    tb.sort_unstable();
    ratio(&join(ta), &join(tb))
}

/// Ratio built from the shared tokens plus each side's leftovers.
///
/// When one side's tokens are a subset of the other's, this is 100: every
/// word of the query appears somewhere in the line.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let ta = token_set(a);
    let tb = token_set(b);
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }

    let sect = join(ta.intersection(&tb));
    let diff_ab = join(ta.difference(&tb));
    let diff_ba = join(tb.difference(&ta));

    if !sect.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let combine = |rest: &str| {
        if sect.is_empty() {
            rest.to_string()
        } else {
            format!("{} {}", sect, rest)
        }
    };
    let with_ab = combine(&diff_ab);
    let with_ba = combine(&diff_ba);

    ratio(&sect, &with_ab)
        .max(ratio(&sect, &with_ba))
        .max(ratio(&with_ab, &with_ba))
}

/// Best of the sorted and set token ratios.
pub fn token_ratio(a: &str, b: &str) -> f64 {
    token_sort_ratio(a, b).max(token_set_ratio(a, b))
}

/// Mean, over the distinct tokens of the shorter string, of each token's best
/// partial ratio against the longer string.
///
/// "tmax brkae" against a brake-pad line scores tmax=100 and brkae=80, so the
/// line still ranks well despite the transposition, while a line sharing only
/// "tmax" scores about half.
pub fn partial_token_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let tokens = token_set(short);
    if tokens.is_empty() || long.trim().is_empty() {
        return 0.0;
    }

    let long: Vec<char> = long.chars().collect();
    let total: f64 = tokens
        .iter()
        .map(|token| {
            let token: Vec<char> = token.chars().collect();
            partial_ratio_chars(&token, &long)
        })
        .sum();
    total / tokens.len() as f64
}

/// Length-aware blend of the ratios above. The score every fuzzy result carries.
///
/// - Peers (length ratio < 1.5): plain ratio, or token ratio at 95%.
/// - Otherwise: plain ratio, best-window ratio at 90%, or per-token partial
///   ratio at 95% of that.
///
/// A query that appears verbatim inside a longer line scores 90 or better,
/// and the score falls off smoothly with edits and reordering.
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    let la = a.chars().count();
    let lb = b.chars().count();
    if la == 0 || lb == 0 {
        return 0.0;
    }

    let length_ratio = la.max(lb) as f64 / la.min(lb) as f64;
    let plain = ratio(a, b);

    if length_ratio < PEER_LENGTH_RATIO {
        return plain.max(token_ratio(a, b) * TOKEN_SCALE);
    }

    plain
        .max(partial_ratio(a, b) * PARTIAL_SCALE)
        .max(partial_token_ratio(a, b) * TOKEN_SCALE * PARTIAL_SCALE)
}
