//! Final ordering of result sets.

use partscout::scoring::ranking::{compare_results, rank};
use partscout::{QueryResult, Strategy};
use std::cmp::Ordering;

fn result(index: usize, score: f64) -> QueryResult {
    QueryResult {
        index,
        score,
        strategy: Strategy::Fuzzy,
    }
}

#[test]
fn test_score_descending_then_index() {
    let mut results = vec![
        result(4, 70.0),
        result(1, 90.0),
        result(3, 90.0),
        result(0, 70.0),
        result(2, 80.0),
    ];
    rank(&mut results);
    let order: Vec<usize> = results.iter().map(|r| r.index).collect();
    assert_eq!(order, vec![1, 3, 2, 0, 4]);
}

#[test]
fn test_comparator_is_total() {
    assert_eq!(compare_results(&result(0, 80.0), &result(1, 80.0)), Ordering::Less);
    assert_eq!(compare_results(&result(1, 80.0), &result(0, 80.0)), Ordering::Greater);
    assert_eq!(compare_results(&result(2, 80.0), &result(2, 80.0)), Ordering::Equal);
    assert_eq!(compare_results(&result(9, 81.0), &result(0, 80.0)), Ordering::Less);
}

#[test]
fn test_ranking_is_deterministic() {
    let base: Vec<QueryResult> = (0..20).map(|i| result(i, f64::from((i % 4) as u32) * 10.0)).collect();
    let mut forward = base.clone();
    let mut backward: Vec<QueryResult> = base.into_iter().rev().collect();
    rank(&mut forward);
    rank(&mut backward);
    assert_eq!(forward, backward);
}
