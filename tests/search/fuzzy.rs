//! Fuzzy matcher: similarity ranking, limit, strict minimum score.

use super::common::{sample_index, single_brake_pad};
use partscout::{match_fuzzy, Strategy};

#[test]
fn test_typo_finds_the_record() {
    let index = single_brake_pad();
    let results = match_fuzzy(&index, "tmax brkae", 50, 60.0);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].index, 0);
    assert_eq!(results[0].strategy, Strategy::Fuzzy);
    assert!(results[0].score > 70.0, "score {}", results[0].score);
}

#[test]
fn test_ranked_with_index_tiebreak() {
    let index = sample_index();
    let results = match_fuzzy(&index, "tmax brkae", 50, 60.0);
    let hits: Vec<usize> = results.iter().map(|r| r.index).collect();
    // 0 and 1 tie on score; the TMAX mirror scores just under the cutoff
    assert_eq!(hits, vec![0, 1, 2]);
    assert_eq!(results[0].score, results[1].score);
    assert!(results[1].score > results[2].score);
}

#[test]
fn test_limit_keeps_the_best() {
    let index = sample_index();
    let results = match_fuzzy(&index, "tmax brkae", 1, 60.0);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].index, 0);
}

#[test]
fn test_min_score_is_strict() {
    let index = single_brake_pad();
    let results = match_fuzzy(&index, "tmax brkae", 50, 0.0);
    let score = results[0].score;

    assert!(match_fuzzy(&index, "tmax brkae", 50, score).is_empty());
    assert_eq!(match_fuzzy(&index, "tmax brkae", 50, score - 0.01).len(), 1);
}

#[test]
fn test_unrelated_query_scores_below_cutoff() {
    let index = sample_index();
    assert!(match_fuzzy(&index, "xyz", 50, 60.0).is_empty());
}

#[test]
fn test_run_together_part_number() {
    let index = sample_index();
    let results = match_fuzzy(&index, "5vx2586a", 50, 60.0);
    let hits: Vec<usize> = results.iter().map(|r| r.index).collect();
    assert_eq!(&hits[..2], &[0, 1]);
}

#[test]
fn test_closer_spelling_scores_higher() {
    let index = single_brake_pad();
    let score = |q: &str| match_fuzzy(&index, q, 1, 0.0)[0].score;
    assert!(score("tmax brake") > score("tmax brkae"));
    assert!(score("brake pad") > score("brak pda"));
}

#[test]
fn test_degenerate_inputs() {
    let index = sample_index();
    assert!(match_fuzzy(&index, "", 50, 0.0).is_empty());
    assert!(match_fuzzy(&index, "---", 50, 0.0).is_empty());
    assert!(match_fuzzy(&index, "brake", 0, 0.0).is_empty());
}
