//! Exact matcher: AND over keywords, substring containment, index order.

use super::common::{index_of, positions, sample_index};
use partscout::{match_exact, search, SearchConfig, Strategy};

#[test]
fn test_every_keyword_must_appear() {
    let index = sample_index();
    let results = match_exact(&index, "tmax brake");
    let hits: Vec<usize> = results.iter().map(|r| r.index).collect();
    assert_eq!(hits, vec![0, 1]);
}

#[test]
fn test_score_is_keyword_count() {
    let index = sample_index();
    for r in match_exact(&index, "zeta tmax 2020") {
        assert_eq!(r.score, 3.0);
        assert_eq!(r.strategy, Strategy::Exact);
    }
}

#[test]
fn test_duplicate_keywords_collapse() {
    let index = sample_index();
    let once = match_exact(&index, "brake");
    let twice = match_exact(&index, "brake BRAKE brake");
    assert_eq!(once, twice);
    assert!(twice.iter().all(|r| r.score == 1.0));
}

#[test]
fn test_keyword_is_substring_not_word() {
    let index = sample_index();
    // "2586" is inside both "2586a" and "2586b"
    let hits: Vec<usize> = match_exact(&index, "2586").iter().map(|r| r.index).collect();
    assert_eq!(hits, vec![0, 1]);
}

#[test]
fn test_separator_variants_agree() {
    let index = sample_index();
    let expected = match_exact(&index, "5vx 2586a");
    assert_eq!(expected.len(), 1);
    for variant in ["5VX-2586A", "5vx_2586a", "5vx/2586a", "  5VX -- 2586A  "] {
        assert_eq!(match_exact(&index, variant), expected, "variant {variant:?}");
    }
}

#[test]
fn test_results_in_index_order() {
    let index = sample_index();
    let hits: Vec<usize> = match_exact(&index, "brake").iter().map(|r| r.index).collect();
    assert_eq!(hits, vec![0, 1, 2, 6]);
}

#[test]
fn test_transposition_does_not_match() {
    let index = sample_index();
    assert!(match_exact(&index, "brkae").is_empty());
}

#[test]
fn test_price_and_url_are_not_searched() {
    let index = sample_index();
    // Every sample URL is https://parts.example/<part>
    assert!(match_exact(&index, "parts.example").is_empty());
    assert!(match_exact(&index, "https").is_empty());
}

#[test]
fn test_exact_only_configuration() {
    let index = index_of(&[
        ["ZETA", "TMAX", "2020", "5VX-2586A", "Brake", "Brake Pad", "ผ้าเบรก"],
        ["ZETA", "TMAX", "2020", "5VX-2586B", "Brake", "Brake Disc", "จานเบรก"],
    ]);
    let config = SearchConfig {
        fuzzy_fallback: false,
        ..SearchConfig::default()
    };

    let miss = search(&index, "brkae", &config);
    assert_eq!(miss.strategy, Strategy::Exact);
    assert_eq!(miss.total_count, 0);
    assert!(!miss.is_no_query());

    let hit = search(&index, "disc", &config);
    assert_eq!(positions(&hit), vec![1]);
}
