//! Summary table over a result set.

use super::common::{index_of, sample_index};
use partscout::{aggregate, match_exact, search, AggregationRow, SearchConfig};

fn row(brand: &str, model: &str, year: &str, category: &str, count: usize) -> AggregationRow {
    AggregationRow {
        brand: brand.into(),
        model: model.into(),
        year: year.into(),
        category: category.into(),
        count,
    }
}

#[test]
fn test_groups_and_orders() {
    let index = sample_index();
    let outcome = search(&index, "brake", &SearchConfig::default());
    assert_eq!(
        outcome.aggregation,
        vec![
            row("ZETA", "TMAX", "2020", "Brake", 2),
            row("ACME", "PCX", "2021", "Brake", 1),
            row("ZETA", "NMAX", "2019", "Brake", 1),
        ]
    );
}

#[test]
fn test_equal_counts_sort_by_key() {
    let index = sample_index();
    let outcome = search(&index, "nmax 2019", &SearchConfig::default());
    assert_eq!(
        outcome.aggregation,
        vec![
            row("ACME", "NMAX", "2019", "Engine", 1),
            row("ZETA", "NMAX", "2019", "Brake", 1),
        ]
    );
}

#[test]
fn test_verbatim_values_group_separately() {
    let index = index_of(&[
        ["ZETA", "TMAX", "2020", "5VX-1", "Brake", "Brake Pad", "ผ้าเบรก"],
        ["Zeta", "TMAX", "2020", "5VX-2", "Brake", "Brake Pad", "ผ้าเบรก"],
        ["ZETA", "TMAX", "2020", "5VX-3", "Brake", "Brake Pad", "ผ้าเบรก"],
    ]);
    let rows = aggregate(&index, &match_exact(&index, "brake pad"));
    assert_eq!(
        rows,
        vec![
            row("ZETA", "TMAX", "2020", "Brake", 2),
            row("Zeta", "TMAX", "2020", "Brake", 1),
        ]
    );
}

#[test]
fn test_counts_sum_to_total() {
    let index = sample_index();
    for query in ["brake", "acme", "2020", "tmax brkae", "ผ้า"] {
        let outcome = search(&index, query, &SearchConfig::default());
        let sum: usize = outcome.aggregation.iter().map(|r| r.count).sum();
        assert_eq!(sum, outcome.total_count, "query {query:?}");
    }
}
