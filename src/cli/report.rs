// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What the commands print: banner, summary table, detail table, links.

use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use partscout::{RecordIndex, SearchConfig, SearchOutcome, Strategy};

use super::display::*;

/// Spinner on stderr while a catalog loads. Hidden when stderr isn't a terminal.
pub fn loading_spinner(path: &Path) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_prefix("Loading");
    spinner.set_message(path.display().to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Banner plus catalog size.
pub fn print_banner(total_parts: usize) {
    double_header();
    title("PARTSCOUT");
    double_footer();
    println!(
        " {} {}",
        styled(&[DIM], "Total parts:"),
        themed(CYAN, &[BOLD], &total_parts.to_string())
    );
    println!();
}

/// Render one search outcome.
pub fn print_outcome(index: &RecordIndex, outcome: &SearchOutcome, config: &SearchConfig) {
    if outcome.is_no_query() {
        println!(" {}", styled(&[DIM], "Start typing to search your parts"));
        return;
    }

    println!(
        " {} Found {} results",
        strategy_badge(outcome.strategy),
        themed(BRIGHT_GREEN, &[BOLD], &outcome.total_count.to_string())
    );
    if outcome.results.is_empty() {
        println!(
            " {}",
            styled(&[DIM], "No parts match. Try fewer keywords or check the part number.")
        );
        return;
    }
    println!();

    print_summary(outcome);
    println!();
    print_details(index, outcome);
    println!();
    print_links(index, outcome, config.display_limit);
}

fn print_summary(outcome: &SearchOutcome) {
    section_top("SUMMARY");
    row(&styled(
        &[BOLD],
        &format!(
            " {}  {}  {}  {}  {}",
            pad_right("Brand", 16),
            pad_right("Model", 20),
            pad_right("Year", 6),
            pad_right("Category", 24),
            pad_left("Count", 8)
        ),
    ));
    for group in &outcome.aggregation {
        row(&format!(
            " {}  {}  {}  {}  {}",
            pad_right(&truncate(&group.brand, 16), 16),
            pad_right(&truncate(&group.model, 20), 20),
            pad_right(&truncate(&group.year, 6), 6),
            pad_right(&truncate(&group.category, 24), 24),
            count_value(group.count, 8)
        ));
    }
    section_bot();
}

fn print_details(index: &RecordIndex, outcome: &SearchOutcome) {
    let score_label = match outcome.strategy {
        Strategy::Fuzzy => "Score",
        _ => "Keys",
    };

    section_top("RESULTS");
    row(&styled(
        &[BOLD],
        &format!(
            " {} {} {} {} {} {} {} {}",
            pad_left(score_label, 6),
            pad_right("Brand", 8),
            pad_right("Model", 8),
            pad_right("Year", 4),
            pad_right("Part No.", 14),
            pad_right("Category", 10),
            pad_right("Name", 22),
            pad_right("ชื่อ", 18),
        ),
    ));
    for (record, score) in outcome.records(index) {
        row(&format!(
            " {} {} {} {} {} {} {} {}",
            score_value(score, outcome.strategy),
            pad_right(&truncate(&record.brand, 8), 8),
            pad_right(&truncate(&record.model, 8), 8),
            pad_right(&truncate(&record.year, 4), 4),
            themed(YELLOW, &[], &pad_right(&truncate(&record.part_number, 14), 14)),
            pad_right(&truncate(&record.category, 10), 10),
            pad_right(&truncate(&record.en_name, 22), 22),
            pad_right(&truncate(&record.th_name, 18), 18),
        ));
    }
    section_bot();
}

fn print_links(index: &RecordIndex, outcome: &SearchOutcome, limit: usize) {
    if limit == 0 {
        return;
    }
    section_top("OPEN PRODUCT PAGE");
    for (record, _) in outcome.records(index).take(limit) {
        let label = format!("{} {}", record.part_number, record.en_name);
        row(&format!(
            " {}  {}",
            pad_right(&truncate(&label, 36), 36),
            link(&truncate(&record.url, 60))
        ));
    }
    let hidden = outcome.total_count.saturating_sub(limit);
    if hidden > 0 {
        section_mid("MORE");
        row(&styled(
            &[DIM],
            &format!(" {} more not shown (use --show to raise the limit)", hidden),
        ));
    }
    section_bot();
}

/// Per-brand breakdown of a loaded catalog.
pub fn print_inspect(path: &Path, index: &RecordIndex) {
    let mut brands: BTreeMap<&str, usize> = BTreeMap::new();
    let mut with_url = 0;
    let mut with_price = 0;
    for (_, record) in index.iter() {
        *brands.entry(record.brand.as_str()).or_insert(0) += 1;
        with_url += usize::from(!record.url.is_empty());
        with_price += usize::from(record.price.is_some());
    }
    let mut brands: Vec<(&str, usize)> = brands.into_iter().collect();
    brands.sort_by(|a, b| b.1.cmp(&a.1));

    section_top("CATALOG");
    row(&format!(
        " {}  {}",
        pad_right("File", 14),
        truncate(&path.display().to_string(), 80)
    ));
    row(&format!(" {}  {}", pad_right("Records", 14), count_value(index.len(), 8)));
    row(&format!(" {}  {}", pad_right("With link", 14), count_value(with_url, 8)));
    row(&format!(" {}  {}", pad_right("With price", 14), count_value(with_price, 8)));
    section_mid("BRANDS");
    for (brand, count) in brands {
        let name = if brand.is_empty() { "(blank)" } else { brand };
        row(&format!(" {}  {}", pad_right(&truncate(name, 30), 30), count_value(count, 8)));
    }
    section_bot();
}
