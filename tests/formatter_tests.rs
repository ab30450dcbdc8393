use arc_stash::formatter::{
    format_number, format_optimize_summary, format_recommendations, format_recycle_sources, format_signed, truncate,
    PageOptions, EMPTY_TABLE,
};
use arc_stash::{Action, OptimizeParams, OptimizeResult, Recommendation, RecycleSource};

fn rec(name: &str, sell: u64, recycle: u64) -> Recommendation {
    Recommendation {
        item_id: name.to_lowercase(),
        name: name.to_string(),
        quantity: 1,
        sell_value: sell,
        recycle_value: recycle,
        margin: sell as i64 - recycle as i64,
        action: Action::Sell,
    }
}

fn options(max_rows: usize, show_all: bool) -> PageOptions {
    PageOptions { max_rows, show_all, command_hint: "arc_stash sell --all".to_string() }
}

#[test]
fn test_number_formatting() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(999), "999");
    assert_eq!(format_number(1200), "1,200");
    assert_eq!(format_number(1234567), "1,234,567");
    assert_eq!(format_signed(1440), "+1,440");
    assert_eq!(format_signed(-600), "-600");
    assert_eq!(format_signed(0), "0");
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate("Short", 20), "Short");
    assert_eq!(truncate("Mechanical Components Deluxe", 10), "Mechanica…");
}

#[test]
fn test_empty_list_renders_placeholder() {
    assert_eq!(format_recommendations(&[], &options(5, false), false), vec![EMPTY_TABLE.to_string()]);
}

#[test]
fn test_table_contains_rows_and_borders() {
    let pages = format_recommendations(&[rec("Anvil Rifle", 5000, 3200)], &options(5, false), false);
    assert_eq!(pages.len(), 1);
    let page = &pages[0];
    assert!(page.starts_with('┌'));
    assert!(page.ends_with('┘'));
    assert!(page.contains("Anvil Rifle"));
    assert!(page.contains("5,000"));
    assert!(page.contains("+1,800"));
}

#[test]
fn test_truncated_single_page_has_footer() {
    let recs: Vec<Recommendation> = (0..7).map(|i| rec(&format!("Item {}", i), 100, 0)).collect();
    let pages = format_recommendations(&recs, &options(5, false), false);
    assert_eq!(pages.len(), 1);
    assert!(pages[0].contains("... and 2 more items. use `arc_stash sell --all` to see everything"));
    assert!(!pages[0].contains("Item 5"));
}

#[test]
fn test_show_all_paginates_with_total_on_last_page() {
    let recs: Vec<Recommendation> = (0..7).map(|i| rec(&format!("Item {}", i), 100, 0)).collect();
    let pages = format_recommendations(&recs, &options(3, true), true);
    assert_eq!(pages.len(), 3);
    assert!(!pages[0].contains("TOTAL"));
    assert!(pages[2].contains("TOTAL"));
    assert!(pages[2].contains("700"));
}

#[test]
fn test_recycle_source_chain_rendered() {
    let source = RecycleSource {
        item_id: "top".to_string(),
        name: "Top".to_string(),
        quantity: 2,
        yield_per_unit: 24,
        total_yield: 48,
        depth: 3,
        chain: vec!["Top".to_string(), "Mid".to_string(), "Low".to_string(), "Base".to_string()],
    };
    let pages = format_recycle_sources(&[source], &options(5, false));
    assert!(pages[0].contains("Top → Mid → Low → Base"));
    assert!(pages[0].contains("48"));
}

#[test]
fn test_summary_reports_totals() {
    let result = OptimizeResult {
        sell: vec![rec("Rifle", 5000, 0)],
        total_sell_value: 5000,
        total_hold_count: 2,
        ..OptimizeResult::default()
    };
    let summary = format_optimize_summary(&result, &OptimizeParams::default());
    assert!(summary.contains("Sell: 5,000 credits from 1 items"));
    assert!(summary.contains("Hold: 2 items (quest-aware: true)"));
}

#[test]
fn test_total_row_saturates() {
    let huge = Recommendation { margin: i64::MAX, ..rec("Relic", u64::MAX, 0) };
    let pages = format_recommendations(&[huge.clone(), huge], &options(5, false), true);
    assert!(pages[0].contains("TOTAL"));
}
