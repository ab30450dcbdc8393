// Text table rendering for engine output
use crate::models::{OptimizeParams, OptimizeResult, Recommendation, RecycleSource};

const COL_ITEM_WIDTH: usize = 20;
const COL_QTY_WIDTH: usize = 5;
const COL_VALUE_WIDTH: usize = 9;
const COL_CHAIN_WIDTH: usize = 40;

pub const EMPTY_TABLE: &str = "No items to display.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub width: usize,
    pub align: Align,
}

/// Paging for printed tables
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub max_rows: usize,
    /// Print every row over as many pages as needed
    pub show_all: bool,
    /// Command suggested in the "more items" footer
    pub command_hint: String,
}

pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_signed(value: i64) -> String {
    match value {
        v if v > 0 => format!("+{}", format_number(v.unsigned_abs())),
        v if v < 0 => format!("-{}", format_number(v.unsigned_abs())),
        _ => "0".to_string(),
    }
}

/// Cut `text` to `width` characters, ending in an ellipsis when cut
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    match align {
        Align::Left => format!("{}{}", text, fill),
        Align::Right => format!("{}{}", fill, text),
    }
}

fn separator(columns: &[Column], left: &str, mid: &str, right: &str) -> String {
    let segments: Vec<String> = columns.iter().map(|c| "─".repeat(c.width + 2)).collect();
    format!("{}{}{}", left, segments.join(mid), right)
}

fn row_line(columns: &[Column], cells: &[String]) -> String {
    let parts: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            format!(" {} ", pad(&truncate(cell, column.width), column.width, column.align))
        })
        .collect();
    format!("│{}│", parts.join("│"))
}

/// Box-drawing table with fixed column widths
pub fn format_table(columns: &[Column], rows: &[Vec<String>]) -> String {
    let headers: Vec<String> = columns.iter().map(|c| c.header.to_string()).collect();
    let mid = separator(columns, "├", "┼", "┤");

    let mut lines = vec![separator(columns, "┌", "┬", "┐"), row_line(columns, &headers), mid.clone()];
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            lines.push(mid.clone());
        }
        lines.push(row_line(columns, row));
    }
    lines.push(separator(columns, "└", "┴", "┘"));
    lines.join("\n")
}

fn paginate(columns: &[Column], rows: Vec<Vec<String>>, trailer: Option<Vec<String>>, options: &PageOptions) -> Vec<String> {
    if rows.is_empty() {
        return vec![EMPTY_TABLE.to_string()];
    }
    let max_rows = options.max_rows.max(1);

    if !options.show_all {
        let remaining = rows.len().saturating_sub(max_rows);
        let mut shown: Vec<Vec<String>> = rows.into_iter().take(max_rows).collect();
        shown.extend(trailer);
        let mut page = format_table(columns, &shown);
        if remaining > 0 {
            let noun = if remaining == 1 { "item" } else { "items" };
            page.push_str(&format!(
                "\n... and {} more {}. use `{}` to see everything",
                remaining, noun, options.command_hint
            ));
        }
        return vec![page];
    }

    let chunks: Vec<&[Vec<String>]> = rows.chunks(max_rows).collect();
    let last = chunks.len() - 1;
    chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let mut page_rows = chunk.to_vec();
            if i == last {
                page_rows.extend(trailer.clone());
            }
            format_table(columns, &page_rows)
        })
        .collect()
}

fn recommendation_columns() -> [Column; 5] {
    [
        Column { header: "Item", width: COL_ITEM_WIDTH, align: Align::Left },
        Column { header: "Qty", width: COL_QTY_WIDTH, align: Align::Right },
        Column { header: "Sell", width: COL_VALUE_WIDTH, align: Align::Right },
        Column { header: "Rcl", width: COL_VALUE_WIDTH, align: Align::Right },
        Column { header: "Margin", width: COL_VALUE_WIDTH, align: Align::Right },
    ]
}

fn recommendation_row(rec: &Recommendation) -> Vec<String> {
    vec![
        rec.name.clone(),
        rec.quantity.to_string(),
        format_number(rec.sell_value),
        format_number(rec.recycle_value),
        format_signed(rec.margin),
    ]
}

/// Pages of a recommendation table; `with_total` appends a TOTAL row to the last page
pub fn format_recommendations(recommendations: &[Recommendation], options: &PageOptions, with_total: bool) -> Vec<String> {
    let rows: Vec<Vec<String>> = recommendations.iter().map(recommendation_row).collect();

    let trailer = with_total.then(|| {
        let quantity = recommendations.iter().fold(0u64, |acc, r| acc.saturating_add(u64::from(r.quantity)));
        let sell = recommendations.iter().fold(0u64, |acc, r| acc.saturating_add(r.sell_value));
        let recycle = recommendations.iter().fold(0u64, |acc, r| acc.saturating_add(r.recycle_value));
        let margin = recommendations.iter().fold(0i64, |acc, r| acc.saturating_add(r.margin));
        vec![
            "TOTAL".to_string(),
            quantity.to_string(),
            format_number(sell),
            format_number(recycle),
            format_signed(margin),
        ]
    });

    paginate(&recommendation_columns(), rows, trailer, options)
}

/// Pages of recycle sources for one target
pub fn format_recycle_sources(sources: &[RecycleSource], options: &PageOptions) -> Vec<String> {
    let columns = [
        Column { header: "Item", width: COL_ITEM_WIDTH, align: Align::Left },
        Column { header: "Qty", width: COL_QTY_WIDTH, align: Align::Right },
        Column { header: "Per", width: COL_QTY_WIDTH, align: Align::Right },
        Column { header: "Total", width: COL_VALUE_WIDTH, align: Align::Right },
        Column { header: "Chain", width: COL_CHAIN_WIDTH, align: Align::Left },
    ];

    let rows: Vec<Vec<String>> = sources
        .iter()
        .map(|source| {
            vec![
                source.name.clone(),
                source.quantity.to_string(),
                format_number(source.yield_per_unit),
                format_number(source.total_yield),
                source.chain.join(" → "),
            ]
        })
        .collect();

    paginate(&columns, rows, None, options)
}

pub fn format_optimize_summary(result: &OptimizeResult, params: &OptimizeParams) -> String {
    format!(
        "Sell: {} credits from {} items\nRecycle: {} credits from {} items\nHold: {} items (quest-aware: {})",
        format_number(result.total_sell_value),
        result.sell.len(),
        format_number(result.total_recycle_value),
        result.recycle.len(),
        result.total_hold_count,
        params.quest_aware
    )
}
