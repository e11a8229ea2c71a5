// crates/core/src/transform.rs
//! Pure result transforms: display row numbering and derived labels.

use crate::artifact::RankedRow;
use crate::filter::YearRange;

/// Number (label, value) pairs from 1 for display, preserving input order.
/// The ordering itself comes from the query's ORDER BY.
pub fn ranked<L: Into<String>>(items: impl IntoIterator<Item = (L, i64)>) -> Vec<RankedRow> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| RankedRow {
            rank: i + 1,
            label: label.into(),
            value,
        })
        .collect()
}

/// Derive a chart title from a base label and a year range.
/// A degenerate range collapses to a single year.
pub fn range_title(base: &str, range: YearRange) -> String {
    if range.is_degenerate() {
        format!("{} ({})", base, range.start())
    } else {
        format!("{} ({} - {})", base, range.start(), range.end())
    }
}
