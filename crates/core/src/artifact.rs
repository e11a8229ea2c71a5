// crates/core/src/artifact.rs
//! Typed display artifacts.
//!
//! Each query's result is bound to exactly one artifact kind; the kind is
//! fixed per endpoint and only the data varies. The frontend renders these
//! payloads as-is, so field names double as display contract.

use serde::Serialize;
use ts_rs::TS;

/// One row of a ranked table. `rank` is 1-based display numbering.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../../web/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct RankedRow {
    pub rank: usize,
    pub label: String,
    pub value: i64,
}

/// A ranked two-column table (label + measure), rows ordered by the measure.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../../web/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct RankedTable {
    pub title: String,
    /// Display header for the label column, e.g. "Genre Name".
    pub label_header: String,
    /// Display header for the measure column, e.g. "Total Positive Reviews".
    pub value_header: String,
    pub rows: Vec<RankedRow>,
}

/// One slice of a proportion chart.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../../web/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct ProportionSlice {
    pub label: String,
    pub value: i64,
}

/// Share of a measure across categories (pie chart).
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../../web/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct ProportionChart {
    pub title: String,
    pub slices: Vec<ProportionSlice>,
}

/// One bar of a grouped bar chart.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../../web/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct GroupedBar {
    pub label: String,
    pub value: f64,
}

/// A measure per category, bars in query order (not re-sorted for display).
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../../web/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct GroupedBars {
    pub title: String,
    pub y_label: String,
    pub bars: Vec<GroupedBar>,
}

/// One populated cell of a density grid.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../../web/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct DensityCell {
    pub x: String,
    pub y: String,
    pub count: i64,
}

/// Count by two categorical dimensions (heatmap). Cells are sparse;
/// absent (x, y) pairs are zero.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../../web/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct DensityGrid {
    pub title: String,
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    pub cells: Vec<DensityCell>,
}

impl DensityGrid {
    /// Build a grid from sparse (x, y, count) cells. Axis labels are the
    /// distinct values in first-seen order, which callers keep sorted by
    /// ordering the underlying query.
    pub fn from_cells(title: impl Into<String>, cells: Vec<DensityCell>) -> Self {
        let mut x_labels: Vec<String> = Vec::new();
        let mut y_labels: Vec<String> = Vec::new();
        for cell in &cells {
            if !x_labels.contains(&cell.x) {
                x_labels.push(cell.x.clone());
            }
            if !y_labels.contains(&cell.y) {
                y_labels.push(cell.y.clone());
            }
        }
        Self {
            title: title.into(),
            x_labels,
            y_labels,
            cells,
        }
    }
}

/// A single line of derived text.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../../web/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    pub text: String,
}
