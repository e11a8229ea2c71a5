// crates/server/src/routes/releases.rs
//! Release endpoints: the genre x category heatmap, the year and category
//! selectors, and the two dependent breakdowns.
//!
//! The year -> category -> breakdown chain follows explicit dependency
//! ordering: the category domain for the selected year is computed first,
//! the requested category is validated against it, and only then does the
//! breakdown query run. A year with no categories short-circuits with a
//! 422 before any dependent query is issued.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use steamscope_core::{
    transform, Category, DensityCell, DensityGrid, GroupedBar, GroupedBars, RankedTable, Year,
    YearRange,
};
use ts_rs::TS;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Option list for the year selector.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../../web/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct YearOptions {
    pub options: Vec<i64>,
}

/// Option list for the category selector, scoped to a year. `warning` is
/// set when the year has no categories and dependent queries must be
/// skipped.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../../web/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct CategoryOptions {
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// GET /api/releases/heatmap - App counts by genre x category, summed over
/// all years.
pub async fn heatmap(State(state): State<Arc<AppState>>) -> ApiResult<Json<DensityGrid>> {
    let rows = state.warehouse.release_density().await?;

    let title = match (
        rows.iter().map(|r| r.year).min(),
        rows.iter().map(|r| r.year).max(),
    ) {
        (Some(first), Some(last)) if first != last => {
            format!("App Releases by Genre and Category, {}-{}", first, last)
        }
        (Some(first), _) => format!("App Releases by Genre and Category, {}", first),
        _ => "App Releases by Genre and Category".to_string(),
    };

    // Collapse the per-year rows into (category, genre) cells. Input is
    // ordered by genre then category, so equal keys are adjacent.
    let mut cells: Vec<DensityCell> = Vec::new();
    for row in rows {
        if let Some(last) = cells.last_mut() {
            if last.x == row.category && last.y == row.genre {
                last.count += row.app_count;
                continue;
            }
        }
        cells.push(DensityCell {
            x: row.category,
            y: row.genre,
            count: row.app_count,
        });
    }

    Ok(Json(DensityGrid::from_cells(title, cells)))
}

/// GET /api/releases/years - Year selector options.
pub async fn years(State(state): State<Arc<AppState>>) -> ApiResult<Json<YearOptions>> {
    let options = state.warehouse.release_years().await?;
    Ok(Json(YearOptions { options }))
}

#[derive(Debug, Deserialize)]
pub struct CategoriesQuery {
    pub year: i64,
}

/// GET /api/releases/categories?year= - Category selector options for a
/// year. An empty option list carries a warning instead of failing.
pub async fn categories(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoriesQuery>,
) -> ApiResult<Json<CategoryOptions>> {
    let years = state.warehouse.release_years().await?;
    let year = Year::validate(query.year, &years)?;

    let options = state.warehouse.categories_for_year(year).await?;
    let warning = options
        .is_empty()
        .then(|| "No categories available for the selected year.".to_string());

    Ok(Json(CategoryOptions { options, warning }))
}

#[derive(Debug, Deserialize)]
pub struct BreakdownQuery {
    pub year: i64,
    pub category: String,
}

/// GET /api/releases/breakdown?year=&category= - Genres ranked by distinct
/// app count for a (year, category) pair, at most 10 rows.
pub async fn breakdown(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BreakdownQuery>,
) -> ApiResult<Json<RankedTable>> {
    let years = state.warehouse.release_years().await?;
    let year = Year::validate(query.year, &years)?;

    // Upstream selection first: no categories for the year means the
    // dependent query is never issued.
    let category_domain = state.warehouse.categories_for_year(year).await?;
    if category_domain.is_empty() {
        return Err(ApiError::NoCategoriesForYear(year.value()));
    }
    let category = Category::validate(&query.category, &category_domain)?;

    let counts = state.warehouse.genre_app_counts(year, &category).await?;
    let rows = transform::ranked(counts.into_iter().map(|c| (c.genre, c.app_count)));

    Ok(Json(RankedTable {
        title: format!(
            "Most popular genres for {} in {}",
            category.as_str(),
            year.value()
        ),
        label_header: "Genre".to_string(),
        value_header: "Number of Apps".to_string(),
        rows,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    pub start: i64,
    pub end: i64,
}

/// GET /api/releases/activity?start=&end= - Genres ranked by release count
/// over an inclusive year range, with the derived range title.
pub async fn activity(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ActivityQuery>,
) -> ApiResult<Json<GroupedBars>> {
    let years = state.warehouse.release_years().await?;
    let range = YearRange::validate(query.start, query.end, &years)?;

    let counts = state.warehouse.genre_activity(range).await?;

    Ok(Json(GroupedBars {
        title: transform::range_title("Distribution of New Steam Games by Genre", range),
        y_label: "Number of Apps".to_string(),
        bars: counts
            .into_iter()
            .map(|c| GroupedBar {
                label: c.genre,
                value: c.app_count as f64,
            })
            .collect(),
    }))
}

/// Create the releases routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/releases/heatmap", get(heatmap))
        .route("/releases/years", get(years))
        .route("/releases/categories", get(categories))
        .route("/releases/breakdown", get(breakdown))
        .route("/releases/activity", get(activity))
}
