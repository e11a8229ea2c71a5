// crates/server/src/routes/playtime.rs
//! Playtime endpoints: per-category averages and the overall figure.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use steamscope_core::{Caption, GroupedBar, GroupedBars};
use steamscope_db::Weighting;
use ts_rs::TS;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/playtime/categories - Average two-week playtime per category.
pub async fn category_playtime(State(state): State<Arc<AppState>>) -> ApiResult<Json<GroupedBars>> {
    let rows = state.warehouse.category_playtime_averages().await?;

    Ok(Json(GroupedBars {
        title: "Average Playtime (Two Weeks) by Category".to_string(),
        y_label: "Average Playtime (Two Weeks)".to_string(),
        bars: rows
            .into_iter()
            .map(|r| GroupedBar {
                label: r.category,
                value: r.avg_playtime,
            })
            .collect(),
    }))
}

/// Overall playtime under both weighting semantics. Which one "average
/// playtime across all categories" means is a product decision, so the
/// payload carries both and the caption quotes the fact-row figure.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../../web/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct OverallPlaytimeResponse {
    /// AVG over fact rows expanded by category membership.
    pub fact_weighted: Option<f64>,
    /// Unweighted mean of the per-category averages.
    pub category_mean: Option<f64>,
    pub caption: Caption,
}

/// GET /api/playtime/overall - Average playtime across all categories.
pub async fn overall_playtime(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<OverallPlaytimeResponse>> {
    let fact_weighted = state.warehouse.overall_playtime(Weighting::FactRows).await?;
    let category_mean = state
        .warehouse
        .overall_playtime(Weighting::Categories)
        .await?;

    let caption = Caption {
        text: match fact_weighted {
            Some(avg) => format!(
                "An average of {:.1} hours were played across all categories.",
                avg
            ),
            None => "No playtime has been recorded yet.".to_string(),
        },
    };

    Ok(Json(OverallPlaytimeResponse {
        fact_weighted,
        category_mean,
        caption,
    }))
}

/// Create the playtime routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/playtime/categories", get(category_playtime))
        .route("/playtime/overall", get(overall_playtime))
}
