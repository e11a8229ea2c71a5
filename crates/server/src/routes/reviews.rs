// crates/server/src/routes/reviews.rs
//! Review endpoints: per-genre totals and the top games within one genre.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use steamscope_core::{transform, Genre, ProportionChart, ProportionSlice, RankedTable};
use ts_rs::TS;

use crate::error::ApiResult;
use crate::state::AppState;

/// Payload for the genre review section: the ranked table and the
/// proportion chart rendered beside it.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../../web/types/generated/")]
#[serde(rename_all = "camelCase")]
pub struct GenreReviewsResponse {
    pub table: RankedTable,
    pub chart: ProportionChart,
}

/// GET /api/reviews/genres - Positive review totals per genre.
pub async fn genre_reviews(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<GenreReviewsResponse>> {
    let totals = state.warehouse.genre_review_totals().await?;

    let rows = transform::ranked(
        totals
            .iter()
            .map(|t| (t.genre.clone(), t.total_positive)),
    );
    let table = RankedTable {
        title: "Which genres have the most positive reviews?".to_string(),
        label_header: "Genre Name".to_string(),
        value_header: "Total Positive Reviews".to_string(),
        rows,
    };
    let chart = ProportionChart {
        title: "Review Distribution".to_string(),
        slices: totals
            .into_iter()
            .map(|t| ProportionSlice {
                label: t.genre,
                value: t.total_positive,
            })
            .collect(),
    };

    Ok(Json(GenreReviewsResponse { table, chart }))
}

#[derive(Debug, Deserialize)]
pub struct TopGamesQuery {
    pub genre: String,
}

/// GET /api/reviews/top-games?genre= - Most positively reviewed games in a
/// genre, at most 50 rows. The genre is validated against the genre
/// dimension before the query is issued.
pub async fn top_games(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TopGamesQuery>,
) -> ApiResult<Json<RankedTable>> {
    let domain = state.warehouse.genre_names().await?;
    let genre = Genre::validate(&query.genre, &domain)?;

    let games = state.warehouse.top_games_for_genre(&genre).await?;
    let rows = transform::ranked(games.into_iter().map(|g| (g.app, g.positive_reviews)));

    Ok(Json(RankedTable {
        title: format!("Most positively reviewed {} games", genre.as_str()),
        label_header: "App Name".to_string(),
        value_header: "Total Positive Reviews".to_string(),
        rows,
    }))
}

/// Create the reviews routes router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/reviews/genres", get(genre_reviews))
        .route("/reviews/top-games", get(top_games))
}
