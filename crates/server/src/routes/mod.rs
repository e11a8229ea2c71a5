//! API route handlers for the steamscope server.

pub mod health;
pub mod playtime;
pub mod releases;
pub mod reviews;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

/// Create the combined API router with all routes under /api prefix.
///
/// Routes:
/// - GET /api/health - Health check
/// - GET /api/reviews/genres - Per-genre positive review totals (table + pie)
/// - GET /api/reviews/top-games?genre= - Top games within a genre (table)
/// - GET /api/playtime/categories - Average playtime per category (bars)
/// - GET /api/playtime/overall - Average playtime across all categories (caption)
/// - GET /api/releases/heatmap - App counts by genre x category (density grid)
/// - GET /api/releases/years - Year selector options
/// - GET /api/releases/categories?year= - Category selector options for a year
/// - GET /api/releases/breakdown?year=&category= - Genre app counts (table)
/// - GET /api/releases/activity?start=&end= - Genre activity over a year range (bars)
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", health::router())
        .nest("/api", reviews::router())
        .nest("/api", playtime::router())
        .nest("/api", releases::router())
        .with_state(state)
}
