// crates/server/src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use steamscope_core::FilterError;
use steamscope_db::DbError;
use thiserror::Error;
use ts_rs::TS;

/// Structured JSON error response for API errors
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../../web/types/generated/")]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid filter: {0}")]
    Filter(#[from] FilterError),

    #[error("No categories recorded for year {0}")]
    NoCategoriesForYear(i64),

    #[error("Database error: {0}")]
    Warehouse(#[from] DbError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::Filter(filter_err) => {
                tracing::warn!(error = %filter_err, "Rejected filter value");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Invalid filter", filter_err.to_string()),
                )
            }
            ApiError::NoCategoriesForYear(year) => {
                tracing::warn!(year = %year, "No categories for selected year");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse::with_details(
                        "No categories available for the selected year",
                        format!("Year: {}", year),
                    ),
                )
            }
            ApiError::Warehouse(db_err) => {
                tracing::error!(error = %db_err, "Warehouse query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_details("Database error", db_err.to_string()),
                )
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(message = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Bad request", msg.clone()),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    /// Helper to extract status code and body from a response
    async fn extract_response(response: Response) -> (StatusCode, ErrorResponse) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        (status, error_response)
    }

    #[tokio::test]
    async fn test_unknown_genre_returns_400() {
        let error = ApiError::Filter(FilterError::UnknownGenre("Sports".to_string()));
        let response = error.into_response();
        let (status, body) = extract_response(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid filter");
        assert!(body.details.unwrap().contains("Sports"));
    }

    #[tokio::test]
    async fn test_inverted_range_returns_400() {
        let error = ApiError::Filter(FilterError::InvertedRange {
            start: 2020,
            end: 2015,
        });
        let response = error.into_response();
        let (status, body) = extract_response(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.details.unwrap().contains("2020"));
    }

    #[tokio::test]
    async fn test_no_categories_returns_422() {
        let error = ApiError::NoCategoriesForYear(2017);
        let response = error.into_response();
        let (status, body) = extract_response(response).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error, "No categories available for the selected year");
        assert!(body.details.unwrap().contains("2017"));
    }

    #[tokio::test]
    async fn test_bad_request_returns_400() {
        let error = ApiError::BadRequest("missing parameter".to_string());
        let response = error.into_response();
        let (status, body) = extract_response(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Bad request");
        assert!(body.details.unwrap().contains("missing parameter"));
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new("Test error");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"error\":\"Test error\""));
        assert!(!json.contains("details")); // None should be skipped

        let response = ErrorResponse::with_details("Test error", "More info");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"details\":\"More info\""));
    }

    #[test]
    fn test_api_error_from_filter_error() {
        let filter_err = FilterError::UnknownYear(1900);
        let api_err: ApiError = filter_err.into();
        assert!(matches!(api_err, ApiError::Filter(_)));
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NoCategoriesForYear(2017);
        assert_eq!(err.to_string(), "No categories recorded for year 2017");

        let err = ApiError::BadRequest("oops".to_string());
        assert_eq!(err.to_string(), "Bad request: oops");
    }
}
