// region:    --- Imports
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

// endregion: --- Imports

// region:    --- Api Error

/// Failure outcomes a request can surface to the client.
#[derive(Debug)]
pub enum ApiError {
    /// The requested auction id has no matching record.
    NotFound,
    /// The auction already has bids, so its item may not be edited.
    HasBids,
    /// A write completed without error but affected zero rows.
    SaveFailed(&'static str),
    /// The store reported a fault.
    Database(sqlx::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl ApiError {
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "Auction with the specified id was not found".to_string(),
                    code: "NOT_FOUND",
                },
            ),
            ApiError::HasBids => (
                StatusCode::CONFLICT,
                ErrorBody {
                    error: "Cannot update an auction that already has bids".to_string(),
                    code: "HAS_BIDS",
                },
            ),
            ApiError::SaveFailed(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: (*msg).to_string(),
                    code: "SAVE_FAILED",
                },
            ),
            ApiError::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: e.to_string(),
                    code: "DATABASE",
                },
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Not-found carries no body
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            _ => {
                let (status, body) = self.status_and_body();
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Database(e)
    }
}

// endregion: --- Api Error

// endregion: --- Tests
