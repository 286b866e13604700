use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::routing::vocabulary::ParseSegmentError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    UnknownSegment(#[from] ParseSegmentError),

    #[error("unknown route token: {0:?}")]
    UnknownToken(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::UnknownSegment(_) | AppError::UnknownToken(_) => StatusCode::NOT_FOUND,
        };

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
