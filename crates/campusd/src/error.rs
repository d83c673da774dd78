use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use campusapp::error::CampusError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Everything a handler can fail with, mapped to one structured JSON
/// error response. Business refusals keep the portal's historical
/// messages; storage failures surface as 500 with the cause logged, never
/// leaked.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("internal error")]
    Internal(#[source] CampusError),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }
}

impl From<CampusError> for ApiError {
    fn from(err: CampusError) -> Self {
        match err {
            CampusError::BookNotFound(_) | CampusError::BookNotAvailable(_) => {
                Self::BadRequest("not available".to_string())
            }
            CampusError::BookNotBorrowed(_) => Self::BadRequest("not borrowed".to_string()),
            CampusError::SlotTaken { .. } => Self::Conflict("slot already booked".to_string()),
            other => Self::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(ref cause) => {
                error!(%cause, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrow_refusals_map_to_bad_request() {
        let err: ApiError = CampusError::BookNotAvailable(1).into();
        assert!(matches!(err, ApiError::BadRequest(ref msg) if msg == "not available"));

        let err: ApiError = CampusError::BookNotFound(9).into();
        assert!(matches!(err, ApiError::BadRequest(ref msg) if msg == "not available"));
    }

    #[test]
    fn test_slot_conflict_maps_to_conflict() {
        let err: ApiError = CampusError::SlotTaken {
            room_id: 1,
            date: "2026-09-01".into(),
            time: "10:00".into(),
        }
        .into();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[test]
    fn test_storage_failure_is_internal() {
        let err: ApiError = CampusError::Store("disk on fire".into()).into();
        assert!(matches!(err, ApiError::Internal(_)));
        // The cause never reaches the response body
        assert_eq!(err.to_string(), "internal error");
    }
}
