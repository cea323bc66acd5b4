//! Error types and error handling for the application
//!
//! Roster failures are mapped to fixed status codes and messages here.
//! All errors implement `IntoResponse` and render as `{"detail": "..."}`.

use crate::state::RosterError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The roster refused a signup or unregister
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// Request was malformed (e.g. a required query parameter is missing)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Status code and client-facing detail text
    pub fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            AppError::Roster(RosterError::ActivityNotFound(_)) => {
                (StatusCode::NOT_FOUND, "Activity not found".to_string())
            }
            AppError::Roster(RosterError::AlreadySignedUp { .. }) => (
                StatusCode::BAD_REQUEST,
                "Student is already signed up".to_string(),
            ),
            AppError::Roster(RosterError::NotRegistered { .. }) => (
                StatusCode::NOT_FOUND,
                "Student is not registered for this activity".to_string(),
            ),
            AppError::InvalidRequest(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_errors_map_to_fixed_responses() {
        let not_found = AppError::from(RosterError::ActivityNotFound("X".to_string()));
        assert_eq!(
            not_found.status_and_detail(),
            (StatusCode::NOT_FOUND, "Activity not found".to_string())
        );

        let duplicate = AppError::from(RosterError::AlreadySignedUp {
            activity: "Chess Club".to_string(),
            email: "a@x.edu".to_string(),
        });
        assert_eq!(
            duplicate.status_and_detail(),
            (
                StatusCode::BAD_REQUEST,
                "Student is already signed up".to_string()
            )
        );

        let absent = AppError::from(RosterError::NotRegistered {
            activity: "Chess Club".to_string(),
            email: "a@x.edu".to_string(),
        });
        let (status, detail) = absent.status_and_detail();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(detail, "Student is not registered for this activity");
    }

    #[test]
    fn test_internal_error_hides_cause() {
        let err = AppError::from(anyhow::anyhow!("lock poisoned"));
        let (status, detail) = err.status_and_detail();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!detail.contains("poisoned"));
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::InvalidRequest("missing email".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
