//! Activity roster API handlers
//!
//! Thin wrappers over [`Roster`](crate::state::Roster): each handler takes
//! the state lock, applies one operation and translates the outcome.

use crate::error::AppError;
use crate::state::{Roster, RosterError, SharedState};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
};
use serde::{Deserialize, Serialize};

/// Query string carried by signup and unregister
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    /// Student email, stored exactly as given
    pub email: String,
}

/// Confirmation response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

fn email_from(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, AppError> {
    query
        .map(|Query(q)| q.email)
        .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))
}

/// Activity names that cannot be decoded match no activity
fn activity_from(path: Result<Path<String>, PathRejection>) -> Result<String, AppError> {
    path.map(|Path(name)| name).map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "Undecodable activity name");
        AppError::Roster(RosterError::ActivityNotFound(rejection.body_text()))
    })
}

/// GET /activities - List every activity with its participants
pub async fn list_activities(State(state): State<SharedState>) -> Json<Roster> {
    let state = state.read().await;
    Json(state.roster.clone())
}

/// POST /activities/:activity_name/signup?email= - Sign a student up
pub async fn signup(
    State(state): State<SharedState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let activity_name = activity_from(path)?;
    let email = email_from(query)?;

    let mut state = state.write().await;
    let change = state.roster.enroll(&activity_name, &email)?;

    Ok(Json(MessageResponse {
        message: change.message(),
    }))
}

/// DELETE /activities/:activity_name/unregister?email= - Remove a student
pub async fn unregister(
    State(state): State<SharedState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let activity_name = activity_from(path)?;
    let email = email_from(query)?;

    let mut state = state.write().await;
    let change = state.roster.withdraw(&activity_name, &email)?;

    Ok(Json(MessageResponse {
        message: change.message(),
    }))
}
