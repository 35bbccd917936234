//! Activity catalog and roster routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use roster::{ActivityCatalog, ErrorBody, MessageBody};
use serde::Deserialize;
use tracing::warn;

use crate::services::activity::{self, ActivityError};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

pub(crate) fn activity_error_to_status(err: &ActivityError) -> StatusCode {
    match err {
        ActivityError::NotFound => StatusCode::NOT_FOUND,
        ActivityError::AlreadySignedUp | ActivityError::NotRegistered => StatusCode::BAD_REQUEST,
        ActivityError::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let status = activity_error_to_status(&self);
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// `GET /activities`: full catalog in display order.
pub async fn list_activities(State(state): State<AppState>) -> Json<ActivityCatalog> {
    Json(activity::list_activities(&state).await)
}

/// `POST /activities/:name/signup?email=`: add a participant.
pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageBody>, ActivityError> {
    let email = query.email.ok_or(ActivityError::MissingEmail)?;
    let message = activity::signup(&state, &name, &email).await.inspect_err(|err| {
        warn!(activity = %name, %email, error = %err, "signup rejected");
    })?;
    Ok(Json(MessageBody::new(message)))
}

/// `DELETE /activities/:name/unregister?email=`: remove a participant.
pub async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageBody>, ActivityError> {
    let email = query.email.ok_or(ActivityError::MissingEmail)?;
    let message = activity::unregister(&state, &name, &email).await.inspect_err(|err| {
        warn!(activity = %name, %email, error = %err, "unregister rejected");
    })?;
    Ok(Json(MessageBody::new(message)))
}

#[cfg(test)]
#[path = "activities_test.rs"]
mod tests;
