//! Activity roster service: list, signup, unregister.
//!
//! DESIGN
//! ======
//! Each mutation takes the catalog write lock for the whole check-then-modify
//! step, so two concurrent signups for the same email cannot both succeed.
//! Capacity is not enforced; rosters may exceed
//! `max_participants` and the page then shows negative availability.

use roster::ActivityCatalog;
use tracing::info;

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not registered for this activity")]
    NotRegistered,
    #[error("email query parameter is required")]
    MissingEmail,
}

/// Snapshot of the full catalog.
pub async fn list_activities(state: &AppState) -> ActivityCatalog {
    state.activities.read().await.clone()
}

/// Append `email` to the roster of `name`.
///
/// # Errors
///
/// `NotFound` for an unknown activity, `AlreadySignedUp` when the email is
/// already on the roster.
pub async fn signup(state: &AppState, name: &str, email: &str) -> Result<String, ActivityError> {
    let mut activities = state.activities.write().await;
    let activity = activities.get_mut(name).ok_or(ActivityError::NotFound)?;
    if activity.is_registered(email) {
        return Err(ActivityError::AlreadySignedUp);
    }
    activity.participants.push(email.to_owned());
    info!(activity = %name, %email, spots_left = activity.spots_left(), "participant signed up");
    Ok(format!("Signed up {email} for {name}"))
}

/// Remove `email` from the roster of `name`.
///
/// # Errors
///
/// `NotFound` for an unknown activity, `NotRegistered` when the email is not
/// on the roster.
pub async fn unregister(state: &AppState, name: &str, email: &str) -> Result<String, ActivityError> {
    let mut activities = state.activities.write().await;
    let activity = activities.get_mut(name).ok_or(ActivityError::NotFound)?;
    let Some(position) = activity.participants.iter().position(|p| p == email) else {
        return Err(ActivityError::NotRegistered);
    };
    activity.participants.remove(position);
    info!(activity = %name, %email, spots_left = activity.spots_left(), "participant unregistered");
    Ok(format!("Unregistered {email} from {name}"))
}

#[cfg(test)]
#[path = "activity_test.rs"]
mod tests;
