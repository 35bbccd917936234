//! Activity panel operations: refresh, signup, unregister.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components turn user events into calls here; each operation talks to the
//! backend through `ActivityApi` and writes its outcome into `PanelState`.
//! `PanelHost` supplies the environment (state cell, task spawner, timer) so
//! the same code runs against Leptos signals in the browser and against a
//! scripted host in tests.
//!
//! ERROR HANDLING
//! ==============
//! Failures never escape an operation. They end up in the status slot (or the
//! list's failure notice) and in the log, and the panel keeps working. There
//! is no automatic retry; the user retries by acting again.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::future::Future;

use crate::net::api::{ActivityApi, ApiError};
use crate::state::catalog::ParticipantEntry;
use crate::state::panel::PanelState;
use crate::state::status::{AUTO_HIDE_MS, StatusKind};

pub const SIGNUP_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FALLBACK: &str = "Failed to unregister";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";

/// Environment the operations run in.
pub trait PanelHost: Clone + 'static {
    type Api: ActivityApi;

    fn api(&self) -> &Self::Api;

    /// Mutate panel state. Returns `None` once the panel has been torn down.
    fn update<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> Option<R>;

    /// Run `task` concurrently with the caller.
    fn spawn(&self, task: impl Future<Output = ()> + 'static);

    /// Run `task` once, `delay_ms` from now.
    fn after(&self, delay_ms: u32, task: impl FnOnce() + 'static);
}

/// Fetch the catalog and rebuild the list and select options.
pub async fn refresh_activities<H: PanelHost>(host: &H) {
    let Some(ticket) = host.update(|s| s.catalog.begin_fetch()) else {
        return;
    };
    let outcome = host.api().fetch_activities().await;
    if let Err(err) = &outcome {
        log::error!("Error fetching activities: {err}");
    }
    if host.update(|s| s.catalog.apply(ticket, outcome)) == Some(false) {
        log::debug!("dropped stale activities response {ticket:?}");
    }
}

/// Register the form's email for the form's activity.
///
/// The list is not refreshed afterwards; counts stay as last fetched.
pub async fn submit_signup<H: PanelHost>(host: &H) {
    let Some(form) = host.update(|s| s.form.clone()) else {
        return;
    };
    match host.api().signup(&form.activity, &form.email).await {
        Ok(body) => {
            log::info!("signed up {} for {}", form.email, form.activity);
            host.update(|s| s.form.reset());
            show_status(host, body.message, StatusKind::Success);
        }
        Err(ApiError::Rejected { status, detail }) => {
            log::warn!("signup for {:?} rejected with status {status}", form.activity);
            let text = detail.unwrap_or_else(|| SIGNUP_FALLBACK.to_owned());
            show_status(host, text, StatusKind::Error);
        }
        Err(err) => {
            log::error!("Error signing up: {err}");
            show_status(host, SIGNUP_FAILED, StatusKind::Error);
        }
    }
}

/// Remove one participant, then refresh the list on success.
pub async fn unregister_participant<H: PanelHost>(host: &H, entry: ParticipantEntry) {
    match host.api().unregister(&entry.activity, &entry.email).await {
        Ok(body) => {
            log::info!("unregistered {} from {}", entry.email, entry.activity);
            show_status(host, body.message, StatusKind::Success);
            let refresh_host = host.clone();
            host.spawn(async move { refresh_activities(&refresh_host).await });
        }
        Err(ApiError::Rejected { status, detail }) => {
            log::warn!("unregister from {:?} rejected with status {status}", entry.activity);
            let text = detail.unwrap_or_else(|| UNREGISTER_FALLBACK.to_owned());
            show_status(host, text, StatusKind::Error);
        }
        Err(err) => {
            log::error!("Error unregistering: {err}");
            show_status(host, UNREGISTER_FAILED, StatusKind::Error);
        }
    }
}

/// Overwrite the status slot and schedule its auto-hide.
fn show_status<H: PanelHost>(host: &H, text: impl Into<String>, kind: StatusKind) {
    let Some(ticket) = host.update(|s| s.status.show(text, kind)) else {
        return;
    };
    let hide_host = host.clone();
    host.after(AUTO_HIDE_MS, move || {
        hide_host.update(|s| s.status.hide(ticket));
    });
}
