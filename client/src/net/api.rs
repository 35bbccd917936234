//! REST API helpers for the activities backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Other builds: `HttpApi` reports a transport error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call is a single attempt with no retry and no timeout beyond the
//! transport's own. Callers get `ApiError` values instead of panics so a
//! failed request only changes what the status area says.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use roster::{ACTIVITIES_PATH, ActivityCatalog, ErrorBody, MessageBody};

/// Characters `encodeURIComponent` leaves as-is; everything else is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// `POST` target registering `email` for `activity`.
pub fn signup_endpoint(activity: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_PATH}/{}/signup?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

/// `DELETE` target removing `email` from `activity`.
pub fn unregister_endpoint(activity: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_PATH}/{}/unregister?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was obtained (network down, request aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// A response arrived but its body was not the expected JSON.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The server answered with a non-ok status.
    #[error("request rejected with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
}

impl ApiError {
    fn decode(err: &serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Map a `GET /activities` response onto a catalog.
///
/// # Errors
///
/// `Rejected` for non-ok statuses, `Decode` when the body is not a catalog.
pub fn interpret_catalog(ok: bool, status: u16, body: &str) -> Result<ActivityCatalog, ApiError> {
    if !ok {
        return Err(ApiError::Rejected { status, detail: rejection_detail(body) });
    }
    serde_json::from_str(body).map_err(|e| ApiError::decode(&e))
}

/// Map a signup/unregister response onto its message body.
///
/// The body must be JSON whatever the status; only then is the ok flag
/// consulted.
///
/// # Errors
///
/// `Decode` when the body is not JSON (or an ok body has no `message`),
/// `Rejected` for non-ok statuses.
pub fn interpret_mutation(ok: bool, status: u16, body: &str) -> Result<MessageBody, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| ApiError::decode(&e))?;
    if ok {
        return serde_json::from_value(value).map_err(|e| ApiError::decode(&e));
    }
    let detail = serde_json::from_value::<ErrorBody>(value)
        .unwrap_or_default()
        .detail_text()
        .map(str::to_owned);
    Err(ApiError::Rejected { status, detail })
}

fn rejection_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .unwrap_or_default()
        .detail_text()
        .map(str::to_owned)
}

/// Operations the panel needs from the backend.
pub trait ActivityApi {
    /// `GET /activities`.
    fn fetch_activities(&self) -> impl Future<Output = Result<ActivityCatalog, ApiError>>;

    /// `POST /activities/{activity}/signup?email={email}`.
    fn signup(&self, activity: &str, email: &str) -> impl Future<Output = Result<MessageBody, ApiError>>;

    /// `DELETE /activities/{activity}/unregister?email={email}`.
    fn unregister(&self, activity: &str, email: &str) -> impl Future<Output = Result<MessageBody, ApiError>>;
}

/// Same-origin HTTP implementation used by the mounted page.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

#[cfg(feature = "csr")]
impl ActivityApi for HttpApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let (ok, status, body) = send(gloo_net::http::Request::get(ACTIVITIES_PATH)).await?;
        interpret_catalog(ok, status, &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MessageBody, ApiError> {
        let url = signup_endpoint(activity, email);
        let (ok, status, body) = send(gloo_net::http::Request::post(&url)).await?;
        interpret_mutation(ok, status, &body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<MessageBody, ApiError> {
        let url = unregister_endpoint(activity, email);
        let (ok, status, body) = send(gloo_net::http::Request::delete(&url)).await?;
        interpret_mutation(ok, status, &body)
    }
}

#[cfg(feature = "csr")]
async fn send(request: gloo_net::http::RequestBuilder) -> Result<(bool, u16, String), ApiError> {
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    Ok(((200..300).contains(&status), status, body))
}

#[cfg(not(feature = "csr"))]
impl ActivityApi for HttpApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        Err(not_in_browser())
    }

    async fn signup(&self, _activity: &str, _email: &str) -> Result<MessageBody, ApiError> {
        Err(not_in_browser())
    }

    async fn unregister(&self, _activity: &str, _email: &str) -> Result<MessageBody, ApiError> {
        Err(not_in_browser())
    }
}

#[cfg(not(feature = "csr"))]
fn not_in_browser() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}
