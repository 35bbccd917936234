//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The activities REST API and the built client bundle share one Axum
//! router. The bundle is served as static files under `/static`, and `/`
//! redirects to its index page.

pub mod activities;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{delete, get, post};
use roster::ACTIVITIES_PATH;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

const INDEX_PAGE: &str = "/static/index.html";

/// Full application router: API routes plus the static client bundle.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(redirect_root_to_index))
        .route(ACTIVITIES_PATH, get(activities::list_activities))
        .route("/activities/{name}/signup", post(activities::signup))
        .route("/activities/{name}/unregister", delete(activities::unregister))
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_root_to_index() -> Redirect {
    Redirect::temporary(INDEX_PAGE)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
