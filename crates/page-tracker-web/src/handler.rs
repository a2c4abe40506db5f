//! `GET /`: increment the visit counter and report it.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use page_tracker_core::{render_views, APOLOGY, COUNTER_KEY};

use crate::app_state::AppState;

/// Success carries the store's value verbatim. Any store failure is logged
/// here and answered with the fixed apology; it never reaches axum's own
/// error handling.
#[tracing::instrument(name = "index", skip_all)]
pub async fn index(State(app): State<AppState>) -> Response {
    match app.store().incr(COUNTER_KEY).await {
        Ok(views) => {
            tracing::debug!(views, "page view counted");
            Html(render_views(views)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, code = e.client_code().as_str(), "counter increment failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(APOLOGY)).into_response()
        }
    }
}
