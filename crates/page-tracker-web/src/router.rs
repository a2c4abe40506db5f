//! Axum router wiring.
//!
//! Exposes the single `/` route. Other methods get 405 and other paths 404
//! from axum's defaults; neither reaches the counter store.

use axum::{routing::get, Router};

use crate::{app_state::AppState, handler};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::index))
        .with_state(state)
}
