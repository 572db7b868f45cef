//! Dashboard page and its JSON model

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Json, Router};
use ironctl_core::Page;

use crate::http::server::AppState;

/// GET /
async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.html.clone())
}

/// GET /api/dashboard
async fn dashboard(State(state): State<Arc<AppState>>) -> Json<Page> {
    Json(state.page)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/api/dashboard", get(dashboard))
}
