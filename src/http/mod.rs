//! HTTP surface
//!
//! Axum routes exposed by the server:
//! - `todos`: collection and item endpoints for to-do records
//! - the embedded single-page UI at `/`
//! - a liveness probe at `/health`

pub mod todos;

use crate::app::AppState;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/todos/{id}",
            get(todos::get_todo)
                .patch(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the single-page UI
async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// Liveness probe for monitoring; does not check the store
async fn health() -> &'static str {
    "ok"
}
