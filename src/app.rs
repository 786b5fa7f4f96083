use axum::{middleware, Router};
use crate::middleware::request_path::attach_request_path;
use crate::state::AppState;
use tower_http::trace::TraceLayer;

pub fn create_app(state: AppState) -> Router {
    crate::routes::configure_routes()
        .layer(middleware::from_fn(attach_request_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
