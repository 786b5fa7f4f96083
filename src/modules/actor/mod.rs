use axum::Router;
use axum::routing::get;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod mapper;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_actors).post(handler::create_actor))
        .route("/search", get(handler::search_actors))
        .route(
            "/{id}",
            get(handler::get_actor)
                .put(handler::update_actor)
                .delete(handler::delete_actor),
        )
}
