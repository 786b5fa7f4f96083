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
        .route("/", get(handler::list_directors).post(handler::create_director))
        .route("/search", get(handler::search_directors))
        .route(
            "/{id}",
            get(handler::get_director)
                .put(handler::update_director)
                .delete(handler::delete_director),
        )
}
