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
        .route("/", get(handler::list_roles).post(handler::create_role))
        .route("/search", get(handler::search_roles))
        .route("/movie/{movie_id}", get(handler::list_roles_by_movie))
        .route("/actor/{actor_id}", get(handler::list_roles_by_actor))
        .route(
            "/{id}",
            get(handler::get_role)
                .put(handler::update_role)
                .delete(handler::delete_role),
        )
}
