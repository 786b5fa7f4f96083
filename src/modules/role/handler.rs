use super::dto::{RoleDto, RoleSearchParams};
use super::service::RoleService;
use crate::common::error::{AppError, AppResult};
use crate::common::response::{ApiSuccess, ErrorResponse};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;

/// List all roles
#[utoipa::path(
    get,
    path = "/api/roles",
    responses(
        (status = 200, description = "List of roles", body = Vec<RoleDto>)
    ),
    tag = "Roles"
)]
pub async fn list_roles(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let roles = RoleService::find_all(state).await?;
    Ok(ApiSuccess::ok(roles))
}

/// Get role by ID
#[utoipa::path(
    get,
    path = "/api/roles/{id}",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role details", body = RoleDto),
        (status = 404, description = "Role not found", body = ErrorResponse)
    ),
    tag = "Roles"
)]
pub async fn get_role(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<impl IntoResponse> {
    let role = RoleService::find_by_id(state, id).await?;
    Ok(ApiSuccess::ok(role))
}

/// List the roles of a movie
#[utoipa::path(
    get,
    path = "/api/roles/movie/{movie_id}",
    params(
        ("movie_id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Roles in the movie", body = Vec<RoleDto>)
    ),
    tag = "Roles"
)]
pub async fn list_roles_by_movie(
    State(state): State<AppState>,
    WithRejection(Path(movie_id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<impl IntoResponse> {
    let roles = RoleService::find_by_movie(state, movie_id).await?;
    Ok(ApiSuccess::ok(roles))
}

/// List the roles of an actor
#[utoipa::path(
    get,
    path = "/api/roles/actor/{actor_id}",
    params(
        ("actor_id" = i64, Path, description = "Actor ID")
    ),
    responses(
        (status = 200, description = "Roles played by the actor", body = Vec<RoleDto>)
    ),
    tag = "Roles"
)]
pub async fn list_roles_by_actor(
    State(state): State<AppState>,
    WithRejection(Path(actor_id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<impl IntoResponse> {
    let roles = RoleService::find_by_actor(state, actor_id).await?;
    Ok(ApiSuccess::ok(roles))
}

/// Search roles by character name
#[utoipa::path(
    get,
    path = "/api/roles/search",
    params(RoleSearchParams),
    responses(
        (status = 200, description = "Matching roles", body = Vec<RoleDto>),
        (status = 400, description = "Bad Request", body = ErrorResponse)
    ),
    tag = "Roles"
)]
pub async fn search_roles(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<RoleSearchParams>, AppError>,
) -> AppResult<impl IntoResponse> {
    let roles = RoleService::search(state, &params.character_name).await?;
    Ok(ApiSuccess::ok(roles))
}

/// Cast an actor in a movie
#[utoipa::path(
    post,
    path = "/api/roles",
    request_body = RoleDto,
    responses(
        (status = 201, description = "Role created", body = RoleDto),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 404, description = "Movie or actor not found", body = ErrorResponse)
    ),
    tag = "Roles"
)]
pub async fn create_role(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<RoleDto>, AppError>,
) -> AppResult<impl IntoResponse> {
    let role = RoleService::create(state, payload).await?;
    Ok(ApiSuccess::created(role))
}

/// Update a role
#[utoipa::path(
    put,
    path = "/api/roles/{id}",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    request_body = RoleDto,
    responses(
        (status = 200, description = "Role updated", body = RoleDto),
        (status = 404, description = "Role, movie or actor not found", body = ErrorResponse)
    ),
    tag = "Roles"
)]
pub async fn update_role(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<RoleDto>, AppError>,
) -> AppResult<impl IntoResponse> {
    let role = RoleService::update(state, id, payload).await?;
    Ok(ApiSuccess::ok(role))
}

/// Delete a role
#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    params(
        ("id" = i64, Path, description = "Role ID")
    ),
    responses(
        (status = 204, description = "Role deleted"),
        (status = 404, description = "Role not found", body = ErrorResponse)
    ),
    tag = "Roles"
)]
pub async fn delete_role(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<impl IntoResponse> {
    RoleService::delete(state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
