use super::dto::{ActorDto, ActorListParams, ActorSearchParams};
use super::model::{ActorOrder, ActorSort};
use super::service::ActorService;
use crate::common::error::{AppError, AppResult};
use crate::common::pagination::{Direction, Page, PageRequest};
use crate::common::response::{ApiSuccess, ErrorResponse};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

/// List actors, one page at a time
#[utoipa::path(
    get,
    path = "/api/actors",
    params(ActorListParams),
    responses(
        (status = 200, description = "Page of actors", body = Page<ActorDto>),
        (status = 400, description = "Bad Request", body = ErrorResponse)
    ),
    tag = "Actors"
)]
pub async fn list_actors(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<ActorListParams>, AppError>,
) -> AppResult<impl IntoResponse> {
    params.validate()?;
    let order = ActorOrder {
        field: params.sort.parse::<ActorSort>()?,
        direction: Direction::from_optional_str(params.direction.as_deref()),
    };

    let page = ActorService::list(state, PageRequest::new(params.page, params.size), order).await?;
    Ok(ApiSuccess::ok(page))
}

/// Get actor by ID
#[utoipa::path(
    get,
    path = "/api/actors/{id}",
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    responses(
        (status = 200, description = "Actor details", body = ActorDto),
        (status = 404, description = "Actor not found", body = ErrorResponse)
    ),
    tag = "Actors"
)]
pub async fn get_actor(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<impl IntoResponse> {
    let actor = ActorService::find_by_id(state, id).await?;
    Ok(ApiSuccess::ok(actor))
}

/// Search actors by first or last name
#[utoipa::path(
    get,
    path = "/api/actors/search",
    params(ActorSearchParams),
    responses(
        (status = 200, description = "Matching actors", body = Page<ActorDto>),
        (status = 400, description = "Bad Request", body = ErrorResponse)
    ),
    tag = "Actors"
)]
pub async fn search_actors(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<ActorSearchParams>, AppError>,
) -> AppResult<impl IntoResponse> {
    params.validate()?;
    let page =
        ActorService::search(state, &params.name, PageRequest::new(params.page, params.size)).await?;
    Ok(ApiSuccess::ok(page))
}

/// Create a new actor
#[utoipa::path(
    post,
    path = "/api/actors",
    request_body = ActorDto,
    responses(
        (status = 201, description = "Actor created", body = ActorDto),
        (status = 400, description = "Bad Request", body = ErrorResponse)
    ),
    tag = "Actors"
)]
pub async fn create_actor(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<ActorDto>, AppError>,
) -> AppResult<impl IntoResponse> {
    let actor = ActorService::create(state, payload).await?;
    Ok(ApiSuccess::created(actor))
}

/// Update an actor (full replacement when every field is given, merge otherwise)
#[utoipa::path(
    put,
    path = "/api/actors/{id}",
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    request_body = ActorDto,
    responses(
        (status = 200, description = "Actor updated", body = ActorDto),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 404, description = "Actor not found", body = ErrorResponse)
    ),
    tag = "Actors"
)]
pub async fn update_actor(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<ActorDto>, AppError>,
) -> AppResult<impl IntoResponse> {
    let actor = ActorService::update(state, id, payload).await?;
    Ok(ApiSuccess::ok(actor))
}

/// Delete an actor
#[utoipa::path(
    delete,
    path = "/api/actors/{id}",
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    responses(
        (status = 204, description = "Actor deleted"),
        (status = 404, description = "Actor not found", body = ErrorResponse)
    ),
    tag = "Actors"
)]
pub async fn delete_actor(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<impl IntoResponse> {
    ActorService::delete(state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
