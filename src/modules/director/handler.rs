use super::dto::{DirectorDto, DirectorSearchParams};
use super::service::DirectorService;
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

/// List all directors
#[utoipa::path(
    get,
    path = "/api/directors",
    responses(
        (status = 200, description = "List of directors", body = Vec<DirectorDto>)
    ),
    tag = "Directors"
)]
pub async fn list_directors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let directors = DirectorService::find_all(state).await?;
    Ok(ApiSuccess::ok(directors))
}

/// Get director by ID
#[utoipa::path(
    get,
    path = "/api/directors/{id}",
    params(
        ("id" = i64, Path, description = "Director ID")
    ),
    responses(
        (status = 200, description = "Director details", body = DirectorDto),
        (status = 404, description = "Director not found", body = ErrorResponse)
    ),
    tag = "Directors"
)]
pub async fn get_director(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<impl IntoResponse> {
    let director = DirectorService::find_by_id(state, id).await?;
    Ok(ApiSuccess::ok(director))
}

/// Search directors by first or last name
#[utoipa::path(
    get,
    path = "/api/directors/search",
    params(DirectorSearchParams),
    responses(
        (status = 200, description = "Matching directors", body = Vec<DirectorDto>),
        (status = 400, description = "Bad Request", body = ErrorResponse)
    ),
    tag = "Directors"
)]
pub async fn search_directors(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<DirectorSearchParams>, AppError>,
) -> AppResult<impl IntoResponse> {
    let directors = DirectorService::search(state, &params.name).await?;
    Ok(ApiSuccess::ok(directors))
}

/// Create a new director
#[utoipa::path(
    post,
    path = "/api/directors",
    request_body = DirectorDto,
    responses(
        (status = 201, description = "Director created", body = DirectorDto),
        (status = 400, description = "Bad Request", body = ErrorResponse)
    ),
    tag = "Directors"
)]
pub async fn create_director(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<DirectorDto>, AppError>,
) -> AppResult<impl IntoResponse> {
    let director = DirectorService::create(state, payload).await?;
    Ok(ApiSuccess::created(director))
}

/// Update a director
#[utoipa::path(
    put,
    path = "/api/directors/{id}",
    params(
        ("id" = i64, Path, description = "Director ID")
    ),
    request_body = DirectorDto,
    responses(
        (status = 200, description = "Director updated", body = DirectorDto),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 404, description = "Director not found", body = ErrorResponse)
    ),
    tag = "Directors"
)]
pub async fn update_director(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<DirectorDto>, AppError>,
) -> AppResult<impl IntoResponse> {
    let director = DirectorService::update(state, id, payload).await?;
    Ok(ApiSuccess::ok(director))
}

/// Delete a director together with their movies
#[utoipa::path(
    delete,
    path = "/api/directors/{id}",
    params(
        ("id" = i64, Path, description = "Director ID")
    ),
    responses(
        (status = 204, description = "Director deleted"),
        (status = 404, description = "Director not found", body = ErrorResponse)
    ),
    tag = "Directors"
)]
pub async fn delete_director(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<impl IntoResponse> {
    DirectorService::delete(state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
