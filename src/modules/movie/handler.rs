use super::dto::{MovieDto, MovieSearchParams};
use super::model::Genre;
use super::service::MovieService;
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
use serde_json::{Map, Value};

/// List all movies
#[utoipa::path(
    get,
    path = "/api/movies",
    responses(
        (status = 200, description = "List of movies", body = Vec<MovieDto>)
    ),
    tag = "Movies"
)]
pub async fn list_movies(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = MovieService::find_all(state).await?;
    Ok(ApiSuccess::ok(movies))
}

/// Get movie by ID
#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie details", body = MovieDto),
        (status = 404, description = "Movie not found", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieService::find_by_id(state, id).await?;
    Ok(ApiSuccess::ok(movie))
}

/// Search movies by title or genre
///
/// `title` wins when both are given. With neither, every movie is returned.
#[utoipa::path(
    get,
    path = "/api/movies/search",
    params(MovieSearchParams),
    responses(
        (status = 200, description = "Matching movies", body = Vec<MovieDto>),
        (status = 400, description = "Invalid genre", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn search_movies(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<MovieSearchParams>, AppError>,
) -> AppResult<impl IntoResponse> {
    let title = params.title.filter(|t| !t.trim().is_empty());
    let genre = params.genre.filter(|g| !g.trim().is_empty());

    let movies = match (title, genre) {
        (Some(title), _) => MovieService::find_by_title(state, &title).await?,
        (None, Some(genre)) => {
            let genre: Genre = genre.parse()?;
            MovieService::find_by_genre(state, genre).await?
        }
        (None, None) => MovieService::find_all(state).await?,
    };
    Ok(ApiSuccess::ok(movies))
}

/// Create a new movie
#[utoipa::path(
    post,
    path = "/api/movies",
    request_body = MovieDto,
    responses(
        (status = 201, description = "Movie created", body = MovieDto),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 404, description = "Director not found", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<MovieDto>, AppError>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieService::create(state, payload).await?;
    Ok(ApiSuccess::created(movie))
}

/// Update a movie
///
/// A body carrying every required field replaces the movie, anything less is merged.
#[utoipa::path(
    put,
    path = "/api/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    request_body = MovieDto,
    responses(
        (status = 200, description = "Movie updated", body = MovieDto),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 404, description = "Movie or director not found", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<MovieDto>, AppError>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieService::update(state, id, payload).await?;
    Ok(ApiSuccess::ok(movie))
}

/// Patch individual movie fields
#[utoipa::path(
    patch,
    path = "/api/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    request_body(
        content = Object,
        description = "Field name to new value, e.g. {\"title\": \"Heat\", \"durationMinutes\": 170}"
    ),
    responses(
        (status = 200, description = "Movie patched", body = MovieDto),
        (status = 400, description = "Invalid field value", body = ErrorResponse),
        (status = 404, description = "Movie or director not found", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn patch_movie(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Json(updates), _): WithRejection<Json<Map<String, Value>>, AppError>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieService::patch(state, id, updates).await?;
    Ok(ApiSuccess::ok(movie))
}

/// Delete a movie together with its roles
#[utoipa::path(
    delete,
    path = "/api/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 404, description = "Movie not found", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<impl IntoResponse> {
    MovieService::delete(state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
