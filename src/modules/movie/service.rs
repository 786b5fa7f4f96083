use serde_json::{Map, Value};
use tracing::{debug, info};
use validator::Validate;

use super::dto::MovieDto;
use super::mapper::MovieMapper;
use super::model::{Genre, Movie};
use super::patch::MoviePatch;
use crate::common::error::{validate_supplied, AppError, AppResult};
use crate::modules::director::model::Director;
use crate::modules::director::service::DirectorService;
use crate::state::AppState;

pub struct MovieService;

impl MovieService {
    pub async fn find_all(state: AppState) -> AppResult<Vec<MovieDto>> {
        let movies = state.movies.find_all().await?;
        Ok(to_dtos(&movies))
    }

    pub async fn find_by_id(state: AppState, id: i64) -> AppResult<MovieDto> {
        let movie = Self::find_existing(&state, id).await?;
        Ok(MovieMapper::to_dto(&movie))
    }

    pub async fn find_by_title(state: AppState, title: &str) -> AppResult<Vec<MovieDto>> {
        debug!(title, "Searching movies by title");
        let movies = state.movies.find_by_title(title).await?;
        Ok(to_dtos(&movies))
    }

    pub async fn find_by_genre(state: AppState, genre: Genre) -> AppResult<Vec<MovieDto>> {
        debug!(%genre, "Searching movies by genre");
        let movies = state.movies.find_by_genre(genre).await?;
        Ok(to_dtos(&movies))
    }

    pub async fn find_by_title_and_genre(
        state: AppState,
        title: &str,
        genre: Genre,
    ) -> AppResult<Vec<MovieDto>> {
        debug!(title, %genre, "Searching movies by title and genre");
        let movies = state.movies.find_by_title_and_genre(title, genre).await?;
        Ok(to_dtos(&movies))
    }

    pub async fn create(state: AppState, dto: MovieDto) -> AppResult<MovieDto> {
        dto.validate()?;
        let mut new_movie = MovieMapper::to_entity(&dto)
            .ok_or_else(|| AppError::Validation("Movie fields are incomplete".to_string()))?;
        new_movie.director = resolve_director(&state, dto.director_id).await?;

        let movie = state.movies.insert(new_movie).await?;
        info!(id = movie.id, title = %movie.title, "Movie created");
        Ok(MovieMapper::to_dto(&movie))
    }

    pub async fn update(state: AppState, id: i64, dto: MovieDto) -> AppResult<MovieDto> {
        validate_supplied(&dto)?;
        let movie = match MovieMapper::to_entity(&dto) {
            Some(mut replacement) => {
                Self::find_existing(&state, id).await?;
                debug!(id, "Replacing movie");
                replacement.director = resolve_director(&state, dto.director_id).await?;
                state.movies.save(replacement.with_id(id)).await?
            }
            None => {
                let mut movie = Self::find_existing(&state, id).await?;
                debug!(id, "Merging partial movie update");
                MovieMapper::merge_into(&mut movie, &dto);
                if let Some(director) = resolve_director(&state, dto.director_id).await? {
                    movie.director = Some(director);
                }
                state.movies.save(movie).await?
            }
        };

        info!(id, "Movie updated");
        Ok(MovieMapper::to_dto(&movie))
    }

    /// Applies a raw field map. Nothing is saved unless every field is valid.
    pub async fn patch(
        state: AppState,
        id: i64,
        updates: Map<String, Value>,
    ) -> AppResult<MovieDto> {
        let mut movie = Self::find_existing(&state, id).await?;
        let patch = MoviePatch::try_from(updates)?;
        if patch.is_empty() {
            debug!(id, "Empty movie patch, nothing to save");
            return Ok(MovieMapper::to_dto(&movie));
        }

        let MoviePatch {
            title,
            genre,
            release_date,
            duration_minutes,
            director_id,
        } = patch;

        validate_supplied(&MovieDto {
            title: title.clone(),
            duration_minutes,
            ..MovieDto::default()
        })?;
        let director = resolve_director(&state, director_id).await?;

        if let Some(title) = title {
            movie.title = title;
        }
        if let Some(genre) = genre {
            movie.genre = genre;
        }
        if let Some(release_date) = release_date {
            movie.release_date = release_date;
        }
        if let Some(minutes) = duration_minutes {
            movie.duration_minutes = minutes;
        }
        if let Some(director) = director {
            movie.director = Some(director);
        }

        let movie = state.movies.save(movie).await?;
        info!(id, "Movie patched");
        Ok(MovieMapper::to_dto(&movie))
    }

    pub async fn delete(state: AppState, id: i64) -> AppResult<()> {
        if !state.movies.delete(id).await? {
            return Err(AppError::not_found("Movie", id));
        }
        info!(id, "Movie deleted");
        Ok(())
    }

    /// Shared with the role service for `movieId` resolution.
    pub(crate) async fn find_existing(state: &AppState, id: i64) -> AppResult<Movie> {
        state
            .movies
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie", id))
    }
}

async fn resolve_director(state: &AppState, id: Option<i64>) -> AppResult<Option<Director>> {
    match id {
        Some(id) => Ok(Some(DirectorService::find_existing(state, id).await?)),
        None => Ok(None),
    }
}

fn to_dtos(movies: &[Movie]) -> Vec<MovieDto> {
    movies.iter().map(MovieMapper::to_dto).collect()
}
