use tracing::{debug, info};
use validator::Validate;

use super::dto::DirectorDto;
use super::mapper::DirectorMapper;
use super::model::Director;
use crate::common::error::{validate_supplied, AppError, AppResult};
use crate::state::AppState;

pub struct DirectorService;

impl DirectorService {
    pub async fn find_all(state: AppState) -> AppResult<Vec<DirectorDto>> {
        let directors = state.directors.find_all().await?;
        Ok(directors.iter().map(DirectorMapper::to_dto).collect())
    }

    pub async fn find_by_id(state: AppState, id: i64) -> AppResult<DirectorDto> {
        let director = Self::find_existing(&state, id).await?;
        Ok(DirectorMapper::to_dto(&director))
    }

    pub async fn search(state: AppState, name: &str) -> AppResult<Vec<DirectorDto>> {
        debug!(name, "Searching directors by name");
        let directors = state.directors.search_by_name(name).await?;
        Ok(directors.iter().map(DirectorMapper::to_dto).collect())
    }

    pub async fn create(state: AppState, dto: DirectorDto) -> AppResult<DirectorDto> {
        dto.validate()?;
        let new_director = DirectorMapper::to_entity(&dto)
            .ok_or_else(|| AppError::Validation("Director fields are incomplete".to_string()))?;

        let director = state.directors.insert(new_director).await?;
        info!(id = director.id, "Director created");
        Ok(DirectorMapper::to_dto(&director))
    }

    pub async fn update(state: AppState, id: i64, dto: DirectorDto) -> AppResult<DirectorDto> {
        validate_supplied(&dto)?;
        // Every scalar supplied: replace the row. Anything missing: merge.
        let director = match DirectorMapper::to_entity(&dto) {
            Some(replacement) => {
                Self::find_existing(&state, id).await?;
                debug!(id, "Replacing director");
                state.directors.save(replacement.with_id(id)).await?
            }
            None => {
                let mut director = Self::find_existing(&state, id).await?;
                debug!(id, "Merging partial director update");
                DirectorMapper::merge_into(&mut director, &dto);
                state.directors.save(director).await?
            }
        };

        info!(id, "Director updated");
        Ok(DirectorMapper::to_dto(&director))
    }

    pub async fn delete(state: AppState, id: i64) -> AppResult<()> {
        if !state.directors.delete(id).await? {
            return Err(AppError::not_found("Director", id));
        }
        info!(id, "Director deleted");
        Ok(())
    }

    /// Shared with the movie service for `directorId` resolution.
    pub(crate) async fn find_existing(state: &AppState, id: i64) -> AppResult<Director> {
        state
            .directors
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Director", id))
    }
}
