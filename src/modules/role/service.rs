use tracing::{debug, info};
use validator::Validate;

use super::dto::RoleDto;
use super::mapper::RoleMapper;
use super::model::{NewRole, Role};
use crate::common::error::{validate_supplied, AppError, AppResult};
use crate::modules::actor::service::ActorService;
use crate::modules::movie::model::MovieRef;
use crate::modules::movie::service::MovieService;
use crate::state::AppState;

pub struct RoleService;

impl RoleService {
    pub async fn find_all(state: AppState) -> AppResult<Vec<RoleDto>> {
        let roles = state.roles.find_all().await?;
        Ok(to_dtos(&roles))
    }

    pub async fn find_by_id(state: AppState, id: i64) -> AppResult<RoleDto> {
        let role = Self::find_existing(&state, id).await?;
        Ok(RoleMapper::to_dto(&role))
    }

    pub async fn find_by_movie(state: AppState, movie_id: i64) -> AppResult<Vec<RoleDto>> {
        debug!(movie_id, "Fetching roles of movie");
        let roles = state.roles.find_by_movie(movie_id).await?;
        Ok(to_dtos(&roles))
    }

    pub async fn find_by_actor(state: AppState, actor_id: i64) -> AppResult<Vec<RoleDto>> {
        debug!(actor_id, "Fetching roles of actor");
        let roles = state.roles.find_by_actor(actor_id).await?;
        Ok(to_dtos(&roles))
    }

    pub async fn search(state: AppState, character_name: &str) -> AppResult<Vec<RoleDto>> {
        debug!(character_name, "Searching roles by character name");
        let roles = state.roles.search_by_character_name(character_name).await?;
        Ok(to_dtos(&roles))
    }

    pub async fn create(state: AppState, dto: RoleDto) -> AppResult<RoleDto> {
        dto.validate()?;
        let (Some(character_name), Some(movie_id), Some(actor_id)) =
            (dto.character_name, dto.movie_id, dto.actor_id)
        else {
            return Err(AppError::Validation("Role fields are incomplete".to_string()));
        };

        let movie = MovieService::find_existing(&state, movie_id).await?;
        let actor = ActorService::find_existing(&state, actor_id).await?;

        let role = state
            .roles
            .insert(NewRole {
                character_name,
                movie: MovieRef::from(&movie),
                actor,
            })
            .await?;

        info!(id = role.id, movie_id, actor_id, "Role created");
        Ok(RoleMapper::to_dto(&role))
    }

    pub async fn update(state: AppState, id: i64, dto: RoleDto) -> AppResult<RoleDto> {
        validate_supplied(&dto)?;
        let mut role = Self::find_existing(&state, id).await?;
        RoleMapper::merge_into(&mut role, &dto);

        if let Some(movie_id) = dto.movie_id {
            let movie = MovieService::find_existing(&state, movie_id).await?;
            role.movie = MovieRef::from(&movie);
        }
        if let Some(actor_id) = dto.actor_id {
            role.actor = ActorService::find_existing(&state, actor_id).await?;
        }

        let role = state.roles.save(role).await?;
        info!(id, "Role updated");
        Ok(RoleMapper::to_dto(&role))
    }

    pub async fn delete(state: AppState, id: i64) -> AppResult<()> {
        if !state.roles.delete(id).await? {
            return Err(AppError::not_found("Role", id));
        }
        info!(id, "Role deleted");
        Ok(())
    }

    async fn find_existing(state: &AppState, id: i64) -> AppResult<Role> {
        state
            .roles
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Role", id))
    }
}

fn to_dtos(roles: &[Role]) -> Vec<RoleDto> {
    roles.iter().map(RoleMapper::to_dto).collect()
}
