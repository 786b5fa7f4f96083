use tracing::{debug, info};
use validator::Validate;

use super::dto::ActorDto;
use super::mapper::ActorMapper;
use super::model::{Actor, ActorOrder};
use crate::common::error::{validate_supplied, AppError, AppResult};
use crate::common::pagination::{Page, PageRequest};
use crate::state::AppState;

pub struct ActorService;

impl ActorService {
    pub async fn list(
        state: AppState,
        request: PageRequest,
        order: ActorOrder,
    ) -> AppResult<Page<ActorDto>> {
        debug!(page = request.page, size = request.size, ?order, "Listing actors");
        let page = state.actors.find_page(request, order).await?;
        Ok(page.map(|actor| ActorMapper::to_dto(&actor)))
    }

    pub async fn find_by_id(state: AppState, id: i64) -> AppResult<ActorDto> {
        let actor = Self::find_existing(&state, id).await?;
        Ok(ActorMapper::to_dto(&actor))
    }

    pub async fn search(state: AppState, name: &str, request: PageRequest) -> AppResult<Page<ActorDto>> {
        debug!(name, "Searching actors by name");
        let page = state.actors.search_by_name(name, request).await?;
        Ok(page.map(|actor| ActorMapper::to_dto(&actor)))
    }

    pub async fn create(state: AppState, dto: ActorDto) -> AppResult<ActorDto> {
        dto.validate()?;
        let new_actor = ActorMapper::to_entity(&dto)
            .ok_or_else(|| AppError::Validation("Actor fields are incomplete".to_string()))?;

        let actor = state.actors.insert(new_actor).await?;
        info!(id = actor.id, "Actor created");
        Ok(ActorMapper::to_dto(&actor))
    }

    pub async fn update(state: AppState, id: i64, dto: ActorDto) -> AppResult<ActorDto> {
        validate_supplied(&dto)?;
        // Every scalar supplied: replace the row. Anything missing: merge.
        let actor = match ActorMapper::to_entity(&dto) {
            Some(replacement) => {
                Self::find_existing(&state, id).await?;
                debug!(id, "Replacing actor");
                state.actors.save(replacement.with_id(id)).await?
            }
            None => {
                let mut actor = Self::find_existing(&state, id).await?;
                debug!(id, "Merging partial actor update");
                ActorMapper::merge_into(&mut actor, &dto);
                state.actors.save(actor).await?
            }
        };

        info!(id, "Actor updated");
        Ok(ActorMapper::to_dto(&actor))
    }

    pub async fn delete(state: AppState, id: i64) -> AppResult<()> {
        if !state.actors.delete(id).await? {
            return Err(AppError::not_found("Actor", id));
        }
        info!(id, "Actor deleted");
        Ok(())
    }

    pub(crate) async fn find_existing(state: &AppState, id: i64) -> AppResult<Actor> {
        state
            .actors
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Actor", id))
    }
}
