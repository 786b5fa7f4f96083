use super::dto::RoleDto;
use super::model::Role;

pub struct RoleMapper;

impl RoleMapper {
    pub fn to_dto(role: &Role) -> RoleDto {
        RoleDto {
            id: Some(role.id),
            character_name: Some(role.character_name.clone()),
            movie_id: Some(role.movie.id),
            movie_title: Some(role.movie.title.clone()),
            actor_id: Some(role.actor.id),
            actor_name: Some(role.actor.full_name()),
        }
    }

    /// Only the character name; references are resolved by the service.
    pub fn merge_into(role: &mut Role, dto: &RoleDto) {
        if let Some(character_name) = &dto.character_name {
            role.character_name = character_name.clone();
        }
    }
}
