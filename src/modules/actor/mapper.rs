use super::dto::ActorDto;
use super::model::{Actor, NewActor};

pub struct ActorMapper;

impl ActorMapper {
    pub fn to_dto(actor: &Actor) -> ActorDto {
        ActorDto {
            id: Some(actor.id),
            first_name: Some(actor.first_name.clone()),
            last_name: Some(actor.last_name.clone()),
            birth_date: Some(actor.birth_date),
            nationality: Some(actor.nationality.clone()),
        }
    }

    /// `None` unless every scalar field is present. Never carries an id.
    pub fn to_entity(dto: &ActorDto) -> Option<NewActor> {
        Some(NewActor {
            first_name: dto.first_name.clone()?,
            last_name: dto.last_name.clone()?,
            birth_date: dto.birth_date?,
            nationality: dto.nationality.clone()?,
        })
    }

    /// Overwrites only the fields the DTO supplies.
    pub fn merge_into(actor: &mut Actor, dto: &ActorDto) {
        if let Some(first_name) = &dto.first_name {
            actor.first_name = first_name.clone();
        }
        if let Some(last_name) = &dto.last_name {
            actor.last_name = last_name.clone();
        }
        if let Some(birth_date) = dto.birth_date {
            actor.birth_date = birth_date;
        }
        if let Some(nationality) = &dto.nationality {
            actor.nationality = nationality.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn actor() -> Actor {
        Actor {
            id: 1,
            first_name: "Leonardo".to_string(),
            last_name: "DiCaprio".to_string(),
            birth_date: date!(1974 - 11 - 11),
            nationality: "American".to_string(),
        }
    }

    #[test]
    fn absent_values_map_to_absent() {
        assert_eq!(None::<&Actor>.map(ActorMapper::to_dto), None);
        assert_eq!(None::<&ActorDto>.and_then(ActorMapper::to_entity), None);
    }

    #[test]
    fn to_dto_copies_every_field() {
        let dto = ActorMapper::to_dto(&actor());

        assert_eq!(dto.id, Some(1));
        assert_eq!(dto.first_name.as_deref(), Some("Leonardo"));
        assert_eq!(dto.last_name.as_deref(), Some("DiCaprio"));
        assert_eq!(dto.birth_date, Some(date!(1974 - 11 - 11)));
        assert_eq!(dto.nationality.as_deref(), Some("American"));
    }

    #[test]
    fn to_entity_ignores_id() {
        let mut dto = ActorMapper::to_dto(&actor());
        dto.id = Some(42);

        let new_actor = ActorMapper::to_entity(&dto).unwrap();
        assert_eq!(new_actor.with_id(7).id, 7);
    }

    #[test]
    fn to_entity_needs_every_field() {
        let dto = ActorDto {
            nationality: None,
            ..ActorMapper::to_dto(&actor())
        };

        assert!(ActorMapper::to_entity(&dto).is_none());
    }

    #[test]
    fn merge_overwrites_only_supplied_fields() {
        let mut target = actor();
        let dto = ActorDto {
            last_name: Some("Hanks".to_string()),
            ..Default::default()
        };

        ActorMapper::merge_into(&mut target, &dto);

        assert_eq!(target.last_name, "Hanks");
        assert_eq!(target.first_name, "Leonardo");
        assert_eq!(target.nationality, "American");
    }

    #[test]
    fn merge_with_empty_dto_is_a_no_op() {
        let mut target = actor();
        ActorMapper::merge_into(&mut target, &ActorDto::default());
        assert_eq!(target, actor());
    }
}
