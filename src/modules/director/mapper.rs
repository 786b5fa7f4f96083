use super::dto::DirectorDto;
use super::model::{Director, NewDirector};

pub struct DirectorMapper;

impl DirectorMapper {
    pub fn to_dto(director: &Director) -> DirectorDto {
        DirectorDto {
            id: Some(director.id),
            first_name: Some(director.first_name.clone()),
            last_name: Some(director.last_name.clone()),
            birth_date: Some(director.birth_date),
            nationality: Some(director.nationality.clone()),
        }
    }

    pub fn to_entity(dto: &DirectorDto) -> Option<NewDirector> {
        Some(NewDirector {
            first_name: dto.first_name.clone()?,
            last_name: dto.last_name.clone()?,
            birth_date: dto.birth_date?,
            nationality: dto.nationality.clone()?,
        })
    }

    pub fn merge_into(director: &mut Director, dto: &DirectorDto) {
        if let Some(first_name) = &dto.first_name {
            director.first_name = first_name.clone();
        }
        if let Some(last_name) = &dto.last_name {
            director.last_name = last_name.clone();
        }
        if let Some(birth_date) = dto.birth_date {
            director.birth_date = birth_date;
        }
        if let Some(nationality) = &dto.nationality {
            director.nationality = nationality.clone();
        }
    }
}
