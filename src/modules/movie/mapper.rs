use super::dto::MovieDto;
use super::model::{Movie, NewMovie};

pub struct MovieMapper;

impl MovieMapper {
    pub fn to_dto(movie: &Movie) -> MovieDto {
        MovieDto {
            id: Some(movie.id),
            title: Some(movie.title.clone()),
            genre: Some(movie.genre),
            release_date: Some(movie.release_date),
            duration_minutes: Some(movie.duration_minutes),
            director_id: movie.director.as_ref().map(|d| d.id),
            director_name: movie.director.as_ref().map(|d| d.full_name()),
        }
    }

    /// Scalars only: the director is left unset for the caller to resolve.
    pub fn to_entity(dto: &MovieDto) -> Option<NewMovie> {
        Some(NewMovie {
            title: dto.title.clone()?,
            genre: dto.genre?,
            release_date: dto.release_date?,
            duration_minutes: dto.duration_minutes?,
            director: None,
        })
    }

    pub fn merge_into(movie: &mut Movie, dto: &MovieDto) {
        if let Some(title) = &dto.title {
            movie.title = title.clone();
        }
        if let Some(genre) = dto.genre {
            movie.genre = genre;
        }
        if let Some(release_date) = dto.release_date {
            movie.release_date = release_date;
        }
        if let Some(duration_minutes) = dto.duration_minutes {
            movie.duration_minutes = duration_minutes;
        }
    }
}
