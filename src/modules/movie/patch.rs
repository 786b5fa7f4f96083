use serde_json::{Map, Value};
use time::Date;
use tracing::warn;

use super::model::Genre;
use crate::common::date::parse_iso_date;
use crate::common::error::{AppError, AppResult};

/// Fields a movie PATCH body may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieField {
    Title,
    Genre,
    ReleaseDate,
    DurationMinutes,
    DirectorId,
}

impl MovieField {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "title" => Some(MovieField::Title),
            "genre" => Some(MovieField::Genre),
            "releaseDate" => Some(MovieField::ReleaseDate),
            "durationMinutes" => Some(MovieField::DurationMinutes),
            "directorId" => Some(MovieField::DirectorId),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            MovieField::Title => "title",
            MovieField::Genre => "genre",
            MovieField::ReleaseDate => "releaseDate",
            MovieField::DurationMinutes => "durationMinutes",
            MovieField::DirectorId => "directorId",
        }
    }
}

/// A typed movie PATCH: `None` means "leave as is".
///
/// Built from the raw JSON object of a PATCH request. Unknown keys are
/// logged and dropped, `null` values are skipped, and every present value is
/// coerced to its field type up front so a bad value rejects the whole patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub genre: Option<Genre>,
    pub release_date: Option<Date>,
    pub duration_minutes: Option<i32>,
    pub director_id: Option<i64>,
}

impl MoviePatch {
    pub fn is_empty(&self) -> bool {
        *self == MoviePatch::default()
    }
}

impl TryFrom<Map<String, Value>> for MoviePatch {
    type Error = AppError;

    fn try_from(updates: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut patch = MoviePatch::default();

        for (key, value) in updates {
            let Some(field) = MovieField::from_key(&key) else {
                warn!(field = %key, %value, "Unknown field in movie patch");
                continue;
            };
            if value.is_null() {
                continue;
            }

            match field {
                MovieField::Title => patch.title = Some(string_value(field, &value)?),
                MovieField::Genre => patch.genre = Some(genre_value(&value)?),
                MovieField::ReleaseDate => {
                    let raw = string_value(field, &value)?;
                    let date = parse_iso_date(&raw)
                        .map_err(|e| invalid(field, &value, Some(&e.to_string())))?;
                    patch.release_date = Some(date);
                }
                MovieField::DurationMinutes => {
                    let minutes = integer_value(field, &value)?;
                    let minutes =
                        i32::try_from(minutes).map_err(|_| invalid(field, &value, None))?;
                    patch.duration_minutes = Some(minutes);
                }
                MovieField::DirectorId => {
                    patch.director_id = Some(integer_value(field, &value)?);
                }
            }
        }

        Ok(patch)
    }
}

fn invalid(field: MovieField, value: &Value, reason: Option<&str>) -> AppError {
    let message = match reason {
        Some(reason) => format!("Invalid {}: {} ({})", field.key(), value, reason),
        None => format!("Invalid {}: {}", field.key(), value),
    };
    AppError::InvalidArgument(message)
}

fn string_value(field: MovieField, value: &Value) -> AppResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(invalid(field, other, None)),
    }
}

fn genre_value(value: &Value) -> AppResult<Genre> {
    match value {
        Value::String(s) => s.parse(),
        other => other.to_string().parse(),
    }
}

/// JSON integers and numeric strings are both accepted.
fn integer_value(field: MovieField, value: &Value) -> AppResult<i64> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| invalid(field, value, None))
}
