use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};
use time::Date;
use utoipa::ToSchema;

use crate::common::error::AppError;
use crate::modules::director::model::Director;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "movie_genre", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Fantasy,
    Horror,
    Mystery,
    Romance,
    SciFi,
    Thriller,
    Western,
}

impl Genre {
    pub const ALL: [Genre; 14] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Mystery,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
        Genre::Western,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "ACTION",
            Genre::Adventure => "ADVENTURE",
            Genre::Animation => "ANIMATION",
            Genre::Comedy => "COMEDY",
            Genre::Crime => "CRIME",
            Genre::Documentary => "DOCUMENTARY",
            Genre::Drama => "DRAMA",
            Genre::Fantasy => "FANTASY",
            Genre::Horror => "HORROR",
            Genre::Mystery => "MYSTERY",
            Genre::Romance => "ROMANCE",
            Genre::SciFi => "SCI_FI",
            Genre::Thriller => "THRILLER",
            Genre::Western => "WESTERN",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive match against the genre tags.
impl FromStr for Genre {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_uppercase();
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == tag)
            .ok_or_else(|| AppError::InvalidArgument(format!("Invalid genre: {s}")))
    }
}

impl<'de> Deserialize<'de> for Genre {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

/// A persisted movie with its director resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub genre: Genre,
    pub release_date: Date,
    pub duration_minutes: i32,
    pub director: Option<Director>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub genre: Genre,
    pub release_date: Date,
    pub duration_minutes: i32,
    pub director: Option<Director>,
}

impl NewMovie {
    pub fn with_id(self, id: i64) -> Movie {
        Movie {
            id,
            title: self.title,
            genre: self.genre,
            release_date: self.release_date,
            duration_minutes: self.duration_minutes,
            director: self.director,
        }
    }
}

/// The part of a movie a role needs for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRef {
    pub id: i64,
    pub title: String,
}

impl From<&Movie> for MovieRef {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_parsing_ignores_case() {
        assert_eq!("sci_fi".parse::<Genre>().unwrap(), Genre::SciFi);
        assert_eq!("Drama".parse::<Genre>().unwrap(), Genre::Drama);
        assert_eq!(" ACTION ".parse::<Genre>().unwrap(), Genre::Action);
    }

    #[test]
    fn unknown_genre_is_an_invalid_argument() {
        let err = "bogus".parse::<Genre>().unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(ref m) if m == "Invalid genre: bogus"));
    }

    #[test]
    fn genre_wire_form_is_the_tag() {
        assert_eq!(serde_json::to_string(&Genre::SciFi).unwrap(), "\"SCI_FI\"");
        let parsed: Genre = serde_json::from_str("\"crime\"").unwrap();
        assert_eq!(parsed, Genre::Crime);
    }
}
