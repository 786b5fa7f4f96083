use std::str::FromStr;

use sqlx::FromRow;
use time::Date;

use crate::common::error::AppError;
use crate::common::pagination::Direction;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Actor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Date,
    pub nationality: String,
}

impl Actor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An actor that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActor {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Date,
    pub nationality: String,
}

impl NewActor {
    pub fn with_id(self, id: i64) -> Actor {
        Actor {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            nationality: self.nationality,
        }
    }
}

/// Columns an actor listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActorSort {
    #[default]
    Id,
    FirstName,
    LastName,
    BirthDate,
    Nationality,
}

impl ActorSort {
    pub fn column(&self) -> &'static str {
        match self {
            ActorSort::Id => "id",
            ActorSort::FirstName => "first_name",
            ActorSort::LastName => "last_name",
            ActorSort::BirthDate => "birth_date",
            ActorSort::Nationality => "nationality",
        }
    }
}

impl FromStr for ActorSort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(ActorSort::Id),
            "firstName" | "first_name" => Ok(ActorSort::FirstName),
            "lastName" | "last_name" => Ok(ActorSort::LastName),
            "birthDate" | "birth_date" => Ok(ActorSort::BirthDate),
            "nationality" => Ok(ActorSort::Nationality),
            other => Err(AppError::InvalidArgument(format!("Invalid sort field: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActorOrder {
    pub field: ActorSort,
    pub direction: Direction,
}
