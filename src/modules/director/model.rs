use sqlx::FromRow;
use time::Date;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Director {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Date,
    pub nationality: String,
}

impl Director {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDirector {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Date,
    pub nationality: String,
}

impl NewDirector {
    pub fn with_id(self, id: i64) -> Director {
        Director {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            nationality: self.nationality,
        }
    }
}
