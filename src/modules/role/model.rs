use crate::modules::actor::model::Actor;
use crate::modules::movie::model::MovieRef;

/// An actor's part in a movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i64,
    pub character_name: String,
    pub movie: MovieRef,
    pub actor: Actor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    pub character_name: String,
    pub movie: MovieRef,
    pub actor: Actor,
}

impl NewRole {
    pub fn with_id(self, id: i64) -> Role {
        Role {
            id,
            character_name: self.character_name,
            movie: self.movie,
            actor: self.actor,
        }
    }
}
