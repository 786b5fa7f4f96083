use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use time::Date;
use tokio::sync::RwLock;

use crate::common::pagination::{Direction, Page, PageRequest};
use crate::modules::actor::model::{Actor, ActorOrder, ActorSort, NewActor};
use crate::modules::actor::repository::ActorRepository;
use crate::modules::director::model::{Director, NewDirector};
use crate::modules::director::repository::DirectorRepository;
use crate::modules::movie::model::{Genre, Movie, MovieRef, NewMovie};
use crate::modules::movie::repository::MovieRepository;
use crate::modules::role::model::{NewRole, Role};
use crate::modules::role::repository::RoleRepository;

/// In-process store with the same referential rules as the SQL schema.
///
/// Used when no `DATABASE_URL` is configured and by the integration tests.
/// Foreign keys are checked on every write and deletes cascade the way the
/// `ON DELETE CASCADE` constraints do.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Default)]
struct Tables {
    actors: BTreeMap<i64, Actor>,
    directors: BTreeMap<i64, Director>,
    movies: BTreeMap<i64, MovieRecord>,
    roles: BTreeMap<i64, RoleRecord>,
    last_actor_id: i64,
    last_director_id: i64,
    last_movie_id: i64,
    last_role_id: i64,
}

#[derive(Clone)]
struct MovieRecord {
    id: i64,
    title: String,
    genre: Genre,
    release_date: Date,
    duration_minutes: i32,
    director_id: Option<i64>,
}

impl MovieRecord {
    fn from_movie(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            genre: movie.genre,
            release_date: movie.release_date,
            duration_minutes: movie.duration_minutes,
            director_id: movie.director.as_ref().map(|d| d.id),
        }
    }
}

#[derive(Clone)]
struct RoleRecord {
    id: i64,
    character_name: String,
    movie_id: i64,
    actor_id: i64,
}

impl Tables {
    fn movie(&self, record: &MovieRecord) -> Movie {
        Movie {
            id: record.id,
            title: record.title.clone(),
            genre: record.genre,
            release_date: record.release_date,
            duration_minutes: record.duration_minutes,
            director: record
                .director_id
                .and_then(|id| self.directors.get(&id))
                .cloned(),
        }
    }

    fn movies_where(&self, predicate: impl Fn(&MovieRecord) -> bool) -> Vec<Movie> {
        self.movies
            .values()
            .filter(|record| predicate(*record))
            .map(|record| self.movie(record))
            .collect()
    }

    fn role(&self, record: &RoleRecord) -> Option<Role> {
        let movie = self.movies.get(&record.movie_id)?;
        let actor = self.actors.get(&record.actor_id)?;
        Some(Role {
            id: record.id,
            character_name: record.character_name.clone(),
            movie: MovieRef {
                id: movie.id,
                title: movie.title.clone(),
            },
            actor: actor.clone(),
        })
    }

    fn roles_where(&self, predicate: impl Fn(&RoleRecord) -> bool) -> Vec<Role> {
        self.roles
            .values()
            .filter(|record| predicate(*record))
            .filter_map(|record| self.role(record))
            .collect()
    }

    fn check_director(&self, director_id: Option<i64>) -> Result<()> {
        match director_id {
            Some(id) if !self.directors.contains_key(&id) => {
                Err(anyhow!("movies.director_id references missing director {}", id))
            }
            _ => Ok(()),
        }
    }

    fn check_role_refs(&self, movie_id: i64, actor_id: i64) -> Result<()> {
        if !self.movies.contains_key(&movie_id) {
            return Err(anyhow!("roles.movie_id references missing movie {}", movie_id));
        }
        if !self.actors.contains_key(&actor_id) {
            return Err(anyhow!("roles.actor_id references missing actor {}", actor_id));
        }
        Ok(())
    }

    fn remove_movie(&mut self, id: i64) -> bool {
        let removed = self.movies.remove(&id).is_some();
        if removed {
            self.roles.retain(|_, role| role.movie_id != id);
        }
        removed
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn compare_actors(a: &Actor, b: &Actor, order: ActorOrder) -> Ordering {
    let by_field = match order.field {
        ActorSort::Id => a.id.cmp(&b.id),
        ActorSort::FirstName => a.first_name.cmp(&b.first_name),
        ActorSort::LastName => a.last_name.cmp(&b.last_name),
        ActorSort::BirthDate => a.birth_date.cmp(&b.birth_date),
        ActorSort::Nationality => a.nationality.cmp(&b.nationality),
    };
    let by_field = match order.direction {
        Direction::Asc => by_field,
        Direction::Desc => by_field.reverse(),
    };
    by_field.then(a.id.cmp(&b.id))
}

fn page_of<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);
    let content = items.into_iter().skip(offset).take(limit).collect();
    Page::new(content, request, total)
}

#[async_trait]
impl ActorRepository for MemoryStore {
    async fn find_page(&self, request: PageRequest, order: ActorOrder) -> Result<Page<Actor>> {
        let tables = self.tables.read().await;
        let mut actors: Vec<Actor> = tables.actors.values().cloned().collect();
        actors.sort_by(|a, b| compare_actors(a, b, order));
        Ok(page_of(actors, request))
    }

    async fn search_by_name(&self, name: &str, request: PageRequest) -> Result<Page<Actor>> {
        let tables = self.tables.read().await;
        let actors = tables
            .actors
            .values()
            .filter(|a| contains_ignore_case(&a.first_name, name) || contains_ignore_case(&a.last_name, name))
            .cloned()
            .collect();
        Ok(page_of(actors, request))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Actor>> {
        Ok(self.tables.read().await.actors.get(&id).cloned())
    }

    async fn insert(&self, actor: NewActor) -> Result<Actor> {
        let mut tables = self.tables.write().await;
        tables.last_actor_id += 1;
        let actor = actor.with_id(tables.last_actor_id);
        tables.actors.insert(actor.id, actor.clone());
        Ok(actor)
    }

    async fn save(&self, actor: Actor) -> Result<Actor> {
        let mut tables = self.tables.write().await;
        match tables.actors.get_mut(&actor.id) {
            Some(slot) => {
                *slot = actor.clone();
                Ok(actor)
            }
            None => Err(anyhow!("Actor {} disappeared during update", actor.id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut tables = self.tables.write().await;
        let removed = tables.actors.remove(&id).is_some();
        if removed {
            tables.roles.retain(|_, role| role.actor_id != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl DirectorRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Director>> {
        Ok(self.tables.read().await.directors.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Director>> {
        Ok(self.tables.read().await.directors.get(&id).cloned())
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Director>> {
        let tables = self.tables.read().await;
        Ok(tables
            .directors
            .values()
            .filter(|d| contains_ignore_case(&d.first_name, name) || contains_ignore_case(&d.last_name, name))
            .cloned()
            .collect())
    }

    async fn insert(&self, director: NewDirector) -> Result<Director> {
        let mut tables = self.tables.write().await;
        tables.last_director_id += 1;
        let director = director.with_id(tables.last_director_id);
        tables.directors.insert(director.id, director.clone());
        Ok(director)
    }

    async fn save(&self, director: Director) -> Result<Director> {
        let mut tables = self.tables.write().await;
        match tables.directors.get_mut(&director.id) {
            Some(slot) => {
                *slot = director.clone();
                Ok(director)
            }
            None => Err(anyhow!("Director {} disappeared during update", director.id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut tables = self.tables.write().await;
        if tables.directors.remove(&id).is_none() {
            return Ok(false);
        }

        let movie_ids: Vec<i64> = tables
            .movies
            .values()
            .filter(|m| m.director_id == Some(id))
            .map(|m| m.id)
            .collect();
        for movie_id in movie_ids {
            tables.remove_movie(movie_id);
        }
        Ok(true)
    }
}

#[async_trait]
impl MovieRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Movie>> {
        Ok(self.tables.read().await.movies_where(|_| true))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>> {
        let tables = self.tables.read().await;
        Ok(tables.movies.get(&id).map(|record| tables.movie(record)))
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<Movie>> {
        Ok(self
            .tables
            .read()
            .await
            .movies_where(|m| contains_ignore_case(&m.title, title)))
    }

    async fn find_by_genre(&self, genre: Genre) -> Result<Vec<Movie>> {
        Ok(self.tables.read().await.movies_where(|m| m.genre == genre))
    }

    async fn find_by_title_and_genre(&self, title: &str, genre: Genre) -> Result<Vec<Movie>> {
        Ok(self
            .tables
            .read()
            .await
            .movies_where(|m| m.genre == genre && contains_ignore_case(&m.title, title)))
    }

    async fn insert(&self, movie: NewMovie) -> Result<Movie> {
        let mut tables = self.tables.write().await;
        tables.check_director(movie.director.as_ref().map(|d| d.id))?;

        tables.last_movie_id += 1;
        let movie = movie.with_id(tables.last_movie_id);
        tables.movies.insert(movie.id, MovieRecord::from_movie(&movie));
        Ok(movie)
    }

    async fn save(&self, movie: Movie) -> Result<Movie> {
        let mut tables = self.tables.write().await;
        if !tables.movies.contains_key(&movie.id) {
            return Err(anyhow!("Movie {} disappeared during update", movie.id));
        }
        tables.check_director(movie.director.as_ref().map(|d| d.id))?;

        tables.movies.insert(movie.id, MovieRecord::from_movie(&movie));
        Ok(movie)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.tables.write().await.remove_movie(id))
    }
}

#[async_trait]
impl RoleRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Role>> {
        Ok(self.tables.read().await.roles_where(|_| true))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Role>> {
        let tables = self.tables.read().await;
        Ok(tables.roles.get(&id).and_then(|record| tables.role(record)))
    }

    async fn find_by_movie(&self, movie_id: i64) -> Result<Vec<Role>> {
        Ok(self.tables.read().await.roles_where(|r| r.movie_id == movie_id))
    }

    async fn find_by_actor(&self, actor_id: i64) -> Result<Vec<Role>> {
        Ok(self.tables.read().await.roles_where(|r| r.actor_id == actor_id))
    }

    async fn search_by_character_name(&self, name: &str) -> Result<Vec<Role>> {
        Ok(self
            .tables
            .read()
            .await
            .roles_where(|r| contains_ignore_case(&r.character_name, name)))
    }

    async fn insert(&self, role: NewRole) -> Result<Role> {
        let mut tables = self.tables.write().await;
        tables.check_role_refs(role.movie.id, role.actor.id)?;

        tables.last_role_id += 1;
        let role = role.with_id(tables.last_role_id);
        tables.roles.insert(
            role.id,
            RoleRecord {
                id: role.id,
                character_name: role.character_name.clone(),
                movie_id: role.movie.id,
                actor_id: role.actor.id,
            },
        );
        Ok(role)
    }

    async fn save(&self, role: Role) -> Result<Role> {
        let mut tables = self.tables.write().await;
        let Some(record) = tables.roles.get(&role.id).cloned() else {
            return Err(anyhow!("Role {} disappeared during update", role.id));
        };
        tables.check_role_refs(role.movie.id, role.actor.id)?;

        tables.roles.insert(
            record.id,
            RoleRecord {
                character_name: role.character_name.clone(),
                movie_id: role.movie.id,
                actor_id: role.actor.id,
                ..record
            },
        );
        Ok(role)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.tables.write().await.roles.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn new_director() -> NewDirector {
        NewDirector {
            first_name: "Christopher".to_string(),
            last_name: "Nolan".to_string(),
            birth_date: date!(1970 - 07 - 30),
            nationality: "British-American".to_string(),
        }
    }

    fn new_actor(first_name: &str, last_name: &str) -> NewActor {
        NewActor {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            birth_date: date!(1974 - 01 - 30),
            nationality: "British".to_string(),
        }
    }

    fn new_movie(title: &str, director: Option<Director>) -> NewMovie {
        NewMovie {
            title: title.to_string(),
            genre: Genre::Action,
            release_date: date!(2008 - 07 - 18),
            duration_minutes: 152,
            director,
        }
    }

    async fn cast(store: &MemoryStore, movie: &Movie, actor: &Actor) -> Role {
        RoleRepository::insert(
            store,
            NewRole {
                character_name: "Bruce Wayne / Batman".to_string(),
                movie: MovieRef::from(movie),
                actor: actor.clone(),
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn ids_are_assigned_in_sequence() {
        let store = MemoryStore::new();
        let first = ActorRepository::insert(&store, new_actor("Christian", "Bale")).await.unwrap();
        let second = ActorRepository::insert(&store, new_actor("Tom", "Hardy")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn deleting_a_director_cascades_to_movies_and_roles() {
        let store = MemoryStore::new();
        let director = DirectorRepository::insert(&store, new_director()).await.unwrap();
        let actor = ActorRepository::insert(&store, new_actor("Christian", "Bale")).await.unwrap();
        let movie = MovieRepository::insert(&store, new_movie("The Dark Knight", Some(director.clone())))
            .await
            .unwrap();
        cast(&store, &movie, &actor).await;

        assert!(DirectorRepository::delete(&store, director.id).await.unwrap());

        assert!(MovieRepository::find_all(&store).await.unwrap().is_empty());
        assert!(RoleRepository::find_all(&store).await.unwrap().is_empty());
        assert!(ActorRepository::find_by_id(&store, actor.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn deleting_an_actor_removes_their_roles() {
        let store = MemoryStore::new();
        let actor = ActorRepository::insert(&store, new_actor("Christian", "Bale")).await.unwrap();
        let movie = MovieRepository::insert(&store, new_movie("The Prestige", None)).await.unwrap();
        cast(&store, &movie, &actor).await;

        assert!(ActorRepository::delete(&store, actor.id).await.unwrap());
        assert!(RoleRepository::find_by_movie(&store, movie.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn dangling_director_reference_is_rejected() {
        let store = MemoryStore::new();
        let ghost = new_director().with_id(42);

        assert!(MovieRepository::insert(&store, new_movie("Memento", Some(ghost))).await.is_err());
        assert!(MovieRepository::find_all(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn movie_reads_follow_director_changes() {
        let store = MemoryStore::new();
        let director = DirectorRepository::insert(&store, new_director()).await.unwrap();
        let movie = MovieRepository::insert(&store, new_movie("Inception", Some(director.clone())))
            .await
            .unwrap();

        let renamed = Director {
            first_name: "Chris".to_string(),
            ..director
        };
        DirectorRepository::save(&store, renamed).await.unwrap();

        let reloaded = MovieRepository::find_by_id(&store, movie.id).await.unwrap().unwrap();
        assert_eq!(reloaded.director.unwrap().first_name, "Chris");
    }

    #[tokio::test]
    async fn actor_sort_breaks_ties_by_id() {
        let store = MemoryStore::new();
        for (first, last) in [("Tom", "Hardy"), ("Tom", "Hanks"), ("Anne", "Hathaway")] {
            ActorRepository::insert(&store, new_actor(first, last)).await.unwrap();
        }

        let order = ActorOrder {
            field: ActorSort::FirstName,
            direction: Direction::Desc,
        };
        let page = ActorRepository::find_page(&store, PageRequest::new(0, 10), order)
            .await
            .unwrap();

        let ids: Vec<i64> = page.content.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn name_search_is_case_insensitive_and_paged() {
        let store = MemoryStore::new();
        for (first, last) in [("Tom", "Hanks"), ("Tom", "Hardy"), ("Anne", "Hathaway")] {
            ActorRepository::insert(&store, new_actor(first, last)).await.unwrap();
        }

        let page = ActorRepository::search_by_name(&store, "HA", PageRequest::new(1, 2))
            .await
            .unwrap();

        assert_eq!(page.total_elements, 3);
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].last_name, "Hathaway");
        assert!(page.last);
    }
}
