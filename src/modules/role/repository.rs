use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::FromRow;
use time::Date;

use super::model::{NewRole, Role};
use crate::infrastructure::db::contains_pattern;
use crate::infrastructure::db::pool::PgStore;
use crate::modules::actor::model::Actor;
use crate::modules::movie::model::MovieRef;

#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Role>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Role>>;

    async fn find_by_movie(&self, movie_id: i64) -> Result<Vec<Role>>;

    async fn find_by_actor(&self, actor_id: i64) -> Result<Vec<Role>>;

    async fn search_by_character_name(&self, name: &str) -> Result<Vec<Role>>;

    async fn insert(&self, role: NewRole) -> Result<Role>;

    async fn save(&self, role: Role) -> Result<Role>;

    async fn delete(&self, id: i64) -> Result<bool>;
}

const ROLE_SELECT: &str = r#"
    SELECT r.id, r.character_name,
           m.id AS movie_id, m.title AS movie_title,
           a.id AS actor_id,
           a.first_name AS actor_first_name,
           a.last_name AS actor_last_name,
           a.birth_date AS actor_birth_date,
           a.nationality AS actor_nationality
    FROM roles r
    JOIN movies m ON m.id = r.movie_id
    JOIN actors a ON a.id = r.actor_id
"#;

#[derive(Debug, FromRow)]
struct RoleRow {
    id: i64,
    character_name: String,
    movie_id: i64,
    movie_title: String,
    actor_id: i64,
    actor_first_name: String,
    actor_last_name: String,
    actor_birth_date: Date,
    actor_nationality: String,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Role {
            id: row.id,
            character_name: row.character_name,
            movie: MovieRef {
                id: row.movie_id,
                title: row.movie_title,
            },
            actor: Actor {
                id: row.actor_id,
                first_name: row.actor_first_name,
                last_name: row.actor_last_name,
                birth_date: row.actor_birth_date,
                nationality: row.actor_nationality,
            },
        }
    }
}

impl PgStore {
    async fn fetch_roles(&self, filter: &str, bind: Option<RoleFilter<'_>>) -> Result<Vec<Role>> {
        let sql = format!("{ROLE_SELECT} {filter} ORDER BY r.id ASC");
        let query = sqlx::query_as::<_, RoleRow>(&sql);
        let query = match bind {
            Some(RoleFilter::Id(id)) => query.bind(id),
            Some(RoleFilter::Pattern(pattern)) => query.bind(pattern),
            None => query,
        };

        let rows = query
            .fetch_all(self.pool())
            .await
            .map_err(|e| anyhow!("Failed to fetch roles: {}", e))?;

        Ok(rows.into_iter().map(Role::from).collect())
    }
}

enum RoleFilter<'a> {
    Id(i64),
    Pattern(&'a str),
}

#[async_trait]
impl RoleRepository for PgStore {
    async fn find_all(&self) -> Result<Vec<Role>> {
        self.fetch_roles("", None).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Role>> {
        let sql = format!("{ROLE_SELECT} WHERE r.id = $1");
        let row = sqlx::query_as::<_, RoleRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| anyhow!("Failed to fetch role: {}", e))?;

        Ok(row.map(Role::from))
    }

    async fn find_by_movie(&self, movie_id: i64) -> Result<Vec<Role>> {
        self.fetch_roles("WHERE r.movie_id = $1", Some(RoleFilter::Id(movie_id)))
            .await
    }

    async fn find_by_actor(&self, actor_id: i64) -> Result<Vec<Role>> {
        self.fetch_roles("WHERE r.actor_id = $1", Some(RoleFilter::Id(actor_id)))
            .await
    }

    async fn search_by_character_name(&self, name: &str) -> Result<Vec<Role>> {
        let pattern = contains_pattern(name);
        self.fetch_roles(
            "WHERE r.character_name ILIKE $1",
            Some(RoleFilter::Pattern(&pattern)),
        )
        .await
    }

    async fn insert(&self, role: NewRole) -> Result<Role> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO roles (character_name, movie_id, actor_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&role.character_name)
        .bind(role.movie.id)
        .bind(role.actor.id)
        .fetch_one(self.pool())
        .await
        .map_err(|e| anyhow!("Failed to create role: {}", e))?;

        Ok(role.with_id(id))
    }

    async fn save(&self, role: Role) -> Result<Role> {
        let result = sqlx::query(
            r#"
            UPDATE roles
            SET character_name = $1, movie_id = $2, actor_id = $3
            WHERE id = $4
            "#,
        )
        .bind(&role.character_name)
        .bind(role.movie.id)
        .bind(role.actor.id)
        .bind(role.id)
        .execute(self.pool())
        .await
        .map_err(|e| anyhow!("Failed to update role: {}", e))?;

        if result.rows_affected() == 0 {
            return Err(anyhow!("Role {} disappeared during update", role.id));
        }

        Ok(role)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
