use anyhow::{anyhow, Result};
use async_trait::async_trait;

use super::model::{Actor, ActorOrder, NewActor};
use crate::common::pagination::{Page, PageRequest};
use crate::infrastructure::db::contains_pattern;
use crate::infrastructure::db::pool::PgStore;

#[async_trait]
pub trait ActorRepository: Send + Sync {
    async fn find_page(&self, request: PageRequest, order: ActorOrder) -> Result<Page<Actor>>;

    /// Case-insensitive substring match on first or last name, ordered by id.
    async fn search_by_name(&self, name: &str, request: PageRequest) -> Result<Page<Actor>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Actor>>;

    async fn insert(&self, actor: NewActor) -> Result<Actor>;

    /// Overwrites every column of an existing row.
    async fn save(&self, actor: Actor) -> Result<Actor>;

    /// Returns `false` when no row had that id.
    async fn delete(&self, id: i64) -> Result<bool>;
}

#[async_trait]
impl ActorRepository for PgStore {
    async fn find_page(&self, request: PageRequest, order: ActorOrder) -> Result<Page<Actor>> {
        let sql = format!(
            r#"
            SELECT id, first_name, last_name, birth_date, nationality
            FROM actors
            ORDER BY {} {}, id ASC
            LIMIT $1 OFFSET $2
            "#,
            order.field.column(),
            order.direction.as_sql()
        );

        let actors = sqlx::query_as::<_, Actor>(&sql)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(self.pool())
            .await
            .map_err(|e| anyhow!("Failed to fetch actors: {}", e))?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM actors")
            .fetch_one(self.pool())
            .await?;

        Ok(Page::new(actors, request, u64::try_from(total).unwrap_or_default()))
    }

    async fn search_by_name(&self, name: &str, request: PageRequest) -> Result<Page<Actor>> {
        let pattern = contains_pattern(name);

        let actors = sqlx::query_as::<_, Actor>(
            r#"
            SELECT id, first_name, last_name, birth_date, nationality
            FROM actors
            WHERE first_name ILIKE $1 OR last_name ILIKE $1
            ORDER BY id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&pattern)
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(self.pool())
        .await
        .map_err(|e| anyhow!("Failed to search actors: {}", e))?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM actors WHERE first_name ILIKE $1 OR last_name ILIKE $1",
        )
        .bind(&pattern)
        .fetch_one(self.pool())
        .await?;

        Ok(Page::new(actors, request, u64::try_from(total).unwrap_or_default()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Actor>> {
        let actor = sqlx::query_as::<_, Actor>(
            r#"
            SELECT id, first_name, last_name, birth_date, nationality
            FROM actors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| anyhow!("Failed to fetch actor: {}", e))?;

        Ok(actor)
    }

    async fn insert(&self, actor: NewActor) -> Result<Actor> {
        let actor = sqlx::query_as::<_, Actor>(
            r#"
            INSERT INTO actors (first_name, last_name, birth_date, nationality)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, birth_date, nationality
            "#,
        )
        .bind(&actor.first_name)
        .bind(&actor.last_name)
        .bind(actor.birth_date)
        .bind(&actor.nationality)
        .fetch_one(self.pool())
        .await
        .map_err(|e| anyhow!("Failed to create actor: {}", e))?;

        Ok(actor)
    }

    async fn save(&self, actor: Actor) -> Result<Actor> {
        let saved = sqlx::query_as::<_, Actor>(
            r#"
            UPDATE actors
            SET first_name = $1, last_name = $2, birth_date = $3, nationality = $4
            WHERE id = $5
            RETURNING id, first_name, last_name, birth_date, nationality
            "#,
        )
        .bind(&actor.first_name)
        .bind(&actor.last_name)
        .bind(actor.birth_date)
        .bind(&actor.nationality)
        .bind(actor.id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| anyhow!("Failed to update actor: {}", e))?;

        saved.ok_or_else(|| anyhow!("Actor {} disappeared during update", actor.id))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
