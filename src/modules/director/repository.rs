use anyhow::{anyhow, Result};
use async_trait::async_trait;

use super::model::{Director, NewDirector};
use crate::infrastructure::db::contains_pattern;
use crate::infrastructure::db::pool::PgStore;

#[async_trait]
pub trait DirectorRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Director>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Director>>;

    /// Case-insensitive substring match on first or last name.
    async fn search_by_name(&self, name: &str) -> Result<Vec<Director>>;

    async fn insert(&self, director: NewDirector) -> Result<Director>;

    async fn save(&self, director: Director) -> Result<Director>;

    /// Also removes the director's movies and their roles.
    async fn delete(&self, id: i64) -> Result<bool>;
}

#[async_trait]
impl DirectorRepository for PgStore {
    async fn find_all(&self) -> Result<Vec<Director>> {
        let directors = sqlx::query_as::<_, Director>(
            r#"
            SELECT id, first_name, last_name, birth_date, nationality
            FROM directors
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| anyhow!("Failed to fetch directors: {}", e))?;

        Ok(directors)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Director>> {
        let director = sqlx::query_as::<_, Director>(
            r#"
            SELECT id, first_name, last_name, birth_date, nationality
            FROM directors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| anyhow!("Failed to fetch director: {}", e))?;

        Ok(director)
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Director>> {
        let directors = sqlx::query_as::<_, Director>(
            r#"
            SELECT id, first_name, last_name, birth_date, nationality
            FROM directors
            WHERE first_name ILIKE $1 OR last_name ILIKE $1
            ORDER BY id ASC
            "#,
        )
        .bind(contains_pattern(name))
        .fetch_all(self.pool())
        .await
        .map_err(|e| anyhow!("Failed to search directors: {}", e))?;

        Ok(directors)
    }

    async fn insert(&self, director: NewDirector) -> Result<Director> {
        let director = sqlx::query_as::<_, Director>(
            r#"
            INSERT INTO directors (first_name, last_name, birth_date, nationality)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, birth_date, nationality
            "#,
        )
        .bind(&director.first_name)
        .bind(&director.last_name)
        .bind(director.birth_date)
        .bind(&director.nationality)
        .fetch_one(self.pool())
        .await
        .map_err(|e| anyhow!("Failed to create director: {}", e))?;

        Ok(director)
    }

    async fn save(&self, director: Director) -> Result<Director> {
        let saved = sqlx::query_as::<_, Director>(
            r#"
            UPDATE directors
            SET first_name = $1, last_name = $2, birth_date = $3, nationality = $4
            WHERE id = $5
            RETURNING id, first_name, last_name, birth_date, nationality
            "#,
        )
        .bind(&director.first_name)
        .bind(&director.last_name)
        .bind(director.birth_date)
        .bind(&director.nationality)
        .bind(director.id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| anyhow!("Failed to update director: {}", e))?;

        saved.ok_or_else(|| anyhow!("Director {} disappeared during update", director.id))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        // movies.director_id and roles.movie_id cascade on delete
        let result = sqlx::query("DELETE FROM directors WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
