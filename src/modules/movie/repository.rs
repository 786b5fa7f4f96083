use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::FromRow;
use time::Date;

use super::model::{Genre, Movie, NewMovie};
use crate::infrastructure::db::contains_pattern;
use crate::infrastructure::db::pool::PgStore;
use crate::modules::director::model::Director;

/// Every read resolves the director in the same query.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Movie>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>>;

    /// Case-insensitive substring match on the title.
    async fn find_by_title(&self, title: &str) -> Result<Vec<Movie>>;

    async fn find_by_genre(&self, genre: Genre) -> Result<Vec<Movie>>;

    async fn find_by_title_and_genre(&self, title: &str, genre: Genre) -> Result<Vec<Movie>>;

    async fn insert(&self, movie: NewMovie) -> Result<Movie>;

    /// Overwrites every column, including the director link.
    async fn save(&self, movie: Movie) -> Result<Movie>;

    /// Also removes the movie's roles.
    async fn delete(&self, id: i64) -> Result<bool>;
}

const MOVIE_SELECT: &str = r#"
    SELECT m.id, m.title, m.genre, m.release_date, m.duration_minutes,
           d.id AS director_id,
           d.first_name AS director_first_name,
           d.last_name AS director_last_name,
           d.birth_date AS director_birth_date,
           d.nationality AS director_nationality
    FROM movies m
    LEFT JOIN directors d ON d.id = m.director_id
"#;

#[derive(Debug, FromRow)]
struct MovieRow {
    id: i64,
    title: String,
    genre: Genre,
    release_date: Date,
    duration_minutes: i32,
    director_id: Option<i64>,
    director_first_name: Option<String>,
    director_last_name: Option<String>,
    director_birth_date: Option<Date>,
    director_nationality: Option<String>,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        let director = match (
            row.director_id,
            row.director_first_name,
            row.director_last_name,
            row.director_birth_date,
            row.director_nationality,
        ) {
            (Some(id), Some(first_name), Some(last_name), Some(birth_date), Some(nationality)) => {
                Some(Director {
                    id,
                    first_name,
                    last_name,
                    birth_date,
                    nationality,
                })
            }
            _ => None,
        };

        Movie {
            id: row.id,
            title: row.title,
            genre: row.genre,
            release_date: row.release_date,
            duration_minutes: row.duration_minutes,
            director,
        }
    }
}

#[async_trait]
impl MovieRepository for PgStore {
    async fn find_all(&self) -> Result<Vec<Movie>> {
        let sql = format!("{MOVIE_SELECT} ORDER BY m.id ASC");
        let rows = sqlx::query_as::<_, MovieRow>(&sql)
            .fetch_all(self.pool())
            .await
            .map_err(|e| anyhow!("Failed to fetch movies: {}", e))?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>> {
        let sql = format!("{MOVIE_SELECT} WHERE m.id = $1");
        let row = sqlx::query_as::<_, MovieRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| anyhow!("Failed to fetch movie: {}", e))?;

        Ok(row.map(Movie::from))
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<Movie>> {
        let sql = format!("{MOVIE_SELECT} WHERE m.title ILIKE $1 ORDER BY m.id ASC");
        let rows = sqlx::query_as::<_, MovieRow>(&sql)
            .bind(contains_pattern(title))
            .fetch_all(self.pool())
            .await
            .map_err(|e| anyhow!("Failed to search movies by title: {}", e))?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_by_genre(&self, genre: Genre) -> Result<Vec<Movie>> {
        let sql = format!("{MOVIE_SELECT} WHERE m.genre = $1 ORDER BY m.id ASC");
        let rows = sqlx::query_as::<_, MovieRow>(&sql)
            .bind(genre)
            .fetch_all(self.pool())
            .await
            .map_err(|e| anyhow!("Failed to search movies by genre: {}", e))?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_by_title_and_genre(&self, title: &str, genre: Genre) -> Result<Vec<Movie>> {
        let sql = format!("{MOVIE_SELECT} WHERE m.title ILIKE $1 AND m.genre = $2 ORDER BY m.id ASC");
        let rows = sqlx::query_as::<_, MovieRow>(&sql)
            .bind(contains_pattern(title))
            .bind(genre)
            .fetch_all(self.pool())
            .await
            .map_err(|e| anyhow!("Failed to search movies: {}", e))?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn insert(&self, movie: NewMovie) -> Result<Movie> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO movies (title, genre, release_date, duration_minutes, director_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&movie.title)
        .bind(movie.genre)
        .bind(movie.release_date)
        .bind(movie.duration_minutes)
        .bind(movie.director.as_ref().map(|d| d.id))
        .fetch_one(self.pool())
        .await
        .map_err(|e| anyhow!("Failed to create movie: {}", e))?;

        Ok(movie.with_id(id))
    }

    async fn save(&self, movie: Movie) -> Result<Movie> {
        let result = sqlx::query(
            r#"
            UPDATE movies
            SET title = $1, genre = $2, release_date = $3, duration_minutes = $4, director_id = $5
            WHERE id = $6
            "#,
        )
        .bind(&movie.title)
        .bind(movie.genre)
        .bind(movie.release_date)
        .bind(movie.duration_minutes)
        .bind(movie.director.as_ref().map(|d| d.id))
        .bind(movie.id)
        .execute(self.pool())
        .await
        .map_err(|e| anyhow!("Failed to update movie: {}", e))?;

        if result.rows_affected() == 0 {
            return Err(anyhow!("Movie {} disappeared during update", movie.id));
        }

        Ok(movie)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
