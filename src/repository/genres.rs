//! Genres repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{genre::Genre, pagination::{direction, ListQuery}},
};

#[derive(Clone)]
pub struct GenresRepository {
    pool: Pool<Postgres>,
}

impl GenresRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<Genre>> {
        let sql = format!(
            "SELECT id_genre, genre_name FROM genres ORDER BY genre_name {} OFFSET $1 LIMIT $2",
            direction(query.desc)
        );
        let genres = sqlx::query_as::<_, Genre>(&sql)
            .bind(query.offset)
            .bind(query.limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(genres)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Genre> {
        sqlx::query_as::<_, Genre>("SELECT id_genre, genre_name FROM genres WHERE id_genre = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Genre with id {} not found", id)))
    }

    /// Check whether another genre already uses this name
    pub async fn name_exists(&self, genre_name: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM genres WHERE genre_name = $1 AND id_genre IS DISTINCT FROM $2)",
        )
        .bind(genre_name)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    pub async fn create(&self, genre_name: &str) -> AppResult<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO genres (genre_name) VALUES ($1) RETURNING id_genre",
        )
        .bind(genre_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn rename(&self, id: Uuid, genre_name: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE genres SET genre_name = $1 WHERE id_genre = $2")
            .bind(genre_name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Genre with id {} not found", id)));
        }
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM genres WHERE id_genre = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Genre with id {} not found", id)));
        }
        Ok(())
    }
}
