//! Authors repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{author::Author, pagination::{direction, ListQuery}},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List authors ordered by name
    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<Author>> {
        let sql = format!(
            "SELECT id_author, author_name FROM authors ORDER BY author_name {}, id_author OFFSET $1 LIMIT $2",
            direction(query.desc)
        );
        let authors = sqlx::query_as::<_, Author>(&sql)
            .bind(query.offset)
            .bind(query.limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(authors)
    }

    /// Get author by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT id_author, author_name FROM authors WHERE id_author = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found", id)))
    }

    pub async fn create(&self, author_name: &str) -> AppResult<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO authors (author_name) VALUES ($1) RETURNING id_author",
        )
        .bind(author_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn rename(&self, id: Uuid, author_name: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE authors SET author_name = $1 WHERE id_author = $2")
            .bind(author_name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Author with id {} not found", id)));
        }
        Ok(())
    }

    /// Delete an author; book links cascade
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE id_author = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Author with id {} not found", id)));
        }
        Ok(())
    }
}
