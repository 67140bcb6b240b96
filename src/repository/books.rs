//! Books repository: books, their author/genre links and availability

use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookInput, BookQuery, BookStatus, BookStatusQuery},
        pagination::{direction, order_clause},
    },
};

/// Book row with author and genre names folded into arrays
const BOOK_SELECT: &str = r#"
    SELECT bd.id_book, bd.title,
           array_remove(array_agg(DISTINCT bd.author_name), NULL) AS authors,
           array_remove(array_agg(DISTINCT bd.genre_name), NULL) AS genres
    FROM book_details bd
"#;

/// Book row joined with the book's latest borrow log (by return date).
/// A book without any log is available.
const BOOK_STATUS_SELECT: &str = r#"
    SELECT bd.id_book, bd.title,
           array_remove(array_agg(DISTINCT bd.author_name), NULL) AS authors,
           array_remove(array_agg(DISTINCT bd.genre_name), NULL) AS genres,
           COALESCE(last_borrow.is_returned, TRUE) AS is_available,
           last_borrow.id_user AS id_user
    FROM book_details bd
    LEFT JOIN (
        SELECT DISTINCT ON (id_book) id_book, is_returned, id_user
        FROM borrow_return_logs
        ORDER BY id_book, return_date DESC, created_at DESC
    ) AS last_borrow ON last_borrow.id_book = bd.id_book
"#;

const BOOK_STATUS_GROUP: &str =
    "GROUP BY bd.id_book, bd.title, last_borrow.is_returned, last_borrow.id_user";

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        let sql = format!("{} WHERE bd.id_book = $1 GROUP BY bd.id_book, bd.title", BOOK_SELECT);
        sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// List books with offset pagination
    pub async fn list(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let sql = format!(
            "{} GROUP BY bd.id_book, bd.title {} OFFSET $1 LIMIT $2",
            BOOK_SELECT,
            order_clause(query.sort_by.column(), query.desc, "bd.id_book")
        );

        let books = sqlx::query_as::<_, Book>(&sql)
            .bind(query.offset)
            .bind(query.limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Get one book with its availability
    pub async fn get_status(&self, id: Uuid) -> AppResult<BookStatus> {
        let sql = format!(
            "{} WHERE bd.id_book = $1 {}",
            BOOK_STATUS_SELECT, BOOK_STATUS_GROUP
        );
        sqlx::query_as::<_, BookStatus>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// List books whose availability equals `query.status`, ordered by title
    pub async fn list_by_status(&self, query: &BookStatusQuery) -> AppResult<Vec<BookStatus>> {
        let sql = format!(
            "{} WHERE COALESCE(last_borrow.is_returned, TRUE) = $1 {} ORDER BY bd.title {}, bd.id_book OFFSET $2 LIMIT $3",
            BOOK_STATUS_SELECT,
            BOOK_STATUS_GROUP,
            direction(query.desc)
        );

        let books = sqlx::query_as::<_, BookStatus>(&sql)
            .bind(query.status)
            .bind(query.offset)
            .bind(query.limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Create a book and link its authors and genres in one transaction
    pub async fn create(&self, data: &BookInput) -> AppResult<Uuid> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO books (title) VALUES ($1) RETURNING id_book",
        )
        .bind(&data.title)
        .fetch_one(&mut *tx)
        .await?;

        link_authors(&mut tx, id, &data.author_ids).await?;
        link_genres(&mut tx, id, &data.genre_ids).await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Replace a book's title and links in one transaction
    pub async fn update(&self, id: Uuid, data: &BookInput) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query_scalar::<_, Uuid>(
            "UPDATE books SET title = $1 WHERE id_book = $2 RETURNING id_book",
        )
        .bind(&data.title)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        sqlx::query("DELETE FROM book_authors WHERE id_book = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        link_authors(&mut tx, id, &data.author_ids).await?;

        sqlx::query("DELETE FROM book_genres WHERE id_book = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        link_genres(&mut tx, id, &data.genre_ids).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Delete a book; author and genre links cascade
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id_book = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }
        Ok(())
    }
}

async fn link_authors(conn: &mut PgConnection, id_book: Uuid, author_ids: &[Uuid]) -> AppResult<()> {
    if author_ids.is_empty() {
        return Ok(());
    }
    sqlx::query(
        r#"
        INSERT INTO book_authors (id_book, id_author)
        SELECT $1, UNNEST($2::uuid[])
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(id_book)
    .bind(author_ids)
    .execute(conn)
    .await?;
    Ok(())
}

async fn link_genres(conn: &mut PgConnection, id_book: Uuid, genre_ids: &[Uuid]) -> AppResult<()> {
    if genre_ids.is_empty() {
        return Ok(());
    }
    sqlx::query(
        r#"
        INSERT INTO book_genres (id_book, id_genre)
        SELECT $1, UNNEST($2::uuid[])
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(id_book)
    .bind(genre_ids)
    .execute(conn)
    .await?;
    Ok(())
}
