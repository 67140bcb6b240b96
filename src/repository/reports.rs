//! Aggregate report queries over the borrow logs
//!
//! `LIMIT NULL` means no limit in PostgreSQL, so an absent limit is bound as-is.

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::report::{
        BorrowerGeo, GenrePopularity, OverdueBorrow, UserBorrowCurrent, UserBorrowTotal,
        UserLastVisit,
    },
};

#[derive(Clone)]
pub struct ReportsRepository {
    pool: Pool<Postgres>,
}

impl ReportsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Number of borrows per user, all time
    pub async fn total_borrows_per_user(&self, limit: Option<i64>) -> AppResult<Vec<UserBorrowTotal>> {
        let rows = sqlx::query_as::<_, UserBorrowTotal>(
            r#"
            SELECT id_user, COUNT(id_book) AS total_count
            FROM borrow_return_logs
            GROUP BY id_user
            ORDER BY total_count DESC, id_user
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Number of unreturned borrows per user
    pub async fn current_borrows_per_user(&self, limit: Option<i64>) -> AppResult<Vec<UserBorrowCurrent>> {
        let rows = sqlx::query_as::<_, UserBorrowCurrent>(
            r#"
            SELECT id_user, COUNT(id_book) AS count
            FROM borrow_return_logs
            WHERE is_returned = FALSE
            GROUP BY id_user
            ORDER BY count DESC, id_user
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Most recent borrow date per user
    pub async fn last_visits(&self, limit: Option<i64>) -> AppResult<Vec<UserLastVisit>> {
        let rows = sqlx::query_as::<_, UserLastVisit>(
            r#"
            SELECT id_user, MAX(borrow_date) AS date
            FROM borrow_return_logs
            GROUP BY id_user
            ORDER BY date DESC, id_user
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Borrow count per genre, most borrowed first
    pub async fn popular_genres(&self, limit: Option<i64>) -> AppResult<Vec<GenrePopularity>> {
        let rows = sqlx::query_as::<_, GenrePopularity>(
            r#"
            SELECT g.genre_name, COUNT(*) AS genre_count
            FROM borrow_return_logs brl
            JOIN book_genres bg ON bg.id_book = brl.id_book
            JOIN genres g ON g.id_genre = bg.id_genre
            GROUP BY g.genre_name
            ORDER BY genre_count DESC, g.genre_name
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Unreturned borrows past their return date
    pub async fn overdue_borrows(&self, limit: Option<i64>) -> AppResult<Vec<OverdueBorrow>> {
        let rows = sqlx::query_as::<_, OverdueBorrow>(
            r#"
            SELECT u.full_name AS full_name,
                   b.title AS book_title,
                   br.borrow_date AS borrow_date,
                   br.return_date AS return_date
            FROM borrow_return_logs br
            JOIN users u ON br.id_user = u.id_user
            JOIN books b ON br.id_book = b.id_book
            WHERE br.is_returned = FALSE AND br.return_date < CURRENT_DATE
            ORDER BY br.borrow_date
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Borrowers with their contact details and the titles they borrowed
    pub async fn borrowers_geo(&self, limit: Option<i64>) -> AppResult<Vec<BorrowerGeo>> {
        let rows = sqlx::query_as::<_, BorrowerGeo>(
            r#"
            SELECT u.full_name AS full_name,
                   u.phone_number AS phone,
                   u.address AS address,
                   b.title AS book_title
            FROM users u
            JOIN borrow_return_logs brl ON u.id_user = brl.id_user
            JOIN books b ON brl.id_book = b.id_book
            ORDER BY u.full_name, b.title
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
