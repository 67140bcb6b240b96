//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::pagination::{default_limit, default_true, BookSortBy};

/// Book with the names of its authors and genres
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id_book: Uuid,
    pub title: String,
    pub authors: Vec<String>,
    pub genres: Vec<String>,
}

/// Book with its derived availability
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookStatus {
    pub id_book: Uuid,
    pub title: String,
    pub authors: Vec<String>,
    pub genres: Vec<String>,
    /// False while the latest borrow log for this book is unreturned
    pub is_available: bool,
    /// Borrower on the latest log, if any
    pub id_user: Option<Uuid>,
}

/// Create or replace a book and its author/genre links
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BookInput {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
    #[serde(default)]
    pub author_ids: Vec<Uuid>,
    #[serde(default)]
    pub genre_ids: Vec<Uuid>,
}

/// Book list parameters
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    #[serde(default)]
    #[validate(range(min = 0, message = "offset must be >= 0"))]
    pub offset: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000, message = "limit must be between 1 and 1000"))]
    pub limit: i64,
    /// Column to sort by: empty or `title`
    #[serde(default)]
    pub sort_by: BookSortBy,
    #[serde(default)]
    pub desc: bool,
}

/// Availability listing parameters
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookStatusQuery {
    /// true lists available books, false lists borrowed ones
    #[serde(default = "default_true")]
    pub status: bool,
    /// Sort by title descending
    #[serde(default = "default_true")]
    pub desc: bool,
    #[serde(default)]
    #[validate(range(min = 0, message = "offset must be >= 0"))]
    pub offset: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000, message = "limit must be between 1 and 1000"))]
    pub limit: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BooksPage {
    pub books: Vec<Book>,
    pub next_from: Option<i64>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookStatusPage {
    pub books: Vec<BookStatus>,
    pub next_from: Option<i64>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookEnvelope {
    pub book: Book,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookStatusEnvelope {
    pub book: BookStatus,
}

/// Result of a book mutation
#[derive(Debug, Serialize, ToSchema)]
pub struct BookSuccess {
    pub status: String,
    pub id_book: Uuid,
}

impl BookSuccess {
    pub fn new(id_book: Uuid) -> Self {
        Self {
            status: super::SUCCESS.to_string(),
            id_book,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_input_defaults_links() {
        let input: BookInput = serde_json::from_str(r#"{"title": "Dune"}"#).unwrap();
        assert!(input.author_ids.is_empty());
        assert!(input.genre_ids.is_empty());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_book_input_rejects_empty_title() {
        let input: BookInput = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_status_query_defaults() {
        let query: BookStatusQuery = serde_json::from_str("{}").unwrap();
        assert!(query.status);
        assert!(query.desc);
        assert_eq!(query.limit, 10);
    }
}
