//! Data models for the library API

pub mod author;
pub mod book;
pub mod borrow;
pub mod genre;
pub mod pagination;
pub mod report;
pub mod user;

use serde::Serialize;
use utoipa::ToSchema;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookStatus};
pub use borrow::BorrowLog;
pub use genre::Genre;
pub use user::User;

/// Status value of every successful mutation
pub const SUCCESS: &str = "success";

/// Bare status body, returned by deletions
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: SUCCESS.to_string(),
        }
    }
}
