//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Author record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id_author: Uuid,
    pub author_name: String,
}

/// Create or rename an author
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AuthorInput {
    #[validate(length(min = 1, max = 255, message = "Author name must be 1-255 characters"))]
    pub author_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorsPage {
    pub authors: Vec<Author>,
    pub next_from: Option<i64>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorEnvelope {
    pub author: Author,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorSuccess {
    pub status: String,
    pub id_author: Uuid,
}

impl AuthorSuccess {
    pub fn new(id_author: Uuid) -> Self {
        Self {
            status: super::SUCCESS.to_string(),
            id_author,
        }
    }
}
