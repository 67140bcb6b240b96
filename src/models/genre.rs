//! Genre model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Genre {
    pub id_genre: Uuid,
    pub genre_name: String,
}

/// Create or rename a genre; names are unique
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenreInput {
    #[validate(length(min = 1, max = 255, message = "Genre name must be 1-255 characters"))]
    pub genre_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenresPage {
    pub genres: Vec<Genre>,
    pub next_from: Option<i64>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreEnvelope {
    pub genre: Genre,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreSuccess {
    pub status: String,
    pub id_genre: Uuid,
}

impl GenreSuccess {
    pub fn new(id_genre: Uuid) -> Self {
        Self {
            status: super::SUCCESS.to_string(),
            id_genre,
        }
    }
}
