//! Genre endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        genre::{GenreEnvelope, GenreInput, GenreSuccess, GenresPage},
        pagination::{next_from, ListQuery},
        StatusResponse,
    },
};

use super::RequireApiKey;

/// List genres ordered by name
#[utoipa::path(
    get,
    path = "/genres",
    tag = "genres",
    security(("api_key" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "List of genres", body = GenresPage)
    )
)]
pub async fn list_genres(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<GenresPage>> {
    let genres = state.services.catalog.list_genres(&query).await?;

    Ok(Json(GenresPage {
        next_from: next_from(query.offset, query.limit, genres.len()),
        count: genres.len(),
        genres,
    }))
}

#[utoipa::path(
    get,
    path = "/genres/{id}",
    tag = "genres",
    security(("api_key" = [])),
    params(
        ("id" = Uuid, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre details", body = GenreEnvelope),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn get_genre(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
) -> AppResult<Json<GenreEnvelope>> {
    let genre = state.services.catalog.get_genre(id).await?;
    Ok(Json(GenreEnvelope { genre }))
}

/// Create a genre; names are unique
#[utoipa::path(
    post,
    path = "/genres",
    tag = "genres",
    security(("api_key" = [])),
    request_body = GenreInput,
    responses(
        (status = 201, description = "Genre created", body = GenreSuccess),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Genre name already used")
    )
)]
pub async fn create_genre(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Json(genre): Json<GenreInput>,
) -> AppResult<(StatusCode, Json<GenreSuccess>)> {
    let id = state.services.catalog.create_genre(genre).await?;
    Ok((StatusCode::CREATED, Json(GenreSuccess::new(id))))
}

#[utoipa::path(
    put,
    path = "/genres/{id}",
    tag = "genres",
    security(("api_key" = [])),
    params(
        ("id" = Uuid, Path, description = "Genre ID")
    ),
    request_body = GenreInput,
    responses(
        (status = 200, description = "Genre renamed", body = GenreSuccess),
        (status = 404, description = "Genre not found"),
        (status = 409, description = "Genre name already used")
    )
)]
pub async fn update_genre(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
    Json(genre): Json<GenreInput>,
) -> AppResult<Json<GenreSuccess>> {
    state.services.catalog.update_genre(id, genre).await?;
    Ok(Json(GenreSuccess::new(id)))
}

#[utoipa::path(
    delete,
    path = "/genres/{id}",
    tag = "genres",
    security(("api_key" = [])),
    params(
        ("id" = Uuid, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre deleted", body = StatusResponse),
        (status = 404, description = "Genre not found")
    )
)]
pub async fn delete_genre(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StatusResponse>> {
    state.services.catalog.delete_genre(id).await?;
    Ok(Json(StatusResponse::success()))
}
