//! Author endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        author::{AuthorEnvelope, AuthorInput, AuthorSuccess, AuthorsPage},
        pagination::{next_from, ListQuery},
        StatusResponse,
    },
};

use super::RequireApiKey;

/// List authors ordered by name
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    security(("api_key" = [])),
    params(ListQuery),
    responses(
        (status = 200, description = "List of authors", body = AuthorsPage)
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<AuthorsPage>> {
    let authors = state.services.catalog.list_authors(&query).await?;

    Ok(Json(AuthorsPage {
        next_from: next_from(query.offset, query.limit, authors.len()),
        count: authors.len(),
        authors,
    }))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    security(("api_key" = [])),
    params(
        ("id" = Uuid, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = AuthorEnvelope),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AuthorEnvelope>> {
    let author = state.services.catalog.get_author(id).await?;
    Ok(Json(AuthorEnvelope { author }))
}

#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    security(("api_key" = [])),
    request_body = AuthorInput,
    responses(
        (status = 201, description = "Author created", body = AuthorSuccess),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Json(author): Json<AuthorInput>,
) -> AppResult<(StatusCode, Json<AuthorSuccess>)> {
    let id = state.services.catalog.create_author(author).await?;
    Ok((StatusCode::CREATED, Json(AuthorSuccess::new(id))))
}

/// Rename an author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    security(("api_key" = [])),
    params(
        ("id" = Uuid, Path, description = "Author ID")
    ),
    request_body = AuthorInput,
    responses(
        (status = 200, description = "Author renamed", body = AuthorSuccess),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
    Json(author): Json<AuthorInput>,
) -> AppResult<Json<AuthorSuccess>> {
    state.services.catalog.update_author(id, author).await?;
    Ok(Json(AuthorSuccess::new(id)))
}

/// Delete a author; its book links are removed with it
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    security(("api_key" = [])),
    params(
        ("id" = Uuid, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author deleted", body = StatusResponse),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StatusResponse>> {
    state.services.catalog.delete_author(id).await?;
    Ok(Json(StatusResponse::success()))
}
