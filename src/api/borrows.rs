//! Borrow/return log endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        borrow::{
            BorrowEnvelope, BorrowQuery, BorrowStatusQuery, BorrowSuccess, BorrowsCreated,
            BorrowsPage, CreateBorrow,
        },
        pagination::next_from,
    },
};

use super::RequireApiKey;

/// List borrow logs, optionally filtered by user, book and returned flag
#[utoipa::path(
    get,
    path = "/books/borrows",
    tag = "borrows",
    security(("api_key" = [])),
    params(BorrowQuery),
    responses(
        (status = 200, description = "Borrow logs", body = BorrowsPage)
    )
)]
pub async fn list_borrows(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Query(query): Query<BorrowQuery>,
) -> AppResult<Json<BorrowsPage>> {
    let borrows = state.services.borrows.list_borrows(&query).await?;

    Ok(Json(BorrowsPage {
        next_from: next_from(query.offset, query.limit, borrows.len()),
        count: borrows.len(),
        borrows,
    }))
}

/// Get a borrow log by ID
#[utoipa::path(
    get,
    path = "/books/borrows/{id}",
    tag = "borrows",
    security(("api_key" = [])),
    params(
        ("id" = Uuid, Path, description = "Borrow ID")
    ),
    responses(
        (status = 200, description = "Borrow log", body = BorrowEnvelope),
        (status = 404, description = "Borrow not found")
    )
)]
pub async fn get_borrow(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BorrowEnvelope>> {
    let borrow = state.services.borrows.get_borrow(id).await?;
    Ok(Json(BorrowEnvelope { borrow }))
}

/// Lend books to a user
#[utoipa::path(
    post,
    path = "/books/borrows",
    tag = "borrows",
    security(("api_key" = [])),
    request_body = CreateBorrow,
    responses(
        (status = 201, description = "Borrow logs created", body = BorrowsCreated),
        (status = 400, description = "Invalid dates or empty book list"),
        (status = 404, description = "User or book not found"),
        (status = 422, description = "A book is already borrowed")
    )
)]
pub async fn create_borrow(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Json(borrow): Json<CreateBorrow>,
) -> AppResult<(StatusCode, Json<BorrowsCreated>)> {
    let ids = state.services.borrows.create_borrow(borrow).await?;
    Ok((StatusCode::CREATED, Json(BorrowsCreated::new(ids))))
}

/// Mark a borrow returned (or not)
#[utoipa::path(
    patch,
    path = "/books/borrows/{id}",
    tag = "borrows",
    security(("api_key" = [])),
    params(
        ("id" = Uuid, Path, description = "Borrow ID"),
        BorrowStatusQuery
    ),
    responses(
        (status = 200, description = "Borrow updated", body = BorrowSuccess),
        (status = 404, description = "Borrow not found")
    )
)]
pub async fn set_borrow_status(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
    Query(query): Query<BorrowStatusQuery>,
) -> AppResult<Json<BorrowSuccess>> {
    state.services.borrows.set_returned(id, query.status).await?;
    Ok(Json(BorrowSuccess::new(id)))
}
