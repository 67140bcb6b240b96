//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        book::{
            BookEnvelope, BookInput, BookQuery, BookStatusEnvelope, BookStatusPage, BookStatusQuery,
            BookSuccess, BooksPage,
        },
        pagination::next_from,
        StatusResponse,
    },
};

use super::RequireApiKey;

/// List books with their authors and genres
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    security(("api_key" = [])),
    params(BookQuery),
    responses(
        (status = 200, description = "List of books", body = BooksPage),
        (status = 400, description = "Invalid pagination or sort column")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<BooksPage>> {
    let books = state.services.catalog.list_books(&query).await?;

    Ok(Json(BooksPage {
        next_from: next_from(query.offset, query.limit, books.len()),
        count: books.len(),
        books,
    }))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    security(("api_key" = [])),
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookEnvelope),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookEnvelope>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(BookEnvelope { book }))
}

/// Create a book linked to existing authors and genres
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("api_key" = [])),
    request_body = BookInput,
    responses(
        (status = 201, description = "Book created", body = BookSuccess),
        (status = 400, description = "Invalid input or unknown author/genre")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Json(book): Json<BookInput>,
) -> AppResult<(StatusCode, Json<BookSuccess>)> {
    let id = state.services.catalog.create_book(book).await?;
    Ok((StatusCode::CREATED, Json(BookSuccess::new(id))))
}

/// Replace a book's title, authors and genres
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    security(("api_key" = [])),
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated", body = BookSuccess),
        (status = 400, description = "Invalid input or unknown author/genre"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
    Json(book): Json<BookInput>,
) -> AppResult<Json<BookSuccess>> {
    state.services.catalog.update_book(id, book).await?;
    Ok(Json(BookSuccess::new(id)))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    security(("api_key" = [])),
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = StatusResponse),
        (status = 400, description = "Book still has borrow records"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StatusResponse>> {
    state.services.catalog.delete_book(id).await?;
    Ok(Json(StatusResponse::success()))
}

/// List books by availability
#[utoipa::path(
    get,
    path = "/books/status",
    tag = "books",
    security(("api_key" = [])),
    params(BookStatusQuery),
    responses(
        (status = 200, description = "Books with availability", body = BookStatusPage)
    )
)]
pub async fn list_books_by_status(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Query(query): Query<BookStatusQuery>,
) -> AppResult<Json<BookStatusPage>> {
    let books = state.services.catalog.list_books_by_status(&query).await?;

    Ok(Json(BookStatusPage {
        next_from: next_from(query.offset, query.limit, books.len()),
        count: books.len(),
        books,
    }))
}

/// Get a book's availability and current holder
#[utoipa::path(
    get,
    path = "/books/{id}/status",
    tag = "books",
    security(("api_key" = [])),
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book availability", body = BookStatusEnvelope),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book_status(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookStatusEnvelope>> {
    let book = state.services.catalog.get_book_status(id).await?;
    Ok(Json(BookStatusEnvelope { book }))
}
