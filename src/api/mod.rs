//! API handlers for the library REST endpoints

pub mod auth;
pub mod authors;
pub mod books;
pub mod borrows;
pub mod genres;
pub mod health;
pub mod openapi;
pub mod reports;
pub mod users;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, services::auth::API_KEY_HEADER, AppState};

/// Extractor guarding a handler behind the `Api-Key` header
pub struct RequireApiKey;

#[async_trait]
impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let key = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        state.services.auth.verify_api_key(key)?;
        Ok(RequireApiKey)
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authentication
        .route("/auth", post(auth::login))
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/phone/:phone_number", get(users::get_user_by_phone))
        .route(
            "/users/:id",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/status", get(books::list_books_by_status))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route("/books/:id/status", get(books::get_book_status))
        // Borrow/return logs
        .route(
            "/books/borrows",
            get(borrows::list_borrows).post(borrows::create_borrow),
        )
        .route(
            "/books/borrows/:id",
            get(borrows::get_borrow).patch(borrows::set_borrow_status),
        )
        // Authors
        .route("/authors", get(authors::list_authors).post(authors::create_author))
        .route(
            "/authors/:id",
            get(authors::get_author)
                .put(authors::update_author)
                .delete(authors::delete_author),
        )
        // Genres
        .route("/genres", get(genres::list_genres).post(genres::create_genre))
        .route(
            "/genres/:id",
            get(genres::get_genre)
                .put(genres::update_genre)
                .delete(genres::delete_genre),
        )
        // Reports
        .route("/reports/books/users/all", get(reports::total_books))
        .route("/reports/books/users/current", get(reports::current_books))
        .route("/reports/visit/last", get(reports::last_visits))
        .route("/reports/genres/popular", get(reports::popular_genres))
        .route("/reports/borrows/fine", get(reports::fine_borrows))
        .route("/reports/borrows/geo", get(reports::users_geo))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
