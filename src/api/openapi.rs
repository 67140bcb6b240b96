//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, authors, books, borrows, genres, health, reports, users};

/// Registers the `Api-Key` header scheme referenced by `security(("api_key" = []))`
struct ApiKeyAddon;

impl Modify for ApiKeyAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Api-Key"))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "0.1.0",
        description = "Library record keeping: books, authors, genres, users, borrows and reports"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        // Users
        users::list_users,
        users::get_user,
        users::get_user_by_phone,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::list_books_by_status,
        books::get_book_status,
        // Borrows
        borrows::list_borrows,
        borrows::get_borrow,
        borrows::create_borrow,
        borrows::set_borrow_status,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Genres
        genres::list_genres,
        genres::get_genre,
        genres::create_genre,
        genres::update_genre,
        genres::delete_genre,
        // Reports
        reports::total_books,
        reports::current_books,
        reports::last_visits,
        reports::popular_genres,
        reports::fine_borrows,
        reports::users_geo,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            crate::models::user::UsersPage,
            crate::models::user::UserEnvelope,
            crate::models::user::UserSuccess,
            crate::models::pagination::UserSortBy,
            // Books
            crate::models::book::Book,
            crate::models::book::BookStatus,
            crate::models::book::BookInput,
            crate::models::book::BooksPage,
            crate::models::book::BookStatusPage,
            crate::models::book::BookEnvelope,
            crate::models::book::BookStatusEnvelope,
            crate::models::book::BookSuccess,
            crate::models::pagination::BookSortBy,
            // Borrows
            crate::models::borrow::BorrowLog,
            crate::models::borrow::CreateBorrow,
            crate::models::borrow::BorrowsPage,
            crate::models::borrow::BorrowEnvelope,
            crate::models::borrow::BorrowSuccess,
            crate::models::borrow::BorrowsCreated,
            // Authors
            crate::models::author::Author,
            crate::models::author::AuthorInput,
            crate::models::author::AuthorsPage,
            crate::models::author::AuthorEnvelope,
            crate::models::author::AuthorSuccess,
            // Genres
            crate::models::genre::Genre,
            crate::models::genre::GenreInput,
            crate::models::genre::GenresPage,
            crate::models::genre::GenreEnvelope,
            crate::models::genre::GenreSuccess,
            // Reports
            crate::models::report::UserBorrowTotal,
            crate::models::report::UserBorrowCurrent,
            crate::models::report::UserLastVisit,
            crate::models::report::GenrePopularity,
            crate::models::report::OverdueBorrow,
            crate::models::report::BorrowerGeo,
            crate::models::report::TotalBooksReport,
            crate::models::report::CurrentBooksReport,
            crate::models::report::VisitsReport,
            crate::models::report::GenresTopReport,
            crate::models::report::FineBorrowsReport,
            crate::models::report::UsersGeoReport,
            // Common
            crate::models::StatusResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&ApiKeyAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "API key exchange"),
        (name = "users", description = "Library members"),
        (name = "books", description = "Book catalog and availability"),
        (name = "borrows", description = "Borrow/return logs"),
        (name = "authors", description = "Authors"),
        (name = "genres", description = "Genres"),
        (name = "reports", description = "Aggregate reports")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        for path in [
            "/auth",
            "/users/{id}",
            "/books/status",
            "/books/borrows/{id}",
            "/authors",
            "/genres/{id}",
            "/reports/borrows/fine",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("api_key"));
    }
}
