//! Catalog service: books, authors and genres

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, AuthorInput},
        book::{Book, BookInput, BookQuery, BookStatus, BookStatusQuery},
        genre::{Genre, GenreInput},
        pagination::ListQuery,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // Books

    pub async fn list_books(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        query.validate()?;
        self.repository.books.list(query).await
    }

    pub async fn get_book(&self, id: Uuid) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a book with its author and genre links
    pub async fn create_book(&self, book: BookInput) -> AppResult<Uuid> {
        book.validate()?;
        let id = self.repository.books.create(&book).await?;
        tracing::info!(
            "Created book {} with {} author(s) and {} genre(s)",
            id,
            book.author_ids.len(),
            book.genre_ids.len()
        );
        Ok(id)
    }

    /// Replace a book's title and links
    pub async fn update_book(&self, id: Uuid, book: BookInput) -> AppResult<()> {
        book.validate()?;
        self.repository.books.update(id, &book).await
    }

    pub async fn delete_book(&self, id: Uuid) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Deleted book {}", id);
        Ok(())
    }

    pub async fn get_book_status(&self, id: Uuid) -> AppResult<BookStatus> {
        self.repository.books.get_status(id).await
    }

    /// Books filtered by availability
    pub async fn list_books_by_status(&self, query: &BookStatusQuery) -> AppResult<Vec<BookStatus>> {
        query.validate()?;
        self.repository.books.list_by_status(query).await
    }

    // Authors

    pub async fn list_authors(&self, query: &ListQuery) -> AppResult<Vec<Author>> {
        query.validate()?;
        self.repository.authors.list(query).await
    }

    pub async fn get_author(&self, id: Uuid) -> AppResult<Author> {
        self.repository.authors.get_by_id(id).await
    }

    pub async fn create_author(&self, author: AuthorInput) -> AppResult<Uuid> {
        author.validate()?;
        let id = self.repository.authors.create(&author.author_name).await?;
        tracing::info!("Created author {}", id);
        Ok(id)
    }

    pub async fn update_author(&self, id: Uuid, author: AuthorInput) -> AppResult<()> {
        author.validate()?;
        self.repository.authors.rename(id, &author.author_name).await
    }

    pub async fn delete_author(&self, id: Uuid) -> AppResult<()> {
        self.repository.authors.delete(id).await?;
        tracing::info!("Deleted author {}", id);
        Ok(())
    }

    // Genres

    pub async fn list_genres(&self, query: &ListQuery) -> AppResult<Vec<Genre>> {
        query.validate()?;
        self.repository.genres.list(query).await
    }

    pub async fn get_genre(&self, id: Uuid) -> AppResult<Genre> {
        self.repository.genres.get_by_id(id).await
    }

    pub async fn create_genre(&self, genre: GenreInput) -> AppResult<Uuid> {
        genre.validate()?;
        if self.repository.genres.name_exists(&genre.genre_name, None).await? {
            return Err(AppError::Conflict(format!(
                "Genre '{}' already exists",
                genre.genre_name
            )));
        }
        let id = self.repository.genres.create(&genre.genre_name).await?;
        tracing::info!("Created genre {}", id);
        Ok(id)
    }

    pub async fn update_genre(&self, id: Uuid, genre: GenreInput) -> AppResult<()> {
        genre.validate()?;
        if self.repository.genres.name_exists(&genre.genre_name, Some(id)).await? {
            return Err(AppError::Conflict(format!(
                "Genre '{}' already exists",
                genre.genre_name
            )));
        }
        self.repository.genres.rename(id, &genre.genre_name).await
    }

    pub async fn delete_genre(&self, id: Uuid) -> AppResult<()> {
        self.repository.genres.delete(id).await?;
        tracing::info!("Deleted genre {}", id);
        Ok(())
    }
}
