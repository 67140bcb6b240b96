//! Borrow/return service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::borrow::{BorrowLog, BorrowQuery, CreateBorrow},
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowsService {
    repository: Repository,
}

impl BorrowsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_borrows(&self, query: &BorrowQuery) -> AppResult<Vec<BorrowLog>> {
        query.validate()?;
        self.repository.borrows.list(query).await
    }

    pub async fn get_borrow(&self, id: Uuid) -> AppResult<BorrowLog> {
        self.repository.borrows.get_by_id(id).await
    }

    /// Lend books to a user, one log per book
    pub async fn create_borrow(&self, borrow: CreateBorrow) -> AppResult<Vec<Uuid>> {
        borrow.validate()?;
        // Verify user exists
        self.repository.users.get_by_id(borrow.id_user).await?;
        let ids = self.repository.borrows.create(&borrow).await?;
        tracing::info!(
            "User {} borrowed {} book(s) until {}",
            borrow.id_user,
            ids.len(),
            borrow.return_date
        );
        Ok(ids)
    }

    /// Mark a borrow returned or not returned
    pub async fn set_returned(&self, id: Uuid, is_returned: bool) -> AppResult<()> {
        self.repository.borrows.set_returned(id, is_returned).await?;
        tracing::info!("Borrow {} marked returned={}", id, is_returned);
        Ok(())
    }
}
