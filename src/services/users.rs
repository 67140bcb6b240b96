//! User management service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{is_valid_phone_number, CreateUser, UpdateUser, User, UserQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List users, returning the page and the total number of users
    pub async fn list_users(&self, query: &UserQuery) -> AppResult<(Vec<User>, i64)> {
        query.validate()?;
        self.repository.users.list(query).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// Look a user up by phone number
    pub async fn get_by_phone(&self, phone_number: &str) -> AppResult<User> {
        if !is_valid_phone_number(phone_number) {
            return Err(AppError::Validation(
                "Phone number must match 7XXXXXXXXXX".to_string(),
            ));
        }
        self.repository.users.get_by_phone(phone_number).await
    }

    pub async fn create_user(&self, user: CreateUser) -> AppResult<Uuid> {
        user.validate()?;
        let id = self.repository.users.create(&user).await?;
        tracing::info!("Created user {}", id);
        Ok(id)
    }

    /// Apply a partial update
    pub async fn update_user(&self, id: Uuid, user: UpdateUser) -> AppResult<Uuid> {
        user.validate()?;
        if user.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }
        self.repository.users.update(id, &user).await
    }

    /// Delete a user. Fails while borrow logs still reference them.
    pub async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.repository.users.delete(id).await?;
        tracing::info!("Deleted user {}", id);
        Ok(())
    }
}
