//! Users repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        pagination::order_clause,
        user::{CreateUser, UpdateUser, User, UserQuery},
    },
};

const USER_COLUMNS: &str = "id_user, full_name, birth_date, address, phone_number";

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id_user = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Get user by phone number
    pub async fn get_by_phone(&self, phone_number: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE phone_number = $1 ORDER BY created_at LIMIT 1",
            USER_COLUMNS
        ))
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with phone {} not found", phone_number)))
    }

    /// List users with offset pagination, returning the page and the total count
    pub async fn list(&self, query: &UserQuery) -> AppResult<(Vec<User>, i64)> {
        let sql = format!(
            "SELECT {} FROM users {} LIMIT $1 OFFSET $2",
            USER_COLUMNS,
            order_clause(query.sort_by.column(), query.desc, "id_user")
        );

        let users = sqlx::query_as::<_, User>(&sql)
            .bind(query.limit)
            .bind(query.offset)
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok((users, total))
    }

    /// Create a new user
    pub async fn create(&self, user: &CreateUser) -> AppResult<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO users (full_name, birth_date, address, phone_number)
            VALUES ($1, $2, $3, $4)
            RETURNING id_user
            "#,
        )
        .bind(&user.full_name)
        .bind(user.birth_date)
        .bind(&user.address)
        .bind(&user.phone_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Update the provided fields of a user
    pub async fn update(&self, id: Uuid, data: &UpdateUser) -> AppResult<Uuid> {
        let mut sets = Vec::new();
        let mut idx = 1;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.full_name, "full_name");
        add_field!(data.birth_date, "birth_date");
        add_field!(data.address, "address");
        add_field!(data.phone_number, "phone_number");

        if sets.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }

        let query = format!(
            "UPDATE users SET {} WHERE id_user = ${} RETURNING id_user",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_scalar::<_, Uuid>(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.full_name);
        bind_field!(data.birth_date);
        bind_field!(data.address);
        bind_field!(data.phone_number);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Delete a user
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id_user = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }
        Ok(())
    }
}
