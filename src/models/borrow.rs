//! Borrow/return log model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::pagination::{default_limit, default_true};

/// Borrow/return log entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowLog {
    pub id_borrow: Uuid,
    pub id_user: Uuid,
    pub id_book: Uuid,
    pub is_returned: bool,
    pub borrow_date: NaiveDate,
    /// Date the book is due back
    pub return_date: NaiveDate,
}

/// Lend one or more books to a user
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_borrow_dates"))]
pub struct CreateBorrow {
    pub id_user: Uuid,
    #[validate(length(min = 1, message = "At least one book is required"))]
    pub book_ids: Vec<Uuid>,
    pub borrow_date: NaiveDate,
    pub return_date: NaiveDate,
}

fn validate_borrow_dates(borrow: &CreateBorrow) -> Result<(), ValidationError> {
    if borrow.return_date < borrow.borrow_date {
        let mut err = ValidationError::new("return_before_borrow");
        err.message = Some("return_date must not be before borrow_date".into());
        return Err(err);
    }
    Ok(())
}

/// Borrow log filters; all given filters must match
#[derive(Debug, Default, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BorrowQuery {
    pub id_user: Option<Uuid>,
    pub id_book: Option<Uuid>,
    pub is_returned: Option<bool>,
    #[serde(default)]
    #[validate(range(min = 0, message = "offset must be >= 0"))]
    pub offset: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000, message = "limit must be between 1 and 1000"))]
    pub limit: i64,
}

impl BorrowQuery {
    /// `WHERE` conditions for the filters present, numbered from `$1`
    pub fn conditions(&self) -> Vec<String> {
        let mut conditions: Vec<String> = Vec::new();

        macro_rules! add_filter {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    let placeholder = conditions.len() + 1;
                    conditions.push(format!("{} = ${}", $name, placeholder));
                }
            };
        }

        add_filter!(self.id_user, "id_user");
        add_filter!(self.id_book, "id_book");
        add_filter!(self.is_returned, "is_returned");

        conditions
    }
}

/// Mark a log returned (`true`) or not returned (`false`)
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BorrowStatusQuery {
    #[serde(default = "default_true")]
    pub status: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BorrowsPage {
    pub borrows: Vec<BorrowLog>,
    pub next_from: Option<i64>,
    pub count: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BorrowEnvelope {
    pub borrow: BorrowLog,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BorrowSuccess {
    pub status: String,
    pub id_borrow: Uuid,
}

impl BorrowSuccess {
    pub fn new(id_borrow: Uuid) -> Self {
        Self {
            status: super::SUCCESS.to_string(),
            id_borrow,
        }
    }
}

/// Logs created by a single lending request, in `book_ids` order
#[derive(Debug, Serialize, ToSchema)]
pub struct BorrowsCreated {
    pub status: String,
    pub id_borrows: Vec<Uuid>,
}

impl BorrowsCreated {
    pub fn new(id_borrows: Vec<Uuid>) -> Self {
        Self {
            status: super::SUCCESS.to_string(),
            id_borrows,
        }
    }
}
