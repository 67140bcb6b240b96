//! User (library member) model and related types

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::pagination::{default_limit, UserSortBy};

/// Accepted phone numbers: `7` followed by ten digits
pub static PHONE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^7[0-9]{10}$").expect("phone number pattern is valid"));

/// User record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id_user: Uuid,
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone_number: String,
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    /// `7` followed by ten digits
    #[validate(regex(path = *PHONE_NUMBER_RE, message = "Phone number must match 7XXXXXXXXXX"))]
    pub phone_number: String,
}

/// Partial user update; absent fields are left unchanged.
///
/// `birth_date` and `address` also accept an explicit `null`, which clears them.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 255, message = "Full name must be 1-255 characters"))]
    pub full_name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, format = Date, nullable)]
    pub birth_date: Option<Option<NaiveDate>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, nullable)]
    pub address: Option<Option<String>>,
    #[validate(regex(path = *PHONE_NUMBER_RE, message = "Phone number must match 7XXXXXXXXXX"))]
    pub phone_number: Option<String>,
}

impl UpdateUser {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.birth_date.is_none()
            && self.address.is_none()
            && self.phone_number.is_none()
    }
}

/// User list parameters
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    #[serde(default)]
    #[validate(range(min = 0, message = "offset must be >= 0"))]
    pub offset: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000, message = "limit must be between 1 and 1000"))]
    pub limit: i64,
    /// Column to sort by: empty, `full_name` or `address`
    #[serde(default)]
    pub sort_by: UserSortBy,
    #[serde(default)]
    pub desc: bool,
}

/// Paginated user list
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersPage {
    pub users: Vec<User>,
    pub next_from: Option<i64>,
    pub count: usize,
    pub total_count: i64,
    pub total_pages: i64,
}

/// Single user wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct UserEnvelope {
    pub user: User,
}

/// Result of a user mutation
#[derive(Debug, Serialize, ToSchema)]
pub struct UserSuccess {
    pub status: String,
    pub id_user: Uuid,
}

impl UserSuccess {
    pub fn new(id_user: Uuid) -> Self {
        Self {
            status: super::SUCCESS.to_string(),
            id_user,
        }
    }
}

pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_NUMBER_RE.is_match(phone)
}
