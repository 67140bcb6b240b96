//! Offset/limit pagination shared by list endpoints

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_LIMIT: i64 = 10;

pub fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

pub fn default_true() -> bool {
    true
}

/// Offset into the next page, or `None` when this page was not full
pub fn next_from(offset: i64, limit: i64, count: usize) -> Option<i64> {
    if (count as i64) < limit {
        None
    } else {
        Some(offset + limit)
    }
}

/// Number of pages of `limit` rows needed to hold `total` rows
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// SQL sort direction keyword
pub fn direction(desc: bool) -> &'static str {
    if desc {
        "DESC"
    } else {
        "ASC"
    }
}

/// Plain list parameters for name-sorted resources (authors, genres)
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    #[serde(default)]
    #[validate(range(min = 0, message = "offset must be >= 0"))]
    pub offset: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000, message = "limit must be between 1 and 1000"))]
    pub limit: i64,
    /// Sort by name descending
    #[serde(default)]
    pub desc: bool,
}

/// Sortable user columns; the empty value leaves rows unsorted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub enum UserSortBy {
    #[default]
    #[serde(rename = "")]
    Unsorted,
    #[serde(rename = "full_name")]
    FullName,
    #[serde(rename = "address")]
    Address,
}

impl UserSortBy {
    pub fn column(&self) -> Option<&'static str> {
        match self {
            UserSortBy::Unsorted => None,
            UserSortBy::FullName => Some("full_name"),
            UserSortBy::Address => Some("address"),
        }
    }
}

/// Sortable book columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub enum BookSortBy {
    #[default]
    #[serde(rename = "")]
    Unsorted,
    #[serde(rename = "title")]
    Title,
}

impl BookSortBy {
    pub fn column(&self) -> Option<&'static str> {
        match self {
            BookSortBy::Unsorted => None,
            BookSortBy::Title => Some("title"),
        }
    }
}

/// `ORDER BY` clause for an optional column, falling back to `fallback`
pub fn order_clause(column: Option<&str>, desc: bool, fallback: &str) -> String {
    match column {
        Some(col) => format!("ORDER BY {} {}, {}", col, direction(desc), fallback),
        None => format!("ORDER BY {}", fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_from() {
        assert_eq!(next_from(0, 10, 10), Some(10));
        assert_eq!(next_from(20, 10, 10), Some(30));
        assert_eq!(next_from(0, 10, 9), None);
        assert_eq!(next_from(40, 10, 0), None);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(11, 0), 0);
    }

    #[test]
    fn test_sort_whitelist() {
        let parsed: UserSortBy = serde_json::from_str("\"\"").unwrap();
        assert_eq!(parsed, UserSortBy::Unsorted);
        let parsed: UserSortBy = serde_json::from_str("\"address\"").unwrap();
        assert_eq!(parsed.column(), Some("address"));
        assert!(serde_json::from_str::<UserSortBy>("\"phone_number; DROP TABLE users\"").is_err());
        assert!(serde_json::from_str::<BookSortBy>("\"author\"").is_err());
    }

    #[test]
    fn test_list_query_limits() {
        let query: ListQuery = serde_json::from_str(r#"{"limit": 0}"#).unwrap();
        assert!(query.validate().is_err());
        let query: ListQuery = serde_json::from_str(r#"{"offset": -1}"#).unwrap();
        assert!(query.validate().is_err());
        let query: ListQuery = serde_json::from_str(r#"{"limit": 1000}"#).unwrap();
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_order_clause() {
        assert_eq!(order_clause(Some("title"), true, "id_book"), "ORDER BY title DESC, id_book");
        assert_eq!(order_clause(None, true, "id_book"), "ORDER BY id_book");
    }
}
