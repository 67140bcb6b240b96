//! Aggregate report rows

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Optional cap on the number of report rows
#[derive(Debug, Default, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ReportQuery {
    #[validate(range(min = 1, message = "limit must be > 0"))]
    pub limit: Option<i64>,
}

/// Every report body is nested under `report`
#[derive(Debug, Serialize)]
pub struct Report<T: Serialize> {
    pub report: T,
}

impl<T: Serialize> Report<T> {
    pub fn new(report: T) -> Self {
        Self { report }
    }
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct UserBorrowTotal {
    pub id_user: Uuid,
    pub total_count: i64,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct UserBorrowCurrent {
    pub id_user: Uuid,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct UserLastVisit {
    pub id_user: Uuid,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct GenrePopularity {
    pub genre_name: String,
    pub genre_count: i64,
}

/// Unreturned borrow past its return date
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct OverdueBorrow {
    pub full_name: String,
    pub book_title: String,
    pub borrow_date: NaiveDate,
    pub return_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct BorrowerGeo {
    pub full_name: String,
    pub phone: String,
    pub address: Option<String>,
    pub book_title: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TotalBooksReport {
    pub total_books: Vec<UserBorrowTotal>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentBooksReport {
    pub current_books: Vec<UserBorrowCurrent>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VisitsReport {
    pub visits: Vec<UserLastVisit>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenresTopReport {
    pub genres_top: Vec<GenrePopularity>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FineBorrowsReport {
    pub borrows: Vec<OverdueBorrow>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UsersGeoReport {
    pub users_geo: Vec<BorrowerGeo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_envelope_shape() {
        let body = Report::new(GenresTopReport {
            genres_top: vec![GenrePopularity {
                genre_name: "Fantasy".to_string(),
                genre_count: 3,
            }],
        });
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["report"]["genres_top"][0]["genre_name"], "Fantasy");
        assert_eq!(value["report"]["genres_top"][0]["genre_count"], 3);
    }

    #[test]
    fn test_report_limit_must_be_positive() {
        assert!(ReportQuery { limit: Some(0) }.validate().is_err());
        assert!(ReportQuery { limit: Some(5) }.validate().is_ok());
        assert!(ReportQuery::default().validate().is_ok());
    }
}
