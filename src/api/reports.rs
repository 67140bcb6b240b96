//! Aggregate report endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::report::{
        CurrentBooksReport, FineBorrowsReport, GenresTopReport, Report, ReportQuery,
        TotalBooksReport, UsersGeoReport, VisitsReport,
    },
};

use super::RequireApiKey;

/// Total number of borrows per user
#[utoipa::path(
    get,
    path = "/reports/books/users/all",
    tag = "reports",
    security(("api_key" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Report, nested under `report`", body = TotalBooksReport)
    )
)]
pub async fn total_books(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Report<TotalBooksReport>>> {
    let report = state.services.reports.total_books(&query).await?;
    Ok(Json(Report::new(report)))
}

/// Unreturned borrows per user
#[utoipa::path(
    get,
    path = "/reports/books/users/current",
    tag = "reports",
    security(("api_key" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Report, nested under `report`", body = CurrentBooksReport)
    )
)]
pub async fn current_books(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Report<CurrentBooksReport>>> {
    let report = state.services.reports.current_books(&query).await?;
    Ok(Json(Report::new(report)))
}

/// Last borrow date per user
#[utoipa::path(
    get,
    path = "/reports/visit/last",
    tag = "reports",
    security(("api_key" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Report, nested under `report`", body = VisitsReport)
    )
)]
pub async fn last_visits(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Report<VisitsReport>>> {
    let report = state.services.reports.last_visits(&query).await?;
    Ok(Json(Report::new(report)))
}

/// Most borrowed genres
#[utoipa::path(
    get,
    path = "/reports/genres/popular",
    tag = "reports",
    security(("api_key" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Report, nested under `report`", body = GenresTopReport),
        (status = 400, description = "limit must be > 0")
    )
)]
pub async fn popular_genres(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Report<GenresTopReport>>> {
    let report = state.services.reports.popular_genres(&query).await?;
    Ok(Json(Report::new(report)))
}

/// Overdue borrows
#[utoipa::path(
    get,
    path = "/reports/borrows/fine",
    tag = "reports",
    security(("api_key" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Report, nested under `report`", body = FineBorrowsReport)
    )
)]
pub async fn fine_borrows(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Report<FineBorrowsReport>>> {
    let report = state.services.reports.fine_borrows(&query).await?;
    Ok(Json(Report::new(report)))
}

/// Borrowers with address and phone
#[utoipa::path(
    get,
    path = "/reports/borrows/geo",
    tag = "reports",
    security(("api_key" = [])),
    params(ReportQuery),
    responses(
        (status = 200, description = "Report, nested under `report`", body = UsersGeoReport)
    )
)]
pub async fn users_geo(
    State(state): State<crate::AppState>,
    _auth: RequireApiKey,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Report<UsersGeoReport>>> {
    let report = state.services.reports.users_geo(&query).await?;
    Ok(Json(Report::new(report)))
}
