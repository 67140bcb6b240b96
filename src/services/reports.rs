//! Report service

use validator::Validate;

use crate::{
    error::AppResult,
    models::report::{
        CurrentBooksReport, FineBorrowsReport, GenresTopReport, ReportQuery, TotalBooksReport,
        UsersGeoReport, VisitsReport,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn total_books(&self, query: &ReportQuery) -> AppResult<TotalBooksReport> {
        query.validate()?;
        let total_books = self.repository.reports.total_borrows_per_user(query.limit).await?;
        Ok(TotalBooksReport { total_books })
    }

    pub async fn current_books(&self, query: &ReportQuery) -> AppResult<CurrentBooksReport> {
        query.validate()?;
        let current_books = self.repository.reports.current_borrows_per_user(query.limit).await?;
        Ok(CurrentBooksReport { current_books })
    }

    pub async fn last_visits(&self, query: &ReportQuery) -> AppResult<VisitsReport> {
        query.validate()?;
        let visits = self.repository.reports.last_visits(query.limit).await?;
        Ok(VisitsReport { visits })
    }

    pub async fn popular_genres(&self, query: &ReportQuery) -> AppResult<GenresTopReport> {
        query.validate()?;
        let genres_top = self.repository.reports.popular_genres(query.limit).await?;
        Ok(GenresTopReport { genres_top })
    }

    pub async fn fine_borrows(&self, query: &ReportQuery) -> AppResult<FineBorrowsReport> {
        query.validate()?;
        let borrows = self.repository.reports.overdue_borrows(query.limit).await?;
        Ok(FineBorrowsReport { borrows })
    }

    pub async fn users_geo(&self, query: &ReportQuery) -> AppResult<UsersGeoReport> {
        query.validate()?;
        let users_geo = self.repository.reports.borrowers_geo(query.limit).await?;
        Ok(UsersGeoReport { users_geo })
    }
}
