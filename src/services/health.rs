//! Database readiness

use crate::{error::AppResult, repository::Repository};

#[derive(Clone)]
pub struct HealthService {
    repository: Repository,
}

impl HealthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn check_database(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
