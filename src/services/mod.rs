//! Business logic services

pub mod availability;
pub mod bookings;
pub mod hosts;

use std::sync::Arc;

use crate::{clock::Clock, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    repository: Repository,
    pub hosts: hosts::HostsService,
    pub availability: availability::AvailabilityService,
    pub bookings: bookings::BookingsService,
}

impl Services {
    /// Create all services with the given repository and clock
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        let availability =
            availability::AvailabilityService::new(repository.clone(), clock.clone());
        Self {
            hosts: hosts::HostsService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone(), availability.clone()),
            availability,
            repository,
        }
    }

    /// Check that the database still answers queries
    pub async fn ping_database(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.repository.pool)
            .await?;
        Ok(())
    }
}
