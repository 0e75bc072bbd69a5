//! Repository layer for database operations

pub mod bookings;
pub mod hosts;
pub mod windows;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub hosts: hosts::HostsRepository,
    pub windows: windows::WindowsRepository,
    pub bookings: bookings::BookingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            hosts: hosts::HostsRepository::new(pool.clone()),
            windows: windows::WindowsRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            pool,
        }
    }
}
