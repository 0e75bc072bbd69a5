//! Slotwise Availability & Booking Server
//!
//! A Rust implementation of a scheduling backend: hosts publish a recurring
//! weekly availability pattern and visitors book hourly slots within it,
//! served over a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod slots;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
