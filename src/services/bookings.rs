//! Booking commit service

use chrono::Timelike;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, CreateBooking},
    repository::Repository,
    services::availability::AvailabilityService,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    availability: AvailabilityService,
}

impl BookingsService {
    pub fn new(repository: Repository, availability: AvailabilityService) -> Self {
        Self {
            repository,
            availability,
        }
    }

    /// Validate and commit a booking.
    ///
    /// The availability re-check gives a friendly rejection for the common
    /// case; the uniqueness constraint on (host_id, starts_at) decides races
    /// between concurrent committers. No automatic retry either way.
    pub async fn create(&self, host_id: Uuid, data: &CreateBooking) -> AppResult<Booking> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if data.starts_at.minute() != 0
            || data.starts_at.second() != 0
            || data.starts_at.nanosecond() != 0
        {
            return Err(AppError::Validation(
                "Bookings start on the whole hour".to_string(),
            ));
        }

        let date = data.starts_at.date_naive();
        let hour = data.starts_at.hour() as i16;

        let day = self.availability.day_availability(host_id, date).await?;
        if !day.available_hours.contains(&hour) {
            return Err(AppError::SlotUnavailable(format!(
                "{} {}:00 is not available",
                date, hour
            )));
        }

        let booking = self
            .repository
            .bookings
            .insert(
                host_id,
                data.starts_at,
                &data.name,
                &data.email,
                data.notes.as_deref(),
            )
            .await?;

        tracing::info!(
            host_id = %host_id,
            starts_at = %booking.starts_at,
            "Booking committed"
        );

        Ok(booking)
    }
}
