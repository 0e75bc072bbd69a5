//! Availability queries: month aggregation, day slots, calendar grid

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    calendar::{self, CalendarWeek},
    clock::Clock,
    error::{AppError, AppResult},
    models::availability::{DayAvailability, MonthUnavailability},
    repository::Repository,
    slots,
};

#[derive(Clone)]
pub struct AvailabilityService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl AvailabilityService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Which weekdays and dates of a month cannot be booked.
    ///
    /// One grouped query fetches the month's reserved counts; the comparison
    /// against each weekday's capacity happens in-process.
    pub async fn month_unavailability(
        &self,
        host_id: Uuid,
        year: i32,
        month: u32,
    ) -> AppResult<MonthUnavailability> {
        let (month_start, month_end) = month_bounds(year, month)?;

        let windows = self.repository.windows.list_for_host(host_id).await?;
        let counts = self
            .repository
            .bookings
            .booked_counts_for_month(host_id, month_start, month_end)
            .await?;

        Ok(MonthUnavailability {
            unavailable_week_days: slots::unavailable_week_days(&windows),
            unavailable_dates: slots::fully_booked_dates(year, month, &counts, &windows),
        })
    }

    /// Bookable hours for one date
    pub async fn day_availability(
        &self,
        host_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<DayAvailability> {
        let window = self
            .repository
            .windows
            .for_weekday(host_id, slots::weekday_index(date))
            .await?;

        let Some(window) = window else {
            // No window that weekday: nothing bookable, which is a valid answer
            return Ok(DayAvailability {
                date,
                possible_hours: vec![],
                available_hours: vec![],
            });
        };

        let possible = slots::possible_hours(&window);
        let booked = self.repository.bookings.booked_hours_on(host_id, date).await?;
        let available = slots::available_hours(date, &possible, &booked, self.clock.now());

        Ok(DayAvailability {
            date,
            possible_hours: possible,
            available_hours: available,
        })
    }

    /// Month view: unavailability folded into a fixed-width week grid
    pub async fn month_grid(
        &self,
        host_id: Uuid,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<CalendarWeek>> {
        let unavailability = self.month_unavailability(host_id, year, month).await?;
        Ok(calendar::build_month_grid(
            year,
            month,
            &unavailability,
            self.clock.now(),
        ))
    }
}

/// UTC bounds [first of month, first of next month) with month validation
fn month_bounds(year: i32, month: u32) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::Validation(format!("Invalid year/month {}-{}", year, month)))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| AppError::Validation(format!("Invalid year/month {}-{}", year, month)))?;

    let start = first.and_hms_opt(0, 0, 0).expect("midnight").and_utc();
    let end = next.and_hms_opt(0, 0, 0).expect("midnight").and_utc();
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds_cover_the_whole_month() {
        let (start, end) = month_bounds(2025, 9).unwrap();
        assert_eq!(start.to_rfc3339(), "2025-09-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-10-01T00:00:00+00:00");
    }

    #[test]
    fn december_rolls_into_january() {
        let (_, end) = month_bounds(2025, 12).unwrap();
        assert_eq!(end.to_rfc3339(), "2026-01-01T00:00:00+00:00");
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(month_bounds(2025, 0).is_err());
        assert!(month_bounds(2025, 13).is_err());
    }
}
