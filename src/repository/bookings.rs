//! Bookings repository for database operations

use chrono::{DateTime, Days, NaiveDate, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::booking::Booking,
};

/// Name of the unique constraint guarding (host_id, starts_at)
const SLOT_CONSTRAINT: &str = "bookings_host_starts_at_key";

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a booking.
    ///
    /// The (host_id, starts_at) uniqueness constraint is the final arbiter
    /// against double-booking: losing the race surfaces as `SlotUnavailable`,
    /// any other database failure propagates unchanged.
    pub async fn insert(
        &self,
        host_id: Uuid,
        starts_at: DateTime<Utc>,
        attendee_name: &str,
        attendee_email: &str,
        notes: Option<&str>,
    ) -> AppResult<Booking> {
        let result = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (id, host_id, attendee_name, attendee_email, notes, starts_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(host_id)
        .bind(attendee_name)
        .bind(attendee_email)
        .bind(notes)
        .bind(starts_at)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(booking) => Ok(booking),
            Err(sqlx::Error::Database(e))
                if e.is_unique_violation() && e.constraint() == Some(SLOT_CONSTRAINT) =>
            {
                Err(AppError::SlotUnavailable(format!(
                    "Slot {} is already booked",
                    starts_at
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Booked slot count per day-of-month for one host and month.
    ///
    /// One grouped query per month view; days without bookings do not appear.
    /// Extraction happens in UTC regardless of the session timezone, so the
    /// day numbers line up with the in-process capacity comparison.
    pub async fn booked_counts_for_month(
        &self,
        host_id: Uuid,
        month_start: DateTime<Utc>,
        month_end: DateTime<Utc>,
    ) -> AppResult<Vec<(i16, i64)>> {
        let rows = sqlx::query_as::<_, (i16, i64)>(
            r#"
            SELECT CAST(EXTRACT(DAY FROM (starts_at AT TIME ZONE 'UTC')) AS SMALLINT) AS day_of_month,
                   COUNT(*) AS reserved
            FROM bookings
            WHERE host_id = $1 AND starts_at >= $2 AND starts_at < $3
            GROUP BY day_of_month
            ORDER BY day_of_month
            "#,
        )
        .bind(host_id)
        .bind(month_start)
        .bind(month_end)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Hours already booked on one date for a host, in UTC
    pub async fn booked_hours_on(&self, host_id: Uuid, date: NaiveDate) -> AppResult<Vec<i16>> {
        let day_start = date.and_hms_opt(0, 0, 0).expect("midnight").and_utc();
        let day_end = date
            .checked_add_days(Days::new(1))
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("next midnight")
            .and_utc();

        let hours = sqlx::query_scalar::<_, i16>(
            r#"
            SELECT CAST(EXTRACT(HOUR FROM (starts_at AT TIME ZONE 'UTC')) AS SMALLINT)
            FROM bookings
            WHERE host_id = $1 AND starts_at >= $2 AND starts_at < $3
            ORDER BY starts_at
            "#,
        )
        .bind(host_id)
        .bind(day_start)
        .bind(day_end)
        .fetch_all(&self.pool)
        .await?;
        Ok(hours)
    }
}
