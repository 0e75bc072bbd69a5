//! Booking model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A committed booking for one hourly slot
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub host_id: Uuid,
    pub attendee_name: String,
    pub attendee_email: String,
    pub notes: Option<String>,
    /// Slot start; always a whole hour (minute = second = 0)
    pub starts_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Create booking request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    /// Requested slot start (ISO 8601, whole hour)
    pub starts_at: DateTime<Utc>,
    #[validate(length(min = 5, message = "Name must be at least 5 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub notes: Option<String>,
}
