//! Derived availability views (never persisted)
//!
//! These serialize camelCase: they are the public wire contract consumed by
//! the scheduling front end.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Bookable hours for one calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    pub date: NaiveDate,
    /// Top of each whole hour inside the host's window for that weekday
    pub possible_hours: Vec<i16>,
    /// Subset of possible_hours not booked and not in the past
    pub available_hours: Vec<i16>,
}

/// Which parts of a month cannot be booked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthUnavailability {
    /// Weekdays with no configured window (0=Sunday)
    pub unavailable_week_days: Vec<i16>,
    /// Days of the month at or over capacity
    pub unavailable_dates: Vec<u32>,
}

/// Query parameters for month-level queries
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct MonthQuery {
    /// Target year
    pub year: i32,
    /// Target month (1-12)
    pub month: u32,
}

/// Query parameters for the day availability query
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct DayQuery {
    /// Target date (YYYY-MM-DD)
    pub date: String,
}
