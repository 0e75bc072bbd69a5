//! Weekly availability window model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Minutes in one bookable hour
pub const MINUTES_PER_HOUR: i16 = 60;
/// Minutes in one day; windows never cross midnight
pub const MINUTES_PER_DAY: i16 = 1440;

/// A recurring availability window bound to one weekday (0 = Sunday)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WeeklyWindow {
    pub id: i32,
    pub host_id: Uuid,
    /// Day of week (0=Sunday, 6=Saturday)
    pub weekday: i16,
    /// Start of the window, minutes from midnight
    pub start_minutes: i16,
    /// End of the window, minutes from midnight
    pub end_minutes: i16,
    pub created_at: DateTime<Utc>,
}

impl WeeklyWindow {
    /// Number of whole hourly slots the window holds in one day
    pub fn capacity(&self) -> i16 {
        (self.end_minutes - self.start_minutes) / MINUTES_PER_HOUR
    }
}

/// One window in a replace-windows request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct WindowSpec {
    /// Day of week (0=Sunday, 6=Saturday)
    pub weekday: i16,
    pub start_minutes: i16,
    pub end_minutes: i16,
}

/// Replace the host's full weekly pattern
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplaceWindows {
    pub windows: Vec<WindowSpec>,
}
