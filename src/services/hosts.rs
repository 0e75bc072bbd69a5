//! Host onboarding service (registration, weekly pattern)

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        host::{CreateHost, Host},
        window::{ReplaceWindows, WeeklyWindow, WindowSpec, MINUTES_PER_DAY, MINUTES_PER_HOUR},
    },
    repository::Repository,
};

static HANDLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_-]{3,30}$").expect("valid regex"));

#[derive(Clone)]
pub struct HostsService {
    repository: Repository,
}

impl HostsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new host
    pub async fn create(&self, data: &CreateHost) -> AppResult<Host> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if !HANDLE_RE.is_match(&data.handle) {
            return Err(AppError::Validation(
                "Handle may only contain lowercase letters, digits, '-' and '_'".to_string(),
            ));
        }
        self.repository.hosts.create(data).await
    }

    /// Resolve a public handle to a host
    pub async fn resolve(&self, handle: &str) -> AppResult<Host> {
        self.repository.hosts.get_by_handle(handle).await
    }

    /// List a host's weekly windows
    pub async fn list_windows(&self, host_id: Uuid) -> AppResult<Vec<WeeklyWindow>> {
        self.repository.windows.list_for_host(host_id).await
    }

    /// Replace the host's full weekly pattern
    pub async fn replace_windows(
        &self,
        host_id: Uuid,
        data: &ReplaceWindows,
    ) -> AppResult<Vec<WeeklyWindow>> {
        validate_windows(&data.windows)?;
        self.repository
            .windows
            .replace_for_host(host_id, &data.windows)
            .await
    }
}

/// Check the window invariants before touching storage
fn validate_windows(windows: &[WindowSpec]) -> AppResult<()> {
    let mut seen = [false; 7];
    for spec in windows {
        if !(0i16..7).contains(&spec.weekday) {
            return Err(AppError::Validation(format!(
                "Weekday {} is out of range (0-6)",
                spec.weekday
            )));
        }
        if spec.start_minutes < 0
            || spec.end_minutes > MINUTES_PER_DAY
            || spec.start_minutes >= spec.end_minutes
        {
            return Err(AppError::Validation(format!(
                "Window {}-{} is outside 0-1440 or empty",
                spec.start_minutes, spec.end_minutes
            )));
        }
        if spec.end_minutes - spec.start_minutes < MINUTES_PER_HOUR {
            return Err(AppError::Validation(
                "A window must cover at least one whole hour".to_string(),
            ));
        }
        let day = spec.weekday as usize;
        if seen[day] {
            return Err(AppError::Validation(format!(
                "Weekday {} appears more than once",
                spec.weekday
            )));
        }
        seen[day] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(weekday: i16, start_minutes: i16, end_minutes: i16) -> WindowSpec {
        WindowSpec {
            weekday,
            start_minutes,
            end_minutes,
        }
    }

    #[test]
    fn accepts_a_valid_weekly_pattern() {
        let windows = vec![spec(1, 480, 1080), spec(2, 480, 1080), spec(5, 600, 720)];
        assert!(validate_windows(&windows).is_ok());
    }

    #[test]
    fn rejects_out_of_range_weekday() {
        assert!(validate_windows(&[spec(7, 480, 1080)]).is_err());
        assert!(validate_windows(&[spec(-1, 480, 1080)]).is_err());
    }

    #[test]
    fn rejects_sub_hour_window() {
        assert!(validate_windows(&[spec(1, 480, 539)]).is_err());
        // Exactly one hour is fine
        assert!(validate_windows(&[spec(1, 480, 540)]).is_ok());
    }

    #[test]
    fn rejects_inverted_or_overflowing_bounds() {
        assert!(validate_windows(&[spec(1, 1080, 480)]).is_err());
        assert!(validate_windows(&[spec(1, 480, 1441)]).is_err());
        assert!(validate_windows(&[spec(1, -10, 480)]).is_err());
    }

    #[test]
    fn rejects_duplicate_weekday() {
        assert!(validate_windows(&[spec(1, 480, 1080), spec(1, 600, 720)]).is_err());
    }
}
