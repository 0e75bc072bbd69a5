//! Month grid layout for the scheduling calendar
//!
//! Pure, deterministic layout: in-month days carry their availability flags,
//! the surrounding padding days are always disabled, and the result is a
//! whole number of weeks starting on Sunday.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::availability::MonthUnavailability;
use crate::slots::weekday_index;

/// One cell of the calendar grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub disabled: bool,
}

/// One row of the calendar grid, numbered from 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CalendarWeek {
    pub week: u32,
    pub days: Vec<CalendarDay>,
}

/// Number of days in a month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("valid month");
    next.signed_duration_since(first).num_days() as u32
}

/// Build the fixed-width week grid for a month
pub fn build_month_grid(
    year: i32,
    month: u32,
    unavailability: &MonthUnavailability,
    now: DateTime<Utc>,
) -> Vec<CalendarWeek> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month");
    let last = NaiveDate::from_ymd_opt(year, month, days_in_month(year, month))
        .expect("valid month");

    let mut days: Vec<CalendarDay> = Vec::new();

    // Trailing days of the previous month so the grid starts on Sunday
    let lead = weekday_index(first) as u64;
    for offset in (1..=lead).rev() {
        let date = first.checked_sub_days(Days::new(offset)).expect("in range");
        days.push(CalendarDay { date, disabled: true });
    }

    for day in 1..=days_in_month(year, month) {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid day");
        let end_of_day = date.and_hms_opt(23, 59, 59).expect("valid time").and_utc();
        let disabled = end_of_day < now
            || unavailability
                .unavailable_week_days
                .contains(&weekday_index(date))
            || unavailability.unavailable_dates.contains(&day);
        days.push(CalendarDay { date, disabled });
    }

    // Leading days of the next month so the total is a multiple of 7
    let tail = 7 - (weekday_index(last) as u64 + 1);
    for offset in 1..=tail {
        let date = last.checked_add_days(Days::new(offset)).expect("in range");
        days.push(CalendarDay { date, disabled: true });
    }

    days.chunks(7)
        .enumerate()
        .map(|(index, chunk)| CalendarWeek {
            week: index as u32 + 1,
            days: chunk.to_vec(),
        })
        .collect()
}
