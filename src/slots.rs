//! Pure slot arithmetic for the availability engine
//!
//! Everything here is a deterministic function of windows, booked rows and a
//! supplied instant; the services own the I/O and feed these.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::models::window::{WeeklyWindow, MINUTES_PER_HOUR};

/// Weekday index of a date, 0 = Sunday
pub fn weekday_index(date: NaiveDate) -> i16 {
    date.weekday().num_days_from_sunday() as i16
}

/// Weekdays for which the host has no window at all
pub fn unavailable_week_days(windows: &[WeeklyWindow]) -> Vec<i16> {
    (0i16..7)
        .filter(|wd| !windows.iter().any(|w| w.weekday == *wd))
        .collect()
}

/// Whole hours fully inside the window: `start <= 60h` and `60(h+1) <= end`
pub fn possible_hours(window: &WeeklyWindow) -> Vec<i16> {
    (0i16..24)
        .filter(|h| {
            let slot_start = h * MINUTES_PER_HOUR;
            window.start_minutes <= slot_start
                && slot_start + MINUTES_PER_HOUR <= window.end_minutes
        })
        .collect()
}

/// Possible hours minus booked hours, minus hours whose slot start is at or
/// before `now`
pub fn available_hours(
    date: NaiveDate,
    possible: &[i16],
    booked: &[i16],
    now: DateTime<Utc>,
) -> Vec<i16> {
    possible
        .iter()
        .copied()
        .filter(|h| !booked.contains(h))
        .filter(|h| {
            let slot_start = date
                .and_hms_opt(*h as u32, 0, 0)
                .expect("hour is in 0..24")
                .and_utc();
            slot_start > now
        })
        .collect()
}

/// Days of the month at or over capacity.
///
/// `counts` holds (day-of-month, reserved bookings) pairs, one per day that
/// has at least one booking. Each day is matched against the window for that
/// date's weekday as configured now; a booking whose window was since removed
/// is compared against capacity 0 and therefore always flagged.
pub fn fully_booked_dates(
    year: i32,
    month: u32,
    counts: &[(i16, i64)],
    windows: &[WeeklyWindow],
) -> Vec<u32> {
    counts
        .iter()
        .filter_map(|(day, reserved)| {
            let day = *day as u32;
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            let weekday = weekday_index(date);
            let capacity = windows
                .iter()
                .find(|w| w.weekday == weekday)
                .map(|w| w.capacity() as i64)
                .unwrap_or(0);
            // >= on purpose: exactly at capacity means fully booked
            (*reserved >= capacity).then_some(day)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, FixedClock};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn window(weekday: i16, start_minutes: i16, end_minutes: i16) -> WeeklyWindow {
        WeeklyWindow {
            id: 1,
            host_id: Uuid::nil(),
            weekday,
            start_minutes,
            end_minutes,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn capacity_of_ten_hour_window() {
        // Mon 08:00-18:00
        assert_eq!(window(1, 480, 1080).capacity(), 10);
    }

    #[test]
    fn capacity_rounds_down_partial_hours() {
        // 08:00-18:30 still holds ten whole slots
        assert_eq!(window(1, 480, 1110).capacity(), 10);
        // 08:30-09:45 holds one
        assert_eq!(window(1, 510, 585).capacity(), 1);
    }

    #[test]
    fn possible_hours_span_the_window() {
        let hours = possible_hours(&window(2, 480, 1080));
        assert_eq!(hours, (8..18).collect::<Vec<i16>>());
    }

    #[test]
    fn possible_hours_exclude_partially_covered_slots() {
        // 08:30-18:30: the 8 o'clock slot starts before the window opens and
        // the 18 o'clock slot ends after it closes
        let hours = possible_hours(&window(2, 510, 1110));
        assert_eq!(hours, (9..18).collect::<Vec<i16>>());
    }

    #[test]
    fn available_hours_exclude_booked_and_past() {
        // Tue 08:00-18:00, no bookings, now = 09:30 on the same day
        let date = NaiveDate::from_ymd_opt(2025, 9, 23).unwrap();
        assert_eq!(weekday_index(date), 2);
        let possible = possible_hours(&window(2, 480, 1080));
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 9, 23, 9, 30, 0).unwrap());

        let available = available_hours(date, &possible, &[], clock.now());
        assert_eq!(available, (10..18).collect::<Vec<i16>>());
    }

    #[test]
    fn slot_starting_exactly_now_is_past() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 23).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 9, 23, 10, 0, 0).unwrap();
        let available = available_hours(date, &[9, 10, 11], &[], now);
        assert_eq!(available, vec![11]);
    }

    #[test]
    fn available_is_subset_of_possible() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 23).unwrap();
        let possible = possible_hours(&window(2, 480, 1080));
        let now = Utc.with_ymd_and_hms(2025, 9, 23, 12, 15, 0).unwrap();
        let available = available_hours(date, &possible, &[14, 16], now);
        assert!(available.iter().all(|h| possible.contains(h)));
        assert!(!available.contains(&14));
        assert!(!available.contains(&16));
    }

    #[test]
    fn future_date_keeps_every_unbooked_hour() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 30).unwrap();
        let possible = possible_hours(&window(2, 480, 1080));
        let now = Utc.with_ymd_and_hms(2025, 9, 23, 9, 30, 0).unwrap();
        assert_eq!(available_hours(date, &possible, &[], now), possible);
    }

    #[test]
    fn unavailable_week_days_complement_configured_windows() {
        let windows = vec![window(1, 480, 1080), window(3, 480, 1080)];
        assert_eq!(unavailable_week_days(&windows), vec![0, 2, 4, 5, 6]);
        assert_eq!(unavailable_week_days(&[]), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn day_at_capacity_is_fully_booked() {
        // 2025-09-22 is a Monday; Mon 08:00-18:00 holds 10 slots
        let windows = vec![window(1, 480, 1080)];
        assert_eq!(fully_booked_dates(2025, 9, &[(22, 10)], &windows), vec![22]);
        assert!(fully_booked_dates(2025, 9, &[(22, 9)], &windows).is_empty());
    }

    #[test]
    fn day_over_capacity_is_fully_booked() {
        let windows = vec![window(1, 480, 1080)];
        assert_eq!(fully_booked_dates(2025, 9, &[(22, 11)], &windows), vec![22]);
    }

    #[test]
    fn bookings_on_a_removed_window_always_flag_the_day() {
        // A Monday booking with no Monday window left: capacity 0
        assert_eq!(fully_booked_dates(2025, 9, &[(22, 1)], &[]), vec![22]);
    }

    #[test]
    fn days_without_bookings_are_never_flagged() {
        let windows = vec![window(1, 480, 1080)];
        assert!(fully_booked_dates(2025, 9, &[], &windows).is_empty());
    }
}
