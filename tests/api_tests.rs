//! API integration tests
//!
//! These run against a live server with a migrated database.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Register a throwaway host with a Tuesday 08:00-18:00 window
async fn create_host_with_window(client: &Client) -> String {
    let handle = format!(
        "host{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    );

    let response = client
        .post(format!("{}/hosts", BASE_URL))
        .json(&json!({
            "handle": handle,
            "name": "Test Host"
        }))
        .send()
        .await
        .expect("Failed to create host");
    assert_eq!(response.status(), 201);

    let response = client
        .put(format!("{}/hosts/{}/windows", BASE_URL, handle))
        .json(&json!({
            "windows": [
                { "weekday": 2, "start_minutes": 480, "end_minutes": 1080 }
            ]
        }))
        .send()
        .await
        .expect("Failed to set windows");
    assert_eq!(response.status(), 200);

    handle
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_reports_database() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_unknown_handle_is_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/hosts/no-such-handle", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_invalid_handle_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/hosts", BASE_URL))
        .json(&json!({
            "handle": "Bad Handle!",
            "name": "Test Host"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_sub_hour_window_is_rejected() {
    let client = Client::new();
    let handle = create_host_with_window(&client).await;

    let response = client
        .put(format!("{}/hosts/{}/windows", BASE_URL, handle))
        .json(&json!({
            "windows": [
                { "weekday": 1, "start_minutes": 480, "end_minutes": 500 }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_unavailable_dates_lists_missing_weekdays() {
    let client = Client::new();
    let handle = create_host_with_window(&client).await;

    let response = client
        .get(format!("{}/hosts/{}/unavailable-dates", BASE_URL, handle))
        .query(&[("year", "2099"), ("month", "1")])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    // Only Tuesday (2) has a window
    assert_eq!(
        body["unavailableWeekDays"],
        json!([0, 1, 3, 4, 5, 6])
    );
    assert_eq!(body["unavailableDates"], json!([]));
}

#[tokio::test]
#[ignore]
async fn test_day_availability_on_unconfigured_weekday_is_empty() {
    let client = Client::new();
    let handle = create_host_with_window(&client).await;

    // 2099-01-05 is a Monday; only Tuesday is configured
    let response = client
        .get(format!("{}/hosts/{}/availability", BASE_URL, handle))
        .query(&[("date", "2099-01-05")])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["possibleHours"], json!([]));
    assert_eq!(body["availableHours"], json!([]));
}

#[tokio::test]
#[ignore]
async fn test_booking_removes_exactly_that_hour() {
    let client = Client::new();
    let handle = create_host_with_window(&client).await;

    // 2099-01-06 is a Tuesday
    let response = client
        .get(format!("{}/hosts/{}/availability", BASE_URL, handle))
        .query(&[("date", "2099-01-06")])
        .send()
        .await
        .expect("Failed to send request");
    let before: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        before["availableHours"],
        json!([8, 9, 10, 11, 12, 13, 14, 15, 16, 17])
    );

    let response = client
        .post(format!("{}/hosts/{}/bookings", BASE_URL, handle))
        .json(&json!({
            "starts_at": "2099-01-06T10:00:00Z",
            "name": "Alice Example",
            "email": "alice@example.com",
            "notes": "First visit"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/hosts/{}/availability", BASE_URL, handle))
        .query(&[("date", "2099-01-06")])
        .send()
        .await
        .expect("Failed to send request");
    let after: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        after["availableHours"],
        json!([8, 9, 11, 12, 13, 14, 15, 16, 17])
    );
    assert_eq!(after["possibleHours"], before["possibleHours"]);
}

#[tokio::test]
#[ignore]
async fn test_short_name_is_rejected() {
    let client = Client::new();
    let handle = create_host_with_window(&client).await;

    let response = client
        .post(format!("{}/hosts/{}/bookings", BASE_URL, handle))
        .json(&json!({
            "starts_at": "2099-01-06T10:00:00Z",
            "name": "Ann",
            "email": "ann@example.com"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_off_hour_start_is_rejected() {
    let client = Client::new();
    let handle = create_host_with_window(&client).await;

    let response = client
        .post(format!("{}/hosts/{}/bookings", BASE_URL, handle))
        .json(&json!({
            "starts_at": "2099-01-06T10:30:00Z",
            "name": "Alice Example",
            "email": "alice@example.com"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_double_booking_is_rejected() {
    let client = Client::new();
    let handle = create_host_with_window(&client).await;

    let booking = json!({
        "starts_at": "2099-01-13T14:00:00Z",
        "name": "Alice Example",
        "email": "alice@example.com"
    });

    let first = client
        .post(format!("{}/hosts/{}/bookings", BASE_URL, handle))
        .json(&booking)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(first.status(), 201);

    let second = client
        .post(format!("{}/hosts/{}/bookings", BASE_URL, handle))
        .json(&booking)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_concurrent_commits_yield_one_success() {
    let client = Client::new();
    let handle = create_host_with_window(&client).await;

    let booking = json!({
        "starts_at": "2099-01-20T09:00:00Z",
        "name": "Alice Example",
        "email": "alice@example.com"
    });

    let url = format!("{}/hosts/{}/bookings", BASE_URL, handle);
    let (a, b) = tokio::join!(
        client.post(&url).json(&booking).send(),
        client.post(&url).json(&booking).send(),
    );

    let a = a.expect("Failed to send request").status();
    let b = b.expect("Failed to send request").status();

    let mut statuses = [a.as_u16(), b.as_u16()];
    statuses.sort();
    assert_eq!(statuses, [201, 409]);
}

#[tokio::test]
#[ignore]
async fn test_booked_slots_group_on_the_utc_day_and_hour() {
    // A booking at 01:00Z sits on the previous local day in any session
    // timezone west of UTC; day and hour grouping must stay in UTC.
    let client = Client::new();
    let handle = format!(
        "host{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    );

    let response = client
        .post(format!("{}/hosts", BASE_URL))
        .json(&json!({
            "handle": handle,
            "name": "Early Host"
        }))
        .send()
        .await
        .expect("Failed to create host");
    assert_eq!(response.status(), 201);

    // Thursday 01:00-02:00: exactly one slot, so one booking fills the day
    let response = client
        .put(format!("{}/hosts/{}/windows", BASE_URL, handle))
        .json(&json!({
            "windows": [
                { "weekday": 4, "start_minutes": 60, "end_minutes": 120 }
            ]
        }))
        .send()
        .await
        .expect("Failed to set windows");
    assert_eq!(response.status(), 200);

    // 2099-01-01 is a Thursday
    let response = client
        .post(format!("{}/hosts/{}/bookings", BASE_URL, handle))
        .json(&json!({
            "starts_at": "2099-01-01T01:00:00Z",
            "name": "Alice Example",
            "email": "alice@example.com"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/hosts/{}/availability", BASE_URL, handle))
        .query(&[("date", "2099-01-01")])
        .send()
        .await
        .expect("Failed to send request");
    let day: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(day["possibleHours"], json!([1]));
    assert_eq!(day["availableHours"], json!([]));

    let response = client
        .get(format!("{}/hosts/{}/unavailable-dates", BASE_URL, handle))
        .query(&[("year", "2099"), ("month", "1")])
        .send()
        .await
        .expect("Failed to send request");
    let month: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(month["unavailableDates"], json!([1]));
}

#[tokio::test]
#[ignore]
async fn test_calendar_grid_is_whole_weeks() {
    let client = Client::new();
    let handle = create_host_with_window(&client).await;

    let response = client
        .get(format!("{}/hosts/{}/calendar", BASE_URL, handle))
        .query(&[("year", "2099"), ("month", "1")])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let weeks = body.as_array().expect("weeks array");
    assert!(!weeks.is_empty());
    for (i, week) in weeks.iter().enumerate() {
        assert_eq!(week["week"], i as u64 + 1);
        assert_eq!(week["days"].as_array().expect("days").len(), 7);
    }
}
