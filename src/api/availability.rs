//! Availability endpoints (month unavailability, day slots, calendar grid)

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;

use crate::{
    calendar::CalendarWeek,
    error::{AppError, AppResult},
    models::availability::{DayAvailability, DayQuery, MonthQuery, MonthUnavailability},
};

/// Which weekdays and dates of a month cannot be booked
#[utoipa::path(
    get,
    path = "/hosts/{handle}/unavailable-dates",
    tag = "availability",
    params(
        ("handle" = String, Path, description = "Public handle"),
        MonthQuery
    ),
    responses(
        (status = 200, description = "Month unavailability", body = MonthUnavailability),
        (status = 400, description = "Invalid year or month"),
        (status = 404, description = "Host not found")
    )
)]
pub async fn unavailable_dates(
    State(state): State<crate::AppState>,
    Path(handle): Path<String>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<MonthUnavailability>> {
    let host = state.services.hosts.resolve(&handle).await?;
    let unavailability = state
        .services
        .availability
        .month_unavailability(host.id, query.year, query.month)
        .await?;
    Ok(Json(unavailability))
}

/// Bookable hours for one date
#[utoipa::path(
    get,
    path = "/hosts/{handle}/availability",
    tag = "availability",
    params(
        ("handle" = String, Path, description = "Public handle"),
        DayQuery
    ),
    responses(
        (status = 200, description = "Day availability", body = DayAvailability),
        (status = 400, description = "Invalid date"),
        (status = 404, description = "Host not found")
    )
)]
pub async fn day_availability(
    State(state): State<crate::AppState>,
    Path(handle): Path<String>,
    Query(query): Query<DayQuery>,
) -> AppResult<Json<DayAvailability>> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date (use YYYY-MM-DD)".to_string()))?;

    let host = state.services.hosts.resolve(&handle).await?;
    let day = state
        .services
        .availability
        .day_availability(host.id, date)
        .await?;
    Ok(Json(day))
}

/// Calendar grid for a month
#[utoipa::path(
    get,
    path = "/hosts/{handle}/calendar",
    tag = "availability",
    params(
        ("handle" = String, Path, description = "Public handle"),
        MonthQuery
    ),
    responses(
        (status = 200, description = "Calendar weeks", body = Vec<CalendarWeek>),
        (status = 400, description = "Invalid year or month"),
        (status = 404, description = "Host not found")
    )
)]
pub async fn calendar_grid(
    State(state): State<crate::AppState>,
    Path(handle): Path<String>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<Vec<CalendarWeek>>> {
    let host = state.services.hosts.resolve(&handle).await?;
    let weeks = state
        .services
        .availability
        .month_grid(host.id, query.year, query.month)
        .await?;
    Ok(Json(weeks))
}
