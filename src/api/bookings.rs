//! Booking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::booking::{Booking, CreateBooking},
};

/// Book one hourly slot
#[utoipa::path(
    post,
    path = "/hosts/{handle}/bookings",
    tag = "bookings",
    params(("handle" = String, Path, description = "Public handle")),
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking committed", body = Booking),
        (status = 400, description = "Invalid name, email or date-time"),
        (status = 404, description = "Host not found"),
        (status = 409, description = "Slot unavailable")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    Path(handle): Path<String>,
    Json(data): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let host = state.services.hosts.resolve(&handle).await?;
    let booking = state.services.bookings.create(host.id, &data).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}
