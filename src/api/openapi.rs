//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{availability, bookings, health, hosts};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Slotwise API",
        version = "0.1.0",
        description = "Availability & Booking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Hosts
        hosts::create_host,
        hosts::get_host,
        hosts::list_windows,
        hosts::replace_windows,
        // Availability
        availability::unavailable_dates,
        availability::day_availability,
        availability::calendar_grid,
        // Bookings
        bookings::create_booking,
    ),
    components(
        schemas(
            // Hosts
            crate::models::host::Host,
            crate::models::host::CreateHost,
            crate::models::window::WeeklyWindow,
            crate::models::window::WindowSpec,
            crate::models::window::ReplaceWindows,
            // Availability
            crate::models::availability::MonthUnavailability,
            crate::models::availability::DayAvailability,
            crate::calendar::CalendarDay,
            crate::calendar::CalendarWeek,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::CreateBooking,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "hosts", description = "Host registration and weekly pattern"),
        (name = "availability", description = "Month and day availability queries"),
        (name = "bookings", description = "Slot booking")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
