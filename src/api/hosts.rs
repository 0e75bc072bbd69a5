//! Host endpoints (registration, handle resolution, weekly pattern)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        host::{CreateHost, Host},
        window::{ReplaceWindows, WeeklyWindow},
    },
};

/// Register a new host
#[utoipa::path(
    post,
    path = "/hosts",
    tag = "hosts",
    request_body = CreateHost,
    responses(
        (status = 201, description = "Host created", body = Host),
        (status = 400, description = "Invalid handle, name or email"),
        (status = 409, description = "Handle already taken")
    )
)]
pub async fn create_host(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateHost>,
) -> AppResult<(StatusCode, Json<Host>)> {
    let host = state.services.hosts.create(&data).await?;
    Ok((StatusCode::CREATED, Json(host)))
}

/// Resolve a public handle
#[utoipa::path(
    get,
    path = "/hosts/{handle}",
    tag = "hosts",
    params(("handle" = String, Path, description = "Public handle")),
    responses(
        (status = 200, description = "Host", body = Host),
        (status = 404, description = "Host not found")
    )
)]
pub async fn get_host(
    State(state): State<crate::AppState>,
    Path(handle): Path<String>,
) -> AppResult<Json<Host>> {
    let host = state.services.hosts.resolve(&handle).await?;
    Ok(Json(host))
}

/// List a host's weekly windows
#[utoipa::path(
    get,
    path = "/hosts/{handle}/windows",
    tag = "hosts",
    params(("handle" = String, Path, description = "Public handle")),
    responses(
        (status = 200, description = "Weekly windows", body = Vec<WeeklyWindow>),
        (status = 404, description = "Host not found")
    )
)]
pub async fn list_windows(
    State(state): State<crate::AppState>,
    Path(handle): Path<String>,
) -> AppResult<Json<Vec<WeeklyWindow>>> {
    let host = state.services.hosts.resolve(&handle).await?;
    let windows = state.services.hosts.list_windows(host.id).await?;
    Ok(Json(windows))
}

/// Replace a host's weekly pattern
#[utoipa::path(
    put,
    path = "/hosts/{handle}/windows",
    tag = "hosts",
    params(("handle" = String, Path, description = "Public handle")),
    request_body = ReplaceWindows,
    responses(
        (status = 200, description = "New weekly windows", body = Vec<WeeklyWindow>),
        (status = 400, description = "Window invariant violated"),
        (status = 404, description = "Host not found")
    )
)]
pub async fn replace_windows(
    State(state): State<crate::AppState>,
    Path(handle): Path<String>,
    Json(data): Json<ReplaceWindows>,
) -> AppResult<Json<Vec<WeeklyWindow>>> {
    let host = state.services.hosts.resolve(&handle).await?;
    let windows = state.services.hosts.replace_windows(host.id, &data).await?;
    Ok(Json(windows))
}
