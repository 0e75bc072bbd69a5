//! Host model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A host offering bookable time
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Host {
    pub id: Uuid,
    /// Public handle used in scheduling URLs
    pub handle: String,
    /// Display name
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create host request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateHost {
    /// Public handle (lowercase letters, digits, '-' and '_')
    #[validate(length(min = 3, max = 30, message = "Handle must be 3 to 30 characters"))]
    pub handle: String,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}
