//! Hosts repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::host::{CreateHost, Host},
};

#[derive(Clone)]
pub struct HostsRepository {
    pool: Pool<Postgres>,
}

impl HostsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get host by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Host> {
        sqlx::query_as::<_, Host>("SELECT * FROM hosts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Host {} not found", id)))
    }

    /// Resolve a public handle to a host
    pub async fn get_by_handle(&self, handle: &str) -> AppResult<Host> {
        sqlx::query_as::<_, Host>("SELECT * FROM hosts WHERE handle = $1")
            .bind(handle)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Host '{}' not found", handle)))
    }

    /// Create a host; the handle must be unique
    pub async fn create(&self, data: &CreateHost) -> AppResult<Host> {
        let result = sqlx::query_as::<_, Host>(
            r#"
            INSERT INTO hosts (id, handle, name, email)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.handle)
        .bind(&data.name)
        .bind(&data.email)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(host) => Ok(host),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(
                AppError::Conflict(format!("Handle '{}' is already taken", data.handle)),
            ),
            Err(e) => Err(e.into()),
        }
    }
}
