//! Weekly windows repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::window::{WeeklyWindow, WindowSpec},
};

#[derive(Clone)]
pub struct WindowsRepository {
    pool: Pool<Postgres>,
}

impl WindowsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List a host's weekly windows ordered by weekday
    pub async fn list_for_host(&self, host_id: Uuid) -> AppResult<Vec<WeeklyWindow>> {
        let rows = sqlx::query_as::<_, WeeklyWindow>(
            "SELECT * FROM weekly_windows WHERE host_id = $1 ORDER BY weekday",
        )
        .bind(host_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get the window for one weekday, if configured
    pub async fn for_weekday(
        &self,
        host_id: Uuid,
        weekday: i16,
    ) -> AppResult<Option<WeeklyWindow>> {
        let row = sqlx::query_as::<_, WeeklyWindow>(
            "SELECT * FROM weekly_windows WHERE host_id = $1 AND weekday = $2",
        )
        .bind(host_id)
        .bind(weekday)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace the host's full weekly pattern in one transaction
    pub async fn replace_for_host(
        &self,
        host_id: Uuid,
        windows: &[WindowSpec],
    ) -> AppResult<Vec<WeeklyWindow>> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM weekly_windows WHERE host_id = $1")
            .bind(host_id)
            .execute(&mut *tx)
            .await?;

        let mut created = Vec::with_capacity(windows.len());
        for spec in windows {
            let row = sqlx::query_as::<_, WeeklyWindow>(
                r#"
                INSERT INTO weekly_windows (host_id, weekday, start_minutes, end_minutes)
                VALUES ($1, $2, $3, $4)
                RETURNING *
                "#,
            )
            .bind(host_id)
            .bind(spec.weekday)
            .bind(spec.start_minutes)
            .bind(spec.end_minutes)
            .fetch_one(&mut *tx)
            .await?;
            created.push(row);
        }

        tx.commit().await?;
        Ok(created)
    }
}
