use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::service_entry::{ServiceEntry, ServiceStatus};
use crate::utils::errors::AppError;

pub struct ServiceEntryRepository {
    pool: PgPool,
}

impl ServiceEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        asset_id: Uuid,
        date: NaiveDate,
        description: String,
        status: ServiceStatus,
        mileage: Option<i64>,
        priority: Option<i32>,
        notes: Option<String>,
        created_by: Option<Uuid>,
    ) -> Result<ServiceEntry, AppError> {
        let now = Utc::now();
        let entry = sqlx::query_as::<_, ServiceEntry>(
            r#"
            INSERT INTO service_entries
                (id, asset_id, date, description, status, mileage, priority, notes,
                 created_at, created_by, updated_at, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(asset_id)
        .bind(date)
        .bind(description)
        .bind(status)
        .bind(mileage)
        .bind(priority)
        .bind(notes)
        .bind(now)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceEntry>, AppError> {
        let entry = sqlx::query_as::<_, ServiceEntry>("SELECT * FROM service_entries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(entry)
    }

    /// Historial de servicio de un activo, más reciente primero
    pub async fn list_by_asset(&self, asset_id: Uuid) -> Result<Vec<ServiceEntry>, AppError> {
        let entries = sqlx::query_as::<_, ServiceEntry>(
            "SELECT * FROM service_entries WHERE asset_id = $1 ORDER BY date DESC, created_at DESC",
        )
        .bind(asset_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        date: Option<NaiveDate>,
        description: Option<String>,
        status: Option<ServiceStatus>,
        mileage: Option<i64>,
        priority: Option<i32>,
        notes: Option<String>,
        updated_by: Option<Uuid>,
    ) -> Result<ServiceEntry, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service entry not found".to_string()))?;

        let entry = sqlx::query_as::<_, ServiceEntry>(
            r#"
            UPDATE service_entries
            SET date = $2, description = $3, status = $4, mileage = $5, priority = $6,
                notes = $7, updated_at = $8, updated_by = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(date.unwrap_or(current.date))
        .bind(description.unwrap_or(current.description))
        .bind(status.unwrap_or(current.status))
        .bind(mileage.or(current.mileage))
        .bind(priority.or(current.priority))
        .bind(notes.or(current.notes))
        .bind(Utc::now())
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM service_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Service entry not found".to_string()));
        }

        Ok(())
    }
}
