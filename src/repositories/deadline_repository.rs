use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::deadline::{Deadline, DeadlineType};
use crate::services::completion::CompletionStore;
use crate::utils::errors::AppError;

// Fila de vencimiento con los datos del activo, para el dashboard
#[derive(Debug, sqlx::FromRow)]
pub struct DeadlineWithAssetRow {
    pub id: Uuid,
    pub asset_id: Uuid,
    #[sqlx(rename = "type")]
    pub deadline_type: DeadlineType,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub due_mileage: Option<i64>,
    pub asset_name: String,
    pub asset_identifier: String,
}

pub struct DeadlineRepository {
    pool: PgPool,
}

impl DeadlineRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        asset_id: Uuid,
        deadline_type: DeadlineType,
        title: String,
        due_date: Option<NaiveDate>,
        due_mileage: Option<i64>,
        is_recurring: bool,
        recurrence_rule: Option<String>,
        notify_days_before: Vec<i32>,
        created_by: Option<Uuid>,
    ) -> Result<Deadline, AppError> {
        let deadline = sqlx::query_as::<_, Deadline>(
            r#"
            INSERT INTO deadlines
                (id, asset_id, type, title, due_date, due_mileage, is_recurring,
                 recurrence_rule, notify_days_before, completed, created_at, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, false, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(asset_id)
        .bind(deadline_type)
        .bind(title)
        .bind(due_date)
        .bind(due_mileage)
        .bind(is_recurring)
        .bind(recurrence_rule)
        .bind(notify_days_before)
        .bind(Utc::now())
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(deadline)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Deadline>, AppError> {
        let deadline = sqlx::query_as::<_, Deadline>("SELECT * FROM deadlines WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(deadline)
    }

    /// Vencimientos de un activo: abiertos primero, por fecha ascendente
    pub async fn list_by_asset(&self, asset_id: Uuid) -> Result<Vec<Deadline>, AppError> {
        let deadlines = sqlx::query_as::<_, Deadline>(
            "SELECT * FROM deadlines WHERE asset_id = $1 ORDER BY completed, due_date",
        )
        .bind(asset_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(deadlines)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        deadline_type: Option<DeadlineType>,
        title: Option<String>,
        due_date: Option<NaiveDate>,
        due_mileage: Option<i64>,
        is_recurring: Option<bool>,
        recurrence_rule: Option<String>,
        notify_days_before: Option<Vec<i32>>,
    ) -> Result<Deadline, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Deadline not found".to_string()))?;

        let deadline = sqlx::query_as::<_, Deadline>(
            r#"
            UPDATE deadlines
            SET type = $2, title = $3, due_date = $4, due_mileage = $5,
                is_recurring = $6, recurrence_rule = $7, notify_days_before = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(deadline_type.unwrap_or(current.deadline_type))
        .bind(title.unwrap_or(current.title))
        .bind(due_date.or(current.due_date))
        .bind(due_mileage.or(current.due_mileage))
        .bind(is_recurring.unwrap_or(current.is_recurring))
        .bind(recurrence_rule.or(current.recurrence_rule))
        .bind(notify_days_before.unwrap_or(current.notify_days_before))
        .fetch_one(&self.pool)
        .await?;

        Ok(deadline)
    }

    /// Marcar completado con guard contra doble completado: el UPDATE solo
    /// aplica sobre `completed = false`, así una carrera no puede pisar
    /// `completed_at`/`completed_by` del primer completado
    pub async fn complete(
        &self,
        id: Uuid,
        completed_by: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> Result<Option<Deadline>, AppError> {
        let deadline = sqlx::query_as::<_, Deadline>(
            r#"
            UPDATE deadlines
            SET completed = true, completed_at = $2, completed_by = $3
            WHERE id = $1 AND completed = false
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(now)
        .bind(completed_by)
        .fetch_optional(&self.pool)
        .await?;

        Ok(deadline)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM deadlines WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Deadline not found".to_string()));
        }

        Ok(())
    }

    pub async fn overdue_count(&self, today: NaiveDate) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM deadlines WHERE completed = false AND due_date < $1",
        )
        .bind(today)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    /// Vencidos con datos del activo, más antiguos primero
    pub async fn overdue_with_asset(
        &self,
        today: NaiveDate,
        limit: i64,
    ) -> Result<Vec<DeadlineWithAssetRow>, AppError> {
        let rows = sqlx::query_as::<_, DeadlineWithAssetRow>(
            r#"
            SELECT d.id, d.asset_id, d.type, d.title, d.due_date, d.due_mileage,
                   a.name AS asset_name, a.identifier AS asset_identifier
            FROM deadlines d
            JOIN assets a ON a.id = d.asset_id
            WHERE d.completed = false AND d.due_date < $1
            ORDER BY d.due_date
            LIMIT $2
            "#,
        )
        .bind(today)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Próximos vencimientos dentro del horizonte (inclusive), con datos
    /// del activo
    pub async fn upcoming_with_asset(
        &self,
        today: NaiveDate,
        horizon: NaiveDate,
        limit: i64,
    ) -> Result<Vec<DeadlineWithAssetRow>, AppError> {
        let rows = sqlx::query_as::<_, DeadlineWithAssetRow>(
            r#"
            SELECT d.id, d.asset_id, d.type, d.title, d.due_date, d.due_mileage,
                   a.name AS asset_name, a.identifier AS asset_identifier
            FROM deadlines d
            JOIN assets a ON a.id = d.asset_id
            WHERE d.completed = false AND d.due_date >= $1 AND d.due_date <= $2
            ORDER BY d.due_date
            LIMIT $3
            "#,
        )
        .bind(today)
        .bind(horizon)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

#[async_trait]
impl CompletionStore for DeadlineRepository {
    async fn find(&self, id: Uuid) -> Result<Option<Deadline>, AppError> {
        self.find_by_id(id).await
    }

    async fn mark_completed(
        &self,
        id: Uuid,
        completed_by: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> Result<Option<Deadline>, AppError> {
        self.complete(id, completed_by, now).await
    }
}
