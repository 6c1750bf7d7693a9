use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::asset::{Asset, AssetType};
use crate::utils::errors::AppError;

// Fila de listado con el próximo vencimiento por fecha y por kilometraje
#[derive(Debug, sqlx::FromRow)]
pub struct AssetListRow {
    pub id: Uuid,
    pub name: String,
    pub identifier: String,
    #[sqlx(rename = "type")]
    pub asset_type: AssetType,
    pub current_mileage: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub next_deadline_date: Option<NaiveDate>,
    pub next_deadline_title: Option<String>,
    pub next_deadline_mileage: Option<i64>,
    pub next_mileage_title: Option<String>,
}

pub struct AssetRepository {
    pool: PgPool,
}

impl AssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        identifier: String,
        asset_type: AssetType,
        current_mileage: Option<i64>,
        metadata: serde_json::Value,
        notes: Option<String>,
        created_by: Option<Uuid>,
    ) -> Result<Asset, AppError> {
        let asset = sqlx::query_as::<_, Asset>(
            r#"
            INSERT INTO assets (id, name, identifier, type, current_mileage, metadata, notes, created_at, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(identifier)
        .bind(asset_type)
        .bind(current_mileage)
        .bind(metadata)
        .bind(notes)
        .bind(Utc::now())
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(asset)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Asset>, AppError> {
        let asset = sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(asset)
    }

    /// Listado con el vencimiento más cercano por fecha y por kilometraje
    /// de cada activo (solo vencimientos abiertos)
    pub async fn list_with_next_deadlines(&self) -> Result<Vec<AssetListRow>, AppError> {
        let rows = sqlx::query_as::<_, AssetListRow>(
            r#"
            SELECT a.id, a.name, a.identifier, a.type, a.current_mileage, a.created_at,
                   next_date.due_date AS next_deadline_date,
                   next_date.title AS next_deadline_title,
                   next_mileage.due_mileage AS next_deadline_mileage,
                   next_mileage.title AS next_mileage_title
            FROM assets a
            LEFT JOIN LATERAL (
                SELECT due_date, title FROM deadlines
                WHERE asset_id = a.id AND completed = false AND due_date IS NOT NULL
                ORDER BY due_date
                LIMIT 1
            ) next_date ON true
            LEFT JOIN LATERAL (
                SELECT due_mileage, title FROM deadlines
                WHERE asset_id = a.id AND completed = false AND due_mileage IS NOT NULL
                ORDER BY due_mileage
                LIMIT 1
            ) next_mileage ON true
            ORDER BY a.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        identifier: Option<String>,
        asset_type: Option<AssetType>,
        current_mileage: Option<i64>,
        metadata: Option<serde_json::Value>,
        notes: Option<String>,
    ) -> Result<Asset, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;

        let asset = sqlx::query_as::<_, Asset>(
            r#"
            UPDATE assets
            SET name = $2, identifier = $3, type = $4, current_mileage = $5, metadata = $6, notes = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(identifier.unwrap_or(current.identifier))
        .bind(asset_type.unwrap_or(current.asset_type))
        .bind(current_mileage.or(current.current_mileage))
        .bind(metadata.unwrap_or(current.metadata))
        .bind(notes.or(current.notes))
        .fetch_one(&self.pool)
        .await?;

        Ok(asset)
    }

    /// Side effect de las entradas de servicio: propagar el kilometraje
    /// registrado al activo (last-write-wins)
    pub async fn update_mileage(&self, id: Uuid, mileage: i64) -> Result<(), AppError> {
        sqlx::query("UPDATE assets SET current_mileage = $2 WHERE id = $1")
            .bind(id)
            .bind(mileage)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Asset not found".to_string()));
        }

        Ok(())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM assets")
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }
}
