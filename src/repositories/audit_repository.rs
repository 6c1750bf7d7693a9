use sqlx::PgPool;

use crate::models::audit::AuditLogEntry;
use crate::utils::errors::AppError;

pub struct AuditRepository {
    pool: PgPool,
}

impl AuditRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listado paginado del audit log, más reciente primero. Solo lectura:
    /// la captura la hacen triggers en la base de datos.
    pub async fn list(
        &self,
        table: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AuditLogEntry>, AppError> {
        let entries = match table {
            Some(table_name) => {
                sqlx::query_as::<_, AuditLogEntry>(
                    r#"
                    SELECT * FROM audit_log
                    WHERE table_name = $1
                    ORDER BY created_at DESC
                    LIMIT $2 OFFSET $3
                    "#,
                )
                .bind(table_name)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, AuditLogEntry>(
                    "SELECT * FROM audit_log ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(entries)
    }

    /// Actividad reciente para el dashboard
    pub async fn recent(&self, limit: i64) -> Result<Vec<AuditLogEntry>, AppError> {
        let entries = sqlx::query_as::<_, AuditLogEntry>(
            "SELECT * FROM audit_log ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
