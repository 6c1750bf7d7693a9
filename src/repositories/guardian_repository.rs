use sqlx::PgPool;
use uuid::Uuid;

use crate::models::guardian::{Guardian, GuardianWithUser};
use crate::models::user::AppUser;
use crate::utils::errors::AppError;

pub struct GuardianRepository {
    pool: PgPool,
}

impl GuardianRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Guardianes de un activo con datos de contacto, por posición
    pub async fn list_for_asset(&self, asset_id: Uuid) -> Result<Vec<GuardianWithUser>, AppError> {
        let guardians = sqlx::query_as::<_, GuardianWithUser>(
            r#"
            SELECT g.id, g.asset_id, g.user_id, g.position,
                   u.email AS user_email, u.full_name AS user_name
            FROM asset_guardians g
            JOIN users u ON u.id = g.user_id
            WHERE g.asset_id = $1
            ORDER BY g.position
            "#,
        )
        .bind(asset_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(guardians)
    }

    /// Asignar un usuario a una posición del activo. A lo sumo un usuario
    /// por posición: la asignación existente en esa posición se reemplaza.
    pub async fn set_position(
        &self,
        asset_id: Uuid,
        position: i32,
        user_id: Uuid,
    ) -> Result<Guardian, AppError> {
        let guardian = sqlx::query_as::<_, Guardian>(
            r#"
            INSERT INTO asset_guardians (id, asset_id, user_id, position, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (asset_id, position)
            DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(asset_id)
        .bind(user_id)
        .bind(position)
        .fetch_one(&self.pool)
        .await?;

        Ok(guardian)
    }

    pub async fn remove_position(&self, asset_id: Uuid, position: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM asset_guardians WHERE asset_id = $1 AND position = $2")
            .bind(asset_id)
            .bind(position)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Guardian assignment not found".to_string()));
        }

        Ok(())
    }

    /// Directorio de usuarios para el selector de guardianes
    pub async fn list_users(&self) -> Result<Vec<AppUser>, AppError> {
        let users = sqlx::query_as::<_, AppUser>(
            "SELECT id, email, full_name FROM users ORDER BY full_name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
