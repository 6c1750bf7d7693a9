use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::dto::guardian_dto::GuardianResponse;
use crate::models::user::AppUser;
use crate::repositories::asset_repository::AssetRepository;
use crate::repositories::guardian_repository::GuardianRepository;
use crate::utils::errors::{validation_error, AppError};

pub struct GuardianController {
    repository: GuardianRepository,
    assets: AssetRepository,
}

impl GuardianController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: GuardianRepository::new(pool.clone()),
            assets: AssetRepository::new(pool),
        }
    }

    pub async fn list_for_asset(&self, asset_id: Uuid) -> Result<Vec<GuardianResponse>, AppError> {
        let guardians = self.repository.list_for_asset(asset_id).await?;

        Ok(guardians.into_iter().map(Into::into).collect())
    }

    pub async fn set(
        &self,
        asset_id: Uuid,
        position: i32,
        user_id: Uuid,
    ) -> Result<ApiResponse<GuardianResponse>, AppError> {
        if !(1..=3).contains(&position) {
            return Err(validation_error("position", "position must be between 1 and 3"));
        }

        self.assets
            .find_by_id(asset_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;

        self.repository.set_position(asset_id, position, user_id).await?;

        // Releer con los datos de contacto del usuario
        let guardian = self
            .repository
            .list_for_asset(asset_id)
            .await?
            .into_iter()
            .find(|g| g.position == position)
            .ok_or_else(|| AppError::Internal("Guardian assignment disappeared after write".to_string()))?;

        Ok(ApiResponse::success_with_message(
            guardian.into(),
            "Guardian assigned successfully".to_string(),
        ))
    }

    pub async fn remove(&self, asset_id: Uuid, position: i32) -> Result<(), AppError> {
        if !(1..=3).contains(&position) {
            return Err(validation_error("position", "position must be between 1 and 3"));
        }

        self.repository.remove_position(asset_id, position).await?;
        Ok(())
    }

    pub async fn list_users(&self) -> Result<Vec<AppUser>, AppError> {
        self.repository.list_users().await
    }
}
