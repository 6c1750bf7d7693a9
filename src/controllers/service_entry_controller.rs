use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::service_entry_dto::{
    CreateServiceEntryRequest, ServiceEntryResponse, UpdateServiceEntryRequest,
};
use crate::repositories::asset_repository::AssetRepository;
use crate::repositories::service_entry_repository::ServiceEntryRepository;
use crate::utils::errors::AppError;

pub struct ServiceEntryController {
    repository: ServiceEntryRepository,
    assets: AssetRepository,
}

impl ServiceEntryController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ServiceEntryRepository::new(pool.clone()),
            assets: AssetRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        asset_id: Uuid,
        actor: Option<Uuid>,
        request: CreateServiceEntryRequest,
    ) -> Result<ApiResponse<ServiceEntryResponse>, AppError> {
        request.validate()?;

        self.assets
            .find_by_id(asset_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;

        let entry = self
            .repository
            .create(
                asset_id,
                request.date,
                request.description,
                request.status,
                request.mileage,
                request.priority,
                request.notes,
                actor,
            )
            .await?;

        // Side effect: el kilometraje registrado pasa al activo
        // (last-write-wins, sin garantía de orden entre entradas)
        if let Some(mileage) = entry.mileage {
            self.assets.update_mileage(asset_id, mileage).await?;
        }

        Ok(ApiResponse::success_with_message(
            entry.into(),
            "Service entry created successfully".to_string(),
        ))
    }

    pub async fn list_by_asset(&self, asset_id: Uuid) -> Result<Vec<ServiceEntryResponse>, AppError> {
        let entries = self.repository.list_by_asset(asset_id).await?;

        Ok(entries.into_iter().map(Into::into).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        actor: Option<Uuid>,
        request: UpdateServiceEntryRequest,
    ) -> Result<ApiResponse<ServiceEntryResponse>, AppError> {
        request.validate()?;

        let entry = self
            .repository
            .update(
                id,
                request.date,
                request.description,
                request.status,
                request.mileage,
                request.priority,
                request.notes,
                actor,
            )
            .await?;

        if let Some(mileage) = request.mileage {
            self.assets.update_mileage(entry.asset_id, mileage).await?;
        }

        Ok(ApiResponse::success_with_message(
            entry.into(),
            "Service entry updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
