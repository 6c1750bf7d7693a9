use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::asset_dto::{AssetListItemResponse, AssetResponse, CreateAssetRequest, UpdateAssetRequest};
use crate::dto::common::ApiResponse;
use crate::repositories::asset_repository::AssetRepository;
use crate::utils::errors::AppError;

pub struct AssetController {
    repository: AssetRepository,
}

impl AssetController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AssetRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        actor: Option<Uuid>,
        request: CreateAssetRequest,
    ) -> Result<ApiResponse<AssetResponse>, AppError> {
        request.validate()?;

        let metadata = request
            .metadata
            .map(serde_json::Value::Object)
            .unwrap_or_else(|| serde_json::json!({}));

        let asset = self
            .repository
            .create(
                request.name,
                request.identifier,
                request.asset_type,
                request.current_mileage,
                metadata,
                request.notes,
                actor,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            asset.into(),
            "Asset created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<AssetResponse, AppError> {
        let asset = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;

        Ok(asset.into())
    }

    pub async fn list(&self) -> Result<Vec<AssetListItemResponse>, AppError> {
        let rows = self.repository.list_with_next_deadlines().await?;

        let response = rows
            .into_iter()
            .map(|row| AssetListItemResponse {
                id: row.id,
                name: row.name,
                identifier: row.identifier,
                asset_type: row.asset_type,
                current_mileage: row.current_mileage,
                created_at: row.created_at,
                next_deadline_date: row.next_deadline_date,
                next_deadline_title: row.next_deadline_title,
                next_deadline_mileage: row.next_deadline_mileage,
                next_mileage_title: row.next_mileage_title,
            })
            .collect();

        Ok(response)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateAssetRequest,
    ) -> Result<ApiResponse<AssetResponse>, AppError> {
        request.validate()?;

        let asset = self
            .repository
            .update(
                id,
                request.name,
                request.identifier,
                request.asset_type,
                request.current_mileage,
                request.metadata.map(serde_json::Value::Object),
                request.notes,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            asset.into(),
            "Asset updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        // Los vencimientos y entradas de servicio caen por cascade en la FK
        self.repository.delete(id).await?;
        Ok(())
    }
}
