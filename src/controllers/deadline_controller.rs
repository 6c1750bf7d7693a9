use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::deadline_dto::{CreateDeadlineRequest, DeadlineResponse, UpdateDeadlineRequest};
use crate::models::notification::DEFAULT_NOTIFY_DAYS;
use crate::repositories::asset_repository::AssetRepository;
use crate::repositories::deadline_repository::DeadlineRepository;
use crate::repositories::notification_repository::NotificationRepository;
use crate::services::completion;
use crate::utils::errors::{field_error, AppError};
use crate::utils::validation;

pub struct DeadlineController {
    repository: DeadlineRepository,
    assets: AssetRepository,
    notifications: NotificationRepository,
}

impl DeadlineController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DeadlineRepository::new(pool.clone()),
            assets: AssetRepository::new(pool.clone()),
            notifications: NotificationRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        asset_id: Uuid,
        actor: Option<Uuid>,
        request: CreateDeadlineRequest,
    ) -> Result<ApiResponse<DeadlineResponse>, AppError> {
        request.validate()?;

        // Invariante de trigger: fecha o kilometraje, al menos uno
        validation::validate_deadline_trigger(request.due_date, request.due_mileage)
            .map_err(|e| field_error("trigger", e))?;

        if let Some(days) = &request.notify_days_before {
            validation::validate_notify_days(days).map_err(|e| field_error("notify_days_before", e))?;
        }

        let asset = self
            .assets
            .find_by_id(asset_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;

        // Lead times: los del request, o los defaults del usuario creador,
        // o los defaults del sistema. Solo en la creación; nunca se
        // re-aplican retroactivamente.
        let notify_days_before = match request.notify_days_before {
            Some(days) => days,
            None => match actor {
                Some(user_id) => self
                    .notifications
                    .get_settings(user_id)
                    .await?
                    .map(|s| s.notify_days)
                    .unwrap_or_else(|| DEFAULT_NOTIFY_DAYS.to_vec()),
                None => DEFAULT_NOTIFY_DAYS.to_vec(),
            },
        };

        let recurrence_rule = if request.is_recurring {
            request.recurrence_rule
        } else {
            None
        };

        let deadline = self
            .repository
            .create(
                asset_id,
                request.deadline_type,
                request.title,
                request.due_date,
                request.due_mileage,
                request.is_recurring,
                recurrence_rule,
                notify_days_before,
                actor,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            DeadlineResponse::from_deadline(deadline, asset.current_mileage, Utc::now().date_naive()),
            "Deadline created successfully".to_string(),
        ))
    }

    pub async fn list_by_asset(
        &self,
        asset_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<DeadlineResponse>, AppError> {
        let asset = self
            .assets
            .find_by_id(asset_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))?;

        let deadlines = self.repository.list_by_asset(asset_id).await?;

        Ok(deadlines
            .into_iter()
            .map(|d| DeadlineResponse::from_deadline(d, asset.current_mileage, today))
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDeadlineRequest,
    ) -> Result<ApiResponse<DeadlineResponse>, AppError> {
        request.validate()?;

        if let Some(days) = &request.notify_days_before {
            validation::validate_notify_days(days).map_err(|e| field_error("notify_days_before", e))?;
        }

        // El invariante se re-valida sobre el resultado del merge: un
        // update parcial no puede dejar al vencimiento sin trigger
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Deadline not found".to_string()))?;

        let merged_due_date = request.due_date.or(current.due_date);
        let merged_due_mileage = request.due_mileage.or(current.due_mileage);
        validation::validate_deadline_trigger(merged_due_date, merged_due_mileage)
            .map_err(|e| field_error("trigger", e))?;

        let current_mileage = self
            .assets
            .find_by_id(current.asset_id)
            .await?
            .and_then(|a| a.current_mileage);

        let deadline = self
            .repository
            .update(
                id,
                request.deadline_type,
                request.title,
                request.due_date,
                request.due_mileage,
                request.is_recurring,
                request.recurrence_rule,
                request.notify_days_before,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            DeadlineResponse::from_deadline(deadline, current_mileage, Utc::now().date_naive()),
            "Deadline updated successfully".to_string(),
        ))
    }

    /// Marcar completado. Falla con Conflict si ya estaba completado: el
    /// doble submit debe salir a la superficie, no ser un no-op. La regla
    /// vive en `services::completion`.
    pub async fn complete(
        &self,
        id: Uuid,
        actor: Option<Uuid>,
    ) -> Result<ApiResponse<DeadlineResponse>, AppError> {
        let deadline = completion::complete_deadline(&self.repository, id, actor, Utc::now()).await?;

        let current_mileage = self
            .assets
            .find_by_id(deadline.asset_id)
            .await?
            .and_then(|a| a.current_mileage);

        Ok(ApiResponse::success_with_message(
            DeadlineResponse::from_deadline(deadline, current_mileage, Utc::now().date_naive()),
            "Deadline marked as completed".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
