use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::dto::notification_dto::{NotificationSettingsResponse, UpdateNotificationSettingsRequest};
use crate::models::notification::DEFAULT_NOTIFY_DAYS;
use crate::repositories::notification_repository::NotificationRepository;
use crate::utils::errors::{field_error, AppError};
use crate::utils::validation;

pub struct NotificationController {
    repository: NotificationRepository,
}

impl NotificationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: NotificationRepository::new(pool),
        }
    }

    /// Preferencias del usuario; sin fila guardada aplican los defaults
    /// (email habilitado, push deshabilitado, lead times estándar)
    pub async fn get(&self, user_id: Uuid) -> Result<NotificationSettingsResponse, AppError> {
        let settings = self.repository.get_settings(user_id).await?;

        Ok(match settings {
            Some(settings) => settings.into(),
            None => NotificationSettingsResponse {
                user_id,
                email_enabled: true,
                push_enabled: false,
                notify_days: DEFAULT_NOTIFY_DAYS.to_vec(),
            },
        })
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        request: UpdateNotificationSettingsRequest,
    ) -> Result<ApiResponse<NotificationSettingsResponse>, AppError> {
        validation::validate_notify_days(&request.notify_days)
            .map_err(|e| field_error("notify_days", e))?;

        let settings = self
            .repository
            .upsert_settings(
                user_id,
                request.email_enabled,
                request.push_enabled,
                request.notify_days,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            settings.into(),
            "Notification settings updated".to_string(),
        ))
    }
}
