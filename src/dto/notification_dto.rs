use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::notification::NotificationSettings;

// Request para actualizar las preferencias de notificación del usuario
#[derive(Debug, Deserialize)]
pub struct UpdateNotificationSettingsRequest {
    pub email_enabled: bool,
    pub push_enabled: bool,
    pub notify_days: Vec<i32>,
}

// Response de preferencias de notificación
#[derive(Debug, Serialize)]
pub struct NotificationSettingsResponse {
    pub user_id: Uuid,
    pub email_enabled: bool,
    pub push_enabled: bool,
    pub notify_days: Vec<i32>,
}

impl From<NotificationSettings> for NotificationSettingsResponse {
    fn from(settings: NotificationSettings) -> Self {
        Self {
            user_id: settings.user_id,
            email_enabled: settings.email_enabled,
            push_enabled: settings.push_enabled,
            notify_days: settings.notify_days,
        }
    }
}
