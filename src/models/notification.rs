//! Modelo de NotificationSettings
//!
//! Preferencias de notificación por usuario. `notify_days` es el conjunto de
//! lead times por defecto aplicado al crear un vencimiento nuevo; no se
//! re-aplica retroactivamente a vencimientos existentes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// NotificationSettings - mapea exactamente a la tabla notification_settings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NotificationSettings {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email_enabled: bool,
    pub push_enabled: bool,
    pub notify_days: Vec<i32>,
}

/// Lead times por defecto cuando el usuario no tiene settings propios
pub const DEFAULT_NOTIFY_DAYS: [i32; 4] = [30, 14, 7, 1];
