//! Modelo de Guardian
//!
//! Asignación (activo, posición) -> usuario. Posiciones 1..=3, a lo sumo un
//! usuario por posición por activo. Los guardianes son los destinatarios de
//! las notificaciones de los vencimientos del activo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Asignación de guardián - mapea exactamente a la tabla asset_guardians
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Guardian {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub user_id: Uuid,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

/// Guardián con los datos de contacto del usuario (join con users)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GuardianWithUser {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub user_id: Uuid,
    pub position: i32,
    pub user_email: String,
    pub user_name: String,
}
