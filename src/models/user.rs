//! Modelo de AppUser
//!
//! Directorio de usuarios: identidad y contacto de los destinatarios de
//! notificaciones. La autenticación es un colaborador externo.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// AppUser - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AppUser {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
}
