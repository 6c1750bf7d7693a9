use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::guardian::GuardianWithUser;

// Request para asignar un guardián a una posición del activo
#[derive(Debug, Deserialize)]
pub struct SetGuardianRequest {
    pub user_id: Uuid,
}

// Response de guardián con datos de contacto
#[derive(Debug, Serialize)]
pub struct GuardianResponse {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub user_id: Uuid,
    pub position: i32,
    pub user_email: String,
    pub user_name: String,
}

impl From<GuardianWithUser> for GuardianResponse {
    fn from(guardian: GuardianWithUser) -> Self {
        Self {
            id: guardian.id,
            asset_id: guardian.asset_id,
            user_id: guardian.user_id,
            position: guardian.position,
            user_email: guardian.user_email,
            user_name: guardian.user_name,
        }
    }
}
