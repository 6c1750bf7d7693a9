use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::asset::{Asset, AssetType};

// Request para crear un activo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssetRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub identifier: String,

    #[serde(rename = "type")]
    pub asset_type: AssetType,

    #[validate(range(min = 0))]
    pub current_mileage: Option<i64>,

    /// Mapa abierto clave -> valor; el orden de inserción se conserva
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,

    pub notes: Option<String>,
}

// Request para actualizar un activo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAssetRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub identifier: Option<String>,

    #[serde(rename = "type")]
    pub asset_type: Option<AssetType>,

    // Se permite la corrección de kilometraje en la edición del activo
    #[validate(range(min = 0))]
    pub current_mileage: Option<i64>,

    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,

    pub notes: Option<String>,
}

// Response de activo
#[derive(Debug, Serialize)]
pub struct AssetResponse {
    pub id: Uuid,
    pub name: String,
    pub identifier: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub current_mileage: Option<i64>,
    pub metadata: serde_json::Value,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Asset> for AssetResponse {
    fn from(asset: Asset) -> Self {
        Self {
            id: asset.id,
            name: asset.name,
            identifier: asset.identifier,
            asset_type: asset.asset_type,
            current_mileage: asset.current_mileage,
            metadata: asset.metadata,
            notes: asset.notes,
            created_at: asset.created_at,
        }
    }
}

// Response de activo para listados, con el próximo vencimiento por fecha y
// por kilometraje
#[derive(Debug, Serialize)]
pub struct AssetListItemResponse {
    pub id: Uuid,
    pub name: String,
    pub identifier: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub current_mileage: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub next_deadline_date: Option<NaiveDate>,
    pub next_deadline_title: Option<String>,
    pub next_deadline_mileage: Option<i64>,
    pub next_mileage_title: Option<String>,
}
