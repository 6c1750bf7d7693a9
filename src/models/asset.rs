//! Modelo de Asset
//!
//! Un activo es un elemento físico rastreado: vehículo, equipo o
//! infraestructura. Mapea exactamente a la tabla assets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Tipo de activo - mapea al ENUM asset_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq)]
#[sqlx(type_name = "asset_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Vehicle,
    Equipment,
    Infrastructure,
}

/// Asset principal - mapea exactamente a la tabla assets
///
/// `metadata` es un mapa string -> string abierto (jsonb); el orden de
/// inserción se conserva para la visualización.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Asset {
    pub id: Uuid,
    pub name: String,
    pub identifier: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub current_mileage: Option<i64>,
    pub metadata: serde_json::Value,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}
