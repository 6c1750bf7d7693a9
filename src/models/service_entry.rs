//! Modelo de ServiceEntry
//!
//! Una entrada del historial de servicio de un activo. Si trae kilometraje,
//! la creación/actualización propaga ese valor a `assets.current_mileage`
//! (last-write-wins).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado de la entrada de servicio - mapea al ENUM service_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq)]
#[sqlx(type_name = "service_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Done,
    Pending,
    Waiting,
    External,
    Postponed,
}

/// ServiceEntry principal - mapea exactamente a la tabla service_entries
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceEntry {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub status: ServiceStatus,
    pub mileage: Option<i64>,
    pub priority: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Option<Uuid>,
}
