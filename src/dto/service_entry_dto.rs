use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::service_entry::{ServiceEntry, ServiceStatus};

// Request para crear una entrada de servicio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceEntryRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 2000))]
    pub description: String,

    pub status: ServiceStatus,

    #[validate(range(min = 0))]
    pub mileage: Option<i64>,

    #[validate(range(min = 1, max = 5))]
    pub priority: Option<i32>,

    pub notes: Option<String>,
}

// Request para actualizar una entrada de servicio
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateServiceEntryRequest {
    pub date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 2000))]
    pub description: Option<String>,

    pub status: Option<ServiceStatus>,

    #[validate(range(min = 0))]
    pub mileage: Option<i64>,

    #[validate(range(min = 1, max = 5))]
    pub priority: Option<i32>,

    pub notes: Option<String>,
}

// Response de entrada de servicio
#[derive(Debug, Serialize)]
pub struct ServiceEntryResponse {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub status: ServiceStatus,
    pub mileage: Option<i64>,
    pub priority: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ServiceEntry> for ServiceEntryResponse {
    fn from(entry: ServiceEntry) -> Self {
        Self {
            id: entry.id,
            asset_id: entry.asset_id,
            date: entry.date,
            description: entry.description,
            status: entry.status,
            mileage: entry.mileage,
            priority: entry.priority,
            notes: entry.notes,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}
