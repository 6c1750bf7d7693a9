//! Modelo de Deadline
//!
//! Un vencimiento pertenece a exactamente un activo y tiene un trigger por
//! fecha, por kilometraje, o ambos. Invariante: al menos uno de `due_date`
//! o `due_mileage` debe estar presente (validado antes de persistir).
//! `completed_at` y `completed_by` son ambos null sii `completed` es false.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Tipo de vencimiento - mapea al ENUM deadline_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq)]
#[sqlx(type_name = "deadline_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DeadlineType {
    Insurance,
    Inspection,
    Homologation,
    Service,
    Other,
}

/// Deadline principal - mapea exactamente a la tabla deadlines
///
/// `recurrence_rule` es texto libre legible por humanos; este sistema no lo
/// parsea y el roll-forward de vencimientos recurrentes es una acción manual
/// del usuario.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Deadline {
    pub id: Uuid,
    pub asset_id: Uuid,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub deadline_type: DeadlineType,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub due_mileage: Option<i64>,
    pub is_recurring: bool,
    pub recurrence_rule: Option<String>,
    pub notify_days_before: Vec<i32>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub completed_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
}
