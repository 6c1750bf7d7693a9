use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::deadline::{Deadline, DeadlineType};
use crate::services::trigger;
use crate::services::urgency::{self, UrgencyBand};

// Request para crear un vencimiento
//
// El invariante de trigger (fecha o kilometraje, al menos uno) se valida en
// el controller porque cruza dos campos. Si `notify_days_before` viene
// vacío, el controller aplica los defaults del usuario creador.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDeadlineRequest {
    #[serde(rename = "type")]
    pub deadline_type: DeadlineType,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub due_date: Option<NaiveDate>,

    #[validate(range(min = 0))]
    pub due_mileage: Option<i64>,

    #[serde(default)]
    pub is_recurring: bool,

    pub recurrence_rule: Option<String>,

    pub notify_days_before: Option<Vec<i32>>,
}

// Request para actualizar un vencimiento
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDeadlineRequest {
    #[serde(rename = "type")]
    pub deadline_type: Option<DeadlineType>,

    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    pub due_date: Option<NaiveDate>,

    #[validate(range(min = 0))]
    pub due_mileage: Option<i64>,

    pub is_recurring: Option<bool>,

    pub recurrence_rule: Option<String>,

    pub notify_days_before: Option<Vec<i32>>,
}

// Response de vencimiento, con la clasificación de urgencia calculada
#[derive(Debug, Serialize)]
pub struct DeadlineResponse {
    pub id: Uuid,
    pub asset_id: Uuid,
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
    pub days_until: Option<i64>,
    pub urgency: UrgencyBand,
    pub urgency_label: Option<String>,
    pub trigger_reached: bool,
}

impl DeadlineResponse {
    /// Construir la response clasificando la urgencia contra `today`.
    /// `current_mileage` es el kilometraje actual del activo, para evaluar
    /// el trigger por kilometraje.
    pub fn from_deadline(deadline: Deadline, current_mileage: Option<i64>, today: NaiveDate) -> Self {
        let days_until = deadline.due_date.map(|due| urgency::days_until(due, today));
        let urgency_band = urgency::classify_due_date(deadline.due_date, today);
        let trigger_reached = trigger::deadline_reached(&deadline, current_mileage, today);

        Self {
            id: deadline.id,
            asset_id: deadline.asset_id,
            deadline_type: deadline.deadline_type,
            title: deadline.title,
            due_date: deadline.due_date,
            due_mileage: deadline.due_mileage,
            is_recurring: deadline.is_recurring,
            recurrence_rule: deadline.recurrence_rule,
            notify_days_before: deadline.notify_days_before,
            completed: deadline.completed,
            completed_at: deadline.completed_at,
            completed_by: deadline.completed_by,
            created_at: deadline.created_at,
            days_until,
            urgency: urgency_band,
            urgency_label: days_until.map(urgency::days_label),
            trigger_reached,
        }
    }
}
