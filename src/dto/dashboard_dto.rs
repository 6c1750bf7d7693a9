use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::models::audit::AuditLogEntry;
use crate::models::deadline::DeadlineType;
use crate::services::urgency::UrgencyBand;

// Vencimiento con los datos del activo, para el dashboard
#[derive(Debug, Serialize)]
pub struct DeadlineWithAssetResponse {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub asset_name: String,
    pub asset_identifier: String,
    #[serde(rename = "type")]
    pub deadline_type: DeadlineType,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub due_mileage: Option<i64>,
    pub days_until: Option<i64>,
    pub urgency: UrgencyBand,
}

// Estadísticas del dashboard: totales, vencidos, próximos 90 días y
// actividad reciente del audit log
#[derive(Debug, Serialize)]
pub struct DashboardStatsResponse {
    pub total_assets: i64,
    pub overdue_count: i64,
    pub upcoming_deadlines: Vec<DeadlineWithAssetResponse>,
    pub recent_activity: Vec<AuditLogEntry>,
}
