use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::audit_controller::AuditController;
use crate::dto::audit_dto::AuditLogQuery;
use crate::models::audit::AuditLogEntry;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_audit_router() -> Router<AppState> {
    Router::new().route("/audit-log", get(list_audit_log))
}

async fn list_audit_log(
    State(state): State<AppState>,
    Query(query): Query<AuditLogQuery>,
) -> Result<Json<Vec<AuditLogEntry>>, AppError> {
    let controller = AuditController::new(state.pool.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}
