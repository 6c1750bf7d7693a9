use axum::{extract::State, routing::post, Json, Router};

use crate::services::dispatch_service::DispatchReport;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_notification_router() -> Router<AppState> {
    Router::new().route("/notifications/dispatch", post(dispatch_notifications))
}

/// Lanza manualmente el ciclo de notificaciones (mismo camino que el scheduler).
async fn dispatch_notifications(
    State(state): State<AppState>,
) -> Result<Json<DispatchReport>, AppError> {
    let today = chrono::Utc::now().date_naive();
    let report = state.dispatch.run(today).await?;
    Ok(Json(report))
}
