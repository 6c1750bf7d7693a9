use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::notification_controller::NotificationController;
use crate::dto::common::ApiResponse;
use crate::dto::notification_dto::{NotificationSettingsResponse, UpdateNotificationSettingsRequest};
use crate::routes::actor_from_headers;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_settings_router() -> Router<AppState> {
    Router::new()
        .route("/settings/notifications", get(get_settings))
        .route("/settings/notifications", put(update_settings))
}

async fn get_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<NotificationSettingsResponse>, AppError> {
    let user_id = actor_from_headers(&headers)
        .ok_or_else(|| AppError::BadRequest("Missing X-User-Id header".to_string()))?;
    let controller = NotificationController::new(state.pool.clone());
    let response = controller.get(user_id).await?;
    Ok(Json(response))
}

async fn update_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpdateNotificationSettingsRequest>,
) -> Result<Json<ApiResponse<NotificationSettingsResponse>>, AppError> {
    let user_id = actor_from_headers(&headers)
        .ok_or_else(|| AppError::BadRequest("Missing X-User-Id header".to_string()))?;
    let controller = NotificationController::new(state.pool.clone());
    let response = controller.update(user_id, request).await?;
    Ok(Json(response))
}
