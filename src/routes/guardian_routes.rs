use axum::{
    extract::{Path, State},
    routing::{delete, get, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::guardian_controller::GuardianController;
use crate::dto::common::ApiResponse;
use crate::dto::guardian_dto::{GuardianResponse, SetGuardianRequest};
use crate::models::user::AppUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_guardian_router() -> Router<AppState> {
    Router::new()
        .route("/asset/:asset_id/guardian", get(list_guardians))
        .route("/asset/:asset_id/guardian/:position", put(set_guardian))
        .route("/asset/:asset_id/guardian/:position", delete(remove_guardian))
        .route("/user", get(list_users))
}

async fn list_guardians(
    State(state): State<AppState>,
    Path(asset_id): Path<Uuid>,
) -> Result<Json<Vec<GuardianResponse>>, AppError> {
    let controller = GuardianController::new(state.pool.clone());
    let response = controller.list_for_asset(asset_id).await?;
    Ok(Json(response))
}

async fn set_guardian(
    State(state): State<AppState>,
    Path((asset_id, position)): Path<(Uuid, i32)>,
    Json(request): Json<SetGuardianRequest>,
) -> Result<Json<ApiResponse<GuardianResponse>>, AppError> {
    let controller = GuardianController::new(state.pool.clone());
    let response = controller.set(asset_id, position, request.user_id).await?;
    Ok(Json(response))
}

async fn remove_guardian(
    State(state): State<AppState>,
    Path((asset_id, position)): Path<(Uuid, i32)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = GuardianController::new(state.pool.clone());
    controller.remove(asset_id, position).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Guardian removed successfully"
    })))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<AppUser>>, AppError> {
    let controller = GuardianController::new(state.pool.clone());
    let response = controller.list_users().await?;
    Ok(Json(response))
}
