use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::deadline_controller::DeadlineController;
use crate::dto::common::ApiResponse;
use crate::dto::deadline_dto::{CreateDeadlineRequest, DeadlineResponse, UpdateDeadlineRequest};
use crate::routes::actor_from_headers;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_deadline_router() -> Router<AppState> {
    Router::new()
        .route("/asset/:asset_id/deadline", post(create_deadline))
        .route("/asset/:asset_id/deadline", get(list_deadlines))
        .route("/deadline/:id", put(update_deadline))
        .route("/deadline/:id", delete(delete_deadline))
        .route("/deadline/:id/complete", post(complete_deadline))
}

async fn create_deadline(
    State(state): State<AppState>,
    Path(asset_id): Path<Uuid>,
    headers: HeaderMap,
    Json(request): Json<CreateDeadlineRequest>,
) -> Result<Json<ApiResponse<DeadlineResponse>>, AppError> {
    let actor = actor_from_headers(&headers);
    let controller = DeadlineController::new(state.pool.clone());
    let response = controller.create(asset_id, actor, request).await?;
    Ok(Json(response))
}

async fn list_deadlines(
    State(state): State<AppState>,
    Path(asset_id): Path<Uuid>,
) -> Result<Json<Vec<DeadlineResponse>>, AppError> {
    let controller = DeadlineController::new(state.pool.clone());
    let today = chrono::Utc::now().date_naive();
    let response = controller.list_by_asset(asset_id, today).await?;
    Ok(Json(response))
}

async fn update_deadline(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDeadlineRequest>,
) -> Result<Json<ApiResponse<DeadlineResponse>>, AppError> {
    let controller = DeadlineController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn complete_deadline(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<DeadlineResponse>>, AppError> {
    let actor = actor_from_headers(&headers);
    let controller = DeadlineController::new(state.pool.clone());
    let response = controller.complete(id, actor).await?;
    Ok(Json(response))
}

async fn delete_deadline(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = DeadlineController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Deadline deleted successfully"
    })))
}
