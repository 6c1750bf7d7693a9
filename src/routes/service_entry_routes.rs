use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::service_entry_controller::ServiceEntryController;
use crate::dto::common::ApiResponse;
use crate::dto::service_entry_dto::{
    CreateServiceEntryRequest, ServiceEntryResponse, UpdateServiceEntryRequest,
};
use crate::routes::actor_from_headers;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_service_entry_router() -> Router<AppState> {
    Router::new()
        .route("/asset/:asset_id/service-entry", post(create_service_entry))
        .route("/asset/:asset_id/service-entry", get(list_service_entries))
        .route("/service-entry/:id", put(update_service_entry))
        .route("/service-entry/:id", delete(delete_service_entry))
}

async fn create_service_entry(
    State(state): State<AppState>,
    Path(asset_id): Path<Uuid>,
    headers: HeaderMap,
    Json(request): Json<CreateServiceEntryRequest>,
) -> Result<Json<ApiResponse<ServiceEntryResponse>>, AppError> {
    let actor = actor_from_headers(&headers);
    let controller = ServiceEntryController::new(state.pool.clone());
    let response = controller.create(asset_id, actor, request).await?;
    Ok(Json(response))
}

async fn list_service_entries(
    State(state): State<AppState>,
    Path(asset_id): Path<Uuid>,
) -> Result<Json<Vec<ServiceEntryResponse>>, AppError> {
    let controller = ServiceEntryController::new(state.pool.clone());
    let response = controller.list_by_asset(asset_id).await?;
    Ok(Json(response))
}

async fn update_service_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(request): Json<UpdateServiceEntryRequest>,
) -> Result<Json<ApiResponse<ServiceEntryResponse>>, AppError> {
    let actor = actor_from_headers(&headers);
    let controller = ServiceEntryController::new(state.pool.clone());
    let response = controller.update(id, actor, request).await?;
    Ok(Json(response))
}

async fn delete_service_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ServiceEntryController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Service entry deleted successfully"
    })))
}
