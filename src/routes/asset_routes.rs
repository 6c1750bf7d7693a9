use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::asset_controller::AssetController;
use crate::dto::asset_dto::{AssetListItemResponse, AssetResponse, CreateAssetRequest, UpdateAssetRequest};
use crate::dto::common::ApiResponse;
use crate::routes::actor_from_headers;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_asset_router() -> Router<AppState> {
    Router::new()
        .route("/asset", post(create_asset))
        .route("/asset", get(list_assets))
        .route("/asset/:id", get(get_asset))
        .route("/asset/:id", put(update_asset))
        .route("/asset/:id", delete(delete_asset))
}

async fn create_asset(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateAssetRequest>,
) -> Result<Json<ApiResponse<AssetResponse>>, AppError> {
    let actor = actor_from_headers(&headers);
    let controller = AssetController::new(state.pool.clone());
    let response = controller.create(actor, request).await?;
    Ok(Json(response))
}

async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssetResponse>, AppError> {
    let controller = AssetController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_assets(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssetListItemResponse>>, AppError> {
    let controller = AssetController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAssetRequest>,
) -> Result<Json<ApiResponse<AssetResponse>>, AppError> {
    let controller = AssetController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AssetController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Asset deleted successfully"
    })))
}
