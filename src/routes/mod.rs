use axum::http::HeaderMap;
use axum::Router;
use uuid::Uuid;

use crate::state::AppState;

pub mod asset_routes;
pub mod audit_routes;
pub mod dashboard_routes;
pub mod deadline_routes;
pub mod guardian_routes;
pub mod notification_routes;
pub mod service_entry_routes;
pub mod settings_routes;

/// Router de la API completa bajo /api
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(asset_routes::create_asset_router())
        .merge(deadline_routes::create_deadline_router())
        .merge(service_entry_routes::create_service_entry_router())
        .merge(guardian_routes::create_guardian_router())
        .merge(settings_routes::create_settings_router())
        .merge(audit_routes::create_audit_router())
        .merge(dashboard_routes::create_dashboard_router())
        .merge(notification_routes::create_notification_router())
}

// TODO: Extraer el usuario del JWT cuando implementemos middleware de auth.
// Por ahora el id del usuario actuante viaja en el header X-User-Id.
pub fn actor_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
}
