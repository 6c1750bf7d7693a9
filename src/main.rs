use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use fleet_maintenance::config::environment::EnvironmentConfig;
use fleet_maintenance::database::create_pool;
use fleet_maintenance::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use fleet_maintenance::repositories::notification_repository::NotificationRepository;
use fleet_maintenance::routes;
use fleet_maintenance::services::dispatch_service::DispatchService;
use fleet_maintenance::services::mail_service::ResendMailer;
use fleet_maintenance::services::scheduler;
use fleet_maintenance::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🔧 Fleet Maintenance - API de mantenimiento de flota");
    info!("====================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    info!("✅ Base de datos conectada exitosamente");

    // Servicio de notificaciones: repositorio como fuente, Resend como mailer
    let source = Arc::new(NotificationRepository::new(pool.clone()));
    let mailer = Arc::new(ResendMailer::new(
        config.resend_api_key.clone(),
        config.mail_from.clone(),
    ));
    let dispatch = Arc::new(DispatchService::new(
        source,
        mailer,
        config.app_url.clone(),
    ));

    // Ciclo programado de notificaciones en background
    let _scheduler_handle =
        scheduler::spawn_dispatch_loop(dispatch.clone(), config.dispatch_interval_hours);

    let app_state = AppState::new(pool, config.clone(), dispatch);

    let cors = if app_state.config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(app_state.config.cors_origins.clone())
    };

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api", routes::create_api_router())
        .layer(cors)
        .with_state(app_state);

    // Puerto del servidor
    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚛 Endpoints - Asset:");
    info!("   POST /api/asset - Crear activo");
    info!("   GET  /api/asset - Listar activos con próximo vencimiento");
    info!("   GET  /api/asset/:id - Obtener activo");
    info!("   PUT  /api/asset/:id - Actualizar activo");
    info!("   DELETE /api/asset/:id - Eliminar activo");
    info!("📅 Endpoints - Deadline:");
    info!("   POST /api/asset/:asset_id/deadline - Crear vencimiento");
    info!("   GET  /api/asset/:asset_id/deadline - Listar vencimientos");
    info!("   PUT  /api/deadline/:id - Actualizar vencimiento");
    info!("   POST /api/deadline/:id/complete - Marcar como completado");
    info!("   DELETE /api/deadline/:id - Eliminar vencimiento");
    info!("🔧 Endpoints - Service entry:");
    info!("   POST /api/asset/:asset_id/service-entry - Registrar servicio");
    info!("   GET  /api/asset/:asset_id/service-entry - Historial de servicio");
    info!("   PUT  /api/service-entry/:id - Actualizar registro");
    info!("   DELETE /api/service-entry/:id - Eliminar registro");
    info!("👤 Endpoints - Guardian:");
    info!("   GET  /api/asset/:asset_id/guardian - Listar responsables");
    info!("   PUT  /api/asset/:asset_id/guardian/:position - Asignar responsable");
    info!("   DELETE /api/asset/:asset_id/guardian/:position - Quitar responsable");
    info!("   GET  /api/user - Listar usuarios");
    info!("🔔 Endpoints - Notificaciones:");
    info!("   GET  /api/settings/notifications - Preferencias de notificación");
    info!("   PUT  /api/settings/notifications - Actualizar preferencias");
    info!("   POST /api/notifications/dispatch - Lanzar ciclo de notificaciones");
    info!("📊 Endpoints - Dashboard:");
    info!("   GET  /api/dashboard/stats - Estadísticas del tablero");
    info!("📜 Endpoints - Audit:");
    info!("   GET  /api/audit-log - Registro de auditoría");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                anyhow::Error::from(e)
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "fleet-maintenance",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
