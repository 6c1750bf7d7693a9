//! Loop de dispatch programado
//!
//! Tarea de fondo que ejecuta la corrida de dispatch con cadencia diaria.
//! La alineación con una hora de pared concreta es un tema de deployment;
//! el endpoint on-demand usa el mismo servicio para testing.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use crate::services::dispatch_service::DispatchService;

/// Lanzar el loop de dispatch. El primer tick corre de inmediato; los
/// siguientes cada `interval_hours`. Una corrida fallida se loguea y no
/// tumba el proceso.
pub fn spawn_dispatch_loop(service: Arc<DispatchService>, interval_hours: u64) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_hours * 3600));

        loop {
            interval.tick().await;
            let today = chrono::Utc::now().date_naive();
            info!("⏰ Scheduled dispatch run starting for {}", today);

            match service.run(today).await {
                Ok(report) => {
                    info!(
                        "⏰ Scheduled dispatch run done: sent={} total={} errors={}",
                        report.sent,
                        report.total,
                        report.errors.len()
                    );
                }
                Err(e) => {
                    error!("❌ Scheduled dispatch run failed: {}", e);
                }
            }
        }
    })
}
