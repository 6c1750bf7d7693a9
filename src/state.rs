//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::dispatch_service::DispatchService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub dispatch: Arc<DispatchService>,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig, dispatch: Arc<DispatchService>) -> Self {
        Self {
            pool,
            config,
            dispatch,
        }
    }
}
