//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod asset;
pub mod audit;
pub mod deadline;
pub mod guardian;
pub mod notification;
pub mod service_entry;
pub mod user;
