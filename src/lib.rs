//! Fleet Maintenance API
//!
//! Backend de seguimiento de mantenimiento de flota: activos, vencimientos,
//! historial de servicio, responsables y notificaciones por correo.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
