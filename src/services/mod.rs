//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: el ciclo de
//! vida de vencimientos y la selección, agrupación y envío de
//! notificaciones.

pub mod completion;
pub mod dispatch_service;
pub mod email_template;
pub mod mail_service;
pub mod notification_selector;
pub mod recipient_grouper;
pub mod scheduler;
pub mod trigger;
pub mod urgency;

pub use dispatch_service::*;
pub use mail_service::*;
