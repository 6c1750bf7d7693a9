//! Utilidades compartidas
//!
//! Manejo de errores y helpers de validación usados por toda la aplicación.

pub mod errors;
pub mod validation;
