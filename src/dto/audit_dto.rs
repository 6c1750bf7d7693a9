use serde::Deserialize;

// Filtros para el listado del audit log (solo lectura, append-only)
#[derive(Debug, Deserialize)]
pub struct AuditLogQuery {
    pub table: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
