use sqlx::PgPool;

use crate::dto::audit_dto::AuditLogQuery;
use crate::models::audit::AuditLogEntry;
use crate::repositories::audit_repository::AuditRepository;
use crate::utils::errors::AppError;

const DEFAULT_PAGE_SIZE: i64 = 50;
const MAX_PAGE_SIZE: i64 = 200;

pub struct AuditController {
    repository: AuditRepository,
}

impl AuditController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AuditRepository::new(pool),
        }
    }

    pub async fn list(&self, query: AuditLogQuery) -> Result<Vec<AuditLogEntry>, AppError> {
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        let offset = query.offset.unwrap_or(0).max(0);

        self.repository.list(query.table.as_deref(), limit, offset).await
    }
}
