use chrono::{Duration, NaiveDate};
use sqlx::PgPool;

use crate::dto::dashboard_dto::{DashboardStatsResponse, DeadlineWithAssetResponse};
use crate::repositories::asset_repository::AssetRepository;
use crate::repositories::audit_repository::AuditRepository;
use crate::repositories::deadline_repository::{DeadlineRepository, DeadlineWithAssetRow};
use crate::services::urgency;
use crate::utils::errors::AppError;

const UPCOMING_HORIZON_DAYS: i64 = 90;
const DEADLINE_LIST_LIMIT: i64 = 20;
const ACTIVITY_LIMIT: i64 = 10;

pub struct DashboardController {
    assets: AssetRepository,
    deadlines: DeadlineRepository,
    audit: AuditRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            assets: AssetRepository::new(pool.clone()),
            deadlines: DeadlineRepository::new(pool.clone()),
            audit: AuditRepository::new(pool),
        }
    }

    /// Estadísticas del dashboard: vencidos primero, después los próximos
    /// 90 días, más la actividad reciente del audit log
    pub async fn stats(&self, today: NaiveDate) -> Result<DashboardStatsResponse, AppError> {
        let horizon = today + Duration::days(UPCOMING_HORIZON_DAYS);

        let total_assets = self.assets.count().await?;
        let overdue_count = self.deadlines.overdue_count(today).await?;
        let overdue = self.deadlines.overdue_with_asset(today, DEADLINE_LIST_LIMIT).await?;
        let upcoming = self
            .deadlines
            .upcoming_with_asset(today, horizon, DEADLINE_LIST_LIMIT)
            .await?;
        let recent_activity = self.audit.recent(ACTIVITY_LIMIT).await?;

        let upcoming_deadlines = overdue
            .into_iter()
            .chain(upcoming)
            .map(|row| to_response(row, today))
            .collect();

        Ok(DashboardStatsResponse {
            total_assets,
            overdue_count,
            upcoming_deadlines,
            recent_activity,
        })
    }
}

fn to_response(row: DeadlineWithAssetRow, today: NaiveDate) -> DeadlineWithAssetResponse {
    let days_until = row.due_date.map(|due| urgency::days_until(due, today));

    DeadlineWithAssetResponse {
        id: row.id,
        asset_id: row.asset_id,
        asset_name: row.asset_name,
        asset_identifier: row.asset_identifier,
        deadline_type: row.deadline_type,
        title: row.title,
        due_date: row.due_date,
        due_mileage: row.due_mileage,
        days_until,
        urgency: urgency::classify_due_date(row.due_date, today),
    }
}
