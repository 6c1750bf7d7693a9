use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::notification::NotificationSettings;
use crate::services::dispatch_service::NotificationSource;
use crate::services::notification_selector::OpenDeadline;
use crate::services::recipient_grouper::GuardianContact;
use crate::utils::errors::AppError;

#[derive(Debug, sqlx::FromRow)]
struct OpenDeadlineRow {
    deadline_id: Uuid,
    asset_id: Uuid,
    asset_name: String,
    title: String,
    due_date: NaiveDate,
    notify_days_before: Vec<i32>,
}

#[derive(Debug, sqlx::FromRow)]
struct GuardianContactRow {
    asset_id: Uuid,
    email: String,
    full_name: String,
    position: i32,
}

pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_settings(&self, user_id: Uuid) -> Result<Option<NotificationSettings>, AppError> {
        let settings = sqlx::query_as::<_, NotificationSettings>(
            "SELECT * FROM notification_settings WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(settings)
    }

    pub async fn upsert_settings(
        &self,
        user_id: Uuid,
        email_enabled: bool,
        push_enabled: bool,
        notify_days: Vec<i32>,
    ) -> Result<NotificationSettings, AppError> {
        let settings = sqlx::query_as::<_, NotificationSettings>(
            r#"
            INSERT INTO notification_settings (id, user_id, email_enabled, push_enabled, notify_days)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id)
            DO UPDATE SET email_enabled = EXCLUDED.email_enabled,
                          push_enabled = EXCLUDED.push_enabled,
                          notify_days = EXCLUDED.notify_days
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(email_enabled)
        .bind(push_enabled)
        .bind(notify_days)
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }
}

#[async_trait]
impl NotificationSource for NotificationRepository {
    async fn open_dated_deadlines(&self) -> Result<Vec<OpenDeadline>, AppError> {
        let rows = sqlx::query_as::<_, OpenDeadlineRow>(
            r#"
            SELECT d.id AS deadline_id, d.asset_id, a.name AS asset_name,
                   d.title, d.due_date, d.notify_days_before
            FROM deadlines d
            JOIN assets a ON a.id = d.asset_id
            WHERE d.completed = false AND d.due_date IS NOT NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| OpenDeadline {
                deadline_id: row.deadline_id,
                asset_id: row.asset_id,
                asset_name: row.asset_name,
                title: row.title,
                due_date: row.due_date,
                notify_days_before: row.notify_days_before,
            })
            .collect())
    }

    // Los guardianes con email deshabilitado quedan fuera; sin fila de
    // settings el email cuenta como habilitado
    async fn guardian_contacts(&self) -> Result<Vec<GuardianContact>, AppError> {
        let rows = sqlx::query_as::<_, GuardianContactRow>(
            r#"
            SELECT g.asset_id, u.email, u.full_name, g.position
            FROM asset_guardians g
            JOIN users u ON u.id = g.user_id
            LEFT JOIN notification_settings ns ON ns.user_id = g.user_id
            WHERE COALESCE(ns.email_enabled, true)
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| GuardianContact {
                asset_id: row.asset_id,
                email: row.email,
                name: row.full_name,
                position: row.position,
            })
            .collect())
    }
}
