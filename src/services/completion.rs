//! Completado de vencimientos
//!
//! La regla de markDone vive acá, detrás de un trait sobre el par
//! leer/completar, para poder testearla sin Postgres. El doble completado
//! es un Conflict y nunca pisa los campos del primer completado; el guard
//! de la capa de datos cubre la carrera entre el read y el write.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::deadline::Deadline;
use crate::utils::errors::AppError;

/// Par leer/completar sobre el que corre la regla de markDone
#[async_trait]
pub trait CompletionStore: Send + Sync {
    async fn find(&self, id: Uuid) -> Result<Option<Deadline>, AppError>;

    /// Marcar completado solo si aún no lo estaba; `None` cuando el guard
    /// no aplicó porque otro completado ganó
    async fn mark_completed(
        &self,
        id: Uuid,
        completed_by: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> Result<Option<Deadline>, AppError>;
}

/// Marcar un vencimiento como completado.
///
/// Segundo intento sobre el mismo vencimiento: Conflict, con los campos
/// `completed_at`/`completed_by` del primer completado intactos. Para
/// vencimientos recurrentes la próxima ocurrencia es una acción manual del
/// usuario (recurrence_rule es texto libre sin semántica máquina).
pub async fn complete_deadline(
    store: &dyn CompletionStore,
    id: Uuid,
    actor: Option<Uuid>,
    now: DateTime<Utc>,
) -> Result<Deadline, AppError> {
    let current = store
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Deadline not found".to_string()))?;

    if current.completed {
        return Err(AppError::Conflict("Deadline is already completed".to_string()));
    }

    store
        .mark_completed(id, actor, now)
        .await?
        // El guard perdió contra otra transacción
        .ok_or_else(|| AppError::Conflict("Deadline is already completed".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tokio::sync::Mutex;

    use crate::models::deadline::DeadlineType;

    struct InMemoryStore {
        deadline: Mutex<Deadline>,
    }

    #[async_trait]
    impl CompletionStore for InMemoryStore {
        async fn find(&self, id: Uuid) -> Result<Option<Deadline>, AppError> {
            let deadline = self.deadline.lock().await;
            Ok((deadline.id == id).then(|| deadline.clone()))
        }

        async fn mark_completed(
            &self,
            id: Uuid,
            completed_by: Option<Uuid>,
            now: DateTime<Utc>,
        ) -> Result<Option<Deadline>, AppError> {
            let mut deadline = self.deadline.lock().await;
            if deadline.id != id || deadline.completed {
                return Ok(None);
            }
            deadline.completed = true;
            deadline.completed_at = Some(now);
            deadline.completed_by = completed_by;
            Ok(Some(deadline.clone()))
        }
    }

    /// Simula perder la carrera: el read ve el vencimiento abierto pero el
    /// guard del write ya no aplica
    struct RacingStore {
        deadline: Deadline,
    }

    #[async_trait]
    impl CompletionStore for RacingStore {
        async fn find(&self, _id: Uuid) -> Result<Option<Deadline>, AppError> {
            Ok(Some(self.deadline.clone()))
        }

        async fn mark_completed(
            &self,
            _id: Uuid,
            _completed_by: Option<Uuid>,
            _now: DateTime<Utc>,
        ) -> Result<Option<Deadline>, AppError> {
            Ok(None)
        }
    }

    fn open_deadline(id: Uuid) -> Deadline {
        Deadline {
            id,
            asset_id: Uuid::new_v4(),
            deadline_type: DeadlineType::Inspection,
            title: "Technical inspection".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 3, 17),
            due_mileage: None,
            is_recurring: false,
            recurrence_rule: None,
            notify_days_before: vec![30, 14, 7, 1],
            completed: false,
            completed_at: None,
            completed_by: None,
            created_at: Utc::now(),
            created_by: None,
        }
    }

    #[tokio::test]
    async fn test_complete_sets_completion_fields() {
        let id = Uuid::new_v4();
        let actor = Some(Uuid::new_v4());
        let now = Utc::now();
        let store = InMemoryStore {
            deadline: Mutex::new(open_deadline(id)),
        };

        let completed = complete_deadline(&store, id, actor, now).await.unwrap();
        assert!(completed.completed);
        assert_eq!(completed.completed_at, Some(now));
        assert_eq!(completed.completed_by, actor);
    }

    #[tokio::test]
    async fn test_second_completion_conflicts_and_keeps_the_first() {
        let id = Uuid::new_v4();
        let first_actor = Some(Uuid::new_v4());
        let first_at = Utc::now();
        let store = InMemoryStore {
            deadline: Mutex::new(open_deadline(id)),
        };

        complete_deadline(&store, id, first_actor, first_at).await.unwrap();

        let later = first_at + chrono::Duration::minutes(5);
        let second = complete_deadline(&store, id, Some(Uuid::new_v4()), later).await;
        assert!(matches!(second, Err(AppError::Conflict(_))));

        // Los campos del primer completado quedan intactos
        let stored = store.deadline.lock().await;
        assert_eq!(stored.completed_at, Some(first_at));
        assert_eq!(stored.completed_by, first_actor);
    }

    #[tokio::test]
    async fn test_completing_missing_deadline_is_not_found() {
        let store = InMemoryStore {
            deadline: Mutex::new(open_deadline(Uuid::new_v4())),
        };

        let result = complete_deadline(&store, Uuid::new_v4(), None, Utc::now()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_losing_the_completion_race_is_a_conflict() {
        let id = Uuid::new_v4();
        let store = RacingStore {
            deadline: open_deadline(id),
        };

        let result = complete_deadline(&store, id, None, Utc::now()).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
