//! Selector de notificaciones
//!
//! Función de selección pura: dado el conjunto de vencimientos abiertos con
//! fecha y el día actual, decide cuáles cruzan un límite de notificación.
//! Un vencimiento se selecciona si `days_until` coincide exactamente con
//! alguno de sus lead times configurados, o si ya está vencido
//! (`days_until < 0`) — los vencidos se incluyen siempre, sin importar los
//! lead times, para que no desaparezcan en silencio una vez pasadas sus
//! ventanas programadas.
//!
//! La deduplicación contra envíos anteriores no es responsabilidad de este
//! selector: cada corrida reconstruye el conjunto desde los datos actuales.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::services::urgency;

/// Vencimiento abierto con fecha, ya resuelto a su activo
#[derive(Debug, Clone)]
pub struct OpenDeadline {
    pub deadline_id: Uuid,
    pub asset_id: Uuid,
    pub asset_name: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub notify_days_before: Vec<i32>,
}

/// Par (vencimiento, días restantes) que cruza un límite de notificación
#[derive(Debug, Clone)]
pub struct SelectedNotification {
    pub deadline: OpenDeadline,
    pub days_until: i64,
}

/// Seleccionar los vencimientos pendientes de notificación para `today`
pub fn select_pending(deadlines: Vec<OpenDeadline>, today: NaiveDate) -> Vec<SelectedNotification> {
    deadlines
        .into_iter()
        .filter_map(|deadline| {
            let days = urgency::days_until(deadline.due_date, today);
            let lead_time_match = i32::try_from(days)
                .map(|d| deadline.notify_days_before.contains(&d))
                .unwrap_or(false);

            if days < 0 || lead_time_match {
                Some(SelectedNotification { deadline, days_until: days })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open_deadline(due: NaiveDate, notify_days: Vec<i32>) -> OpenDeadline {
        OpenDeadline {
            deadline_id: Uuid::new_v4(),
            asset_id: Uuid::new_v4(),
            asset_name: "Truck-12".to_string(),
            title: "Technical inspection".to_string(),
            due_date: due,
            notify_days_before: notify_days,
        }
    }

    #[test]
    fn test_selects_on_exact_lead_time_match() {
        let today = date(2026, 3, 10);
        let deadlines = vec![open_deadline(date(2026, 3, 17), vec![30, 14, 7, 1])];

        let selected = select_pending(deadlines, today);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].days_until, 7);
    }

    #[test]
    fn test_does_not_select_between_lead_times() {
        // 8 días restantes: ni 7 ni 14, no se selecciona
        let today = date(2026, 3, 10);
        let deadlines = vec![open_deadline(date(2026, 3, 18), vec![30, 14, 7, 1])];

        assert!(select_pending(deadlines, today).is_empty());
    }

    #[test]
    fn test_overdue_always_selected() {
        // 5 días vencido, ningún lead time coincide exactamente
        let today = date(2026, 3, 10);
        let deadlines = vec![open_deadline(date(2026, 3, 5), vec![30, 14, 7, 1])];

        let selected = select_pending(deadlines, today);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].days_until, -5);
    }

    #[test]
    fn test_empty_lead_times_only_selects_overdue() {
        let today = date(2026, 3, 10);
        let deadlines = vec![
            open_deadline(date(2026, 3, 17), vec![]),
            open_deadline(date(2026, 3, 9), vec![]),
        ];

        let selected = select_pending(deadlines, today);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].days_until, -1);
    }

    #[test]
    fn test_due_today_requires_zero_lead_time() {
        // days_until == 0 no es negativo: solo se selecciona con lead time 0
        // configurado, que la validación no admite; hoy sin match no dispara
        let today = date(2026, 3, 10);
        let deadlines = vec![open_deadline(date(2026, 3, 10), vec![30, 14, 7, 1])];

        assert!(select_pending(deadlines, today).is_empty());
    }
}
