//! Agrupador por destinatario
//!
//! Resuelve las notificaciones seleccionadas a los guardianes de cada activo
//! y las agrupa en un batch por destinatario para el envío por email. Un
//! vencimiento con varios guardianes produce una entrada por guardián; un
//! activo sin guardianes configurados no genera notificación (decisión de
//! producto: no hay destinatario fallback).

use std::collections::BTreeMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::services::notification_selector::SelectedNotification;

/// Contacto de guardián resuelto a partir de la asignación (activo, posición)
#[derive(Debug, Clone)]
pub struct GuardianContact {
    pub asset_id: Uuid,
    pub email: String,
    pub name: String,
    pub position: i32,
}

/// Ítem de notificación dentro del batch de un destinatario
#[derive(Debug, Clone)]
pub struct NotificationItem {
    pub asset_name: String,
    pub deadline_title: String,
    pub due_date: NaiveDate,
    pub days_until: i64,
}

/// Batch de notificaciones para un destinatario
#[derive(Debug, Clone)]
pub struct RecipientBatch {
    pub email: String,
    pub name: String,
    pub items: Vec<NotificationItem>,
}

impl RecipientBatch {
    /// Un batch es urgente si algún ítem está a 7 días o menos (banda
    /// critical u overdue)
    pub fn urgent_count(&self) -> usize {
        self.items.iter().filter(|i| i.days_until <= 7).count()
    }

    pub fn is_urgent(&self) -> bool {
        self.urgent_count() > 0
    }
}

/// Agrupar las notificaciones seleccionadas por email de guardián.
///
/// Dentro de cada batch los ítems se ordenan por `days_until` ascendente y
/// luego por nombre de activo, para que el render sea determinista. El orden
/// entre destinatarios (por email) también es estable.
pub fn group_by_recipient(
    selected: &[SelectedNotification],
    contacts: &[GuardianContact],
) -> Vec<RecipientBatch> {
    let mut by_email: BTreeMap<String, RecipientBatch> = BTreeMap::new();

    for notification in selected {
        for contact in contacts.iter().filter(|c| c.asset_id == notification.deadline.asset_id) {
            let batch = by_email
                .entry(contact.email.clone())
                .or_insert_with(|| RecipientBatch {
                    email: contact.email.clone(),
                    name: contact.name.clone(),
                    items: Vec::new(),
                });
            batch.items.push(NotificationItem {
                asset_name: notification.deadline.asset_name.clone(),
                deadline_title: notification.deadline.title.clone(),
                due_date: notification.deadline.due_date,
                days_until: notification.days_until,
            });
        }
    }

    let mut batches: Vec<RecipientBatch> = by_email.into_values().collect();
    for batch in &mut batches {
        batch
            .items
            .sort_by(|a, b| a.days_until.cmp(&b.days_until).then_with(|| a.asset_name.cmp(&b.asset_name)));
    }
    batches
}

/// Asunto del email según la regla de urgencia: los batches urgentes llevan
/// prefijo y el conteo de ítems urgentes; los demás, el conteo total.
pub fn subject_for(batch: &RecipientBatch) -> String {
    let urgent = batch.urgent_count();
    if urgent > 0 {
        format!(
            "[Urgent] {} deadline{} need{} attention — Fleet Maintenance",
            urgent,
            if urgent == 1 { "" } else { "s" },
            if urgent == 1 { "s" } else { "" },
        )
    } else {
        let total = batch.items.len();
        format!(
            "{} upcoming deadline{} — Fleet Maintenance",
            total,
            if total == 1 { "" } else { "s" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notification_selector::OpenDeadline;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn selected(asset_id: Uuid, asset_name: &str, title: &str, days_until: i64) -> SelectedNotification {
        SelectedNotification {
            deadline: OpenDeadline {
                deadline_id: Uuid::new_v4(),
                asset_id,
                asset_name: asset_name.to_string(),
                title: title.to_string(),
                due_date: date(2026, 3, 17),
                notify_days_before: vec![30, 14, 7, 1],
            },
            days_until,
        }
    }

    fn contact(asset_id: Uuid, email: &str) -> GuardianContact {
        GuardianContact {
            asset_id,
            email: email.to_string(),
            name: "Guardian".to_string(),
            position: 1,
        }
    }

    #[test]
    fn test_two_guardians_two_entries() {
        let asset_id = Uuid::new_v4();
        let selected = vec![selected(asset_id, "Truck-12", "Insurance", 7)];
        let contacts = vec![contact(asset_id, "a@x.com"), contact(asset_id, "b@x.com")];

        let batches = group_by_recipient(&selected, &contacts);
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].email, "a@x.com");
        assert_eq!(batches[1].email, "b@x.com");
        assert_eq!(batches[0].items.len(), 1);
        assert_eq!(batches[1].items.len(), 1);
    }

    #[test]
    fn test_zero_guardians_zero_entries() {
        let selected = vec![selected(Uuid::new_v4(), "Truck-12", "Insurance", 7)];

        let batches = group_by_recipient(&selected, &[]);
        assert!(batches.is_empty());
    }

    #[test]
    fn test_items_sorted_by_days_then_asset_name() {
        let asset_a = Uuid::new_v4();
        let asset_b = Uuid::new_v4();
        let asset_c = Uuid::new_v4();
        let selected = vec![
            selected(asset_b, "Bobcat", "Service", 14),
            selected(asset_a, "Astra", "Inspection", 14),
            selected(asset_c, "Crane", "Insurance", -2),
        ];
        let contacts = vec![
            contact(asset_a, "a@x.com"),
            contact(asset_b, "a@x.com"),
            contact(asset_c, "a@x.com"),
        ];

        let batches = group_by_recipient(&selected, &contacts);
        assert_eq!(batches.len(), 1);
        let names: Vec<&str> = batches[0].items.iter().map(|i| i.asset_name.as_str()).collect();
        assert_eq!(names, vec!["Crane", "Astra", "Bobcat"]);
    }

    #[test]
    fn test_urgent_subject() {
        let asset_id = Uuid::new_v4();
        let selected = vec![selected(asset_id, "Truck-12", "Insurance", 7)];
        let contacts = vec![contact(asset_id, "a@x.com")];

        let batches = group_by_recipient(&selected, &contacts);
        assert!(batches[0].is_urgent());
        assert_eq!(batches[0].urgent_count(), 1);
        assert_eq!(
            subject_for(&batches[0]),
            "[Urgent] 1 deadline needs attention — Fleet Maintenance"
        );
    }

    #[test]
    fn test_plain_subject_counts_all_items() {
        let asset_a = Uuid::new_v4();
        let asset_b = Uuid::new_v4();
        let selected = vec![
            selected(asset_a, "Astra", "Inspection", 14),
            selected(asset_b, "Bobcat", "Service", 30),
        ];
        let contacts = vec![contact(asset_a, "a@x.com"), contact(asset_b, "a@x.com")];

        let batches = group_by_recipient(&selected, &contacts);
        assert!(!batches[0].is_urgent());
        assert_eq!(
            subject_for(&batches[0]),
            "2 upcoming deadlines — Fleet Maintenance"
        );
    }
}
