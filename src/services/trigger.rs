//! Evaluador de triggers
//!
//! Determina si un vencimiento está "alcanzado" según sus condiciones de
//! fecha y/o kilometraje. Con ambos triggers presentes la semántica es
//! disyuntiva: la primera condición que ocurra dispara el vencimiento.
//! Un vencimiento sin ningún trigger es inválido y se rechaza en la
//! validación de creación, nunca llega a este evaluador.

use chrono::NaiveDate;

use crate::models::deadline::Deadline;

/// ¿Está alcanzado el trigger?
///
/// (a) `due_date` presente y `today >= due_date`, o
/// (b) `due_mileage` presente, kilometraje actual conocido y
///     `current_mileage >= due_mileage`.
pub fn is_reached(
    due_date: Option<NaiveDate>,
    due_mileage: Option<i64>,
    current_mileage: Option<i64>,
    today: NaiveDate,
) -> bool {
    let date_reached = due_date.map(|due| today >= due).unwrap_or(false);
    let mileage_reached = match (due_mileage, current_mileage) {
        (Some(due), Some(current)) => current >= due,
        _ => false,
    };
    date_reached || mileage_reached
}

/// Conveniencia sobre el modelo completo
pub fn deadline_reached(deadline: &Deadline, current_mileage: Option<i64>, today: NaiveDate) -> bool {
    is_reached(deadline.due_date, deadline.due_mileage, current_mileage, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_trigger_only() {
        let today = date(2026, 3, 10);
        assert!(is_reached(Some(date(2026, 3, 10)), None, None, today));
        assert!(is_reached(Some(date(2026, 3, 1)), None, None, today));
        assert!(!is_reached(Some(date(2026, 3, 11)), None, None, today));
    }

    #[test]
    fn test_mileage_trigger_only() {
        let today = date(2026, 3, 10);
        assert!(is_reached(None, Some(150_000), Some(150_000), today));
        assert!(is_reached(None, Some(150_000), Some(151_200), today));
        assert!(!is_reached(None, Some(150_000), Some(149_999), today));
    }

    #[test]
    fn test_mileage_trigger_without_current_mileage() {
        // Sin kilometraje actual registrado no se puede evaluar el trigger
        let today = date(2026, 3, 10);
        assert!(!is_reached(None, Some(150_000), None, today));
    }

    #[test]
    fn test_dual_trigger_is_disjunctive() {
        let today = date(2026, 3, 10);
        // Solo la fecha alcanzada
        assert!(is_reached(Some(date(2026, 3, 1)), Some(150_000), Some(100_000), today));
        // Solo el kilometraje alcanzado
        assert!(is_reached(Some(date(2026, 6, 1)), Some(150_000), Some(150_000), today));
        // Ninguno alcanzado
        assert!(!is_reached(Some(date(2026, 6, 1)), Some(150_000), Some(100_000), today));
        // Ambos alcanzados
        assert!(is_reached(Some(date(2026, 3, 1)), Some(150_000), Some(160_000), today));
    }
}
