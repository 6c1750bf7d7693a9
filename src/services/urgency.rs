//! Clasificador de urgencia
//!
//! Funciones puras sobre fechas: días hasta el vencimiento, banda de
//! urgencia y etiqueta legible. `today` siempre viene del caller para que
//! la clasificación sea determinista y testeable (nada de reloj ambiente).

use chrono::NaiveDate;
use serde::Serialize;

/// Banda de urgencia de un vencimiento con fecha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyBand {
    Overdue,
    Critical,
    Warning,
    Upcoming,
    Normal,
}

/// Días entre hoy y la fecha de vencimiento (negativo si ya pasó)
pub fn days_until(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (due_date - today).num_days()
}

/// Clasificar según la banda. Límites cerrados en ambos extremos:
/// <0 overdue, 0..=7 critical, 8..=30 warning, 31..=90 upcoming, >90 normal.
pub fn classify(days_until: i64) -> UrgencyBand {
    if days_until < 0 {
        UrgencyBand::Overdue
    } else if days_until <= 7 {
        UrgencyBand::Critical
    } else if days_until <= 30 {
        UrgencyBand::Warning
    } else if days_until <= 90 {
        UrgencyBand::Upcoming
    } else {
        UrgencyBand::Normal
    }
}

/// Clasificar un vencimiento que puede no tener trigger de fecha.
/// Sin fecha activa no hay urgencia temporal: banda normal.
pub fn classify_due_date(due_date: Option<NaiveDate>, today: NaiveDate) -> UrgencyBand {
    match due_date {
        Some(due) => classify(days_until(due, today)),
        None => UrgencyBand::Normal,
    }
}

/// Etiqueta legible para el número de días
pub fn days_label(days_until: i64) -> String {
    if days_until < 0 {
        format!("{} days past due", -days_until)
    } else if days_until == 0 {
        "today".to_string()
    } else if days_until == 1 {
        "tomorrow".to_string()
    } else {
        format!("in {} days", days_until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until() {
        let today = date(2026, 3, 10);
        assert_eq!(days_until(date(2026, 3, 17), today), 7);
        assert_eq!(days_until(date(2026, 3, 10), today), 0);
        assert_eq!(days_until(date(2026, 3, 5), today), -5);
    }

    #[test]
    fn test_classify_critical_warning_boundary() {
        // Límite 7/8: 7 es critical, 8 es warning
        assert_eq!(classify(7), UrgencyBand::Critical);
        assert_eq!(classify(8), UrgencyBand::Warning);
    }

    #[test]
    fn test_classify_warning_upcoming_boundary() {
        // Límite 30/31: 30 es warning, 31 es upcoming
        assert_eq!(classify(30), UrgencyBand::Warning);
        assert_eq!(classify(31), UrgencyBand::Upcoming);
    }

    #[test]
    fn test_classify_upcoming_normal_boundary() {
        assert_eq!(classify(90), UrgencyBand::Upcoming);
        assert_eq!(classify(91), UrgencyBand::Normal);
    }

    #[test]
    fn test_classify_overdue_and_today() {
        assert_eq!(classify(-1), UrgencyBand::Overdue);
        assert_eq!(classify(0), UrgencyBand::Critical);
    }

    #[test]
    fn test_classify_is_pure() {
        // Misma entrada, misma salida
        assert_eq!(classify(14), classify(14));
        let today = date(2026, 3, 10);
        let due = Some(date(2026, 4, 1));
        assert_eq!(classify_due_date(due, today), classify_due_date(due, today));
    }

    #[test]
    fn test_classify_without_date_trigger() {
        let today = date(2026, 3, 10);
        assert_eq!(classify_due_date(None, today), UrgencyBand::Normal);
    }

    #[test]
    fn test_days_label() {
        assert_eq!(days_label(-3), "3 days past due");
        assert_eq!(days_label(0), "today");
        assert_eq!(days_label(1), "tomorrow");
        assert_eq!(days_label(14), "in 14 days");
    }
}
