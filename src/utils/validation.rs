//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! de activos, vencimientos y entradas de servicio.

use chrono::NaiveDate;
use uuid::Uuid;
use validator::ValidationError;

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que el kilometraje sea no negativo
pub fn validate_mileage(value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que la prioridad esté en el rango [1, 5]
pub fn validate_priority(value: i32) -> Result<(), ValidationError> {
    if !(1..=5).contains(&value) {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &1);
        error.add_param("max".into(), &5);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que cada lead time de notificación sea un número de días positivo
pub fn validate_notify_days(days: &[i32]) -> Result<(), ValidationError> {
    for day in days {
        if *day <= 0 {
            let mut error = ValidationError::new("notify_days");
            error.add_param("value".into(), day);
            return Err(error);
        }
    }
    Ok(())
}

/// Validar el invariante de trigger de un vencimiento: al menos una de las dos
/// condiciones (fecha o kilometraje) debe estar presente
pub fn validate_deadline_trigger(
    due_date: Option<NaiveDate>,
    due_mileage: Option<i64>,
) -> Result<(), ValidationError> {
    if due_date.is_none() && due_mileage.is_none() {
        let mut error = ValidationError::new("trigger");
        error.add_param(
            "message".into(),
            &"either due_date or due_mileage must be set".to_string(),
        );
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uuid() {
        let valid_uuid = "550e8400-e29b-41d4-a716-446655440000";
        assert!(validate_uuid(valid_uuid).is_ok());

        let invalid_uuid = "invalid-uuid";
        assert!(validate_uuid(invalid_uuid).is_err());
    }

    #[test]
    fn test_validate_date() {
        let valid_date = "2024-01-15";
        assert!(validate_date(valid_date).is_ok());

        let invalid_date = "2024/01/15";
        assert!(validate_date(invalid_date).is_err());
    }

    #[test]
    fn test_validate_mileage() {
        assert!(validate_mileage(0).is_ok());
        assert!(validate_mileage(152_000).is_ok());
        assert!(validate_mileage(-1).is_err());
    }

    #[test]
    fn test_validate_priority() {
        assert!(validate_priority(1).is_ok());
        assert!(validate_priority(5).is_ok());
        assert!(validate_priority(0).is_err());
        assert!(validate_priority(6).is_err());
    }

    #[test]
    fn test_validate_notify_days() {
        assert!(validate_notify_days(&[30, 14, 7, 1]).is_ok());
        assert!(validate_notify_days(&[]).is_ok());
        assert!(validate_notify_days(&[7, 0]).is_err());
        assert!(validate_notify_days(&[-3]).is_err());
    }

    #[test]
    fn test_validate_deadline_trigger() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1);
        assert!(validate_deadline_trigger(date, None).is_ok());
        assert!(validate_deadline_trigger(None, Some(180_000)).is_ok());
        assert!(validate_deadline_trigger(date, Some(180_000)).is_ok());
        assert!(validate_deadline_trigger(None, None).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("test@").is_err());
    }
}
