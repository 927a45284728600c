//! Field rules shared by the company and invoice models.

use crate::errors::ModelError;

/// A text field must be present and contain something besides whitespace.
/// The value is returned untouched so reads give back exactly what was written.
pub fn require_text(value: Option<String>) -> Result<String, ModelError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ModelError::missing_data()),
    }
}

pub fn validate_amount(amt: f64) -> Result<f64, ModelError> {
    if !amt.is_finite() || amt <= 0.0 {
        return Err(ModelError::Validation("Amount must be positive".into()));
    }
    Ok(amt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_text_rejects_absent_and_blank() {
        assert!(matches!(require_text(None), Err(ModelError::Validation(m)) if m == "Missing required data"));
        assert!(require_text(Some(String::new())).is_err());
        assert!(require_text(Some("   ".into())).is_err());
    }

    #[test]
    fn require_text_keeps_value_verbatim() {
        assert_eq!(require_text(Some(" Test Company ".into())).unwrap(), " Test Company ");
    }

    #[test]
    fn amount_must_be_positive_and_finite() {
        assert_eq!(validate_amount(100.0).unwrap(), 100.0);
        assert!(validate_amount(0.0).is_err());
        assert!(validate_amount(-5.5).is_err());
        assert!(validate_amount(f64::NAN).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
    }
}
