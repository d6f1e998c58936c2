use crate::utils::error::{RecordsError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RecordsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks that `value` names one of the `declared` identifiers.
pub fn validate_declared(field_name: &str, value: &str, declared: &HashSet<&str>) -> Result<()> {
    if !declared.contains(value) {
        return Err(RecordsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Identifier is not declared in this roster".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("students.name", "Alice").is_ok());
        assert!(validate_non_empty_string("students.name", "").is_err());
        assert!(validate_non_empty_string("students.name", "   ").is_err());
    }

    #[test]
    fn test_validate_declared() {
        let declared: HashSet<&str> = ["s1", "s2"].into_iter().collect();
        assert!(validate_declared("enrollments.student", "s1", &declared).is_ok());

        let err = validate_declared("enrollments.student", "s3", &declared).unwrap_err();
        assert!(matches!(
            err,
            RecordsError::InvalidConfigValueError { ref value, .. } if value == "s3"
        ));
    }
}
