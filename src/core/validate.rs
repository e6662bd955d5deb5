//! Field validation applied before any store mutation
//!
//! Limits mirror the persisted schema: names and subjects are 5..=50
//! characters, messages 5..=255, emails 5..=50 and must contain '@'.
//! Failures are reported as [`HelpdeskError::Validation`] with the field
//! name, so callers always see a stable, named reason.

use crate::error::{HelpdeskError, Result};

/// Check that a field's character count falls within `min..=max`
pub fn validate_length(field: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min {
        return Err(HelpdeskError::Validation {
            field: field.to_string(),
            reason: format!("must be at least {min} characters"),
        });
    }
    if len > max {
        return Err(HelpdeskError::Validation {
            field: field.to_string(),
            reason: format!("must be at most {max} characters"),
        });
    }
    Ok(())
}

/// Check an email field: length limits plus a minimal shape check
pub fn validate_email(field: &str, value: &str) -> Result<()> {
    validate_length(field, value, 5, 50)?;
    let Some((local, domain)) = value.split_once('@') else {
        return Err(HelpdeskError::Validation {
            field: field.to_string(),
            reason: "must be a valid email address".to_string(),
        });
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(HelpdeskError::Validation {
            field: field.to_string(),
            reason: "must be a valid email address".to_string(),
        });
    }
    Ok(())
}

/// Check a ticket or comment message body (5..=255, trimmed)
pub fn validate_message(field: &str, value: &str) -> Result<()> {
    validate_length(field, value.trim(), 5, 255)
}

/// Check a ticket subject line (5..=50, trimmed)
pub fn validate_subject(field: &str, value: &str) -> Result<()> {
    validate_length(field, value.trim(), 5, 50)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds() {
        assert!(validate_length("name", "Alice Doe", 5, 50).is_ok());
        assert!(validate_length("name", "Al", 5, 50).is_err());
        assert!(validate_length("name", &"x".repeat(51), 5, 50).is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email("email", "alice@example.com").is_ok());
        assert!(validate_email("email", "not-an-email").is_err());
        assert!(validate_email("email", "@example.com").is_err());
        assert!(validate_email("email", "a@b").is_err());
    }

    #[test]
    fn test_message_trimming() {
        // Whitespace padding does not rescue a too-short message
        assert!(validate_message("message", "   hi   ").is_err());
        assert!(validate_message("message", "  help me  ").is_ok());
    }

    #[test]
    fn test_validation_error_names_the_field() {
        let err = validate_subject("subject", "hey").unwrap_err();
        match err {
            crate::error::HelpdeskError::Validation { field, .. } => {
                assert_eq!(field, "subject");
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
