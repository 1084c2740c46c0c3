//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty after trimming.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate email shape: `local@domain.tld` with no whitespace and a single `@`.
///
/// Equivalent to the pattern `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn validate_email(email: &str) -> Result<(), String> {
    let invalid = || Err("Invalid email address".to_string());

    if email.chars().any(char::is_whitespace) {
        return invalid();
    }

    let Some((local, domain)) = email.split_once('@') else {
        return invalid();
    };

    if local.is_empty() || domain.contains('@') {
        return invalid();
    }

    // Needs a dot with at least one character on each side.
    let has_inner_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());

    if has_inner_dot {
        Ok(())
    } else {
        invalid()
    }
}

/// Validate minimum length in characters.
pub fn validate_min_length(value: &str, min: usize, field_name: &str) -> Result<(), String> {
    if value.chars().count() < min {
        Err(format!("{} must be at least {} characters", field_name, min))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("trader@forexking.info").is_ok());
        assert!(validate_email("a@b.c").is_ok());
        assert!(validate_email("a@b..c").is_ok());

        assert!(validate_email("trader").is_err());
        assert!(validate_email("@forexking.info").is_err());
        assert!(validate_email("trader@forexking").is_err());
        assert!(validate_email("trader@.info").is_err());
        assert!(validate_email("trader@forexking.").is_err());
        assert!(validate_email("tra der@forexking.info").is_err());
        assert!(validate_email("a@b@c.d").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("  ", "Name").is_err());
        assert!(validate_not_empty(" x ", "Name").is_ok());
    }

    #[test]
    fn test_validate_min_length_counts_chars() {
        assert!(validate_min_length("Zoë", 3, "Name").is_ok());
        assert_eq!(
            validate_min_length("Z", 2, "Name"),
            Err("Name must be at least 2 characters".to_string())
        );
    }
}
