//! Common validation rules shared across request payloads.

use validator::ValidationError;

/// Validates username format.
///
/// Requirements:
/// - Only alphanumeric characters and underscores
/// - 1-25 characters in length (the column width)
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() || username.len() > 25 {
        return Err(ValidationError::new("username_invalid_length"));
    }

    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::new("username_invalid_characters"));
    }

    Ok(())
}

/// Validates a company handle: 1-25 lowercase ASCII letters, digits or dashes.
pub fn validate_handle(handle: &str) -> Result<(), ValidationError> {
    if handle.is_empty() || handle.len() > 25 {
        return Err(ValidationError::new("handle_invalid_length"));
    }

    if !handle
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::new("handle_invalid_characters"));
    }

    Ok(())
}

/// Validates password length (5-20 characters).
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let len = password.chars().count();
    if !(5..=20).contains(&len) {
        return Err(ValidationError::new("password_invalid_length"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rejects_empty() {
        let result = validate_username("");
        assert!(result.is_err());
    }

    #[test]
    fn username_rejects_special_chars() {
        let result = validate_username("user@name");
        assert!(result.is_err());
    }

    #[test]
    fn username_accepts_valid() {
        let result = validate_username("valid_user123");
        assert!(result.is_ok());
    }

    #[test]
    fn handle_requires_lowercase_slug() {
        assert!(validate_handle("anderson-arias").is_ok());
        assert!(validate_handle("Acme").is_err());
        assert!(validate_handle("acme corp").is_err());
        assert!(validate_handle("").is_err());
    }

    #[test]
    fn password_length_bounds() {
        assert!(validate_password("four").is_err());
        assert!(validate_password("password1").is_ok());
        assert!(validate_password(&"x".repeat(21)).is_err());
    }
}
