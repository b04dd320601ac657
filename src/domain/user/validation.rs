//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User ID must be exactly {0} hex characters")]
    InvalidIdLength(usize),

    #[error("User ID contains invalid character: '{0}'. Only lowercase hex digits are allowed")]
    InvalidIdCharacter(char),

    #[error("Username is required")]
    EmptyUsername,

    #[error("Email is required")]
    EmptyEmail,
}

pub const USER_ID_LENGTH: usize = 8;

/// Validate a user ID
///
/// Identifiers are generated by the registry: exactly 8 lowercase hex
/// characters taken from a hash of the creation time and a random token.
pub fn validate_user_id(id: &str) -> Result<(), UserValidationError> {
    if id.len() != USER_ID_LENGTH {
        return Err(UserValidationError::InvalidIdLength(USER_ID_LENGTH));
    }

    for c in id.chars() {
        if !c.is_ascii_hexdigit() || c.is_ascii_uppercase() {
            return Err(UserValidationError::InvalidIdCharacter(c));
        }
    }

    Ok(())
}

/// Validate the fields of a new user
pub fn validate_new_user(username: &str, email: &str) -> Result<(), UserValidationError> {
    if username.is_empty() {
        return Err(UserValidationError::EmptyUsername);
    }

    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_ids() {
        assert!(validate_user_id("0a1b2c3d").is_ok());
        assert!(validate_user_id("deadbeef").is_ok());
        assert!(validate_user_id("00000000").is_ok());
    }

    #[test]
    fn test_user_id_wrong_length() {
        assert_eq!(
            validate_user_id(""),
            Err(UserValidationError::InvalidIdLength(8))
        );
        assert_eq!(
            validate_user_id("abc"),
            Err(UserValidationError::InvalidIdLength(8))
        );
        assert_eq!(
            validate_user_id("0123456789"),
            Err(UserValidationError::InvalidIdLength(8))
        );
    }

    #[test]
    fn test_user_id_invalid_character() {
        assert_eq!(
            validate_user_id("0a1b2c3z"),
            Err(UserValidationError::InvalidIdCharacter('z'))
        );
        assert_eq!(
            validate_user_id("DEADBEEF"),
            Err(UserValidationError::InvalidIdCharacter('D'))
        );
    }

    #[test]
    fn test_validate_new_user() {
        assert!(validate_new_user("testuser", "test@example.com").is_ok());
        assert_eq!(
            validate_new_user("", "test@example.com"),
            Err(UserValidationError::EmptyUsername)
        );
        assert_eq!(
            validate_new_user("testuser", ""),
            Err(UserValidationError::EmptyEmail)
        );
    }
}
