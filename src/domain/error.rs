use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("User 'abc123' not found");
        assert_eq!(error.to_string(), "Not found: User 'abc123' not found");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Username and email are required");
        assert_eq!(
            error.to_string(),
            "Validation error: Username and email are required"
        );
    }

    #[test]
    fn test_internal_error() {
        let error = DomainError::internal("lock poisoned");
        assert_eq!(error.to_string(), "Internal error: lock poisoned");
    }
}
