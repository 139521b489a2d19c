use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Invalid state: {message}")]
    InvalidState { message: String },

    #[error("Invalid field: {message}")]
    InvalidField { message: String },

    #[error("Load failed: {message}")]
    LoadFailure { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    pub fn invalid_field(message: impl Into<String>) -> Self {
        Self::InvalidField {
            message: message.into(),
        }
    }

    pub fn load_failure(message: impl Into<String>) -> Self {
        Self::LoadFailure {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Caller bugs rather than user-facing conditions
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::InvalidState { .. } | Self::InvalidField { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("User '7' not found");
        assert_eq!(error.to_string(), "Not found: User '7' not found");
    }

    #[test]
    fn test_load_failure_error() {
        let error = DomainError::load_failure("HTTP 500");
        assert_eq!(error.to_string(), "Load failed: HTTP 500");
    }

    #[test]
    fn test_contract_violations() {
        assert!(DomainError::invalid_state("no draft").is_contract_violation());
        assert!(DomainError::invalid_field("geo").is_contract_violation());
        assert!(!DomainError::not_found("1").is_contract_violation());
        assert!(!DomainError::load_failure("offline").is_contract_violation());
    }
}
