// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors -> user-facing responses
// - Validation failures are surfaced distinctly from persistence failures
// - Diagnostic detail goes to the log; the UI gets the category + message

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found
    NotFound,

    /// Draft failed validation before reaching the store
    Validation,

    /// The hosted store rejected or failed an operation
    Persistence,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(err: AppError) -> Self {
        match err {
            AppError::NotFound => Self {
                success: false,
                error_type: ErrorType::NotFound,
                message: "Resource not found".to_string(),
                details: None,
            },

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: domain_error.to_string(),
                details: None,
            },

            AppError::Persistence(message) => {
                error!("persistence failure: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Persistence,
                    // The store's message passes through verbatim.
                    message,
                    details: None,
                }
            }

            AppError::Serialization(serde_error) => {
                error!("serialization failure: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: None,
                }
            }

            AppError::Configuration(message) => Self {
                success: false,
                error_type: ErrorType::Internal,
                message: "Store configuration error".to_string(),
                details: Some(message),
            },

            AppError::Other(message) => {
                error!("unexpected failure: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&response).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_not_found_error() {
        let response = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(response.error_type, ErrorType::NotFound);
        assert_eq!(response.message, "Resource not found");
    }

    #[test]
    fn test_validation_is_distinct_from_persistence() {
        let validation = ErrorResponse::from_app_error(AppError::Domain(DomainError::EmptyName));
        assert_eq!(validation.error_type, ErrorType::Validation);

        let persistence =
            ErrorResponse::from_app_error(AppError::Persistence("duplicate key".to_string()));
        assert_eq!(persistence.error_type, ErrorType::Persistence);
        assert_eq!(persistence.message, "duplicate key");
    }

    #[test]
    fn test_serialization() {
        let response =
            ErrorResponse::from_app_error(AppError::Persistence("store offline".to_string()));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("persistence"));
        assert!(json.contains("store offline"));
    }
}
