//! Unified error hierarchy for fitrs
//!
//! Calculation modules keep their own focused error enums; this module
//! aggregates them for callers that cross module boundaries (the CLI,
//! integration layers) and maps severities onto tracing levels.

use thiserror::Error;

use crate::export::ExportError;
use crate::nutrition::NutritionError;
use crate::readiness::ReadinessError;

/// Top-level error type for all fitrs operations
#[derive(Debug, Error)]
pub enum FitRsError {
    /// Invalid body profile input
    #[error("Nutrition error: {0}")]
    Nutrition(#[from] NutritionError),

    /// Invalid recovery report input
    #[error("Readiness error: {0}")]
    Readiness(#[from] ReadinessError),

    /// Export failures
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// IO errors from reading input record files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input records
    #[error("Invalid record data: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for fitrs operations
pub type Result<T> = std::result::Result<T, FitRsError>;

impl FitRsError {
    /// Whether the error is a non-retryable input validation failure
    ///
    /// Validation errors must surface to the user as-is; retrying with
    /// the same input cannot succeed.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FitRsError::Nutrition(_) | FitRsError::Readiness(_) | FitRsError::Serialization(_)
        )
    }

    /// Error severity for log routing
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FitRsError::Nutrition(_) | FitRsError::Readiness(_) => ErrorSeverity::Warning,
            FitRsError::Serialization(_) => ErrorSeverity::Warning,
            FitRsError::Io(_) | FitRsError::Export(_) => ErrorSeverity::Error,
            FitRsError::Configuration(_) => ErrorSeverity::Error,
        }
    }

    /// User-facing message for validation failures
    pub fn user_message(&self) -> String {
        match self {
            FitRsError::Nutrition(e) => format!("Check your profile: {}", e),
            FitRsError::Readiness(e) => format!("Check your recovery entry: {}", e),
            FitRsError::Serialization(e) => format!("Could not read the record data: {}", e),
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Error,
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}
