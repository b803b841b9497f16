//! Application error types

use app_platform::ConfigurationError;
use thiserror::Error;

/// Errors that stop the app from starting
#[derive(Debug, Error)]
pub enum AppError {
    /// The viewport or reference dimensions are unusable
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The configuration document could not be parsed
    #[error("Invalid config document: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type for app operations
pub type Result<T> = std::result::Result<T, AppError>;
