//! Error types for the monthboard ecosystem.

use thiserror::Error;

/// Errors that can occur in monthboard operations.
///
/// The layout engine itself cannot fail; these cover the collaborator
/// surfaces (configuration, provider subprocesses, serialization).
#[derive(Error, Debug)]
pub enum MonthboardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Provider '{0}' not found in PATH")]
    ProviderNotInstalled(String),

    #[error("Provider request timed out after {0}s")]
    ProviderTimeout(u64),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for monthboard operations.
pub type MonthboardResult<T> = Result<T, MonthboardError>;
