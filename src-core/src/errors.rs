use thiserror::Error;

/// Custom result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for the goal read path and goal management
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Target value must be a finite number")]
    NonFiniteTarget,

    #[error("Threshold {0} must be a finite percentage in (0, 100]")]
    InvalidThreshold(f64),
}
