use thiserror::Error;

/// Error type shared by the storage, configuration and registry layers.
///
/// Field validation failures are not errors: they are reported as
/// [`ValidationErrors`](crate::domain::ValidationErrors) and block submission.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("No student at position {position} (collection holds {len})")]
    InvalidPosition { position: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, RegistryError>;

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Storage(err.to_string())
    }
}
