use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Record repository error: {0}")]
    Repository(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Wraps a transport-level failure from a repository implementation.
    pub fn repository(err: impl std::fmt::Display) -> Self {
        EngineError::Repository(err.to_string())
    }
}
