use thiserror::Error;

#[derive(Error, Debug)]
pub enum PassportError {
    #[error("Could not read '{key}': {reason}")]
    ReadFailure { key: String, reason: String },

    #[error("Could not write '{key}': {reason}")]
    WriteFailure { key: String, reason: String },

    #[error("Pool not found: {0}")]
    PoolNotFound(String),

    #[error("Selection {index} is out of range (catalog has {len} pools)")]
    SelectionOutOfRange { index: usize, len: usize },

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl PassportError {
    pub fn read(key: &str, reason: impl ToString) -> Self {
        PassportError::ReadFailure {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn write(key: &str, reason: impl ToString) -> Self {
        PassportError::WriteFailure {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether this failure came from the persistent substrate and can be
    /// recovered from by falling back to in-memory state.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            PassportError::ReadFailure { .. } | PassportError::WriteFailure { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PassportError>;

/// A value that was produced despite a recoverable failure.
///
/// Store reads that fail fall back to defaults and store writes that fail
/// keep the in-memory state; in both cases the failure travels next to the
/// value so the caller decides how to surface it.
#[derive(Debug)]
pub struct Recovered<T> {
    pub value: T,
    pub issue: Option<PassportError>,
}

impl<T> Recovered<T> {
    pub fn clean(value: T) -> Self {
        Self { value, issue: None }
    }

    pub fn degraded(value: T, issue: PassportError) -> Self {
        Self {
            value,
            issue: Some(issue),
        }
    }

    pub fn from_write(value: T, write: Result<()>) -> Self {
        match write {
            Ok(()) => Self::clean(value),
            Err(e) => Self::degraded(value, e),
        }
    }
}
