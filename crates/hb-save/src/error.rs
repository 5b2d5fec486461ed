//! Error types for the persistence adapter.

/// Alias for `Result<T, SaveError>`.
pub type SaveResult<T> = Result<T, SaveError>;

/// Errors that can occur while reading or writing a save file.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The save file could not be read or written.
    #[error("save file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be serialized.
    #[error("save serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
