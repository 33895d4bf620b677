/// Errors surfaced by the favorites store
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage backend rejected or failed a call (unavailable, quota exceeded)
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Stored value does not have the shape of a favorites list
    #[error("Corrupt stored favorites: {0}")]
    CorruptState(String),

    #[error("Failed to serialize favorites: {0}")]
    Serialization(#[from] serde_json::Error),
}
