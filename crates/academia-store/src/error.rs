use academia_codec::CodecError;

/// Error type for archive operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// The backing store failed.
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Record not found: {0}")]
    NotFound(String),
}
