//! Block store error types.

/// Convenience alias for block store results.
pub type BlockStoreResult<T> = Result<T, BlockStoreError>;

/// Errors from block store operations.
#[derive(Debug, thiserror::Error)]
pub enum BlockStoreError {
    /// Stored envelope is an RLP list with neither one nor three elements.
    #[error("wrapped value doesn't correspond to valid block nor header")]
    MalformedEnvelope,

    /// RLP decoding of an envelope or its payload failed.
    #[error("rlp decoding failed: {0}")]
    Rlp(#[from] alloy_rlp::Error),

    /// Database error.
    #[error("database error: {0}")]
    Database(String),
}

impl From<redb::DatabaseError> for BlockStoreError {
    fn from(err: redb::DatabaseError) -> Self {
        BlockStoreError::Database(err.to_string())
    }
}

impl From<redb::TransactionError> for BlockStoreError {
    fn from(err: redb::TransactionError) -> Self {
        BlockStoreError::Database(err.to_string())
    }
}

impl From<redb::TableError> for BlockStoreError {
    fn from(err: redb::TableError) -> Self {
        BlockStoreError::Database(err.to_string())
    }
}

impl From<redb::StorageError> for BlockStoreError {
    fn from(err: redb::StorageError) -> Self {
        BlockStoreError::Database(err.to_string())
    }
}

impl From<redb::CommitError> for BlockStoreError {
    fn from(err: redb::CommitError) -> Self {
        BlockStoreError::Database(err.to_string())
    }
}
