use thiserror::Error;

use crate::storage::StorageError;
use crate::variant::Variant;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Invalid attempts: {0} (must be at least 1)")]
    InvalidAttempts(u32),

    /// The result qualified and is ranked in memory, but writing the store
    /// failed. The record will be persisted by the next successful save.
    #[error("New record for {variant} (rank {rank}) was not saved: {source}")]
    Unsaved {
        variant: Variant,
        rank: usize,
        #[source]
        source: StorageError,
    },

    /// The insertion clock cannot move past the largest stored timestamp.
    #[error("Timestamp exhausted: stored records already reach {0}")]
    TimestampExhausted(i64),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
