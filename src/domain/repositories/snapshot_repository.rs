//! Repository trait for durable snapshot storage.

use async_trait::async_trait;

/// Errors raised by a snapshot storage backend.
///
/// These never reach a request handler; the persistence service logs them at
/// the point of occurrence and the dirty flag keeps the data scheduled for
/// the next cycle.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("snapshot storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for snapshot storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Byte-level interface to durable snapshot storage.
///
/// The store itself knows nothing about files; it produces and consumes
/// encoded snapshots through this seam.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileSnapshotRepository`] - flat-file implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Reads the most recent snapshot bytes.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(bytes))` if a snapshot exists
    /// - `Ok(None)` if no snapshot has ever been written
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the snapshot exists but cannot be
    /// read. Callers treat this the same as a missing snapshot, after
    /// logging it.
    async fn read(&self) -> StorageResult<Option<Vec<u8>>>;

    /// Replaces the stored snapshot with `bytes` in full.
    ///
    /// The previous contents must not survive a successful call, and a
    /// failed call must not leave a torn snapshot behind.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] on write failure; the caller leaves the
    /// store dirty and retries on the next cycle.
    async fn write(&self, bytes: &[u8]) -> StorageResult<()>;
}
