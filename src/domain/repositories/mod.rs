//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for durable storage; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod snapshot_repository;

pub use snapshot_repository::{SnapshotRepository, StorageError, StorageResult};

#[cfg(test)]
pub use snapshot_repository::MockSnapshotRepository;
