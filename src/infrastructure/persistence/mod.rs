//! Flat-file repository implementations.
//!
//! Concrete implementations of domain repository traits backed by the local
//! filesystem.
//!
//! # Repositories
//!
//! - [`FileSnapshotRepository`] - Whole-snapshot storage in a single file

pub mod file_snapshot_repository;

pub use file_snapshot_repository::FileSnapshotRepository;
