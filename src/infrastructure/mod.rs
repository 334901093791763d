//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! the concrete durable storage behind snapshot persistence.
//!
//! # Modules
//!
//! - [`persistence`] - Flat-file snapshot repository implementation

pub mod persistence;
