//! Business logic services for the application layer.

pub mod link_service;
pub mod persistence_service;

pub use link_service::LinkService;
pub use persistence_service::PersistenceService;
