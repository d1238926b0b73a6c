//! Domain entities and business logic
//!
//! This module contains the core domain types for gdrive:
//! - Newtypes for type-safe, validated identifiers
//! - Remote unit types (files and folders as the store presents them)
//! - Domain-specific error types

pub mod errors;
pub mod newtypes;
pub mod unit;

// Re-export commonly used types
pub use errors::DomainError;
pub use newtypes::UnitId;
pub use unit::{RemoteUnit, UnitKind};
