//! Domain error types
//!
//! This module defines error types specific to domain operations,
//! currently limited to validation failures of domain newtypes.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid unit identifier format
    #[error("Invalid unit ID: {0}")]
    InvalidUnitId(String),
}
