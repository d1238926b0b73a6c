//! GDrive API - Google Drive v3 REST client
//!
//! Provides async access to the Drive API for:
//! - Service-account authentication (JWT flow via yup-oauth2)
//! - File and folder metadata, listing, and folder creation
//! - Chunked ranged downloads
//! - Resumable uploads (create) and media uploads (update)
//!
//! ## Modules
//!
//! - [`auth`] - Service-account token acquisition and caching
//! - [`client`] - Drive API HTTP client
//! - [`files`] - Metadata, listing, and folder operations
//! - [`download`] - Chunked ranged download stream
//! - [`upload`] - Streamed file create and update
//! - [`store`] - [`IRemoteStore`](gdrive_core::ports::IRemoteStore) adapter
//!   wiring the above together

pub mod auth;
pub mod client;
pub mod download;
pub mod files;
pub mod store;
pub mod types;
pub mod upload;

use gdrive_core::ports::StoreError;
use thiserror::Error;

/// Errors that can occur when communicating with the Google Drive API
#[derive(Debug, Error)]
pub enum DriveError {
    /// Authentication credentials are invalid or expired
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Insufficient permissions for the requested operation
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The requested byte range lies outside the file's content
    ///
    /// Drive answers ranged reads of zero-length files with HTTP 416;
    /// the store adapter turns this into its empty-content signal.
    #[error("Requested range not satisfiable: {0}")]
    RangeNotSatisfiable(String),

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// A server-side error occurred (5xx)
    #[error("Server error: {0}")]
    Server(String),

    /// A network-level error occurred
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Reading the local upload source failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The API response could not be parsed or was malformed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Any other API error status
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Error message extracted from the response body
        message: String,
    },
}

/// Maps adapter failures onto the port error contract.
///
/// HTTP 416 carries Drive's zero-length-content signal and becomes
/// [`StoreError::EmptyContent`]; everything else is opaque to the engines.
/// A 404 on a metadata read becomes [`StoreError::NotFound`] in
/// [`store::DriveStore::metadata`] where the unit id is at hand.
impl From<DriveError> for StoreError {
    fn from(err: DriveError) -> Self {
        match err {
            DriveError::RangeNotSatisfiable(_) => StoreError::EmptyContent,
            other => StoreError::Other(other.into()),
        }
    }
}
