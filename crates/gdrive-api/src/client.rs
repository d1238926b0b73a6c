//! Google Drive API client
//!
//! Provides a typed HTTP client for the Drive v3 REST API. Handles
//! authentication headers, base URL construction, and the mapping from
//! error responses to [`DriveError`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gdrive_api::client::DriveClient;
//! use gdrive_api::files;
//! use gdrive_core::domain::UnitId;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = DriveClient::new("access-token-here");
//! let id = UnitId::new("root".to_string())?;
//! let unit = files::get_file(&client, &id).await?;
//! println!("Remote unit: {}", unit.name);
//! # Ok(())
//! # }
//! ```

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::DriveError;

/// Base URL for the Google API host
///
/// Request paths carry their own `/drive/v3` or `/upload/drive/v3`
/// prefix because metadata and upload endpoints live under different
/// roots on the same host.
const DRIVE_BASE_URL: &str = "https://www.googleapis.com";

// ============================================================================
// Drive API error body
// ============================================================================

/// Standard Drive error envelope: `{"error": {"code": ..., "message": ...}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

/// Inner error object of the envelope
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extracts the human-readable message from a Drive error body, if the
/// body follows the standard envelope shape.
fn extract_api_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
}

/// Maps an HTTP error status and message onto the matching [`DriveError`]
fn classify(status: StatusCode, message: String) -> DriveError {
    match status {
        StatusCode::UNAUTHORIZED => DriveError::Unauthorized(message),
        StatusCode::FORBIDDEN => DriveError::Forbidden(message),
        StatusCode::NOT_FOUND => DriveError::NotFound(message),
        StatusCode::RANGE_NOT_SATISFIABLE => DriveError::RangeNotSatisfiable(message),
        StatusCode::TOO_MANY_REQUESTS => DriveError::RateLimited(message),
        status if status.is_server_error() => DriveError::Server(message),
        status => DriveError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

/// Converts a non-success response into the matching [`DriveError`]
///
/// Consumes the response body to recover the API's error message; the
/// `what` label names the operation for log and error readability.
pub(crate) async fn response_error(what: &str, response: Response) -> DriveError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unable to read error body".to_string());

    let message = match extract_api_message(&body) {
        Some(api_message) => format!("{what}: {api_message}"),
        None if body.is_empty() => what.to_string(),
        None => format!("{what}: {body}"),
    };

    debug!(%status, message, "Drive API request failed");
    classify(status, message)
}

// ============================================================================
// DriveClient
// ============================================================================

/// HTTP client for Google Drive API calls
///
/// Wraps `reqwest::Client` with a bearer token and base URL construction
/// for the Drive v3 REST API.
pub struct DriveClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL for API requests
    base_url: String,
    /// Current OAuth2 access token
    access_token: String,
}

impl DriveClient {
    /// Creates a new DriveClient with the given access token
    ///
    /// # Arguments
    /// * `access_token` - A valid OAuth2 access token for the Drive API
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DRIVE_BASE_URL.to_string(),
            access_token: access_token.into(),
        }
    }

    /// Creates a new DriveClient with a custom base URL (useful for testing)
    ///
    /// # Arguments
    /// * `access_token` - A valid OAuth2 access token
    /// * `base_url` - Custom base URL for API requests
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Updates the access token (e.g., after a token refresh)
    ///
    /// # Arguments
    /// * `token` - The new access token
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = token.into();
        debug!("Updated DriveClient access token");
    }

    /// Returns a reference to the current access token
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Creates an authenticated request builder for the given method and path
    ///
    /// Automatically prepends the base URL and adds the Authorization header.
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, PATCH, etc.)
    /// * `path` - API path relative to the base URL (e.g., "/drive/v3/files")
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .bearer_auth(&self.access_token)
    }

    /// Returns a reference to the underlying HTTP client
    ///
    /// Used by upload and download operations that target absolute URLs
    /// (resumable session URIs) rather than relative paths.
    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Returns the base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
