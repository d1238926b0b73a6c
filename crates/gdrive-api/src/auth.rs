//! Service-account authentication for the Drive API
//!
//! Implements the JWT bearer flow for Google service accounts via
//! `yup-oauth2`: the key file is read from disk, exchanged for an access
//! token, and the token is cached between runs so repeated invocations
//! skip the exchange until expiry.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};
use yup_oauth2::{read_service_account_key, ServiceAccountAuthenticator};

/// OAuth scopes requested for Drive access
///
/// The broad `drive` scope covers the transfers; the narrower ones keep
/// the token usable for metadata-only keys.
const SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/drive.metadata.readonly",
    "https://www.googleapis.com/auth/drive",
    "https://www.googleapis.com/auth/drive.file",
    "https://www.googleapis.com/auth/drive.appdata",
    "https://www.googleapis.com/auth/drive.scripts",
    "https://www.googleapis.com/auth/drive.metadata",
];

/// Obtains an access token for the Drive API from a service-account key
///
/// # Arguments
/// * `credentials_file` - Path to the service-account key JSON file
/// * `token_cache` - Where to persist tokens between runs; `None`
///   disables caching
///
/// # Returns
/// A bearer token valid for the [`SCOPES`] above
///
/// # Errors
/// Returns an error if the key file is missing or malformed, the cache
/// directory cannot be created, or the token exchange fails.
pub async fn access_token(credentials_file: &Path, token_cache: Option<&Path>) -> Result<String> {
    info!(file = %credentials_file.display(), "Authenticating with service account");

    let key = read_service_account_key(credentials_file)
        .await
        .with_context(|| {
            format!(
                "Failed to read service account key {}",
                credentials_file.display()
            )
        })?;

    let mut builder = ServiceAccountAuthenticator::builder(key);
    if let Some(cache) = token_cache {
        if let Some(parent) = cache.parent() {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create token cache directory {}", parent.display())
            })?;
        }
        debug!(cache = %cache.display(), "Persisting tokens to disk");
        builder = builder.persist_tokens_to_disk(cache);
    }

    let authenticator = builder
        .build()
        .await
        .context("Failed to build service account authenticator")?;

    let token = authenticator
        .token(SCOPES)
        .await
        .context("Failed to obtain access token")?;

    let access_token = token
        .token()
        .context("Token response contained no access token")?;

    debug!("Access token obtained");
    Ok(access_token.to_string())
}
