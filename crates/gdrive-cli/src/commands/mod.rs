//! CLI command implementations

pub mod pull;
pub mod push;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};

use gdrive_api::client::DriveClient;
use gdrive_api::store::DriveStore;
use gdrive_core::config::Config;
use gdrive_core::ports::IRemoteStore;

use crate::output::OutputFormat;

/// Loads and validates the configuration
///
/// A missing file falls back to defaults; a present-but-invalid one
/// fails with every finding listed.
pub fn load_config(path: &Path) -> Result<Config> {
    let config = Config::load_or_default(path);

    let findings = config.validate();
    if !findings.is_empty() {
        let listed: Vec<String> = findings.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration: {}", listed.join("; "));
    }
    Ok(config)
}

/// Global flags and loaded configuration shared by every command
#[derive(Debug)]
pub struct Globals {
    pub format: OutputFormat,
    pub silent: bool,
    /// `-a/--auth` override for the credentials file
    pub auth: Option<PathBuf>,
    pub config: Config,
}

impl Globals {
    /// Builds the authenticated remote store handle
    ///
    /// The `--auth` flag wins over the config's credentials file.
    pub async fn build_store(&self) -> Result<Arc<dyn IRemoteStore>> {
        let credentials = self
            .auth
            .clone()
            .unwrap_or_else(|| self.config.auth.credentials_file.clone());

        let token =
            gdrive_api::auth::access_token(&credentials, self.config.auth.token_cache.as_deref())
                .await
                .context("Authentication failed")?;

        let client = DriveClient::new(&token);
        let chunk_size = self.config.transfer.download_chunk_mb * 1024 * 1024;
        Ok(Arc::new(DriveStore::new(client).with_chunk_size(chunk_size)))
    }
}
