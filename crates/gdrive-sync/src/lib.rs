//! GDrive Sync - Tree synchronization engines
//!
//! Provides:
//! - Recursive pull (remote unit -> local path)
//! - Recursive push (local path -> remote container)
//! - Create-vs-update matching against remote children
//! - Chunked single-file transfers with progress reporting
//!
//! ## Modules
//!
//! - [`pull`] - Pull engine materializing a remote tree locally
//! - [`push`] - Push engine mirroring a local tree into a remote container
//! - [`transfer`] - Single-file transfer executor for both directions
//! - [`children`] - Lazy, token-following pager over a container's children
//! - [`lookup`] - Name lookup among a container's children
//! - [`paths`] - Trailing-separator normalization for user-supplied paths

pub mod children;
pub mod lookup;
pub mod paths;
pub mod pull;
pub mod push;
pub mod transfer;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use thiserror::Error;

use gdrive_core::ports::StoreError;

/// Errors that can occur during synchronization operations
#[derive(Debug, Error)]
pub enum SyncError {
    /// The push source path is neither an existing file nor a directory
    #[error("Can't find {0}")]
    InvalidLocalUnit(PathBuf),

    /// An I/O error occurred during local file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An error surfaced by the remote store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
