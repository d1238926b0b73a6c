//! Remote store port (driven/secondary port)
//!
//! This module defines the interface for interacting with the remote
//! object store. The primary implementation targets Google Drive via its
//! v3 REST API, but the trait is provider-agnostic: it speaks in units,
//! containers and continuation tokens, never in HTTP.
//!
//! ## Design Notes
//!
//! - Errors use a typed [`StoreError`] rather than `anyhow::Result`
//!   because the engines must distinguish two conditions across the
//!   boundary: a missing unit ([`StoreError::NotFound`]) and a store
//!   signalling zero-length content ([`StoreError::EmptyContent`]).
//!   Everything else is adapter-specific and travels in
//!   [`StoreError::Other`].
//! - Uses `#[async_trait]` for async trait methods.
//! - [`ChildPage`], [`UploadSource`] and [`DownloadChunk`] are port-level
//!   DTOs, not domain entities.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::newtypes::UnitId;
use crate::domain::unit::RemoteUnit;

/// Errors surfaced by remote store adapters at the port boundary
#[derive(Debug, Error)]
pub enum StoreError {
    /// No unit exists with the requested identifier
    #[error("Remote unit not found: {0}")]
    NotFound(UnitId),

    /// The store reported that the unit has zero-length content
    ///
    /// Adapters map their provider's own signal to this variant (Google
    /// Drive rejects ranged reads of empty files with HTTP 416). The
    /// download path treats it as a successful empty transfer.
    #[error("Remote unit has empty content")]
    EmptyContent,

    /// Any other transport or API failure
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// One page of a container listing
///
/// `next_token` carries the store's continuation token; `None` marks the
/// last page. Pages may be empty while still carrying a token.
#[derive(Debug, Clone)]
pub struct ChildPage {
    /// Direct children returned in this page
    pub units: Vec<RemoteUnit>,
    /// Continuation token for the next page, if any
    pub next_token: Option<String>,
}

/// Description of a local file handed to the store for upload
///
/// The adapter opens and streams the file itself; callers only resolve
/// the size and content type up front.
#[derive(Debug, Clone)]
pub struct UploadSource {
    /// Local path of the file to stream
    pub path: PathBuf,
    /// Size of the file in bytes
    pub size: u64,
    /// MIME type guessed from the file name, if any
    pub content_type: Option<String>,
}

/// One chunk of a download in progress
#[derive(Debug, Clone)]
pub struct DownloadChunk {
    /// Bytes of this chunk
    pub data: Vec<u8>,
    /// Cumulative bytes received including this chunk
    pub bytes_received: u64,
    /// Total size of the unit, when the transport reports one
    pub total_bytes: Option<u64>,
}

impl DownloadChunk {
    /// Integer completion percentage after this chunk, when computable
    #[must_use]
    pub fn percent(&self) -> Option<u8> {
        match self.total_bytes {
            Some(total) if total > 0 => {
                Some((self.bytes_received.saturating_mul(100) / total).min(100) as u8)
            }
            _ => None,
        }
    }
}

/// A chunked download in progress
///
/// Each call fetches the next chunk; `Ok(None)` marks completion. The
/// stream borrows nothing from the store and can outlive the call that
/// opened it.
#[async_trait::async_trait]
pub trait IDownloadStream: Send {
    /// Fetch the next chunk of content
    ///
    /// # Returns
    /// The next chunk, or `None` once all content has been delivered
    async fn next_chunk(&mut self) -> Result<Option<DownloadChunk>, StoreError>;
}

/// Port trait for remote object store operations
///
/// This is the authenticated store handle the engines receive as an
/// explicit dependency. Implementations handle the provider-specific API
/// calls, authentication headers, and error mapping.
///
/// ## Implementation Notes
///
/// - Names are not unique in a container; `list_children` returns
///   whatever the store reports, duplicates included.
/// - No method retries internally; transient failures surface as
///   [`StoreError::Other`] and the caller decides.
#[async_trait::async_trait]
pub trait IRemoteStore: Send + Sync {
    /// Fetch metadata for a unit by its identifier
    ///
    /// # Arguments
    /// * `id` - The store-assigned identifier of the unit
    ///
    /// # Returns
    /// The unit's metadata (name, kind, version)
    async fn metadata(&self, id: &UnitId) -> Result<RemoteUnit, StoreError>;

    /// List one page of a container's direct children
    ///
    /// # Arguments
    /// * `container` - The folder whose children to list
    /// * `page_token` - Continuation token from a previous page, or `None`
    ///   for the first page
    ///
    /// # Returns
    /// The page of children plus the token for the following page
    async fn list_children(
        &self,
        container: &UnitId,
        page_token: Option<&str>,
    ) -> Result<ChildPage, StoreError>;

    /// Create an empty folder inside a container
    ///
    /// # Arguments
    /// * `name` - Name for the new folder
    /// * `parent` - Container that will hold it
    ///
    /// # Returns
    /// The identifier of the created folder
    async fn create_folder(&self, name: &str, parent: &UnitId) -> Result<UnitId, StoreError>;

    /// Create a new remote file from a streamed local source
    ///
    /// # Arguments
    /// * `name` - Name for the new file
    /// * `parent` - Container that will hold it
    /// * `source` - Local file description to stream
    ///
    /// # Returns
    /// The identifier of the created file
    async fn create_file(
        &self,
        name: &str,
        parent: &UnitId,
        source: &UploadSource,
    ) -> Result<UnitId, StoreError>;

    /// Replace an existing remote file's content in place
    ///
    /// The unit's identifier is unchanged; the store bumps its version.
    ///
    /// # Arguments
    /// * `id` - The file to update
    /// * `source` - Local file description to stream
    async fn update_file(&self, id: &UnitId, source: &UploadSource) -> Result<(), StoreError>;

    /// Begin a chunked download of a file's content
    ///
    /// # Arguments
    /// * `id` - The file to download
    ///
    /// # Returns
    /// A stream yielding the content in chunks with progress totals
    async fn open_download(&self, id: &UnitId) -> Result<Box<dyn IDownloadStream>, StoreError>;
}
