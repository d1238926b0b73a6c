//! DriveStore - IRemoteStore implementation for Google Drive
//!
//! Wraps the [`DriveClient`] and delegates to the files, upload, and
//! download modules to fulfil the [`IRemoteStore`] port contract. The
//! only logic here is error mapping at the boundary: a 404 on a
//! metadata read becomes [`StoreError::NotFound`] with the requested
//! unit ID attached; everything else converts through
//! `From<DriveError>`.

use gdrive_core::domain::{RemoteUnit, UnitId};
use gdrive_core::ports::{ChildPage, IDownloadStream, IRemoteStore, StoreError, UploadSource};
use tracing::debug;

use crate::client::DriveClient;
use crate::download::{ChunkedDownload, DEFAULT_CHUNK_SIZE};
use crate::{files, upload, DriveError};

/// Remote store backed by the Google Drive v3 API
pub struct DriveStore {
    /// The underlying Drive API client
    client: DriveClient,
    /// Chunk size for ranged downloads, in bytes
    chunk_size: u64,
}

impl DriveStore {
    /// Creates a new `DriveStore` wrapping the given [`DriveClient`]
    ///
    /// Downloads use the default 10 MiB chunk size; see
    /// [`with_chunk_size`](Self::with_chunk_size) to tune it.
    pub fn new(client: DriveClient) -> Self {
        Self {
            client,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Sets the download chunk size in bytes
    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}

#[async_trait::async_trait]
impl IRemoteStore for DriveStore {
    /// Fetches unit metadata via `files.get`
    ///
    /// A 404 maps to [`StoreError::NotFound`] carrying the requested ID.
    async fn metadata(&self, id: &UnitId) -> Result<RemoteUnit, StoreError> {
        debug!(id = %id, "DriveStore::metadata");
        match files::get_file(&self.client, id).await {
            Ok(unit) => Ok(unit),
            Err(DriveError::NotFound(_)) => Err(StoreError::NotFound(id.clone())),
            Err(err) => Err(err.into()),
        }
    }

    /// Lists one page of a container's children via `files.list`
    async fn list_children(
        &self,
        container: &UnitId,
        page_token: Option<&str>,
    ) -> Result<ChildPage, StoreError> {
        debug!(
            container = %container,
            has_token = page_token.is_some(),
            "DriveStore::list_children"
        );
        Ok(files::list_children(&self.client, container, page_token).await?)
    }

    /// Creates an empty folder via `files.create`
    async fn create_folder(&self, name: &str, parent: &UnitId) -> Result<UnitId, StoreError> {
        debug!(name, parent = %parent, "DriveStore::create_folder");
        Ok(files::create_folder(&self.client, name, parent).await?)
    }

    /// Creates a new file via a resumable upload session
    async fn create_file(
        &self,
        name: &str,
        parent: &UnitId,
        source: &UploadSource,
    ) -> Result<UnitId, StoreError> {
        debug!(
            name,
            parent = %parent,
            size = source.size,
            "DriveStore::create_file"
        );
        Ok(upload::create_resumable(&self.client, name, parent, source).await?)
    }

    /// Replaces a file's content via a media upload
    async fn update_file(&self, id: &UnitId, source: &UploadSource) -> Result<(), StoreError> {
        debug!(id = %id, size = source.size, "DriveStore::update_file");
        Ok(upload::update_media(&self.client, id, source).await?)
    }

    /// Opens a chunked ranged download of a file's content
    ///
    /// The stream maps Drive's HTTP 416 answer for zero-length files to
    /// [`StoreError::EmptyContent`] on its first chunk fetch.
    async fn open_download(&self, id: &UnitId) -> Result<Box<dyn IDownloadStream>, StoreError> {
        debug!(id = %id, chunk_size = self.chunk_size, "DriveStore::open_download");
        Ok(Box::new(ChunkedDownload::open(
            &self.client,
            id,
            self.chunk_size,
        )))
    }
}
