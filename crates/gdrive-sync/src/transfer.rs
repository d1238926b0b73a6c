//! Single-file transfer executor
//!
//! One type, two directions. Downloads buffer the remote content fully
//! in memory before the local path is touched, so a failed read never
//! leaves a half-written file behind. Uploads hand the store a
//! description of the local file and let the adapter stream the bytes;
//! whether that becomes a create or an in-place update is decided here
//! by looking the name up among the container's children.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use gdrive_core::domain::UnitId;
use gdrive_core::ports::{IRemoteStore, ITransferReporter, StoreError, UploadSource};

use crate::lookup::find_child;
use crate::SyncError;

/// Executes byte transfers for single files in either direction
pub struct TransferExecutor {
    store: Arc<dyn IRemoteStore>,
    reporter: Arc<dyn ITransferReporter>,
}

impl TransferExecutor {
    pub fn new(store: Arc<dyn IRemoteStore>, reporter: Arc<dyn ITransferReporter>) -> Self {
        Self { store, reporter }
    }

    /// Downloads the remote file `id` to the local path `destination`
    ///
    /// Content is read chunk by chunk into memory, with a progress
    /// notification per chunk, then written to `destination` in one
    /// pass. A store signalling empty content is recovered as a
    /// successful zero-byte transfer with its own notification.
    pub async fn download(&self, id: &UnitId, destination: &Path) -> Result<(), SyncError> {
        debug!(id = %id, destination = %destination.display(), "Downloading file");

        let mut stream = self.store.open_download(id).await?;
        let mut buffer: Vec<u8> = Vec::new();
        let mut total_known = false;

        loop {
            match stream.next_chunk().await {
                Ok(Some(chunk)) => {
                    buffer.extend_from_slice(&chunk.data);
                    // Percent is unreportable when the transport gives
                    // no total; 100 is reported after the final chunk
                    // instead.
                    if let Some(percent) = chunk.percent() {
                        total_known = true;
                        self.reporter.download_progress(destination, percent);
                    }
                }
                Ok(None) => break,
                Err(StoreError::EmptyContent) => {
                    tokio::fs::File::create(destination).await?;
                    self.reporter.empty_file(destination);
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            }
        }

        if !total_known {
            self.reporter.download_progress(destination, 100);
        }
        tokio::fs::write(destination, &buffer).await?;
        Ok(())
    }

    /// Uploads the local file at `source` into the remote `container`
    ///
    /// An existing child with the same name (first match wins) is
    /// updated in place, keeping its identifier; otherwise a new remote
    /// file is created. One completion notification either way.
    pub async fn upload(&self, source: &Path, container: &UnitId) -> Result<(), SyncError> {
        let name = source
            .file_name()
            .ok_or_else(|| SyncError::InvalidLocalUnit(source.to_path_buf()))?
            .to_string_lossy()
            .into_owned();
        let size = tokio::fs::metadata(source).await?.len();
        let content_type = mime_guess::from_path(source)
            .first_raw()
            .map(str::to_string);

        debug!(
            source = %source.display(),
            container = %container,
            size,
            content_type = content_type.as_deref().unwrap_or("unknown"),
            "Uploading file"
        );

        let upload_source = UploadSource {
            path: source.to_path_buf(),
            size,
            content_type,
        };

        match find_child(self.store.as_ref(), container, &name, false).await? {
            Some(existing) => {
                self.store.update_file(&existing.id, &upload_source).await?;
                self.reporter.updated(source);
            }
            None => {
                self.store.create_file(&name, container, &upload_source).await?;
                self.reporter.created(source);
            }
        }
        Ok(())
    }
}
