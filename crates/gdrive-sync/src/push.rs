//! Push engine
//!
//! Mirrors a local path into a remote container, recursively. Each
//! local directory is matched by exact name against the container's
//! folder children; a match is descended into, a miss creates the
//! folder first. Files delegate to the transfer executor, which makes
//! its own create-vs-update decision. That name matching is the only
//! thing preventing duplicate remote folders on repeated pushes.
//!
//! Directory entries are pushed in name order, so runs are reproducible
//! regardless of what order the filesystem yields them in.
//!
//! No rollback: a failure aborts the descent, siblings already pushed
//! stay remote, and rerunning the push converges on the same tree.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures_util::future::BoxFuture;
use tracing::{debug, info};

use gdrive_core::domain::UnitId;
use gdrive_core::ports::{IRemoteStore, ITransferReporter};

use crate::lookup::find_child;
use crate::paths::normalize;
use crate::transfer::TransferExecutor;
use crate::SyncError;

/// Recursive uploader of local trees
pub struct PushEngine {
    store: Arc<dyn IRemoteStore>,
    executor: TransferExecutor,
}

impl PushEngine {
    pub fn new(store: Arc<dyn IRemoteStore>, reporter: Arc<dyn ITransferReporter>) -> Self {
        let executor = TransferExecutor::new(Arc::clone(&store), reporter);
        Self { store, executor }
    }

    /// Pushes the local path `source` into the remote `container`
    ///
    /// A directory mirrors its contents into the container; a file is
    /// uploaded directly into it.
    ///
    /// # Errors
    /// [`SyncError::InvalidLocalUnit`] when `source` is neither an
    /// existing file nor a directory, raised before any remote call
    #[tracing::instrument(skip(self))]
    pub async fn push(&self, source: &str, container: &UnitId) -> Result<(), SyncError> {
        let source = normalize(source);
        let path = PathBuf::from(source);

        let meta = tokio::fs::metadata(&path)
            .await
            .map_err(|_| SyncError::InvalidLocalUnit(path.clone()))?;

        info!(source, container = %container, directory = meta.is_dir(), "Starting push");

        if meta.is_dir() {
            self.push_folder(path, container.clone()).await
        } else if meta.is_file() {
            self.executor.upload(&path, container).await
        } else {
            Err(SyncError::InvalidLocalUnit(path))
        }
    }

    /// Recursively mirrors the directory `dir` into `container`
    fn push_folder(
        &self,
        dir: PathBuf,
        container: UnitId,
    ) -> BoxFuture<'_, Result<(), SyncError>> {
        Box::pin(async move {
            for entry in sorted_entries(&dir).await? {
                let entry_meta = tokio::fs::metadata(&entry).await?;
                if entry_meta.is_dir() {
                    let folder_id = self.resolve_remote_folder(&entry, &container).await?;
                    self.push_folder(entry, folder_id).await?;
                } else {
                    self.executor.upload(&entry, &container).await?;
                }
            }
            Ok(())
        })
    }

    /// Finds the same-named remote folder under `container`, creating
    /// it when absent
    async fn resolve_remote_folder(
        &self,
        dir: &Path,
        container: &UnitId,
    ) -> Result<UnitId, SyncError> {
        let name = dir
            .file_name()
            .ok_or_else(|| SyncError::InvalidLocalUnit(dir.to_path_buf()))?
            .to_string_lossy()
            .into_owned();

        match find_child(self.store.as_ref(), container, &name, true).await? {
            Some(folder) => {
                debug!(name, id = %folder.id, "Matched existing remote folder");
                Ok(folder.id)
            }
            None => {
                let id = self.store.create_folder(&name, container).await?;
                debug!(name, id = %id, "Created remote folder");
                Ok(id)
            }
        }
    }
}

/// Direct entries of `dir`, sorted by file name
async fn sorted_entries(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    let mut read_dir = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = read_dir.next_entry().await? {
        entries.push(entry.path());
    }
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}
