//! Pull engine
//!
//! Materializes a remote unit, identified by id, into a local path,
//! recursively. Pull never matches names against existing local files:
//! every child path is constructed fresh as `destination/child.name`,
//! and only the destination directory's existence is checked before
//! writing into it.
//!
//! There is no rollback. A failure aborts the descent at that point;
//! siblings already written stay on disk, and rerunning the same pull
//! simply overwrites them.

use std::path::Path;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use tracing::{debug, info};

use gdrive_core::domain::UnitId;
use gdrive_core::ports::{IRemoteStore, ITransferReporter};

use crate::children::ChildPages;
use crate::paths::normalize;
use crate::transfer::TransferExecutor;
use crate::SyncError;

/// Recursive downloader of remote trees
pub struct PullEngine {
    store: Arc<dyn IRemoteStore>,
    executor: TransferExecutor,
}

impl PullEngine {
    pub fn new(store: Arc<dyn IRemoteStore>, reporter: Arc<dyn ITransferReporter>) -> Self {
        let executor = TransferExecutor::new(Arc::clone(&store), reporter);
        Self { store, executor }
    }

    /// Pulls the remote unit `id` into the local path `destination`
    ///
    /// Folders recurse into `destination` itself; a file lands at
    /// `destination/name`. In both cases `destination`'s parent must
    /// already exist.
    ///
    /// # Errors
    /// [`SyncError::Store`] on a missing id or any remote failure,
    /// [`SyncError::Io`] on local filesystem failures
    #[tracing::instrument(skip(self))]
    pub async fn pull(&self, id: &UnitId, destination: &str) -> Result<(), SyncError> {
        let unit = self.store.metadata(id).await?;
        info!(id = %id, name = %unit.name, folder = unit.is_folder(), "Starting pull");

        if unit.is_folder() {
            self.pull_folder(id.clone(), normalize(destination).to_string())
                .await
        } else {
            let file_dest = format!("{}/{}", normalize(destination), unit.name);
            self.executor.download(id, Path::new(&file_dest)).await
        }
    }

    /// Recursively materializes the folder `id` at `destination`
    ///
    /// The destination directory is created if absent (one level; the
    /// parent must exist) and left alone if already present. Recursion
    /// is boxed because the future type would otherwise be infinite.
    fn pull_folder(
        &self,
        id: UnitId,
        destination: String,
    ) -> BoxFuture<'_, Result<(), SyncError>> {
        Box::pin(async move {
            match tokio::fs::metadata(&destination).await {
                Ok(meta) if meta.is_dir() => {}
                _ => {
                    debug!(path = %destination, "Creating local directory");
                    tokio::fs::create_dir(&destination).await?;
                }
            }

            let mut pages = ChildPages::new(self.store.as_ref(), id);
            while let Some(child) = pages.next().await? {
                let child_dest = format!("{destination}/{}", child.name);
                if child.is_folder() {
                    self.pull_folder(child.id, child_dest).await?;
                } else {
                    self.executor
                        .download(&child.id, Path::new(&child_dest))
                        .await?;
                }
            }
            Ok(())
        })
    }
}
