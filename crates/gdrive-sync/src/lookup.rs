//! Remote directory lookup
//!
//! Answers the push engine's one question: does this container already
//! hold a child with this exact name? The answer decides create vs
//! update, and for folders it is what keeps repeated pushes from
//! spawning duplicate remote folders.

use gdrive_core::domain::{RemoteUnit, UnitId};
use gdrive_core::ports::{IRemoteStore, StoreError};

use crate::children::ChildPages;

/// Finds a direct child of `container` by exact name
///
/// Walks the container's children page by page and returns the first
/// whose name equals `name` (case-sensitive). With `folders_only` set,
/// non-folder children are skipped even on a name match. Pagination
/// stops as soon as a match is found; ties resolve as first match wins.
///
/// # Returns
/// The matching child, or `None` when no child matches after the last
/// page (absence is not an error)
pub async fn find_child(
    store: &dyn IRemoteStore,
    container: &UnitId,
    name: &str,
    folders_only: bool,
) -> Result<Option<RemoteUnit>, StoreError> {
    let mut pages = ChildPages::new(store, container.clone());
    while let Some(child) = pages.next().await? {
        if child.name == name && (!folders_only || child.is_folder()) {
            return Ok(Some(child));
        }
    }
    Ok(None)
}
