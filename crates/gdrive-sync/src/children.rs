//! Lazy pager over a container's direct children
//!
//! The store port hands out one [`ChildPage`] at a time with a
//! continuation token. [`ChildPages`] follows those tokens on demand so
//! the engines can consume children as a flat sequence and stop early
//! (a name lookup that matches on page one never fetches page two).
//!
//! [`ChildPage`]: gdrive_core::ports::ChildPage

use std::collections::VecDeque;

use gdrive_core::domain::{RemoteUnit, UnitId};
use gdrive_core::ports::{IRemoteStore, StoreError};

/// Iterator-like view of a container's direct children across all pages
///
/// Pages are fetched lazily: the first `next` call fetches the first
/// page, and a new page is requested only once the buffered one is
/// drained. Empty pages that still carry a continuation token are
/// followed, not treated as exhaustion. A page-fetch error surfaces on
/// the `next` call that needed that page.
pub struct ChildPages<'a> {
    store: &'a dyn IRemoteStore,
    container: UnitId,
    buffered: VecDeque<RemoteUnit>,
    next_token: Option<String>,
    /// Set once a page arrives without a continuation token
    exhausted: bool,
    /// False until the first page has been fetched
    started: bool,
}

impl<'a> ChildPages<'a> {
    /// Creates a pager over the direct children of `container`
    pub fn new(store: &'a dyn IRemoteStore, container: UnitId) -> Self {
        Self {
            store,
            container,
            buffered: VecDeque::new(),
            next_token: None,
            exhausted: false,
            started: false,
        }
    }

    /// Yields the next child, fetching further pages as needed
    ///
    /// # Returns
    /// The next child, or `None` once the last page has been drained
    pub async fn next(&mut self) -> Result<Option<RemoteUnit>, StoreError> {
        loop {
            if let Some(unit) = self.buffered.pop_front() {
                return Ok(Some(unit));
            }
            if self.started && self.exhausted {
                return Ok(None);
            }

            let page = self
                .store
                .list_children(&self.container, self.next_token.as_deref())
                .await?;
            self.started = true;
            self.buffered.extend(page.units);
            self.next_token = page.next_token;
            self.exhausted = self.next_token.is_none();
        }
    }
}
