//! In-process test doubles for the engine tests
//!
//! [`FakeRemoteStore`] keeps a remote tree in memory behind the
//! `IRemoteStore` port: parent-pointer membership, paged listings with
//! offset tokens, chunked downloads, and the store's empty-content
//! signal on zero-length files. [`RecordingReporter`] captures every
//! reporter call for assertion. The engines speak ports, not HTTP, so
//! no mock server is involved here.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use gdrive_core::domain::{RemoteUnit, UnitId, UnitKind};
use gdrive_core::ports::{
    ChildPage, DownloadChunk, IDownloadStream, IRemoteStore, ITransferReporter, StoreError,
    UploadSource,
};

struct StoredUnit {
    unit: RemoteUnit,
    parent: Option<String>,
    content: Vec<u8>,
}

struct Inner {
    /// Insertion order doubles as listing order, so paging is stable
    units: Vec<StoredUnit>,
    next_id: u64,
    list_calls: usize,
}

/// In-memory remote store
pub struct FakeRemoteStore {
    inner: Mutex<Inner>,
    page_size: usize,
    download_chunk: usize,
}

impl FakeRemoteStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                units: Vec::new(),
                next_id: 1,
                list_calls: 0,
            }),
            page_size: 100,
            download_chunk: 4,
        }
    }

    /// Limits listing pages to `page_size` children each
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn add_folder(&self, id: &str, name: &str, parent: Option<&str>) {
        self.insert(id, name, UnitKind::Folder, parent, Vec::new());
    }

    pub fn add_file(&self, id: &str, name: &str, parent: &str, content: &[u8]) {
        self.insert(id, name, UnitKind::File, Some(parent), content.to_vec());
    }

    fn insert(&self, id: &str, name: &str, kind: UnitKind, parent: Option<&str>, content: Vec<u8>) {
        self.inner.lock().unwrap().units.push(StoredUnit {
            unit: RemoteUnit {
                id: UnitId::new(id.to_string()).unwrap(),
                name: name.to_string(),
                kind,
                version: Some("1".to_string()),
            },
            parent: parent.map(str::to_string),
            content,
        });
    }

    /// Number of `list_children` page fetches so far
    pub fn list_calls(&self) -> usize {
        self.inner.lock().unwrap().list_calls
    }

    pub fn content_of(&self, id: &str) -> Option<Vec<u8>> {
        let inner = self.inner.lock().unwrap();
        inner
            .units
            .iter()
            .find(|s| s.unit.id.as_str() == id)
            .map(|s| s.content.clone())
    }

    /// Direct children of `parent`, in listing order
    pub fn children_of(&self, parent: &str) -> Vec<RemoteUnit> {
        let inner = self.inner.lock().unwrap();
        inner
            .units
            .iter()
            .filter(|s| s.parent.as_deref() == Some(parent))
            .map(|s| s.unit.clone())
            .collect()
    }

    /// First child of `parent` with the given name
    pub fn find(&self, parent: &str, name: &str) -> Option<RemoteUnit> {
        self.children_of(parent).into_iter().find(|u| u.name == name)
    }

    /// Folders that live inside some container (roots excluded)
    pub fn folder_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner
            .units
            .iter()
            .filter(|s| s.parent.is_some() && s.unit.is_folder())
            .count()
    }

    pub fn file_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner
            .units
            .iter()
            .filter(|s| !s.unit.is_folder())
            .count()
    }
}

#[async_trait::async_trait]
impl IRemoteStore for FakeRemoteStore {
    async fn metadata(&self, id: &UnitId) -> Result<RemoteUnit, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner
            .units
            .iter()
            .find(|s| s.unit.id == *id)
            .map(|s| s.unit.clone())
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn list_children(
        &self,
        container: &UnitId,
        page_token: Option<&str>,
    ) -> Result<ChildPage, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.list_calls += 1;

        let children: Vec<RemoteUnit> = inner
            .units
            .iter()
            .filter(|s| s.parent.as_deref() == Some(container.as_str()))
            .map(|s| s.unit.clone())
            .collect();

        let offset = match page_token {
            None => 0,
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| StoreError::Other(anyhow::anyhow!("bad page token {token:?}")))?,
        };
        let end = (offset + self.page_size).min(children.len());
        let next_token = (end < children.len()).then(|| end.to_string());

        Ok(ChildPage {
            units: children[offset..end].to_vec(),
            next_token,
        })
    }

    async fn create_folder(&self, name: &str, parent: &UnitId) -> Result<UnitId, StoreError> {
        let id = {
            let mut inner = self.inner.lock().unwrap();
            let id = format!("gen{}", inner.next_id);
            inner.next_id += 1;
            id
        };
        self.insert(&id, name, UnitKind::Folder, Some(parent.as_str()), Vec::new());
        Ok(UnitId::new(id).unwrap())
    }

    async fn create_file(
        &self,
        name: &str,
        parent: &UnitId,
        source: &UploadSource,
    ) -> Result<UnitId, StoreError> {
        let content = tokio::fs::read(&source.path)
            .await
            .map_err(|e| StoreError::Other(anyhow::anyhow!(e)))?;
        let id = {
            let mut inner = self.inner.lock().unwrap();
            let id = format!("gen{}", inner.next_id);
            inner.next_id += 1;
            id
        };
        self.insert(&id, name, UnitKind::File, Some(parent.as_str()), content);
        Ok(UnitId::new(id).unwrap())
    }

    async fn update_file(&self, id: &UnitId, source: &UploadSource) -> Result<(), StoreError> {
        let content = tokio::fs::read(&source.path)
            .await
            .map_err(|e| StoreError::Other(anyhow::anyhow!(e)))?;
        let mut inner = self.inner.lock().unwrap();
        let stored = inner
            .units
            .iter_mut()
            .find(|s| s.unit.id == *id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        stored.content = content;
        let bumped = stored
            .unit
            .version
            .as_deref()
            .and_then(|v| v.parse::<u64>().ok())
            .map_or_else(|| "2".to_string(), |v| (v + 1).to_string());
        stored.unit.version = Some(bumped);
        Ok(())
    }

    async fn open_download(&self, id: &UnitId) -> Result<Box<dyn IDownloadStream>, StoreError> {
        let content = {
            let inner = self.inner.lock().unwrap();
            inner
                .units
                .iter()
                .find(|s| s.unit.id == *id)
                .map(|s| s.content.clone())
                .ok_or_else(|| StoreError::NotFound(id.clone()))?
        };
        Ok(Box::new(FakeDownloadStream {
            content,
            offset: 0,
            chunk_size: self.download_chunk,
        }))
    }
}

/// Replays stored content in fixed-size chunks
///
/// Zero-length content errors with `EmptyContent` on the first chunk
/// fetch, mirroring how the real store rejects a ranged read of an
/// empty file.
struct FakeDownloadStream {
    content: Vec<u8>,
    offset: usize,
    chunk_size: usize,
}

#[async_trait::async_trait]
impl IDownloadStream for FakeDownloadStream {
    async fn next_chunk(&mut self) -> Result<Option<DownloadChunk>, StoreError> {
        if self.content.is_empty() {
            return Err(StoreError::EmptyContent);
        }
        if self.offset >= self.content.len() {
            return Ok(None);
        }
        let end = (self.offset + self.chunk_size).min(self.content.len());
        let data = self.content[self.offset..end].to_vec();
        self.offset = end;
        Ok(Some(DownloadChunk {
            data,
            bytes_received: end as u64,
            total_bytes: Some(self.content.len() as u64),
        }))
    }
}

/// Every notification a transfer emitted, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReporterEvent {
    Progress(PathBuf, u8),
    EmptyFile(PathBuf),
    Created(PathBuf),
    Updated(PathBuf),
}

/// Reporter that records calls instead of printing
pub struct RecordingReporter {
    events: Mutex<Vec<ReporterEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<ReporterEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ITransferReporter for RecordingReporter {
    fn download_progress(&self, path: &Path, percent: u8) {
        self.events
            .lock()
            .unwrap()
            .push(ReporterEvent::Progress(path.to_path_buf(), percent));
    }

    fn empty_file(&self, path: &Path) {
        self.events
            .lock()
            .unwrap()
            .push(ReporterEvent::EmptyFile(path.to_path_buf()));
    }

    fn created(&self, path: &Path) {
        self.events
            .lock()
            .unwrap()
            .push(ReporterEvent::Created(path.to_path_buf()));
    }

    fn updated(&self, path: &Path) {
        self.events
            .lock()
            .unwrap()
            .push(ReporterEvent::Updated(path.to_path_buf()));
    }
}
