//! Chunked download stream for Drive file content
//!
//! Drive serves file content at `GET /drive/v3/files/{id}?alt=media`.
//! [`ChunkedDownload`] reads it in ranged requests so callers can report
//! progress between chunks:
//!
//! - `206 Partial Content` answers a honored `Range` header; the
//!   `Content-Range` trailer carries the total size.
//! - `200 OK` means the server ignored the range and sent everything in
//!   one response.
//! - `416 Range Not Satisfiable` is Drive's answer to any ranged read of
//!   a zero-length file.

use gdrive_core::domain::UnitId;
use gdrive_core::ports::{DownloadChunk, IDownloadStream, StoreError};
use reqwest::{header, Client, StatusCode};
use tracing::debug;

use crate::client::{response_error, DriveClient};
use crate::DriveError;

/// Default download chunk size: 10 MiB
pub const DEFAULT_CHUNK_SIZE: u64 = 10 * 1024 * 1024;

/// Extracts the total size from a `Content-Range: bytes 0-1023/4096` header
///
/// Returns `None` when the header is absent, malformed, or reports an
/// unknown total (`bytes 0-1023/*`).
fn parse_content_range_total(headers: &header::HeaderMap) -> Option<u64> {
    headers
        .get(header::CONTENT_RANGE)?
        .to_str()
        .ok()?
        .rsplit('/')
        .next()?
        .trim()
        .parse()
        .ok()
}

/// A chunked download of one file's content
///
/// Owns everything it needs (client handle, content URL, token) so the
/// stream can outlive the store call that opened it. Each
/// [`next_chunk`](IDownloadStream::next_chunk) call issues one ranged
/// request; the stream ends when the reported total is reached.
pub struct ChunkedDownload {
    /// HTTP client, shared with the store's client
    client: Client,
    /// Absolute `alt=media` content URL for the file
    url: String,
    /// Bearer token for the content requests
    access_token: String,
    /// Bytes requested per ranged read
    chunk_size: u64,
    /// Bytes received so far; also the next range's start offset
    offset: u64,
    /// Total size, once a response reports it
    total: Option<u64>,
    /// Set once all content has been delivered
    done: bool,
}

impl ChunkedDownload {
    /// Opens a chunked download for the given file
    ///
    /// No request is issued until the first `next_chunk` call.
    pub fn open(client: &DriveClient, id: &UnitId, chunk_size: u64) -> Self {
        Self {
            client: client.http_client().clone(),
            url: format!("{}/drive/v3/files/{}?alt=media", client.base_url(), id.as_str()),
            access_token: client.access_token().to_string(),
            chunk_size: chunk_size.max(1),
            offset: 0,
            total: None,
            done: false,
        }
    }

    /// Fetches the next ranged chunk
    async fn fetch_next(&mut self) -> Result<Option<DownloadChunk>, DriveError> {
        if self.done {
            return Ok(None);
        }

        let range_end = self.offset + self.chunk_size - 1;
        let response = self
            .client
            .get(&self.url)
            .bearer_auth(&self.access_token)
            .header(header::RANGE, format!("bytes={}-{}", self.offset, range_end))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::PARTIAL_CONTENT {
            if self.total.is_none() {
                self.total = parse_content_range_total(response.headers());
            }
            let data = response.bytes().await?.to_vec();
            if data.is_empty() {
                self.done = true;
                return Ok(None);
            }

            self.offset += data.len() as u64;
            match self.total {
                Some(total) if self.offset >= total => self.done = true,
                // Without a total, a short read marks the last chunk
                None if (data.len() as u64) < self.chunk_size => self.done = true,
                _ => {}
            }

            debug!(
                url = %self.url,
                received = self.offset,
                total = self.total,
                "Download chunk received"
            );

            Ok(Some(DownloadChunk {
                data,
                bytes_received: self.offset,
                total_bytes: self.total,
            }))
        } else if status.is_success() {
            // Range ignored: the body is the entire content
            let data = response.bytes().await?.to_vec();
            self.offset = data.len() as u64;
            self.total = Some(self.offset);
            self.done = true;

            debug!(url = %self.url, total = self.offset, "Download completed in one response");

            Ok(Some(DownloadChunk {
                data,
                bytes_received: self.offset,
                total_bytes: self.total,
            }))
        } else {
            Err(response_error("files.get alt=media", response).await)
        }
    }
}

#[async_trait::async_trait]
impl IDownloadStream for ChunkedDownload {
    async fn next_chunk(&mut self) -> Result<Option<DownloadChunk>, StoreError> {
        Ok(self.fetch_next().await?)
    }
}
