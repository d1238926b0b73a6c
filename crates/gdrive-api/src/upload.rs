//! Upload operations for Drive file content
//!
//! Two flows, matching the two sides of create-vs-update:
//! - [`create_resumable`] - new file via a resumable upload session:
//!   `POST /upload/drive/v3/files?uploadType=resumable` opens the
//!   session, a single `PUT` to the returned session URI streams the
//!   whole body.
//! - [`update_media`] - existing file via a media upload:
//!   `PATCH /upload/drive/v3/files/{id}?uploadType=media` streaming the
//!   new content; the file ID is unchanged.
//!
//! Both flows stream the local file through `ReaderStream` instead of
//! buffering it in memory.

use std::path::Path;

use gdrive_core::domain::UnitId;
use gdrive_core::ports::UploadSource;
use reqwest::{header, Body, Method};
use tokio_util::io::ReaderStream;
use tracing::debug;

use crate::client::{response_error, DriveClient};
use crate::types::{CreatedFile, FileMetadata};
use crate::DriveError;

/// Opens the local source file as a streamed request body
async fn file_body(path: &Path) -> Result<Body, DriveError> {
    let file = tokio::fs::File::open(path).await?;
    Ok(Body::wrap_stream(ReaderStream::new(file)))
}

/// Creates a new Drive file by streaming a local source
///
/// Opens a resumable upload session carrying the file metadata (name,
/// parent container, declared content type), then streams the file body
/// to the session URI in one `PUT`.
///
/// # Arguments
/// * `client` - The authenticated DriveClient
/// * `name` - Name for the new remote file
/// * `parent` - Container that will hold it
/// * `source` - Local file description (path, size, content type)
///
/// # Returns
/// The Drive ID of the created file
pub async fn create_resumable(
    client: &DriveClient,
    name: &str,
    parent: &UnitId,
    source: &UploadSource,
) -> Result<UnitId, DriveError> {
    let metadata = FileMetadata {
        name: name.to_string(),
        mime_type: None,
        parents: vec![parent.as_str().to_string()],
    };
    debug!(
        name,
        parent = %parent,
        size = source.size,
        content_type = source.content_type.as_deref(),
        "Opening resumable upload session"
    );

    // Step 1: open the session; the Location header names the session URI
    let mut request = client
        .request(Method::POST, "/upload/drive/v3/files?uploadType=resumable&fields=id")
        .json(&metadata);
    if let Some(content_type) = &source.content_type {
        request = request.header("X-Upload-Content-Type", content_type);
    }

    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(response_error("files.create (resumable)", response).await);
    }

    let session_uri = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .ok_or_else(|| {
            DriveError::InvalidResponse(
                "resumable session response missing Location header".to_string(),
            )
        })?;

    // Step 2: stream the file body to the session URI
    let mut put = client
        .http_client()
        .put(&session_uri)
        .bearer_auth(client.access_token())
        .header(header::CONTENT_LENGTH, source.size.to_string())
        .body(file_body(&source.path).await?);
    if let Some(content_type) = &source.content_type {
        put = put.header(header::CONTENT_TYPE, content_type);
    }

    let response = put.send().await?;
    if !response.status().is_success() {
        return Err(response_error("resumable session PUT", response).await);
    }

    let created: CreatedFile = response
        .json()
        .await
        .map_err(|err| DriveError::InvalidResponse(format!("resumable session PUT: {err}")))?;

    debug!(name, id = %created.id, size = source.size, "Resumable upload completed");

    UnitId::new(created.id)
        .map_err(|err| DriveError::InvalidResponse(format!("resumable session PUT: {err}")))
}

/// Replaces an existing Drive file's content in place
///
/// Streams the local source as a media upload. The remote file keeps its
/// ID; Drive bumps its version.
///
/// # Arguments
/// * `client` - The authenticated DriveClient
/// * `id` - The remote file to update
/// * `source` - Local file description (path, size, content type)
pub async fn update_media(
    client: &DriveClient,
    id: &UnitId,
    source: &UploadSource,
) -> Result<(), DriveError> {
    let path = format!("/upload/drive/v3/files/{}?uploadType=media", id.as_str());
    debug!(id = %id, size = source.size, "Updating remote file content");

    let mut request = client
        .request(Method::PATCH, &path)
        .header(header::CONTENT_LENGTH, source.size.to_string())
        .body(file_body(&source.path).await?);
    if let Some(content_type) = &source.content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }

    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(response_error("files.update", response).await);
    }

    debug!(id = %id, "Remote file content updated");
    Ok(())
}
