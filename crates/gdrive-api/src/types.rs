//! Wire types for the Drive v3 REST API
//!
//! Request and response DTOs plus their conversion into the domain's
//! [`RemoteUnit`]. Every metadata read requests the same projection
//! (`id,name,mimeType,version`), so one response shape serves the
//! metadata and listing endpoints alike.

use gdrive_core::domain::{RemoteUnit, UnitId, UnitKind};
use serde::{Deserialize, Serialize};

use crate::DriveError;

/// MIME type Drive uses to mark folder units
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

// ============================================================================
// Response DTOs
// ============================================================================

/// A file resource as returned by `files.get` and `files.list`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    /// Drive-assigned file ID
    pub id: String,
    /// File or folder name
    pub name: String,
    /// MIME type; folders report `application/vnd.google-apps.folder`
    pub mime_type: Option<String>,
    /// Monotonically increasing revision counter, serialized as a string
    pub version: Option<String>,
}

/// One page of a `files.list` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileList {
    /// Token for the next page; absent on the last page
    pub next_page_token: Option<String>,
    /// Files in this page
    #[serde(default)]
    pub files: Vec<DriveFile>,
}

/// Minimal response for create calls issued with `fields=id`
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedFile {
    /// ID of the created file or folder
    pub id: String,
}

// ============================================================================
// Request DTOs
// ============================================================================

/// Metadata body for `files.create` calls
///
/// Folder creation sets `mime_type` to [`FOLDER_MIME_TYPE`]; file
/// creation leaves it unset and asserts the content type on the upload
/// itself. Updates never send metadata, so `parents` is always present.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FileMetadata {
    /// Name of the new unit
    pub name: String,
    /// MIME type to assign, when the unit kind demands one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Containers the new unit is created in
    pub parents: Vec<String>,
}

// ============================================================================
// DriveFile -> RemoteUnit conversion
// ============================================================================

/// Converts a `DriveFile` response into the domain's [`RemoteUnit`]
///
/// The unit kind is derived from the MIME type: the folder MIME type
/// means [`UnitKind::Folder`], anything else (including an absent type)
/// is a file.
pub fn file_to_unit(file: DriveFile) -> Result<RemoteUnit, DriveError> {
    let id = UnitId::new(file.id)
        .map_err(|err| DriveError::InvalidResponse(format!("files response: {err}")))?;

    let kind = match file.mime_type.as_deref() {
        Some(FOLDER_MIME_TYPE) => UnitKind::Folder,
        _ => UnitKind::File,
    };

    Ok(RemoteUnit {
        id,
        name: file.name,
        kind,
        version: file.version,
    })
}
