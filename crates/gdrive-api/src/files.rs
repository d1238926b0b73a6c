//! File metadata, listing, and folder operations
//!
//! Thin bindings over the Drive v3 `files` collection:
//! - [`get_file`] - `GET /drive/v3/files/{id}`
//! - [`list_children`] - `GET /drive/v3/files?q='{id}' in parents`
//! - [`create_folder`] - `POST /drive/v3/files` with the folder MIME type
//!
//! Every call requests the same field projection so responses stay small
//! and deserialize into one DTO shape.

use gdrive_core::domain::{RemoteUnit, UnitId};
use gdrive_core::ports::ChildPage;
use reqwest::Method;
use tracing::debug;

use crate::client::{response_error, DriveClient};
use crate::types::{file_to_unit, CreatedFile, DriveFile, FileList, FileMetadata, FOLDER_MIME_TYPE};
use crate::DriveError;

/// Field projection for single-file reads
const FILE_FIELDS: &str = "id,name,mimeType,version";

/// Field projection for listing calls
const LIST_FIELDS: &str = "nextPageToken,files(id,name,mimeType,version)";

/// Escapes a value for embedding in a Drive `q` search clause
///
/// Drive query literals are single-quoted; backslashes and single quotes
/// inside them must be backslash-escaped.
fn escape_query_value(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Fetches metadata for a single unit by ID
///
/// Makes `GET /drive/v3/files/{id}?fields=id,name,mimeType,version`.
///
/// # Arguments
/// * `client` - The authenticated DriveClient
/// * `id` - The Drive ID of the unit
///
/// # Errors
/// [`DriveError::NotFound`] when no unit has the given ID; other
/// variants for transport and API failures.
pub async fn get_file(client: &DriveClient, id: &UnitId) -> Result<RemoteUnit, DriveError> {
    let path = format!("/drive/v3/files/{}?fields={}", id.as_str(), FILE_FIELDS);
    debug!(id = %id, "Fetching file metadata");

    let response = client.request(Method::GET, &path).send().await?;
    if !response.status().is_success() {
        return Err(response_error("files.get", response).await);
    }

    let file: DriveFile = response
        .json()
        .await
        .map_err(|err| DriveError::InvalidResponse(format!("files.get: {err}")))?;

    file_to_unit(file)
}

/// Lists one page of a container's direct children
///
/// Makes `GET /drive/v3/files` with a `q='{id}' in parents` search
/// clause, passing `pageToken` when continuing a previous page.
///
/// # Arguments
/// * `client` - The authenticated DriveClient
/// * `container` - The folder whose children to list
/// * `page_token` - Continuation token from the previous page, if any
///
/// # Returns
/// The page's units plus the continuation token for the next page
pub async fn list_children(
    client: &DriveClient,
    container: &UnitId,
    page_token: Option<&str>,
) -> Result<ChildPage, DriveError> {
    let query = format!("'{}' in parents", escape_query_value(container.as_str()));
    debug!(
        container = %container,
        has_token = page_token.is_some(),
        "Listing container children"
    );

    let mut request = client
        .request(Method::GET, "/drive/v3/files")
        .query(&[("q", query.as_str()), ("fields", LIST_FIELDS)]);
    if let Some(token) = page_token {
        request = request.query(&[("pageToken", token)]);
    }

    let response = request.send().await?;
    if !response.status().is_success() {
        return Err(response_error("files.list", response).await);
    }

    let list: FileList = response
        .json()
        .await
        .map_err(|err| DriveError::InvalidResponse(format!("files.list: {err}")))?;

    let units = list
        .files
        .into_iter()
        .map(file_to_unit)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        container = %container,
        count = units.len(),
        more = list.next_page_token.is_some(),
        "Listed container page"
    );

    Ok(ChildPage {
        units,
        next_token: list.next_page_token,
    })
}

/// Creates an empty folder inside a container
///
/// Makes `POST /drive/v3/files?fields=id` with a metadata body naming
/// the folder MIME type and the parent container.
///
/// # Arguments
/// * `client` - The authenticated DriveClient
/// * `name` - Name for the new folder
/// * `parent` - Container that will hold it
///
/// # Returns
/// The Drive ID of the created folder
pub async fn create_folder(
    client: &DriveClient,
    name: &str,
    parent: &UnitId,
) -> Result<UnitId, DriveError> {
    let metadata = FileMetadata {
        name: name.to_string(),
        mime_type: Some(FOLDER_MIME_TYPE.to_string()),
        parents: vec![parent.as_str().to_string()],
    };
    debug!(name, parent = %parent, "Creating remote folder");

    let response = client
        .request(Method::POST, "/drive/v3/files?fields=id")
        .json(&metadata)
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(response_error("files.create", response).await);
    }

    let created: CreatedFile = response
        .json()
        .await
        .map_err(|err| DriveError::InvalidResponse(format!("files.create: {err}")))?;

    debug!(name, id = %created.id, "Remote folder created");

    UnitId::new(created.id)
        .map_err(|err| DriveError::InvalidResponse(format!("files.create: {err}")))
}
