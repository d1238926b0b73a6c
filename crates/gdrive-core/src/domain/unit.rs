//! Remote unit types
//!
//! A "unit" is a file or folder as the remote store presents it. The store
//! owns these objects; this side only reads them and asks the store to
//! create or update them.

use serde::{Deserialize, Serialize};

use super::newtypes::UnitId;

/// Kind of a remote unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// A regular file with content
    File,
    /// A folder that may contain child units
    Folder,
}

impl UnitKind {
    /// Returns true for [`UnitKind::Folder`]
    #[must_use]
    pub fn is_folder(self) -> bool {
        matches!(self, UnitKind::Folder)
    }
}

/// A file or folder as reported by the remote store
///
/// Names are unique only within a parent container, never globally.
/// The version field is an opportunistic concurrency token: it is read
/// and carried but never sent back or enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUnit {
    /// Store-assigned identifier, stable for the unit's lifetime
    pub id: UnitId,
    /// Display name within the parent container
    pub name: String,
    /// Whether this unit is a file or a folder
    pub kind: UnitKind,
    /// Store-side revision counter, if reported
    pub version: Option<String>,
}

impl RemoteUnit {
    /// Returns true if this unit is a folder
    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.kind.is_folder()
    }
}
