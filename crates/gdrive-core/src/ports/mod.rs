//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the domain core
//! depends on, but whose implementations live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`IRemoteStore`] - Remote object store operations (Google Drive today)
//! - [`ITransferReporter`] - Per-file progress and completion reporting

pub mod remote_store;
pub mod reporter;

pub use remote_store::{
    ChildPage, DownloadChunk, IDownloadStream, IRemoteStore, StoreError, UploadSource,
};
pub use reporter::ITransferReporter;
