//! Transfer reporter port (driven/secondary port)
//!
//! This module defines the interface for per-file transfer feedback. The
//! CLI implements it over its console output; tests implement it with a
//! recording stub.
//!
//! The trait is synchronous on purpose: it is invoked once per download
//! chunk inside the transfer loop, so implementations must be cheap and
//! non-blocking (print a line, push to a vector).

use std::path::Path;

/// Port trait for reporting transfer progress and completion
pub trait ITransferReporter: Send + Sync {
    /// A download chunk arrived for the file destined at `path`
    ///
    /// # Arguments
    /// * `path` - Local destination of the file being downloaded
    /// * `percent` - Integer completion percentage, 0 to 100
    fn download_progress(&self, path: &Path, percent: u8);

    /// A remote file turned out to be empty and was created locally as such
    fn empty_file(&self, path: &Path);

    /// A local file was uploaded as a newly created remote file
    fn created(&self, path: &Path);

    /// A local file's content replaced an existing remote file
    fn updated(&self, path: &Path);
}
