//! Integration tests for gdrive-api
//!
//! Uses wiremock to simulate the Drive v3 API and verifies end-to-end
//! behavior of the DriveStore adapter: metadata reads, child listing,
//! chunked ranged downloads, and streamed uploads.


mod test_children;
mod test_metadata;
