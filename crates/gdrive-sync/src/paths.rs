//! Path normalization
//!
//! User-supplied paths may carry trailing separators (`docs/`, shell tab
//! completion leaves them behind). Every engine strips them before
//! comparing against the filesystem or appending a child name, so a child
//! path is always `parent/name` with exactly one separator in between.

/// Strips all trailing path separators from `path`
///
/// Idempotent: the result never ends in a separator, and normalizing an
/// already-normalized path returns it unchanged. No other characters are
/// touched.
#[must_use]
pub fn normalize(path: &str) -> &str {
    path.trim_end_matches('/')
}
