//! The remote data boundary the page controller talks through.
//!
//! Implementations live in `sheetguard-sheets` (mock and HTTP clients);
//! tests use in-memory fakes. Both operations block until settlement and
//! may fail; the controller recovers at the page boundary.

use std::fmt;

/// Error type for accessor operations.
#[derive(Debug)]
pub enum AccessorError {
    /// Transport-level failure
    Network(String),
    /// HTTP error with status code
    Http(u16, String),
    /// Response body could not be interpreted
    Parse(String),
    /// The client is missing configuration for this operation
    NotConfigured(String),
}

impl fmt::Display for AccessorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessorError::Network(msg) => write!(f, "Network error: {}", msg),
            AccessorError::Http(code, msg) => write!(f, "HTTP {}: {}", code, msg),
            AccessorError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AccessorError::NotConfigured(msg) => write!(f, "Not configured: {}", msg),
        }
    }
}

impl std::error::Error for AccessorError {}

/// What an update call carries: a whole record, or a deletion tombstone
/// (`{id, deleted: true}` on the wire).
#[derive(Debug, Clone, Copy)]
pub enum UpdatePayload<'a, R> {
    Record(&'a R),
    Tombstone { id: &'a str },
}

/// Fetch/update contract for one logical source (spreadsheet id + range).
///
/// A client instance is bound to its source at construction, so the
/// controller never sees spreadsheet coordinates.
pub trait RecordSource<R> {
    /// Fetch the full record set. Replaces, never merges.
    fn fetch_records(&self) -> Result<Vec<R>, AccessorError>;

    /// Persist one record or tombstone. `Ok(true)` means accepted.
    fn update_record(&self, payload: UpdatePayload<'_, R>) -> Result<bool, AccessorError>;
}
