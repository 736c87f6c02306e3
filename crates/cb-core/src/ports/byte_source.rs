use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::share::ByteSourceRef;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ByteSourceError {
    #[error("source {locator} could not be read: {reason}")]
    Unreadable { locator: String, reason: String },
}

/// Read access to a data reference, independent of platform storage APIs.
#[async_trait]
pub trait ByteSourcePort: Send + Sync {
    /// Reads the referenced data fully into memory.
    ///
    /// Scoped acquisition: the underlying handle is released on every exit
    /// path (success, error, or cancellation) before this returns.
    async fn open(&self, source: &ByteSourceRef) -> Result<Bytes, ByteSourceError>;
}
