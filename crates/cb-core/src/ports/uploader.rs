use async_trait::async_trait;

use crate::upload::{UploadOutcome, UploadRequest};

/// Transport port, supplied by the host.
///
/// The call may suspend pending network I/O and must honor cancellation
/// promptly. Failures surface as [`UploadOutcome::Failure`], never as
/// panics across the port boundary.
#[async_trait]
pub trait UploaderPort: Send + Sync {
    async fn send(&self, request: UploadRequest) -> UploadOutcome;
}
