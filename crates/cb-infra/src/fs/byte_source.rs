//! Filesystem byte source.
//!
//! Treats the reference locator as a local path. Suits hosts whose share
//! handles are already materialized as files.

use async_trait::async_trait;
use bytes::Bytes;
use log::debug;
use tokio::fs;

use cb_core::ports::{ByteSourceError, ByteSourcePort};
use cb_core::ByteSourceRef;

#[derive(Debug, Default, Clone, Copy)]
pub struct FsByteSource;

impl FsByteSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ByteSourcePort for FsByteSource {
    async fn open(&self, source: &ByteSourceRef) -> Result<Bytes, ByteSourceError> {
        debug!("reading byte source {}", source.locator);
        let data = fs::read(&source.locator)
            .await
            .map_err(|e| ByteSourceError::Unreadable {
                locator: source.locator.clone(),
                reason: e.to_string(),
            })?;
        Ok(Bytes::from(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_an_existing_file_fully() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"image bytes").unwrap();

        let source = ByteSourceRef::new(file.path().to_string_lossy(), None);
        let bytes = FsByteSource::new().open(&source).await.unwrap();

        assert_eq!(bytes, Bytes::from_static(b"image bytes"));
    }

    #[tokio::test]
    async fn a_missing_file_is_unreadable() {
        let source = ByteSourceRef::new("/nonexistent/path/image.png", None);
        let result = FsByteSource::new().open(&source).await;

        match result {
            Err(ByteSourceError::Unreadable { locator, .. }) => {
                assert_eq!(locator, "/nonexistent/path/image.png");
            }
            other => panic!("expected unreadable error, got {:?}", other),
        }
    }
}
