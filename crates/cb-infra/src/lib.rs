//! # cb-infra
//!
//! Infrastructure adapters for Clipboarder: the default HTTP uploader and a
//! filesystem byte source.

pub mod fs;
pub mod http;

pub use fs::FsByteSource;
pub use http::{HttpUploader, HttpUploaderConfig, UploadError};
