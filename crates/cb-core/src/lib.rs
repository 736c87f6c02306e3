//! # cb-core
//!
//! Core domain models and business logic for Clipboarder share ingestion.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod ports;
pub mod share;
pub mod upload;

// Re-export commonly used types at the crate root
pub use share::{
    classify, ByteSourceRef, ClassificationError, DataRef, MimeType, PayloadKind, ShareAction,
    SharePayload,
};
pub use upload::{
    AttemptEvent, AttemptState, ErrorKind, UploadAttempt, UploadOutcome, UploadRequest,
};
