//! # cb-app
//!
//! Application layer for Clipboarder: drives classified share payloads
//! through the upload ports with single-flight and cancellation guarantees,
//! and provides the default outcome presenter.

pub mod coordinator;
pub mod messages;

pub use coordinator::{SubmitHandle, UploadCoordinator};
pub use messages::{outcome_message, LogPresenter};
