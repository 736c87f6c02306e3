//! Upload domain model
//!
//! Transport request/outcome vocabulary and the per-submission attempt
//! lifecycle.

mod attempt;
mod outcome;
mod request;

pub use attempt::{AttemptEvent, AttemptState, UploadAttempt};
pub use outcome::{ErrorKind, UploadOutcome};
pub use request::UploadRequest;
