//! Share request domain model
//!
//! Types describing an incoming share request (action, declared MIME type,
//! attached data references) and its classified, validated form.

mod action;
mod classifier;
mod data_ref;
mod mime;
mod payload;

pub use action::ShareAction;
pub use classifier::{classify, ClassificationError};
pub use data_ref::{ByteSourceRef, DataRef};
pub use mime::MimeType;
pub use payload::{PayloadKind, SharePayload};
