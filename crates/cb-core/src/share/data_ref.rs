use serde::{Deserialize, Serialize};

use crate::share::MimeType;

/// Opaque handle to readable binary data plus its declared MIME type.
///
/// The handle is read-only and owned by the host for the duration of one
/// upload attempt; the core never retains it past the attempt's completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ByteSourceRef {
    /// Host-interpreted locator, e.g. a content URI or a file path.
    pub locator: String,

    /// MIME type declared by whatever produced the data, if known.
    pub mime_type: Option<MimeType>,
}

impl ByteSourceRef {
    pub fn new(locator: impl Into<String>, mime_type: Option<MimeType>) -> Self {
        Self {
            locator: locator.into(),
            mime_type,
        }
    }
}

/// One raw attachment of a share request, before classification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataRef {
    /// An inline text value.
    Text { text: String },

    /// A reference to binary data readable through a byte source.
    Stream { source: ByteSourceRef },
}

impl DataRef {
    pub fn text(text: impl Into<String>) -> Self {
        DataRef::Text { text: text.into() }
    }

    pub fn stream(source: ByteSourceRef) -> Self {
        DataRef::Stream { source }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DataRef::Text { text } => Some(text),
            DataRef::Stream { .. } => None,
        }
    }

    pub fn as_stream(&self) -> Option<&ByteSourceRef> {
        match self {
            DataRef::Stream { source } => Some(source),
            DataRef::Text { .. } => None,
        }
    }
}
