//! Classified share payload domain model
//!
//! Represents validated share content that can be a single text, a list of
//! texts, a single image reference, or a list of image references.

use serde::{Deserialize, Serialize};
use std::fmt;
use twox_hash::xxh3::hash64;

use crate::share::{ByteSourceRef, MimeType};

/// Classified share payload.
///
/// Produced by [`classify`](crate::share::classify), which guarantees that
/// every text value is non-empty after trimming.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SharePayload {
    SingleText {
        content: String,
    },
    /// Texts in insertion order.
    MultiText {
        items: Vec<String>,
    },
    SingleImage {
        source: ByteSourceRef,
        mime_type: MimeType,
    },
    /// Image references in insertion order.
    MultiImage {
        sources: Vec<ByteSourceRef>,
    },
}

/// Shape of a payload, without its content. Handed to presenters alongside
/// the outcome.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    SingleText,
    MultiText,
    SingleImage,
    MultiImage,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PayloadKind::SingleText => "single text",
            PayloadKind::MultiText => "multiple texts",
            PayloadKind::SingleImage => "single image",
            PayloadKind::MultiImage => "multiple images",
        };
        write!(f, "{}", name)
    }
}

impl SharePayload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            SharePayload::SingleText { .. } => PayloadKind::SingleText,
            SharePayload::MultiText { .. } => PayloadKind::MultiText,
            SharePayload::SingleImage { .. } => PayloadKind::SingleImage,
            SharePayload::MultiImage { .. } => PayloadKind::MultiImage,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(
            self,
            SharePayload::SingleText { .. } | SharePayload::MultiText { .. }
        )
    }

    pub fn is_image(&self) -> bool {
        matches!(
            self,
            SharePayload::SingleImage { .. } | SharePayload::MultiImage { .. }
        )
    }

    /// Content fingerprint, used as the single-flight key: two payloads with
    /// the same fingerprint are treated as the same logical upload.
    pub fn fingerprint(&self) -> String {
        match self {
            SharePayload::SingleText { content } => {
                format!("{:016x}", hash64(content.as_bytes()))
            }
            SharePayload::MultiText { items } => {
                let joined: Vec<u8> = items
                    .iter()
                    .flat_map(|item| item.as_bytes())
                    .copied()
                    .collect();
                format!("txt_{:016x}", hash64(&joined))
            }
            SharePayload::SingleImage { source, .. } => {
                format!("img_{:016x}", hash64(source.locator.as_bytes()))
            }
            SharePayload::MultiImage { sources } => {
                let joined: Vec<u8> = sources
                    .iter()
                    .flat_map(|source| source.locator.as_bytes())
                    .copied()
                    .collect();
                format!("imgs_{:016x}", hash64(&joined))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_content_produces_the_same_fingerprint() {
        let first = SharePayload::SingleText {
            content: "hello".into(),
        };
        let second = SharePayload::SingleText {
            content: "hello".into(),
        };
        assert_eq!(first.fingerprint(), second.fingerprint());
    }

    #[test]
    fn fingerprints_distinguish_payload_shapes() {
        let single = SharePayload::SingleImage {
            source: ByteSourceRef::new("content://1", None),
            mime_type: MimeType("image/png".into()),
        };
        let multi = SharePayload::MultiImage {
            sources: vec![ByteSourceRef::new("content://1", None)],
        };
        assert_ne!(single.fingerprint(), multi.fingerprint());
    }

    #[test]
    fn kind_matches_the_variant() {
        let payload = SharePayload::MultiText {
            items: vec!["a".into(), "b".into()],
        };
        assert_eq!(payload.kind(), PayloadKind::MultiText);
        assert!(payload.is_text());
        assert!(!payload.is_image());
    }
}
