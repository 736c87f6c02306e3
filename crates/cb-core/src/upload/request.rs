use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::share::MimeType;

/// Stem of generated image filenames.
const IMAGE_FILENAME_STEM: &str = "uploaded_image";

/// Transport-level request handed to the uploader port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UploadRequest {
    Text {
        content: String,
    },
    Image {
        #[serde(
            serialize_with = "serialize_bytes",
            deserialize_with = "deserialize_bytes"
        )]
        bytes: Bytes,
        mime_type: MimeType,
        filename: String,
    },
}

impl UploadRequest {
    pub fn text(content: impl Into<String>) -> Self {
        UploadRequest::Text {
            content: content.into(),
        }
    }

    /// Builds an image request with a generated filename of the form
    /// `uploaded_image.<extension>`, the extension derived from the MIME
    /// subtype.
    pub fn image(bytes: Bytes, mime_type: MimeType) -> Self {
        let filename = format!("{}.{}", IMAGE_FILENAME_STEM, mime_type.image_extension());
        UploadRequest::Image {
            bytes,
            mime_type,
            filename,
        }
    }
}

/// Helper to serialize bytes as base64
fn serialize_bytes<S>(bytes: &Bytes, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use base64::Engine;
    let base64_string = base64::engine::general_purpose::STANDARD.encode(bytes);
    serializer.serialize_str(&base64_string)
}

/// Helper to deserialize bytes from base64
fn deserialize_bytes<'de, D>(deserializer: D) -> Result<Bytes, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use base64::Engine;
    let base64_string = String::deserialize(deserializer)?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(&base64_string)
        .map_err(|e: base64::DecodeError| serde::de::Error::custom(e.to_string()))?;
    Ok(Bytes::from(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_request_derives_its_filename_from_the_mime_subtype() {
        let request = UploadRequest::image(Bytes::from_static(b"png data"), MimeType("image/png".into()));
        match request {
            UploadRequest::Image { filename, .. } => assert_eq!(filename, "uploaded_image.png"),
            other => panic!("expected image request, got {:?}", other),
        }
    }

    #[test]
    fn image_request_without_subtype_keeps_an_empty_extension() {
        let request = UploadRequest::image(Bytes::from_static(b"data"), MimeType::octet_stream());
        match request {
            UploadRequest::Image { filename, .. } => assert_eq!(filename, "uploaded_image."),
            other => panic!("expected image request, got {:?}", other),
        }
    }

    #[test]
    fn image_bytes_serialize_as_base64() {
        let request = UploadRequest::image(Bytes::from_static(b"abc"), MimeType("image/png".into()));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["bytes"], "YWJj");

        let back: UploadRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }
}
