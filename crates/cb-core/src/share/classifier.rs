//! Share request classification
//!
//! Turns a raw share request (action kind, declared MIME type, attached data
//! references) into a typed, validated [`SharePayload`]. Pure function over
//! its inputs; unsupported combinations are errors, never panics.

use thiserror::Error;

use crate::share::{ByteSourceRef, DataRef, MimeType, ShareAction, SharePayload};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    /// Action/MIME combination not recognized; no upload is attempted.
    #[error("unsupported share request")]
    Unsupported,

    /// A shared text value was empty after trimming.
    #[error("shared text is empty")]
    EmptyContent,
}

/// Classifies a share request.
///
/// Rules are checked in priority order, first match wins:
///
/// 1. `ProcessText` + exactly `text/plain` + exactly one text value → `SingleText`
/// 2. `Send` + `image/*` + exactly one stream reference → `SingleImage`
/// 3. `Send` + `text/*` → all text values → `MultiText` (one item stays on
///    the multi path)
/// 4. `SendMultiple` + `image/*` → `MultiImage` over all stream references
/// 5. `SendMultiple` + `text/*` → `MultiText` over all text values
/// 6. anything else → [`ClassificationError::Unsupported`]
///
/// Text values must be non-empty after trimming; a violation is rejected
/// here so that no payload carrying blank content is ever constructed.
pub fn classify(
    action: ShareAction,
    declared_mime: Option<&MimeType>,
    refs: &[DataRef],
) -> Result<SharePayload, ClassificationError> {
    let mime = declared_mime.ok_or(ClassificationError::Unsupported)?;

    match action {
        ShareAction::ProcessText if mime.0 == "text/plain" => {
            let texts = text_values(refs);
            if texts.len() != 1 {
                return Err(ClassificationError::Unsupported);
            }
            let content = validated(texts[0])?;
            Ok(SharePayload::SingleText { content })
        }
        ShareAction::Send if mime.is_image() => {
            let streams = stream_refs(refs);
            if streams.len() != 1 {
                return Err(ClassificationError::Unsupported);
            }
            let source = streams[0].clone();
            // The reference's own declared type wins over the request-level
            // one; the request type is only a fallback.
            let mime_type = source.mime_type.clone().unwrap_or_else(|| mime.clone());
            Ok(SharePayload::SingleImage { source, mime_type })
        }
        ShareAction::Send if mime.is_text() => {
            let items = validated_all(&text_values(refs))?;
            Ok(SharePayload::MultiText { items })
        }
        ShareAction::SendMultiple if mime.is_image() => {
            let sources: Vec<ByteSourceRef> = stream_refs(refs).into_iter().cloned().collect();
            if sources.is_empty() {
                return Err(ClassificationError::Unsupported);
            }
            Ok(SharePayload::MultiImage { sources })
        }
        ShareAction::SendMultiple if mime.is_text() => {
            let items = validated_all(&text_values(refs))?;
            Ok(SharePayload::MultiText { items })
        }
        _ => Err(ClassificationError::Unsupported),
    }
}

fn text_values(refs: &[DataRef]) -> Vec<&str> {
    refs.iter().filter_map(DataRef::as_text).collect()
}

fn stream_refs(refs: &[DataRef]) -> Vec<&ByteSourceRef> {
    refs.iter().filter_map(DataRef::as_stream).collect()
}

fn validated(text: &str) -> Result<String, ClassificationError> {
    if text.trim().is_empty() {
        Err(ClassificationError::EmptyContent)
    } else {
        Ok(text.to_string())
    }
}

fn validated_all(texts: &[&str]) -> Result<Vec<String>, ClassificationError> {
    if texts.is_empty() {
        return Err(ClassificationError::Unsupported);
    }
    texts.iter().map(|text| validated(text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::PayloadKind;

    fn mime(value: &str) -> MimeType {
        MimeType(value.into())
    }

    fn stream(locator: &str, declared: Option<&str>) -> DataRef {
        DataRef::stream(ByteSourceRef::new(locator, declared.map(mime)))
    }

    #[test]
    fn process_text_with_plain_text_and_one_value_is_single_text() {
        let payload = classify(
            ShareAction::ProcessText,
            Some(&mime("text/plain")),
            &[DataRef::text("selected words")],
        )
        .unwrap();
        assert_eq!(
            payload,
            SharePayload::SingleText {
                content: "selected words".into()
            }
        );
    }

    #[test]
    fn process_text_rejects_blank_content_instead_of_constructing_it() {
        let result = classify(
            ShareAction::ProcessText,
            Some(&mime("text/plain")),
            &[DataRef::text("")],
        );
        assert_eq!(result, Err(ClassificationError::EmptyContent));

        let whitespace = classify(
            ShareAction::ProcessText,
            Some(&mime("text/plain")),
            &[DataRef::text("   \n ")],
        );
        assert_eq!(whitespace, Err(ClassificationError::EmptyContent));
    }

    #[test]
    fn process_text_requires_exactly_text_plain() {
        let result = classify(
            ShareAction::ProcessText,
            Some(&mime("text/html")),
            &[DataRef::text("rich")],
        );
        assert_eq!(result, Err(ClassificationError::Unsupported));
    }

    #[test]
    fn process_text_requires_exactly_one_value() {
        let none = classify(ShareAction::ProcessText, Some(&mime("text/plain")), &[]);
        assert_eq!(none, Err(ClassificationError::Unsupported));

        let two = classify(
            ShareAction::ProcessText,
            Some(&mime("text/plain")),
            &[DataRef::text("a"), DataRef::text("b")],
        );
        assert_eq!(two, Err(ClassificationError::Unsupported));
    }

    #[test]
    fn send_with_one_image_ref_is_single_image() {
        let payload = classify(
            ShareAction::Send,
            Some(&mime("image/png")),
            &[stream("content://media/7", Some("image/png"))],
        )
        .unwrap();
        assert_eq!(payload.kind(), PayloadKind::SingleImage);
    }

    #[test]
    fn single_image_prefers_the_source_declared_type() {
        let payload = classify(
            ShareAction::Send,
            Some(&mime("image/*")),
            &[stream("content://media/7", Some("image/jpeg"))],
        )
        .unwrap();
        match payload {
            SharePayload::SingleImage { mime_type, .. } => {
                assert_eq!(mime_type, mime("image/jpeg"));
            }
            other => panic!("expected single image, got {:?}", other),
        }
    }

    #[test]
    fn single_image_falls_back_to_the_request_type() {
        let payload = classify(
            ShareAction::Send,
            Some(&mime("image/png")),
            &[stream("content://media/7", None)],
        )
        .unwrap();
        match payload {
            SharePayload::SingleImage { mime_type, .. } => {
                assert_eq!(mime_type, mime("image/png"));
            }
            other => panic!("expected single image, got {:?}", other),
        }
    }

    #[test]
    fn send_image_with_zero_or_two_refs_is_unsupported() {
        let none = classify(ShareAction::Send, Some(&mime("image/png")), &[]);
        assert_eq!(none, Err(ClassificationError::Unsupported));

        let two = classify(
            ShareAction::Send,
            Some(&mime("image/png")),
            &[
                stream("content://media/7", None),
                stream("content://media/8", None),
            ],
        );
        assert_eq!(two, Err(ClassificationError::Unsupported));
    }

    #[test]
    fn send_text_with_one_value_stays_on_the_multi_path() {
        let payload = classify(
            ShareAction::Send,
            Some(&mime("text/")),
            &[DataRef::text("hello")],
        )
        .unwrap();
        assert_eq!(
            payload,
            SharePayload::MultiText {
                items: vec!["hello".into()]
            }
        );
    }

    #[test]
    fn send_text_collects_all_values_in_order() {
        let payload = classify(
            ShareAction::Send,
            Some(&mime("text/plain")),
            &[
                DataRef::text("first"),
                DataRef::text("second"),
                DataRef::text("third"),
            ],
        )
        .unwrap();
        assert_eq!(
            payload,
            SharePayload::MultiText {
                items: vec!["first".into(), "second".into(), "third".into()]
            }
        );
    }

    #[test]
    fn send_multiple_images_collects_all_stream_refs() {
        let payload = classify(
            ShareAction::SendMultiple,
            Some(&mime("image/jpeg")),
            &[
                stream("content://media/1", Some("image/jpeg")),
                stream("content://media/2", Some("image/png")),
            ],
        )
        .unwrap();
        match payload {
            SharePayload::MultiImage { sources } => assert_eq!(sources.len(), 2),
            other => panic!("expected multi image, got {:?}", other),
        }
    }

    #[test]
    fn send_multiple_texts_is_multi_text() {
        let payload = classify(
            ShareAction::SendMultiple,
            Some(&mime("text/plain")),
            &[DataRef::text("a"), DataRef::text("b")],
        )
        .unwrap();
        assert_eq!(payload.kind(), PayloadKind::MultiText);
    }

    #[test]
    fn multi_text_rejects_any_blank_item() {
        let result = classify(
            ShareAction::SendMultiple,
            Some(&mime("text/plain")),
            &[DataRef::text("a"), DataRef::text("  ")],
        );
        assert_eq!(result, Err(ClassificationError::EmptyContent));
    }

    #[test]
    fn absent_mime_type_is_unsupported() {
        let result = classify(ShareAction::Send, None, &[DataRef::text("hello")]);
        assert_eq!(result, Err(ClassificationError::Unsupported));
    }

    #[test]
    fn unmatched_mime_prefix_is_unsupported() {
        let result = classify(
            ShareAction::Send,
            Some(&mime("application/pdf")),
            &[stream("content://docs/1", None)],
        );
        assert_eq!(result, Err(ClassificationError::Unsupported));
    }

    #[test]
    fn empty_ref_list_is_unsupported() {
        let result = classify(ShareAction::SendMultiple, Some(&mime("text/plain")), &[]);
        assert_eq!(result, Err(ClassificationError::Unsupported));
    }
}
