//! Human-readable outcome messages.
//!
//! The coordinator passes outcomes through untouched; these helpers render
//! the notification strings a host can display, and [`LogPresenter`] is a
//! minimal presenter for hosts without a notification surface.

use log::{info, warn};

use cb_core::ports::OutcomePresenterPort;
use cb_core::{ErrorKind, PayloadKind, UploadOutcome};

/// Renders a terminal outcome as user-facing notification text.
pub fn outcome_message(kind: PayloadKind, outcome: &UploadOutcome) -> String {
    let is_image = matches!(kind, PayloadKind::SingleImage | PayloadKind::MultiImage);
    match outcome {
        UploadOutcome::Success { server_ack: true } => {
            if is_image {
                "Image uploaded to Clipboarder".into()
            } else {
                "Text copied to Clipboarder".into()
            }
        }
        UploadOutcome::Success { server_ack: false } => {
            if is_image {
                "Image upload was not acknowledged".into()
            } else {
                "Text copy was not acknowledged".into()
            }
        }
        UploadOutcome::Failure { kind: error, message } => match error {
            ErrorKind::AlreadyInProgress => "This content is already being uploaded".into(),
            ErrorKind::Cancelled => "Upload cancelled".into(),
            ErrorKind::Unreadable => {
                if is_image {
                    "Could not read the shared image!".into()
                } else {
                    "Could not read the shared text!".into()
                }
            }
            ErrorKind::Transport => format!("Error: {}", message),
        },
    }
}

/// Presenter that logs the rendered message instead of displaying it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPresenter;

impl OutcomePresenterPort for LogPresenter {
    fn present(&self, kind: PayloadKind, outcome: &UploadOutcome) {
        let message = outcome_message(kind, outcome);
        if outcome.is_success() {
            info!("{}", message);
        } else {
            warn!("{}", message);
        }
    }
}
