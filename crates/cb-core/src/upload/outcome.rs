use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal result of one upload attempt. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome_kind", rename_all = "snake_case")]
pub enum UploadOutcome {
    Success {
        /// Whether the server acknowledged the content.
        server_ack: bool,
    },
    Failure {
        kind: ErrorKind,
        message: String,
    },
}

/// Why an upload attempt failed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// An upload for the same payload is already in flight.
    AlreadyInProgress,
    /// The attempt was cancelled before completion.
    Cancelled,
    /// The data reference could not be opened or fully read.
    Unreadable,
    /// The uploader reported a failure (network, server error, ...).
    Transport,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::AlreadyInProgress => "already in progress",
            ErrorKind::Cancelled => "cancelled",
            ErrorKind::Unreadable => "unreadable",
            ErrorKind::Transport => "transport failure",
        };
        write!(f, "{}", name)
    }
}

impl UploadOutcome {
    pub fn success(server_ack: bool) -> Self {
        UploadOutcome::Success { server_ack }
    }

    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        UploadOutcome::Failure {
            kind,
            message: message.into(),
        }
    }

    pub fn cancelled() -> Self {
        Self::failure(ErrorKind::Cancelled, "upload cancelled")
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, UploadOutcome::Failure { .. })
    }

    /// The failure kind, if this outcome is a failure.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            UploadOutcome::Failure { kind, .. } => Some(*kind),
            UploadOutcome::Success { .. } => None,
        }
    }
}
