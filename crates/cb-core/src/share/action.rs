use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of share request routed into the system by the host.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShareAction {
    /// A text selection handed over for processing.
    ProcessText,
    /// A single shared item.
    Send,
    /// Multiple shared items.
    SendMultiple,
}

impl fmt::Display for ShareAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShareAction::ProcessText => "process_text",
            ShareAction::Send => "send",
            ShareAction::SendMultiple => "send_multiple",
        };
        write!(f, "{}", name)
    }
}
