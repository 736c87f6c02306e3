//! Upload attempt lifecycle.
//!
//! One attempt exists per submission and moves through a linear lifecycle:
//! `Created → Building → Sent → {Succeeded | Failed}`, with `Cancelled`
//! reachable from every non-terminal state. Terminal states absorb all
//! further events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::share::PayloadKind;

/// Lifecycle state of one upload attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttemptState {
    Created,
    Building,
    Sent,
    Succeeded,
    Failed,
    Cancelled,
}

impl AttemptState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            AttemptState::Succeeded | AttemptState::Failed | AttemptState::Cancelled
        )
    }
}

/// Events that drive the attempt lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptEvent {
    /// Request construction started.
    BuildStarted,
    /// The transport call was handed to the uploader.
    RequestSent,
    /// The uploader reported success.
    Succeeded,
    /// Request construction or the transport call failed.
    Failed,
    /// External cancellation.
    Cancelled,
}

impl AttemptState {
    /// Pure transition function. Invalid events leave the state unchanged;
    /// no event leaves a terminal state.
    pub fn transition(self, event: AttemptEvent) -> AttemptState {
        match (self, event) {
            (AttemptState::Created, AttemptEvent::BuildStarted) => AttemptState::Building,
            (AttemptState::Building, AttemptEvent::RequestSent) => AttemptState::Sent,
            (AttemptState::Building, AttemptEvent::Failed) => AttemptState::Failed,
            (AttemptState::Sent, AttemptEvent::Succeeded) => AttemptState::Succeeded,
            (AttemptState::Sent, AttemptEvent::Failed) => AttemptState::Failed,
            (
                AttemptState::Created | AttemptState::Building | AttemptState::Sent,
                AttemptEvent::Cancelled,
            ) => AttemptState::Cancelled,
            (state, _event) => state,
        }
    }
}

/// One in-flight or completed upload for a given payload.
///
/// Created when a classified payload enters the coordinator, driven to
/// exactly one terminal state, then discarded. Attempts are never reused.
#[derive(Debug, Clone)]
pub struct UploadAttempt {
    id: Uuid,
    kind: PayloadKind,
    state: AttemptState,
    created_at: DateTime<Utc>,
}

impl UploadAttempt {
    pub fn new(kind: PayloadKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            state: AttemptState::Created,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> PayloadKind {
        self.kind
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Applies `event` to the attempt. Returns whether the state changed.
    pub fn apply(&mut self, event: AttemptEvent) -> bool {
        let next = self.state.transition(event);
        let changed = next != self.state;
        self.state = next;
        changed
    }
}
