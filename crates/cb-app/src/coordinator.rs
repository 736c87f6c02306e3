//! Upload coordination use case.
//!
//! Owns the single-flight upload lifecycle for classified share payloads:
//! builds the transport request, drives the uploader port, tracks at most
//! one in-flight attempt per payload and emits a terminal outcome exactly
//! once per submission.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{oneshot, watch, RwLock};

use cb_core::ports::{ByteSourceError, ByteSourcePort, UploaderPort};
use cb_core::{
    AttemptEvent, ErrorKind, MimeType, PayloadKind, SharePayload, UploadAttempt, UploadOutcome,
    UploadRequest,
};

/// Handle to one submitted upload attempt.
///
/// The outcome resolves exactly once. Dropping the handle does not cancel
/// the attempt; cancellation is always explicit.
pub struct SubmitHandle {
    kind: PayloadKind,
    fingerprint: String,
    cancel_tx: watch::Sender<bool>,
    outcome_rx: oneshot::Receiver<UploadOutcome>,
}

impl SubmitHandle {
    pub fn kind(&self) -> PayloadKind {
        self.kind
    }

    /// Single-flight key of the submitted payload.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Requests cancellation. No effect once the attempt has produced its
    /// outcome.
    pub fn cancel(&self) {
        let _ = self.cancel_tx.send(true);
    }

    /// Waits for the terminal outcome.
    pub async fn outcome(self) -> UploadOutcome {
        self.outcome_rx.await.unwrap_or_else(|_| {
            UploadOutcome::failure(
                ErrorKind::Transport,
                "upload task dropped before producing an outcome",
            )
        })
    }
}

/// Coordinates upload attempts over the host-supplied ports.
///
/// Distinct payloads are processed concurrently; submissions sharing a
/// payload fingerprint are serialized to at most one in-flight attempt.
pub struct UploadCoordinator<U, B>
where
    U: UploaderPort + 'static,
    B: ByteSourcePort + 'static,
{
    uploader: Arc<U>,
    byte_source: Arc<B>,
    in_flight: Arc<RwLock<HashMap<String, watch::Sender<bool>>>>,
}

impl<U, B> UploadCoordinator<U, B>
where
    U: UploaderPort + 'static,
    B: ByteSourcePort + 'static,
{
    pub fn new(uploader: Arc<U>, byte_source: Arc<B>) -> Self {
        Self {
            uploader,
            byte_source,
            in_flight: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Submits a classified payload for upload.
    ///
    /// A second submission for a payload already in flight resolves
    /// immediately to `Failure { AlreadyInProgress }` without touching the
    /// uploader.
    pub async fn submit(&self, payload: SharePayload) -> SubmitHandle {
        let kind = payload.kind();
        let fingerprint = payload.fingerprint();
        let (outcome_tx, outcome_rx) = oneshot::channel();
        let (cancel_tx, cancel_rx) = watch::channel(false);

        {
            let mut in_flight = self.in_flight.write().await;
            if in_flight.contains_key(&fingerprint) {
                warn!("duplicate submission for payload {}, rejecting", fingerprint);
                let _ = outcome_tx.send(UploadOutcome::failure(
                    ErrorKind::AlreadyInProgress,
                    "an upload for this payload is already in flight",
                ));
                return SubmitHandle {
                    kind,
                    fingerprint,
                    cancel_tx,
                    outcome_rx,
                };
            }
            in_flight.insert(fingerprint.clone(), cancel_tx.clone());
        }

        let uploader = Arc::clone(&self.uploader);
        let byte_source = Arc::clone(&self.byte_source);
        let in_flight = Arc::clone(&self.in_flight);
        let key = fingerprint.clone();
        tokio::spawn(async move {
            let outcome =
                run_attempt(payload, uploader.as_ref(), byte_source.as_ref(), cancel_rx).await;
            in_flight.write().await.remove(&key);
            let _ = outcome_tx.send(outcome);
        });

        SubmitHandle {
            kind,
            fingerprint,
            cancel_tx,
            outcome_rx,
        }
    }

    /// Submits and waits for the terminal outcome.
    pub async fn upload(&self, payload: SharePayload) -> UploadOutcome {
        self.submit(payload).await.outcome().await
    }

    /// Cancels the in-flight attempt for `fingerprint`, if any. Returns
    /// whether an attempt was signalled.
    pub async fn cancel(&self, fingerprint: &str) -> bool {
        let in_flight = self.in_flight.read().await;
        match in_flight.get(fingerprint) {
            Some(cancel_tx) => {
                let _ = cancel_tx.send(true);
                true
            }
            None => false,
        }
    }

    /// Number of attempts currently in flight.
    pub async fn in_flight_count(&self) -> usize {
        self.in_flight.read().await.len()
    }
}

/// Drives one attempt to its terminal outcome. Never panics; every failure
/// is recovered into an [`UploadOutcome`].
async fn run_attempt<U, B>(
    payload: SharePayload,
    uploader: &U,
    byte_source: &B,
    mut cancel_rx: watch::Receiver<bool>,
) -> UploadOutcome
where
    U: UploaderPort,
    B: ByteSourcePort,
{
    let mut attempt = UploadAttempt::new(payload.kind());
    debug!("attempt {} created for {} payload", attempt.id(), attempt.kind());

    attempt.apply(AttemptEvent::BuildStarted);
    let requests = tokio::select! {
        biased;
        _ = cancelled(&mut cancel_rx) => {
            attempt.apply(AttemptEvent::Cancelled);
            info!("attempt {} cancelled while building", attempt.id());
            return UploadOutcome::cancelled();
        }
        built = build_requests(&payload, byte_source) => match built {
            Ok(requests) => requests,
            Err(err) => {
                attempt.apply(AttemptEvent::Failed);
                warn!("attempt {} could not read its source: {}", attempt.id(), err);
                return UploadOutcome::failure(ErrorKind::Unreadable, err.to_string());
            }
        }
    };

    attempt.apply(AttemptEvent::RequestSent);
    let total = requests.len();
    let mut server_ack = false;
    for (index, request) in requests.into_iter().enumerate() {
        let outcome = tokio::select! {
            biased;
            _ = cancelled(&mut cancel_rx) => {
                attempt.apply(AttemptEvent::Cancelled);
                info!("attempt {} cancelled in flight", attempt.id());
                return UploadOutcome::cancelled();
            }
            outcome = uploader.send(request) => outcome,
        };
        match outcome {
            UploadOutcome::Success { server_ack: ack } => server_ack = ack,
            failure @ UploadOutcome::Failure { .. } => {
                attempt.apply(AttemptEvent::Failed);
                warn!(
                    "attempt {} failed on request {}/{}",
                    attempt.id(),
                    index + 1,
                    total
                );
                return failure;
            }
        }
    }

    attempt.apply(AttemptEvent::Succeeded);
    info!("attempt {} completed, server ack: {}", attempt.id(), server_ack);
    UploadOutcome::success(server_ack)
}

/// Builds the transport requests for a payload. Text payloads never touch
/// the byte source; image payloads read every source up front so the send
/// phase is a pure sequence of transport calls.
async fn build_requests<B>(
    payload: &SharePayload,
    byte_source: &B,
) -> Result<Vec<UploadRequest>, ByteSourceError>
where
    B: ByteSourcePort,
{
    match payload {
        SharePayload::SingleText { content } => Ok(vec![UploadRequest::text(content.clone())]),
        SharePayload::MultiText { items } => Ok(vec![UploadRequest::text(items.join("\n"))]),
        SharePayload::SingleImage { source, mime_type } => {
            let bytes = byte_source.open(source).await?;
            Ok(vec![UploadRequest::image(bytes, mime_type.clone())])
        }
        SharePayload::MultiImage { sources } => {
            let mut requests = Vec::with_capacity(sources.len());
            for source in sources {
                let bytes = byte_source.open(source).await?;
                let mime_type = source
                    .mime_type
                    .clone()
                    .unwrap_or_else(MimeType::octet_stream);
                requests.push(UploadRequest::image(bytes, mime_type));
            }
            Ok(requests)
        }
    }
}

/// Resolves when cancellation is requested. Pends forever once no sender is
/// left, so a finished handle can never be mistaken for a cancellation.
async fn cancelled(cancel_rx: &mut watch::Receiver<bool>) {
    if cancel_rx.wait_for(|cancelled| *cancelled).await.is_err() {
        std::future::pending::<()>().await;
    }
}
