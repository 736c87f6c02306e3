use crate::share::PayloadKind;
use crate::upload::UploadOutcome;

/// Presentation port, owned by the host UI.
///
/// Receives the terminal outcome together with the originating payload
/// kind; the core makes no assumption about locale or wording beyond
/// passing the outcome and its error detail through.
pub trait OutcomePresenterPort: Send + Sync {
    fn present(&self, kind: PayloadKind, outcome: &UploadOutcome);
}
