//! Runs the form state machine against real collaborators, without a UI.
//!
//! The Dioxus component drives [`reduce`] through its own hook so it can
//! spawn submissions on the UI executor; `FormSession` does the same work
//! sequentially and is what the integration tests exercise.

use std::rc::Rc;

use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

use crate::draft::PaymentRequest;
use crate::form::reduce;
use crate::form::Effect;
use crate::form::FormEvent;
use crate::form::FormState;
use crate::gateway::PaymentSubmitter;
use crate::navigation::Navigator;

/// A dispatched payment whose answer has not been applied yet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending submission does nothing until it is performed"]
pub struct PendingSubmission {
    attempt: u64,
    request: PaymentRequest,
}

impl PendingSubmission {
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn request(&self) -> &PaymentRequest {
        &self.request
    }

    /// Sends the request and turns the answer into the event that completes it.
    pub async fn perform(self, submitter: &dyn PaymentSubmitter) -> FormEvent {
        info!(
            "dispatching payment #{}: {} {}",
            self.attempt, self.request.amount, self.request.from
        );
        let result = submitter.submit(self.request).await;
        match &result {
            Ok(response) => info!("payment #{} answered {}", self.attempt, response.status),
            Err(e) => warn!("payment #{} failed: {}", self.attempt, e),
        }
        FormEvent::Resolved {
            attempt: self.attempt,
            result,
        }
    }
}

/// Carries out the synchronous part of `effect`.
///
/// Redirects happen here and now. A dispatch is handed back to the caller,
/// who decides where to await it.
pub fn execute(
    effect: Effect,
    navigator: &dyn Navigator,
    redirect_path: &str,
) -> Option<PendingSubmission> {
    match effect {
        Effect::Dispatch { attempt, request } => Some(PendingSubmission { attempt, request }),
        Effect::Redirect => {
            warn!("unauthorized payment, redirecting to {redirect_path}");
            navigator.navigate(redirect_path);
            None
        }
    }
}

/// One payment form wired to a submitter and a navigator.
pub struct FormSession {
    state: FormState,
    submitter: Rc<dyn PaymentSubmitter>,
    navigator: Rc<dyn Navigator>,
    redirect_path: String,
}

impl FormSession {
    pub fn new(
        submitter: Rc<dyn PaymentSubmitter>,
        navigator: Rc<dyn Navigator>,
        redirect_path: impl Into<String>,
    ) -> Self {
        Self {
            state: FormState::default(),
            submitter,
            navigator,
            redirect_path: redirect_path.into(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Applies one event. Returns the submission it started, if any.
    pub fn send(&mut self, event: FormEvent) -> Option<PendingSubmission> {
        let (next, effect) = reduce(std::mem::take(&mut self.state), event);
        self.state = next;
        effect.and_then(|effect| execute(effect, self.navigator.as_ref(), &self.redirect_path))
    }

    /// Performs `pending` and applies its answer.
    pub async fn complete(&mut self, pending: PendingSubmission) {
        let submitter = Rc::clone(&self.submitter);
        let event = pending.perform(submitter.as_ref()).await;
        let started = self.send(event);
        debug_assert!(started.is_none(), "a resolution never starts a submission");
    }

    /// Presses submit and waits for the answer, if a submission started.
    pub async fn submit(&mut self) {
        if let Some(pending) = self.send(FormEvent::Submit) {
            self.complete(pending).await;
        }
    }
}
