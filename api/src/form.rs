//! The payment form as a state machine.
//!
//! [`reduce`] is the only place a [`FormState`] changes. It is pure: side
//! effects (dispatching the payment, redirecting) are returned as an
//! [`Effect`] for the caller to carry out, and their results come back in
//! as further [`FormEvent`]s.

use crate::draft::PaymentDraft;
use crate::draft::PaymentRequest;
use crate::gateway::GatewayError;
use crate::gateway::GatewayResponse;
use crate::outcome::SubmissionOutcome;
use crate::source_account::SourceAccount;

/// Which dialog, if any, is showing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum FormPhase {
    /// Only the trigger button is visible.
    #[default]
    Closed,
    /// The entry dialog is open and accepting edits.
    Editing,
    /// A submission is in flight; the entry dialog stays up, locked.
    Submitting { attempt: u64 },
    /// The result dialog is open.
    Result,
}

/// Everything the user can do, plus the gateway's answer.
#[derive(Clone, PartialEq, Debug)]
pub enum FormEvent {
    /// The trigger button. Opens the entry dialog, or hides it again.
    ToggleEntry,
    EditTo(String),
    SelectFrom(SourceAccount),
    EditAmount(String),
    EditDescription(String),
    /// Cancel on the entry dialog.
    Cancel,
    Submit,
    /// A submission finished. `attempt` identifies which one.
    Resolved {
        attempt: u64,
        result: Result<GatewayResponse, GatewayError>,
    },
    /// OK on the result dialog.
    Acknowledge,
}

/// Work the caller must perform after a transition.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Effect {
    /// Send `request` and feed the answer back as [`FormEvent::Resolved`].
    Dispatch {
        attempt: u64,
        request: PaymentRequest,
    },
    /// Send the user to the unauthorized-redirect location, now.
    Redirect,
}

/// The complete state of one payment form.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FormState {
    phase: FormPhase,
    draft: PaymentDraft,
    outcome: Option<SubmissionOutcome>,
    attempts: u64,
}

impl FormState {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &PaymentDraft {
        &self.draft
    }

    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_entry_open(&self) -> bool {
        matches!(self.phase, FormPhase::Editing | FormPhase::Submitting { .. })
    }

    pub fn is_result_open(&self) -> bool {
        self.phase.is_result()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.phase.is_editing() && self.draft.can_submit()
    }

    /// Empties the draft, drops the outcome and closes every dialog.
    ///
    /// The attempt counter survives so a late answer to an abandoned
    /// submission can never match a newer one.
    fn reset(self) -> Self {
        Self {
            attempts: self.attempts,
            ..Self::default()
        }
    }
}

/// Applies `event` to `state`.
pub fn reduce(state: FormState, event: FormEvent) -> (FormState, Option<Effect>) {
    let mut state = state;
    match (state.phase, event) {
        (FormPhase::Closed, FormEvent::ToggleEntry) => {
            state.phase = FormPhase::Editing;
            (state, None)
        }
        (FormPhase::Editing, FormEvent::ToggleEntry) => {
            state.phase = FormPhase::Closed;
            (state, None)
        }

        (FormPhase::Editing, FormEvent::EditTo(to)) => {
            state.draft.set_to(to);
            (state, None)
        }
        (FormPhase::Editing, FormEvent::SelectFrom(from)) => {
            state.draft.set_from(from);
            (state, None)
        }
        (FormPhase::Editing, FormEvent::EditAmount(amount)) => {
            state.draft.set_amount(amount);
            (state, None)
        }
        (FormPhase::Editing, FormEvent::EditDescription(description)) => {
            state.draft.set_description(description);
            (state, None)
        }

        (FormPhase::Editing | FormPhase::Closed, FormEvent::Cancel) => (state.reset(), None),

        (FormPhase::Editing, FormEvent::Submit) => match state.draft.to_request() {
            Some(request) => {
                state.attempts += 1;
                let attempt = state.attempts;
                state.phase = FormPhase::Submitting { attempt };
                (state, Some(Effect::Dispatch { attempt, request }))
            }
            None => (state, None),
        },

        (FormPhase::Submitting { attempt: pending }, FormEvent::Resolved { attempt, result })
            if pending == attempt =>
        {
            let outcome = SubmissionOutcome::from_result(&result);
            let effect = outcome.kind().is_unauthorized().then_some(Effect::Redirect);
            state.outcome = Some(outcome);
            state.phase = FormPhase::Result;
            (state, effect)
        }

        (FormPhase::Result, FormEvent::Acknowledge) => (state.reset(), None),

        // Anything else is not meaningful in the current phase: edits or a
        // cancel while a submission is pending, a second submit, stale
        // resolutions.
        (_, _) => (state, None),
    }
}
