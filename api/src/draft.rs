//! The in-progress payment and the validated request built from it.

use serde::Deserialize;
use serde::Serialize;

use crate::source_account::SourceAccount;
use crate::validation::validate_amount;
use crate::validation::validate_email;

/// The payload handed to a [`PaymentSubmitter`](crate::gateway::PaymentSubmitter).
///
/// Serializes to `{ "to", "from", "amount", "description" }`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub to: String,
    pub from: SourceAccount,
    pub amount: String,
    pub description: String,
}

/// The payment form's field values while the user is editing them.
///
/// The validity flags are recomputed by the setters and never set directly,
/// so they always agree with the field they belong to.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct PaymentDraft {
    to: String,
    from: Option<SourceAccount>,
    amount: String,
    description: String,
    email_valid: bool,
    amount_valid: bool,
}

impl PaymentDraft {
    // --- Getters ---

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn from(&self) -> Option<SourceAccount> {
        self.from
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn email_valid(&self) -> bool {
        self.email_valid
    }

    pub fn amount_valid(&self) -> bool {
        self.amount_valid
    }

    // --- Setters ---

    pub fn set_to(&mut self, to: String) {
        self.email_valid = validate_email(&to);
        self.to = to;
    }

    pub fn set_from(&mut self, from: SourceAccount) {
        self.from = Some(from);
    }

    pub fn set_amount(&mut self, amount: String) {
        self.amount_valid = validate_amount(&amount);
        self.amount = amount;
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    // --- Derived ---

    /// True when the recipient field should show its "invalid" hint.
    pub fn shows_email_error(&self) -> bool {
        !self.to.is_empty() && !self.email_valid
    }

    /// True when the amount field should show its "invalid" hint.
    pub fn shows_amount_error(&self) -> bool {
        !self.amount.is_empty() && !self.amount_valid
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.to.is_empty()
            && self.from.is_some()
            && !self.amount.is_empty()
            && self.email_valid
            && self.amount_valid
    }

    /// Builds the request to dispatch, re-running both field checks.
    ///
    /// Returns `None` whenever [`can_submit`](Self::can_submit) would be false.
    pub fn to_request(&self) -> Option<PaymentRequest> {
        if !self.can_submit() || !validate_email(&self.to) || !validate_amount(&self.amount) {
            return None;
        }
        Some(PaymentRequest {
            to: self.to.clone(),
            from: self.from?,
            amount: self.amount.clone(),
            description: self.description.clone(),
        })
    }
}
