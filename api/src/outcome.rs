//! Maps what the payment gateway answered to what the user is told.

use serde::Deserialize;
use serde::Serialize;

use crate::gateway::GatewayError;
use crate::gateway::GatewayResponse;

/// Category of a finished submission.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::EnumIs)]
pub enum OutcomeKind {
    Success,
    BadRequest,
    /// Also sends the user back to the application root.
    Unauthorized,
    ServerError,
    NetworkError,
    /// A status outside the families the form knows how to explain.
    Unknown(u16),
}

/// The result shown in the result dialog.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    kind: OutcomeKind,
    message: String,
}

impl SubmissionOutcome {
    pub fn kind(&self) -> OutcomeKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_success(&self) -> bool {
        self.kind.is_success()
    }

    /// Classifies an HTTP-style status code.
    pub fn from_status(status: u16) -> Self {
        let kind = match status {
            200 => OutcomeKind::Success,
            400 => OutcomeKind::BadRequest,
            401 => OutcomeKind::Unauthorized,
            s if s >= 500 => OutcomeKind::ServerError,
            s => OutcomeKind::Unknown(s),
        };
        kind.into()
    }

    /// The outcome for a call that never produced a response.
    pub fn network_error() -> Self {
        OutcomeKind::NetworkError.into()
    }

    /// Classifies whatever a submitter returned.
    pub fn from_result(result: &Result<GatewayResponse, GatewayError>) -> Self {
        match result {
            Ok(response) => Self::from_status(response.status),
            Err(_) => Self::network_error(),
        }
    }
}

impl From<OutcomeKind> for SubmissionOutcome {
    fn from(kind: OutcomeKind) -> Self {
        let message = match kind {
            OutcomeKind::Success => "Your payment has been processed successfully.".to_string(),
            OutcomeKind::BadRequest => "Bad Request: Invalid payment details.".to_string(),
            OutcomeKind::Unauthorized => "Unauthorized access".to_string(),
            OutcomeKind::ServerError => "Server Error: Please try again later.".to_string(),
            OutcomeKind::NetworkError => {
                "Network error: Unable to connect to the server.".to_string()
            }
            OutcomeKind::Unknown(status) => {
                format!("Unexpected response from the server (status {status}).")
            }
        };
        Self { kind, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_map_to_their_messages() {
        let ok = SubmissionOutcome::from_status(200);
        assert_eq!(ok.kind(), OutcomeKind::Success);
        assert_eq!(ok.message(), "Your payment has been processed successfully.");

        let bad = SubmissionOutcome::from_status(400);
        assert_eq!(bad.kind(), OutcomeKind::BadRequest);
        assert_eq!(bad.message(), "Bad Request: Invalid payment details.");

        let unauthorized = SubmissionOutcome::from_status(401);
        assert_eq!(unauthorized.kind(), OutcomeKind::Unauthorized);
        assert_eq!(unauthorized.message(), "Unauthorized access");
    }

    #[test]
    fn every_5xx_is_a_server_error() {
        for status in [500, 502, 503, 599, 600] {
            let outcome = SubmissionOutcome::from_status(status);
            assert_eq!(outcome.kind(), OutcomeKind::ServerError, "status {status}");
            assert_eq!(outcome.message(), "Server Error: Please try again later.");
        }
    }

    #[test]
    fn unmapped_statuses_are_explicitly_unknown() {
        for status in [201, 302, 403, 404, 499] {
            let outcome = SubmissionOutcome::from_status(status);
            assert_eq!(outcome.kind(), OutcomeKind::Unknown(status));
            assert!(outcome.message().contains(&status.to_string()));
            assert!(!outcome.is_success());
        }
    }

    #[test]
    fn failed_calls_are_network_errors() {
        let outcome =
            SubmissionOutcome::from_result(&Err(GatewayError::Unreachable("refused".into())));
        assert_eq!(outcome.kind(), OutcomeKind::NetworkError);
        assert_eq!(
            outcome.message(),
            "Network error: Unable to connect to the server."
        );
    }

    #[test]
    fn responses_are_classified_by_status_only() {
        let response = GatewayResponse { ok: true, status: 500 };
        assert_eq!(
            SubmissionOutcome::from_result(&Ok(response)).kind(),
            OutcomeKind::ServerError
        );
    }
}
