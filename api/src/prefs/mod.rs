//! Startup settings for the payment form.

pub mod form_prefs;
pub mod gateway_preference;

use thiserror::Error;

/// A setting that could not be understood.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefsError {
    #[error("unknown payment gateway {0:?}, expected simulated, fixed or offline")]
    InvalidGatewayMode(String),
    #[error("invalid gateway status {0:?}")]
    InvalidStatus(String),
    #[error("invalid gateway delay {0:?}, expected milliseconds")]
    InvalidDelay(String),
    #[error("redirect target {0:?} must be an absolute path")]
    InvalidRedirect(String),
}
