use std::env;
use std::rc::Rc;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use super::PrefsError;
use crate::gateway::FixedStatusGateway;
use crate::gateway::OfflineGateway;
use crate::gateway::PaymentSubmitter;
use crate::gateway::SimulatedGateway;
use crate::gateway::DEFAULT_DELAY;

/// Names accepted by `PAYMENT_GATEWAY`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum GatewayMode {
    #[default]
    Simulated,
    Fixed,
    Offline,
}

/// Which payment submitter the form talks to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::EnumIs)]
pub enum GatewayPreference {
    /// Random status after `delay_ms`, like a flaky payments endpoint.
    Simulated { delay_ms: u64 },

    /// Always answers `status` after `delay_ms`.
    Fixed { status: u16, delay_ms: u64 },

    /// Always fails as if the endpoint could not be reached.
    Offline { delay_ms: u64 },
}

impl GatewayPreference {
    /// Creates a GatewayPreference from environment variables,
    /// falling back to the simulated gateway.
    ///
    /// # Environment Variables
    /// - `PAYMENT_GATEWAY`: "simulated", "fixed" or "offline" (case-insensitive).
    ///   defaults to simulated
    /// - `PAYMENT_GATEWAY_STATUS`: status answered in fixed mode. defaults to 200
    /// - `PAYMENT_GATEWAY_DELAY_MS`: answer delay. defaults to 1000
    pub fn from_env() -> Result<Self, PrefsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading values from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PrefsError> {
        let mode = match lookup("PAYMENT_GATEWAY") {
            Some(val) => GatewayMode::from_str(val.trim())
                .map_err(|_| PrefsError::InvalidGatewayMode(val))?,
            None => GatewayMode::default(),
        };

        let delay_ms = match lookup("PAYMENT_GATEWAY_DELAY_MS") {
            Some(val) => val
                .trim()
                .parse()
                .map_err(|_| PrefsError::InvalidDelay(val))?,
            None => DEFAULT_DELAY.as_millis() as u64,
        };

        Ok(match mode {
            GatewayMode::Simulated => Self::Simulated { delay_ms },
            GatewayMode::Offline => Self::Offline { delay_ms },
            GatewayMode::Fixed => {
                let status = match lookup("PAYMENT_GATEWAY_STATUS") {
                    Some(val) => parse_status(&val)?,
                    None => 200,
                };
                Self::Fixed { status, delay_ms }
            }
        })
    }

    pub fn delay(&self) -> Duration {
        let delay_ms = match self {
            Self::Simulated { delay_ms }
            | Self::Fixed { delay_ms, .. }
            | Self::Offline { delay_ms } => *delay_ms,
        };
        Duration::from_millis(delay_ms)
    }

    /// Builds the submitter this preference describes.
    pub fn submitter(&self) -> Rc<dyn PaymentSubmitter> {
        match *self {
            Self::Simulated { .. } => Rc::new(SimulatedGateway::new(self.delay())),
            Self::Fixed { status, .. } => Rc::new(FixedStatusGateway::new(status, self.delay())),
            Self::Offline { .. } => Rc::new(OfflineGateway::new(self.delay())),
        }
    }
}

impl Default for GatewayPreference {
    fn default() -> Self {
        Self::Simulated {
            delay_ms: DEFAULT_DELAY.as_millis() as u64,
        }
    }
}

fn parse_status(val: &str) -> Result<u16, PrefsError> {
    match val.trim().parse::<u16>() {
        Ok(status) if (100..=999).contains(&status) => Ok(status),
        _ => Err(PrefsError::InvalidStatus(val.to_string())),
    }
}
