//! The boundary between the form and whatever processes the payment.
//!
//! Nothing here talks to a network. [`SimulatedGateway`] stands in for a
//! payments endpoint and answers with a random status after a fixed delay;
//! a real transport only has to implement [`PaymentSubmitter`].

use std::time::Duration;

use async_trait::async_trait;
use dioxus_logger::tracing::debug;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::compat;
use crate::draft::PaymentRequest;

/// How long the simulated endpoint takes to answer.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// What a payments endpoint answered.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub ok: bool,
    pub status: u16,
}

impl GatewayResponse {
    pub fn from_status(status: u16) -> Self {
        Self {
            ok: (200..300).contains(&status),
            status,
        }
    }
}

/// A submission that never produced a response.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GatewayError {
    /// The endpoint could not be reached.
    #[error("payment gateway unreachable: {0}")]
    Unreachable(String),
    /// The request was accepted but the answer never arrived.
    #[error("payment gateway dropped the request")]
    Dropped,
}

/// Anything that can take a payment request and report a status.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded wasm executor.
#[async_trait(?Send)]
pub trait PaymentSubmitter {
    async fn submit(&self, request: PaymentRequest) -> Result<GatewayResponse, GatewayError>;
}

/// Maps a uniform draw in `0..5` to the status the simulator returns.
///
/// 0 → 400, 1 → 401, 2 → 500, anything else → 200.
pub fn status_for_draw(draw: u8) -> u16 {
    match draw {
        0 => 400,
        1 => 401,
        2 => 500,
        _ => 200,
    }
}

/// Stand-in for a payments endpoint: waits, then answers at random.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait(?Send)]
impl PaymentSubmitter for SimulatedGateway {
    async fn submit(&self, request: PaymentRequest) -> Result<GatewayResponse, GatewayError> {
        compat::sleep(self.delay).await;
        let draw = rand::thread_rng().gen_range(0..5u8);
        let response = GatewayResponse::from_status(status_for_draw(draw));
        debug!(
            "simulated gateway: {} {} -> {:?}",
            request.amount, request.from, response
        );
        Ok(response)
    }
}

/// Always answers with the same status. Useful to force one outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedStatusGateway {
    status: u16,
    delay: Duration,
}

impl FixedStatusGateway {
    pub fn new(status: u16, delay: Duration) -> Self {
        Self { status, delay }
    }

    /// Answers immediately.
    pub fn instant(status: u16) -> Self {
        Self::new(status, Duration::ZERO)
    }
}

#[async_trait(?Send)]
impl PaymentSubmitter for FixedStatusGateway {
    async fn submit(&self, _request: PaymentRequest) -> Result<GatewayResponse, GatewayError> {
        if !self.delay.is_zero() {
            compat::sleep(self.delay).await;
        }
        Ok(GatewayResponse::from_status(self.status))
    }
}

/// Never reaches anything. Every submission fails after the delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct OfflineGateway {
    delay: Duration,
}

impl OfflineGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait(?Send)]
impl PaymentSubmitter for OfflineGateway {
    async fn submit(&self, _request: PaymentRequest) -> Result<GatewayResponse, GatewayError> {
        if !self.delay.is_zero() {
            compat::sleep(self.delay).await;
        }
        Err(GatewayError::Unreachable("connection refused".to_string()))
    }
}
