use crate::solver::{SolveRequest, SolveResponse};
use derive_more::{Display, Error, From};
use reqwest::StatusCode;
use std::time::Duration;

/// The reason why the solver could not be reached or understood.
#[derive(Debug, Display, Error, From)]
pub enum TransportError {
    #[display(fmt = "failed to exchange messages with the solver")]
    Http(reqwest::Error),

    #[display(fmt = "the solver replied with status `{}`", _0)]
    Status(#[error(not(source))] StatusCode),

    #[display(fmt = "the solver replied with a malformed body")]
    Malformed(serde_json::Error),
}

/// The reason why the solver's answer never arrived.
///
/// The request may still have been processed remotely, its outcome is unknown.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
#[display(fmt = "the solver did not reply within {:?}", after)]
pub struct TimeoutError {
    #[error(not(source))]
    after: Duration,
}

impl TimeoutError {
    /// Constructs [`TimeoutError`] for an exchange abandoned after the given duration.
    pub fn new(after: Duration) -> Self {
        TimeoutError { after }
    }

    /// How long the exchange was waited on.
    pub fn after(&self) -> Duration {
        self.after
    }
}

/// The reason why an [`Exchange`] failed.
#[derive(Debug, Display, Error, From)]
pub enum ExchangeError {
    Transport(TransportError),
    Timeout(TimeoutError),
}

/// Trait for types that perform a single request/response round trip with a solver.
#[cfg_attr(test, mockall::automock)]
pub trait Exchange {
    /// Sends the request and blocks until the solver answers, the timeout elapses, or the
    /// connection fails.
    ///
    /// No retries are attempted.
    fn exchange(&self, request: &SolveRequest) -> Result<SolveResponse, ExchangeError>;
}
