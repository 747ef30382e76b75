use crate::solver::{Exchange, ExchangeError, SolveRequest, SolveResponse};
use crate::solver::{TimeoutError, TransportError};
use derive_more::DebugCustom;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// An [`Exchange`] that posts JSON to a solver listening for HTTP requests.
///
/// Every exchange is a single `POST` to the endpoint, bounded by the timeout.
#[derive(DebugCustom, Clone)]
#[debug(fmt = "Http({}, {:?})", endpoint, timeout)]
pub struct Http {
    endpoint: Url,
    timeout: Duration,
    client: Client,
}

impl Http {
    /// Constructs [`Http`] for the solver at `endpoint`.
    #[instrument(level = "trace", err)]
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, TransportError> {
        Ok(Http {
            client: Client::builder().timeout(timeout).build()?,
            endpoint,
            timeout,
        })
    }

    /// Where requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The maximum time to wait for an answer.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn classify(&self, e: reqwest::Error) -> ExchangeError {
        if e.is_timeout() {
            TimeoutError::new(self.timeout).into()
        } else {
            TransportError::from(e).into()
        }
    }
}

impl Exchange for Http {
    #[instrument(level = "trace", skip(request), ret, err)]
    fn exchange(&self, request: &SolveRequest) -> Result<SolveResponse, ExchangeError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::from(status).into());
        }

        let body = response.bytes().map_err(|e| self.classify(e))?;
        debug!(body = %String::from_utf8_lossy(&body));

        Ok(serde_json::from_slice(&body).map_err(TransportError::from)?)
    }
}
