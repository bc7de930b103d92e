//! k-anonymity breach lookup
//!
//! Only the first five hex characters of the password's SHA-1 digest leave the
//! process. The service answers with every known suffix sharing that prefix and
//! the match happens locally.
//!
//! Every network condition is absorbed into the returned [`BreachResult`]; a
//! failed lookup reports `breached: false` with a descriptive `detail`.

mod client;
mod config;
mod hash;
mod probe;
mod range;

pub use client::{HttpRangeClient, RangeClient};
pub use config::{
    BreachConfig, DEFAULT_API_URL, DEFAULT_PROBE_ADDR, DEFAULT_PROBE_TIMEOUT,
    DEFAULT_REQUEST_TIMEOUT,
};
pub use hash::{HashParts, PREFIX_LEN, hash_parts};
pub use probe::{ConnectivityProbe, TcpProbe};
pub use range::find_suffix;

use secrecy::SecretString;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::types::BreachResult;

pub const NOT_FOUND_MESSAGE: &str = "password not found in breach databases";
pub const CANCELLED_MESSAGE: &str = "breach check cancelled";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BreachError {
    #[error("No internet connection ({0}). Please check your connection and try again.")]
    NetworkUnavailable(String),
    #[error("Error checking password breach status: service returned HTTP {status}")]
    RemoteService { status: u16 },
    #[error("Error checking password breach status: request timed out")]
    Timeout,
    #[error("Error checking password breach status: {0}")]
    Transport(String),
}

impl BreachError {
    pub(crate) fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            BreachError::Timeout
        } else if let Some(status) = e.status() {
            BreachError::RemoteService { status: status.as_u16() }
        } else {
            BreachError::Transport(e.to_string())
        }
    }
}

/// Runs the probe, the range request and the local suffix match.
#[derive(Debug, Clone)]
pub struct BreachChecker<C = HttpRangeClient, P = TcpProbe> {
    client: C,
    probe: P,
}

impl BreachChecker {
    pub fn new(config: &BreachConfig) -> Result<Self, BreachError> {
        Ok(Self {
            client: HttpRangeClient::new(config)?,
            probe: TcpProbe::new(config.probe_addr.clone(), config.probe_timeout),
        })
    }
}

impl<C, P> BreachChecker<C, P>
where
    C: RangeClient + Sync,
    P: ConnectivityProbe + Sync,
{
    pub fn with_parts(client: C, probe: P) -> Self {
        Self { client, probe }
    }

    /// Checks `password` against the breach database. Never fails.
    pub async fn check(&self, password: &SecretString) -> BreachResult {
        match self.lookup(password).await {
            Ok(Some(count)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("password hash found in breach data");
                BreachResult::found(count)
            }
            Ok(None) => BreachResult::not_breached(NOT_FOUND_MESSAGE),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("breach check failed: {}", e);
                BreachResult::not_breached(e.to_string())
            }
        }
    }

    /// Runs [`check`](Self::check) unless `token` is cancelled first, and sends
    /// the result through `tx`.
    pub async fn check_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<BreachResult>,
    ) {
        let result = tokio::select! {
            _ = token.cancelled() => BreachResult::not_breached(CANCELLED_MESSAGE),
            result = self.check(password) => result,
        };

        if let Err(e) = tx.send(result).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send breach check result: {}", e);
            #[cfg(not(feature = "tracing"))]
            let _ = e;
        }
    }

    async fn lookup(&self, password: &SecretString) -> Result<Option<String>, BreachError> {
        self.probe.probe().await?;

        let parts = hash_parts(password);
        #[cfg(feature = "tracing")]
        tracing::debug!("querying range for prefix {}", parts.prefix);

        let body = self.client.fetch_range(&parts.prefix).await?;
        Ok(find_suffix(&body, &parts.suffix))
    }
}

/// Checks `password` with the default configuration.
pub async fn check_breach(password: &SecretString) -> BreachResult {
    check_breach_with(password, &BreachConfig::default()).await
}

pub async fn check_breach_with(password: &SecretString, config: &BreachConfig) -> BreachResult {
    match BreachChecker::new(config) {
        Ok(checker) => checker.check(password).await,
        Err(e) => BreachResult::not_breached(e.to_string()),
    }
}
