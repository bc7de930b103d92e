//! Connectivity probe run before the range request.

use std::future::Future;
use std::time::Duration;

use tokio::net::TcpStream;

use super::BreachError;

/// Liveness check; carries no password data.
pub trait ConnectivityProbe {
    fn probe(&self) -> impl Future<Output = Result<(), BreachError>> + Send;
}

/// Opens and drops a TCP connection to `addr` within `timeout`.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    addr: String,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(addr: impl Into<String>, timeout: Duration) -> Self {
        Self {
            addr: addr.into(),
            timeout,
        }
    }
}

impl ConnectivityProbe for TcpProbe {
    async fn probe(&self) -> Result<(), BreachError> {
        match tokio::time::timeout(self.timeout, TcpStream::connect(self.addr.as_str())).await {
            Ok(Ok(_stream)) => Ok(()),
            Ok(Err(e)) => Err(BreachError::NetworkUnavailable(format!("{}: {}", self.addr, e))),
            Err(_) => Err(BreachError::NetworkUnavailable(format!(
                "{}: no answer within {:?}",
                self.addr, self.timeout
            ))),
        }
    }
}
