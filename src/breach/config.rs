//! Breach lookup configuration.

use std::time::Duration;

/// Pwned Passwords range endpoint; the 5-character prefix is appended.
pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com/range/";

/// Host used for the reachability probe before any range request.
pub const DEFAULT_PROBE_ADDR: &str = "api.pwnedpasswords.com:443";

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachConfig {
    pub api_url: String,
    pub probe_addr: String,
    pub probe_timeout: Duration,
    pub request_timeout: Duration,
    /// Ask the service to pad responses with zero-count decoy entries.
    pub add_padding: bool,
    pub user_agent: String,
}

impl Default for BreachConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            probe_addr: DEFAULT_PROBE_ADDR.to_string(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            add_padding: true,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl BreachConfig {
    /// Applies the same timeout to the probe and the range request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self.request_timeout = timeout;
        self
    }
}
