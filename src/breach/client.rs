//! Range query transport.

use std::future::Future;

use super::config::BreachConfig;
use super::BreachError;

/// Fetches the range body for a 5-character hash prefix.
///
/// Implementations receive only the prefix and must never see the password,
/// the full digest or the suffix.
pub trait RangeClient {
    fn fetch_range(&self, prefix: &str) -> impl Future<Output = Result<String, BreachError>> + Send;
}

/// HTTPS client for the Pwned Passwords range API.
#[derive(Debug, Clone)]
pub struct HttpRangeClient {
    http: reqwest::Client,
    api_url: String,
    add_padding: bool,
}

impl HttpRangeClient {
    pub fn new(config: &BreachConfig) -> Result<Self, BreachError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| BreachError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            add_padding: config.add_padding,
        })
    }

    pub fn range_url(&self, prefix: &str) -> String {
        format!("{}{}", self.api_url, prefix)
    }
}

impl RangeClient for HttpRangeClient {
    async fn fetch_range(&self, prefix: &str) -> Result<String, BreachError> {
        let mut request = self.http.get(self.range_url(prefix));
        if self.add_padding {
            request = request.header("Add-Padding", "true");
        }

        let response = request.send().await.map_err(BreachError::from_reqwest)?;

        if !response.status().is_success() {
            return Err(BreachError::RemoteService {
                status: response.status().as_u16(),
            });
        }

        response.text().await.map_err(BreachError::from_reqwest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serves one canned HTTP response and hands back the raw request head.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "{}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            let _ = tx.send(String::from_utf8_lossy(&request).into_owned());
        });

        (format!("http://{}/range/", addr), rx)
    }

    fn client_for(api_url: String) -> HttpRangeClient {
        let config = BreachConfig {
            api_url,
            ..BreachConfig::default()
        };
        HttpRangeClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_range_sends_only_prefix() {
        let (url, rx) = serve_once("HTTP/1.1 200 OK", "ABCDEF:3\r\n").await;
        let client = client_for(url);

        let body = client.fetch_range("5BAA6").await.unwrap();
        assert_eq!(body, "ABCDEF:3\r\n");

        let request = rx.await.unwrap();
        let request_line = request.lines().next().unwrap();
        assert_eq!(request_line, "GET /range/5BAA6 HTTP/1.1");
        assert!(request.to_lowercase().contains("add-padding: true"));
    }

    #[tokio::test]
    async fn test_fetch_range_non_success_status() {
        let (url, _rx) = serve_once("HTTP/1.1 503 Service Unavailable", "").await;
        let client = client_for(url);

        let result = client.fetch_range("5BAA6").await;
        assert!(matches!(result, Err(BreachError::RemoteService { status: 503 })));
    }

    #[test]
    fn test_range_url() {
        let client = HttpRangeClient::new(&BreachConfig::default()).unwrap();
        assert_eq!(
            client.range_url("21BD1"),
            "https://api.pwnedpasswords.com/range/21BD1"
        );
    }
}
