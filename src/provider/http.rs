//! Shared HTTP probing for providers

use log::debug;
use reqwest::{Client, RequestBuilder, StatusCode};
use thiserror::Error;

use crate::config::defaults;

/// Why a reachability probe failed. Captured into `ProviderStatus`, never propagated.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response: {0}")]
    Status(StatusCode),
}

/// HTTP client used by every provider probe
pub(crate) fn client() -> Client {
    Client::builder()
        .connect_timeout(defaults::CONNECT_TIMEOUT)
        .user_agent(concat!("grrctl/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Join a base URL and an absolute endpoint path
pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Send `request` and treat any 2xx as reachable
pub(crate) async fn probe(request: RequestBuilder) -> Result<(), ProbeError> {
    let response = request.send().await?;
    let status = response.status();
    debug!("Probe {} answered {}", response.url(), status);
    if status.is_success() {
        Ok(())
    } else {
        Err(ProbeError::Status(status))
    }
}
