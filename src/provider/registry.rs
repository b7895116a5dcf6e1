//! Ordered provider registry and the status pass

use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::future::{join_all, FutureExt};
use log::debug;

use crate::config::defaults;
use crate::context::Context;

use super::grafana::GrafanaProvider;
use super::mimir::MimirProvider;
use super::status::{Provider, ProviderStatus};
use super::synthetic::SyntheticMonitoringProvider;

/// Status of one provider, tagged with its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReport {
    pub name: String,
    pub status: ProviderStatus,
}

/// Providers for a single command invocation, in registration order
pub struct Registry {
    providers: Vec<Box<dyn Provider>>,
    timeout: Duration,
}

impl Registry {
    pub fn new(providers: Vec<Box<dyn Provider>>) -> Self {
        Self {
            providers,
            timeout: defaults::PROBE_TIMEOUT,
        }
    }

    /// Every built-in provider, configured from `context`
    pub fn from_context(context: &Context) -> Self {
        let providers: Vec<Box<dyn Provider>> = vec![
            Box::new(GrafanaProvider::from_context(context)),
            Box::new(MimirProvider::from_context(context)),
            Box::new(SyntheticMonitoringProvider::from_context(context)),
        ];
        Self::new(providers)
    }

    /// Per-provider upper bound on `status()`, applied to every provider
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn providers(&self) -> &[Box<dyn Provider>] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Poll every provider concurrently.
    ///
    /// Reports come back in registration order. A provider that times out or
    /// panics is reported offline without affecting the others.
    pub async fn check(&self) -> Vec<ProviderReport> {
        join_all(
            self.providers
                .iter()
                .map(|provider| self.poll(provider.as_ref())),
        )
        .await
    }

    async fn poll(&self, provider: &dyn Provider) -> ProviderReport {
        let name = provider.name().to_string();
        if let Some(reason) = provider.inactive_reason() {
            debug!("Provider '{}' inactive: {}", name, reason);
            return ProviderReport {
                name,
                status: ProviderStatus::inactive(reason),
            };
        }

        let probe = AssertUnwindSafe(provider.status()).catch_unwind();

        let status = match tokio::time::timeout(self.timeout, probe).await {
            Ok(Ok(status)) => status.normalized(),
            Ok(Err(_)) => {
                debug!("Status check for '{}' panicked", name);
                ProviderStatus::offline("status check failed unexpectedly")
            }
            Err(_) => {
                debug!("Status check for '{}' timed out", name);
                ProviderStatus::offline(format!(
                    "timed out after {}s",
                    self.timeout.as_secs_f64()
                ))
            }
        };

        debug!(
            "Provider '{}': active={} online={}",
            name, status.active, status.online
        );
        ProviderReport { name, status }
    }
}
