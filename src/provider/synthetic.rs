//! Synthetic Monitoring provider

use futures::future::{BoxFuture, FutureExt};
use log::debug;
use reqwest::Client;

use crate::config::providers as keys;
use crate::context::Context;

use super::http;
use super::status::{Provider, ProviderStatus};

/// Synthetic Monitoring API configured under `synthetic-monitoring.*`
pub struct SyntheticMonitoringProvider {
    url: String,
    token: Option<String>,
    client: Client,
}

impl SyntheticMonitoringProvider {
    pub const NAME: &'static str = "Synthetic Monitoring";

    pub fn from_context(context: &Context) -> Self {
        Self {
            url: context
                .get_str(keys::SM_URL)
                .unwrap_or_else(|| keys::SM_DEFAULT_URL.to_string()),
            token: context.get_str(keys::SM_TOKEN),
            client: http::client(),
        }
    }
}

impl Provider for SyntheticMonitoringProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn inactive_reason(&self) -> Option<String> {
        match self.token {
            Some(_) => None,
            None => Some(format!("{} is not set", keys::SM_TOKEN)),
        }
    }

    fn status(&self) -> BoxFuture<'_, ProviderStatus> {
        async move {
            let Some(token) = self.token.as_deref() else {
                return ProviderStatus::inactive(format!("{} is not set", keys::SM_TOKEN));
            };

            let request = self
                .client
                .get(http::endpoint(&self.url, "/api/v1/checks"))
                .bearer_auth(token);

            match http::probe(request).await {
                Ok(()) => ProviderStatus::online(),
                Err(e) => {
                    debug!("Synthetic Monitoring probe failed: {}", e);
                    ProviderStatus::offline(e.to_string())
                }
            }
        }
        .boxed()
    }
}
