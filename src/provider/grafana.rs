//! Grafana provider

use futures::future::{BoxFuture, FutureExt};
use log::debug;
use reqwest::Client;

use crate::config::providers as keys;
use crate::context::Context;

use super::http;
use super::status::{Provider, ProviderStatus};

/// Grafana instance configured under `grafana.*`
pub struct GrafanaProvider {
    url: Option<String>,
    user: Option<String>,
    token: Option<String>,
    client: Client,
}

impl GrafanaProvider {
    pub const NAME: &'static str = "Grafana";

    pub fn from_context(context: &Context) -> Self {
        Self {
            url: context.get_str(keys::GRAFANA_URL),
            user: context.get_str(keys::GRAFANA_USER),
            token: context.get_str(keys::GRAFANA_TOKEN),
            client: http::client(),
        }
    }
}

impl Provider for GrafanaProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn inactive_reason(&self) -> Option<String> {
        match self.url {
            Some(_) => None,
            None => Some(format!("{} is not set", keys::GRAFANA_URL)),
        }
    }

    fn status(&self) -> BoxFuture<'_, ProviderStatus> {
        async move {
            let Some(url) = self.url.as_deref() else {
                return ProviderStatus::inactive(format!("{} is not set", keys::GRAFANA_URL));
            };

            // With a token, list one folder so bad credentials show up as offline.
            // Without one there is nothing to authenticate, so only health is checked.
            let request = match (self.user.as_deref(), self.token.as_deref()) {
                (Some(user), Some(token)) => self
                    .client
                    .get(http::endpoint(url, "/api/folders?limit=1"))
                    .basic_auth(user, Some(token)),
                (None, Some(token)) => self
                    .client
                    .get(http::endpoint(url, "/api/folders?limit=1"))
                    .bearer_auth(token),
                _ => self.client.get(http::endpoint(url, "/api/health")),
            };

            match http::probe(request).await {
                Ok(()) => ProviderStatus::online(),
                Err(e) => {
                    debug!("Grafana probe failed: {}", e);
                    ProviderStatus::offline(e.to_string())
                }
            }
        }
        .boxed()
    }
}
