//! Mimir provider

use futures::future::{BoxFuture, FutureExt};
use log::debug;
use reqwest::Client;

use crate::config::providers as keys;
use crate::context::Context;

use super::http;
use super::status::{Provider, ProviderStatus};

/// Tenant header understood by Mimir
const TENANT_HEADER: &str = "X-Scope-OrgID";

/// Mimir instance configured under `mimir.*`
pub struct MimirProvider {
    address: Option<String>,
    tenant_id: Option<String>,
    api_key: Option<String>,
    client: Client,
}

impl MimirProvider {
    pub const NAME: &'static str = "Mimir";

    pub fn from_context(context: &Context) -> Self {
        Self {
            address: context.get_str(keys::MIMIR_ADDRESS),
            tenant_id: context.get_str(keys::MIMIR_TENANT_ID),
            api_key: context.get_str(keys::MIMIR_API_KEY),
            client: http::client(),
        }
    }
}

impl Provider for MimirProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn inactive_reason(&self) -> Option<String> {
        match self.address {
            Some(_) => None,
            None => Some(format!("{} is not set", keys::MIMIR_ADDRESS)),
        }
    }

    fn status(&self) -> BoxFuture<'_, ProviderStatus> {
        async move {
            let Some(address) = self.address.as_deref() else {
                return ProviderStatus::inactive(format!("{} is not set", keys::MIMIR_ADDRESS));
            };

            let mut request = self.client.get(http::endpoint(address, "/ready"));
            if let Some(tenant) = self.tenant_id.as_deref() {
                request = request.header(TENANT_HEADER, tenant);
                if let Some(key) = self.api_key.as_deref() {
                    request = request.basic_auth(tenant, Some(key));
                }
            }

            match http::probe(request).await {
                Ok(()) => ProviderStatus::online(),
                Err(e) => {
                    debug!("Mimir probe failed: {}", e);
                    ProviderStatus::offline(e.to_string())
                }
            }
        }
        .boxed()
    }
}
