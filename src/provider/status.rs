//! Provider status protocol

use futures::future::BoxFuture;
use serde::Serialize;

/// Health of a provider in the current context
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProviderStatus {
    /// Provider is configured in the current context
    pub active: bool,
    pub active_reason: String,
    /// Provider backend answered the probe. Only meaningful when active.
    pub online: bool,
    pub online_reason: String,
}

impl ProviderStatus {
    /// Not configured; no probe was made
    pub fn inactive(reason: impl Into<String>) -> Self {
        Self {
            active: false,
            active_reason: reason.into(),
            online: false,
            online_reason: String::new(),
        }
    }

    /// Configured and reachable
    pub fn online() -> Self {
        Self {
            active: true,
            online: true,
            ..Default::default()
        }
    }

    /// Configured but the probe failed
    pub fn offline(reason: impl Into<String>) -> Self {
        Self {
            active: true,
            online: false,
            online_reason: reason.into(),
            ..Default::default()
        }
    }

    /// A provider cannot be online without being active
    pub(crate) fn normalized(mut self) -> Self {
        if !self.active {
            self.online = false;
        }
        self
    }
}

/// A backend whose configuration and reachability can be checked.
///
/// `status` may perform network I/O. Failures must be reported through
/// `ProviderStatus::offline` rather than panicking. The registry polls all
/// providers on one task, so `status` must stay async all the way down:
/// blocking the thread inside it stalls every other provider and keeps the
/// timeout from firing. Wrap blocking work in `tokio::task::spawn_blocking`.
pub trait Provider: Send + Sync {
    /// Display name, unique within a registry
    fn name(&self) -> &str;

    /// Why the provider is not configured, or `None` when it is.
    ///
    /// Must not perform I/O. The registry skips the probe for inactive
    /// providers.
    fn inactive_reason(&self) -> Option<String> {
        None
    }

    /// Compute the current status
    fn status(&self) -> BoxFuture<'_, ProviderStatus>;
}
