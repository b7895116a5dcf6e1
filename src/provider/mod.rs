//! Provider registry and status protocol
//!
//! Each provider reports whether it is configured in the current context
//! (active) and whether its backend answers (online).

mod commands;
mod grafana;
mod http;
mod mimir;
mod registry;
mod status;
mod synthetic;

pub use commands::{render_check, run_check_command};
pub use grafana::GrafanaProvider;
pub use http::ProbeError;
pub use mimir::MimirProvider;
pub use registry::{ProviderReport, Registry};
pub use status::{Provider, ProviderStatus};
pub use synthetic::SyntheticMonitoringProvider;
