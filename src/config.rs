use std::time::Duration;

/// Configuration file location
pub mod file {
    /// Directory under the platform config dir (e.g. ~/.config/grrctl)
    pub const DIR_NAME: &str = "grrctl";

    /// Settings file name
    pub const FILE_NAME: &str = "settings.yaml";

    /// Environment variable that overrides the settings file path
    pub const ENV_VAR: &str = "GRRCTL_CONFIG";
}

/// Environment variables recognized by `config import`
pub mod env {
    /// (environment variable, settings key) pairs, applied in order
    pub const IMPORT_VARS: &[(&str, &str)] = &[
        ("GRAFANA_URL", "grafana.url"),
        ("GRAFANA_USER", "grafana.user"),
        ("GRAFANA_TOKEN", "grafana.token"),
        ("MIMIR_ADDRESS", "mimir.address"),
        ("MIMIR_TENANT_ID", "mimir.tenant-id"),
        ("MIMIR_API_KEY", "mimir.api-key"),
        ("GRAFANA_SM_TOKEN", "synthetic-monitoring.token"),
        ("GRAFANA_SM_STACK_ID", "synthetic-monitoring.stack-id"),
        ("GRAFANA_SM_LOGS_ID", "synthetic-monitoring.logs-id"),
        ("GRAFANA_SM_METRICS_ID", "synthetic-monitoring.metrics-id"),
        ("GRAFANA_SM_URL", "synthetic-monitoring.url"),
    ];
}

/// Settings keys read by the providers
pub mod providers {
    pub const GRAFANA_URL: &str = "grafana.url";
    pub const GRAFANA_USER: &str = "grafana.user";
    pub const GRAFANA_TOKEN: &str = "grafana.token";

    pub const MIMIR_ADDRESS: &str = "mimir.address";
    pub const MIMIR_TENANT_ID: &str = "mimir.tenant-id";
    pub const MIMIR_API_KEY: &str = "mimir.api-key";

    pub const SM_TOKEN: &str = "synthetic-monitoring.token";
    pub const SM_URL: &str = "synthetic-monitoring.url";

    /// Synthetic Monitoring API used when `synthetic-monitoring.url` is not set
    pub const SM_DEFAULT_URL: &str = "https://synthetic-monitoring-api.grafana.net";
}

/// Default values for CLI
pub mod defaults {
    use super::Duration;

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default output format for `config get`
    pub const OUTPUT_FORMAT: &str = "yaml";

    /// Context created by `config import` when none exists yet
    pub const CONTEXT_NAME: &str = "default";

    /// Upper bound for a single provider status probe
    pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

    /// HTTP connect timeout used by probes
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
}
