//! Check command arguments

use std::time::Duration;

use clap::Parser;

use crate::config::defaults;

/// Arguments for 'check' command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Seconds to wait for each provider before reporting it offline
    #[arg(long, default_value_t = defaults::PROBE_TIMEOUT.as_secs())]
    pub timeout: u64,
}

impl CheckArgs {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
