//! Check command handler

use std::fmt::Write as _;
use std::path::Path;

use log::info;

use crate::cli::CheckArgs;
use crate::context::ContextStore;
use crate::ui::{create_spinner, finish_spinner_and_clear};

use super::registry::{ProviderReport, Registry};

/// Print the settings file, the current context and every provider's status
pub async fn run_check_command(
    store: &ContextStore,
    args: &CheckArgs,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let context = store.current_context()?;
    let registry = Registry::from_context(&context).with_timeout(args.timeout());

    let spinner = create_spinner(
        &format!("Checking {} provider(s)...", registry.len()),
        quiet,
    );
    let reports = registry.check().await;
    finish_spinner_and_clear(spinner);

    info!(
        "{} of {} provider(s) online",
        reports.iter().filter(|r| r.status.online).count(),
        reports.len()
    );

    print!(
        "{}",
        render_check(store.file().path(), &context.name, &reports)
    );
    Ok(())
}

/// Render check output; providers appear in registration order
pub fn render_check(path: &Path, context: &str, reports: &[ProviderReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Configuration file: {}", path.display());
    let _ = writeln!(out, "Current context: {}", context);

    for report in reports {
        let status = &report.status;
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", report.name);
        let _ = writeln!(out, "{}", "=".repeat(report.name.chars().count()));

        if status.active {
            let _ = writeln!(out, "Active: true");
        } else {
            let _ = writeln!(out, "Active: false - {}", status.active_reason);
        }

        match (status.active, status.online) {
            (true, true) => {
                let _ = writeln!(out, "Online: true");
            }
            (true, false) => {
                let _ = writeln!(out, "Online: false - {}", status.online_reason);
            }
            (false, _) => {
                let _ = writeln!(out, "Online: false");
            }
        }
    }
    out
}
