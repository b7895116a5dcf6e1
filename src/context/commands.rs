//! Config command handlers

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use crate::cli::ConfigAction;

use super::store::ContextStore;

/// Dispatch config subcommands
pub fn run_config_command(
    action: &ConfigAction,
    store: &ContextStore,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Path => {
            println!("{}", store.file().path().display());
            Ok(())
        }
        ConfigAction::Import => run_import(store),
        ConfigAction::CurrentContext => {
            println!("{}", store.current_context()?.name);
            Ok(())
        }
        ConfigAction::UseContext(args) => {
            store.use_context(&args.name)?;
            println!("✓ Switched to context '{}'", args.name);
            Ok(())
        }
        ConfigAction::GetContexts => run_get_contexts(store),
        ConfigAction::Get(args) => {
            let value = store.get(args.path.as_deref().unwrap_or_default(), &args.output)?;
            if value.ends_with('\n') {
                print!("{}", value);
            } else {
                println!("{}", value);
            }
            Ok(())
        }
        ConfigAction::Set(args) => Ok(store.set(&args.key, &args.value)?),
        ConfigAction::Unset(args) => Ok(store.unset(&args.key)?),
        ConfigAction::CreateContext(args) => {
            store.create_context(&args.name)?;
            println!("✓ Created context '{}'", args.name);
            Ok(())
        }
    }
}

fn run_import(store: &ContextStore) -> Result<(), Box<dyn std::error::Error>> {
    let summary = store.import()?;
    let verb = if summary.created { "Created" } else { "Updated" };
    println!(
        "✓ {} context '{}' from environment: {}",
        verb,
        summary.context,
        summary.keys.join(", ")
    );
    Ok(())
}

/// List all contexts, marking the current one
fn run_get_contexts(store: &ContextStore) -> Result<(), Box<dyn std::error::Error>> {
    let names = store.get_contexts()?;

    if names.is_empty() {
        println!("No contexts configured.");
        println!("\nUse 'grrctl config create-context <name>' or 'grrctl config import' to create one.");
        return Ok(());
    }

    let current = store.current_context()?.name;
    println!("{}", contexts_table(&names, &current));
    Ok(())
}

fn contexts_table(names: &[String], current: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("CURRENT"), Cell::new("NAME")]);

    for name in names {
        let marker = if name == current { "*" } else { "" };
        table.add_row(vec![Cell::new(marker), Cell::new(name)]);
    }
    table
}
