use std::path::PathBuf;

use credit_config::StoreKind;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const SET_USAGE: &str = "usage: config set <store|data_dir|log_filter|mask_ownership_errors> <value>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change persisted settings",
        "config [show|set <key> <value>|path]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        output::json(&context.config)?;
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(SET_USAGE.into()));
            }
            let value = args[2..].join(" ");
            set_config_value(context, args[1], value.trim())
        }
        "path" => {
            output::info(context.config_manager.config_path().display());
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config subcommand `{}`",
            other
        ))),
    }
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    match key.to_lowercase().as_str() {
        "store" => match value.to_lowercase().as_str() {
            "memory" | "json" => context.config.store = StoreKind::from_str(value),
            _ => {
                return Err(CommandError::InvalidArguments(
                    "store must be `memory` or `json`".into(),
                ))
            }
        },
        "data_dir" => {
            context.config.data_dir = if value.is_empty() || value.eq_ignore_ascii_case("default")
            {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        "log_filter" => context.config.log_filter = value.to_string(),
        "mask_ownership_errors" => {
            context.config.mask_ownership_errors = value.parse::<bool>().map_err(|_| {
                CommandError::InvalidArguments("mask_ownership_errors must be true or false".into())
            })?;
        }
        _ => return Err(CommandError::InvalidArguments(SET_USAGE.into())),
    }

    context.persist_config()?;
    output::success(format!("Saved `{}`. Restart the shell to apply it.", key));
    Ok(())
}
