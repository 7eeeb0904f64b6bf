//! Dispatch, error reporting and argument parsing shared by every command.

use std::{io, str::FromStr};

use chrono::NaiveDate;
use credit_config::{ConfigError, ConfigManager};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::api::{CreditApi, ExceptionDetails};
use crate::errors::CliError;

use super::commands;
use super::help;
use super::output;
use super::registry::CommandEntry;
pub use super::shell_context::{CliMode, ShellContext};
use super::shell_context::{effective_config, resolve_base_dir};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Api(#[from] ExceptionDetails),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let base_dir = resolve_base_dir();
        let config_manager = ConfigManager::with_base_dir(base_dir.clone())?;
        let config = config_manager.load()?;
        crate::init_with_filter(&config.log_filter);
        output::set_plain(mode == CliMode::Script);

        let api = CreditApi::from_config(&effective_config(&config, &base_dir))?;
        tracing::debug!(base_dir = %base_dir.display(), store = %config.store, "shell ready");

        Ok(Self {
            mode,
            registry: commands::registry(),
            api,
            config_manager,
            config,
            base_dir,
            running: true,
        })
    }

    pub(crate) fn api(&self) -> &CreditApi {
        &self.api
    }

    pub(crate) fn prompt(&self) -> String {
        "credit> ".to_string()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.find(name)
    }

    pub(crate) fn dispatch(&mut self, name: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.command(name).map(|entry| entry.handler) else {
            self.suggest_command(name);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        if let Some(best) = self.registry.closest(input) {
            output::hint(format!("Suggestion: `{}`?", best));
        }
    }

    /// Prints a command failure. Only output failures escape as [`CliError`].
    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(&message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Api(details) => {
                tracing::debug!(status = details.status, exception = %details.exception, "command rejected");
                output::json(&details).map_err(|err| CliError::Command(err.to_string()))
            }
            other => {
                output::error(&other);
                Ok(())
            }
        }
    }

    pub(crate) fn print_warning(&self, message: &str) {
        output::warning(message);
    }

    pub(crate) fn print_help(&self, name: Option<&str>) {
        match name {
            Some(raw) => match self.command(raw) {
                Some(entry) => help::print_command(entry),
                None => self.suggest_command(raw),
            },
            None => help::print_overview(&self.registry),
        }
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

}

/// Fails with a usage message unless exactly `count` arguments were given.
pub(crate) fn expect_args(args: &[&str], count: usize, usage: &str) -> CommandResult {
    if args.len() == count {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(format!("usage: {}", usage)))
    }
}

pub(crate) fn parse_id(input: &str) -> Result<u64, CommandError> {
    input
        .parse::<u64>()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid id `{}`", input)))
}

pub(crate) fn parse_decimal(input: &str) -> Result<Decimal, CommandError> {
    Decimal::from_str(input)
        .map_err(|_| CommandError::InvalidArguments(format!("invalid amount `{}`", input)))
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

pub(crate) fn parse_count(input: &str) -> Result<i64, CommandError> {
    input
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid count `{}`", input)))
}

pub(crate) fn parse_uuid(input: &str) -> Result<Uuid, CommandError> {
    Uuid::parse_str(input)
        .map_err(|_| CommandError::InvalidArguments(format!("invalid credit code `{}`", input)))
}

#[cfg(test)]
pub(crate) fn process_script(lines: &[&str]) -> Result<ShellContext, CliError> {
    let mut app = ShellContext::new(CliMode::Script)?;
    let input = lines.join("\n");
    super::shell::run_script(&mut app, input.as_bytes())?;
    Ok(app)
}
