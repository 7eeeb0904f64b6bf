use std::{env, path::PathBuf};

use credit_config::{Config, ConfigManager};

use crate::api::CreditApi;

use super::registry::CommandRegistry;

/// Overrides the directory holding `config/` and `data/`.
pub const HOME_ENV: &str = "CREDIT_APP_HOME";
/// Any value switches the shell to line-by-line stdin mode.
pub const SCRIPT_ENV: &str = "CREDIT_APP_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub api: CreditApi,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub base_dir: PathBuf,
    pub running: bool,
}

/// Base directory for config and records: `$CREDIT_APP_HOME`, else the
/// platform data directory.
pub fn resolve_base_dir() -> PathBuf {
    if let Some(home) = env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("credit-app")
}

/// Config as the shell uses it: records default to `<base>/data`.
pub fn effective_config(config: &Config, base_dir: &std::path::Path) -> Config {
    let mut effective = config.clone();
    if effective.data_dir.is_none() {
        effective.data_dir = Some(base_dir.join("data"));
    }
    effective
}
