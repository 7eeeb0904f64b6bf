use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{Config, ConfigError};

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
/// Extension of the staging file renamed over the settings on save.
const STAGING_EXTENSION: &str = "json.tmp";

/// Reads and writes the settings file of one installation.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Settings live at `<base>/config/config.json`. The directory is created here.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let dir = base.join(CONFIG_DIR);
        fs::create_dir_all(&dir).map_err(|source| ConfigError::access(&dir, source))?;
        Ok(Self::new(dir.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.path
    }

    /// A missing file yields [`Config::default`]; a corrupt one is an error.
    pub fn load(&self) -> Result<Config, ConfigError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                serde_json::from_str(&text).map_err(|source| ConfigError::malformed(&self.path, source))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(source) => Err(ConfigError::access(&self.path, source)),
        }
    }

    /// Replaces the file in one rename so readers never see a partial write.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_vec_pretty(config)
            .map_err(|source| ConfigError::malformed(&self.path, source))?;
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|source| ConfigError::access(dir, source))?;
        }

        let staging = self.path.with_extension(STAGING_EXTENSION);
        fs::write(&staging, json).map_err(|source| ConfigError::access(&staging, source))?;
        fs::rename(&staging, &self.path).map_err(|source| ConfigError::access(&self.path, source))
    }
}
