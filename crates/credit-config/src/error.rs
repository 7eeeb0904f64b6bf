use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Failures reading or writing the settings file. Both carry the file involved.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access settings at {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("settings at {} are not valid JSON: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub(crate) fn access(path: &Path, source: io::Error) -> Self {
        ConfigError::Access {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn malformed(path: &Path, source: serde_json::Error) -> Self {
        ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Access { path, .. } | ConfigError::Malformed { path, .. } => path,
        }
    }
}
