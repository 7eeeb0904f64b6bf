use serde::{de::Deserializer, Deserialize, Serialize};
use std::{fmt, path::PathBuf};

/// Log targets of the backend crates, all at `info`.
pub const DEFAULT_LOG_FILTER: &str = "credit_app=info,credit_core=info,credit_storage_json=info";

/// Application settings shared by the API facade and the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for record files. Defaults to `<data dir>/credit-app`.
    pub data_dir: Option<PathBuf>,

    #[serde(default = "Config::default_log_filter")]
    pub log_filter: String,

    /// Render "not your credit" exactly like "no such credit" at the boundary.
    #[serde(default = "Config::default_mask_ownership_errors")]
    pub mask_ownership_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreKind::default(),
            data_dir: None,
            log_filter: Self::default_log_filter(),
            mask_ownership_errors: Self::default_mask_ownership_errors(),
        }
    }
}

impl Config {
    pub fn default_log_filter() -> String {
        DEFAULT_LOG_FILTER.into()
    }

    pub fn default_mask_ownership_errors() -> bool {
        true
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("credit-app")
    }
}

/// Record store backing the services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Memory,
    Json,
}

impl StoreKind {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| StoreKind::from_str(v.trim()))
            .unwrap_or_default()
    }

    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => StoreKind::Memory,
            _ => StoreKind::Json,
        }
    }
}

impl Default for StoreKind {
    fn default() -> Self {
        StoreKind::Json
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StoreKind::Memory => "memory",
            StoreKind::Json => "json",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for StoreKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(StoreKind::from_value(value))
    }
}
